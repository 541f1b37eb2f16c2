//! Command module
//!
//! Turns a raw input line into a [`Command`]: a verb from the fixed
//! vocabulary plus an optional argument.

use std::fmt::Display;

use variantly::Variantly;

/// Verbs the player can use. Anything else is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Variantly)]
pub enum Verb {
    Go,
    Look,
    Quit,
    Help,
    Get,
    Eat,
    Transport,
    Inventory,
    Unknown,
}

impl Verb {
    /// Every recognized verb, in the order help lists them.
    pub const VOCABULARY: [Verb; 8] = [
        Verb::Go,
        Verb::Look,
        Verb::Get,
        Verb::Eat,
        Verb::Inventory,
        Verb::Transport,
        Verb::Help,
        Verb::Quit,
    ];

    /// Look a word up in the vocabulary. Matching is exact and case-sensitive.
    pub fn from_word(word: &str) -> Verb {
        match word {
            "go" => Verb::Go,
            "look" => Verb::Look,
            "quit" => Verb::Quit,
            "help" => Verb::Help,
            "get" => Verb::Get,
            "eat" => Verb::Eat,
            "transport" => Verb::Transport,
            "inventory" => Verb::Inventory,
            _ => Verb::Unknown,
        }
    }

    /// The word the player types for this verb.
    pub fn word(self) -> &'static str {
        match self {
            Verb::Go => "go",
            Verb::Look => "look",
            Verb::Quit => "quit",
            Verb::Help => "help",
            Verb::Get => "get",
            Verb::Eat => "eat",
            Verb::Transport => "transport",
            Verb::Inventory => "inventory",
            Verb::Unknown => "?",
        }
    }

    /// One-line description for the help listing.
    pub fn summary(self) -> &'static str {
        match self {
            Verb::Go => "go <direction> -- walk through an exit",
            Verb::Look => "describe where you are",
            Verb::Quit => "leave the game",
            Verb::Help => "show this list",
            Verb::Get => "pick up everything lying here",
            Verb::Eat => "eat the oldest thing you carry",
            Verb::Transport => "get whisked away somewhere else",
            Verb::Inventory => "list what you carry and how healthy you are",
            Verb::Unknown => "",
        }
    }
}

impl Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.word())
    }
}

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    pub argument: Option<String>,
}

impl Command {
    pub fn new(verb: Verb, argument: Option<&str>) -> Self {
        Self {
            verb,
            argument: argument.map(str::to_string),
        }
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    pub fn has_argument(&self) -> bool {
        self.argument.is_some()
    }
}

/// Parses an input line into a `Command`.
///
/// Only the first two whitespace-separated words count; the rest of the line
/// is ignored. Blank input and unrecognized verbs both give `Verb::Unknown`.
/// The argument is passed through untouched; whether it makes sense is up to
/// the handler.
pub fn parse_command(input: &str) -> Command {
    let mut words = input.split_whitespace();
    match words.next() {
        Some(first) => Command::new(Verb::from_word(first), words.next()),
        None => Command::new(Verb::Unknown, None),
    }
}
