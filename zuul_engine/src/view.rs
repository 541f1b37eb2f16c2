//! View module.
//! Rather than printing to the console from each handler, handlers push
//! [`ViewItem`]s describing what happened, and the REPL flushes them once at
//! the end of the turn.
use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::command::Verb;
use crate::item::Item;
use crate::style::{GameStyle, indented_block, normal_block};

const ICON_SUCCESS: &str = "\u{2611}"; // ✔
const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_HEALED: &str = "\u{2624}"; // caduceus

/// Output of a single turn, kept until flushed.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Plain-text rendering of everything pushed this turn, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|item| item.plain_text().lines().map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    /// Style and print everything pushed this turn, then clear the buffer.
    pub fn flush(&mut self) {
        self.width = termwidth();
        for item in &self.items {
            Self::render(item);
        }
        self.items.clear();
        println!();
    }

    fn render(item: &ViewItem) {
        match item {
            ViewItem::LocationDescription {
                description,
                exits,
                items,
            } => {
                let text = format!("You are {description}.");
                println!("{}", fill(&text, normal_block()).description_style());
                let exit_list = exits
                    .iter()
                    .map(|dir| dir.exit_style().to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{} {}", "Exits:".subheading_style(), exit_list);
                if !items.is_empty() {
                    println!("{}", "Items here:".subheading_style());
                    for item in items {
                        println!("{}", fill(&item.to_string(), indented_block()).item_style());
                    }
                }
            },
            ViewItem::TransitionMessage(msg) => {
                println!("{}\n", fill(msg, normal_block()).transition_style());
            },
            ViewItem::ActionSuccess(msg) => {
                println!(
                    "{}",
                    fill(&format!("{} {}", ICON_SUCCESS.green(), msg.success_style()), normal_block())
                );
            },
            ViewItem::ActionFailure(msg) => {
                println!(
                    "{}",
                    fill(&format!("{} {}", ICON_FAILURE.bright_red(), msg.denied_style()), normal_block())
                );
            },
            ViewItem::Error(msg) => {
                println!(
                    "{}",
                    fill(&format!("{:<4}{}", ICON_ERROR.red(), msg.error_style()), normal_block())
                );
            },
            ViewItem::HealthChange { item, before, after } => {
                println!("You ate {}.", item.item_style());
                println!(
                    "{:<4}Health: {} -> {}",
                    ICON_HEALED.bright_green(),
                    before.to_string().health_style(),
                    after.to_string().health_style()
                );
            },
            ViewItem::Inventory {
                items,
                total_weight,
                health,
            } => {
                println!("{}", "You are carrying:".subheading_style());
                if items.is_empty() {
                    println!("{}", fill("nothing at all", indented_block()).italic());
                }
                for item in items {
                    println!("{}", fill(&item.to_string(), indented_block()).item_style());
                }
                println!("Total weight: {total_weight}");
                println!("Health: {}", health.to_string().health_style());
            },
            ViewItem::Help { text, verbs } => {
                println!("{}\n", fill(text, normal_block()).italic().cyan());
                println!("{}", "Your command words are:".subheading_style());
                for verb in verbs {
                    let line = format!("{} - {}", verb.word().bold().green(), verb.summary().italic());
                    println!("{}", fill(&line, indented_block()));
                }
            },
        }
    }
}

/// Things a turn can produce for the player to read.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    /// Where the player stands: description, exits and anything lying about.
    LocationDescription {
        description: String,
        exits: Vec<String>,
        items: Vec<Item>,
    },
    TransitionMessage(String),
    ActionSuccess(String),
    ActionFailure(String),
    Error(String),
    HealthChange {
        item: String,
        before: u32,
        after: u32,
    },
    Inventory {
        items: Vec<Item>,
        total_weight: u32,
        health: u32,
    },
    Help {
        text: String,
        verbs: Vec<Verb>,
    },
}

impl ViewItem {
    /// Unstyled text for this entry. Multi-line entries are joined with '\n'.
    pub fn plain_text(&self) -> String {
        match self {
            ViewItem::LocationDescription {
                description,
                exits,
                items,
            } => {
                let mut text = format!("You are {description}.\nExits: {}", exits.join(" "));
                if !items.is_empty() {
                    let listed = items.iter().map(Item::to_string).collect::<Vec<_>>().join(", ");
                    text.push_str(&format!("\nItems here: {listed}"));
                }
                text
            },
            ViewItem::TransitionMessage(msg)
            | ViewItem::ActionSuccess(msg)
            | ViewItem::ActionFailure(msg)
            | ViewItem::Error(msg) => msg.clone(),
            ViewItem::HealthChange { item, before, after } => {
                format!("You ate {item}.\nHealth: {before} -> {after}")
            },
            ViewItem::Inventory {
                items,
                total_weight,
                health,
            } => {
                let listed = if items.is_empty() {
                    "nothing".to_string()
                } else {
                    items.iter().map(Item::to_string).collect::<Vec<_>>().join(", ")
                };
                format!("You are carrying: {listed}\nTotal weight: {total_weight}\nHealth: {health}")
            },
            ViewItem::Help { text, verbs } => {
                let words = verbs.iter().map(|v| v.word()).collect::<Vec<_>>().join(" ");
                format!("{text}\n\nYour command words are:\n{words}")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_description_lists_exits_and_items() {
        let item = ViewItem::LocationDescription {
            description: "in the cafeteria".into(),
            exits: vec!["east".into(), "south".into(), "west".into()],
            items: vec![Item::new("an orange", 1), Item::new("a banana", 1)],
        };
        assert_eq!(
            item.plain_text(),
            "You are in the cafeteria.\nExits: east south west\nItems here: an orange (weight 1), a banana (weight 1)"
        );
    }

    #[test]
    fn location_without_items_has_no_item_line() {
        let item = ViewItem::LocationDescription {
            description: "in a lecture theater".into(),
            exits: vec!["west".into()],
            items: Vec::new(),
        };
        assert!(!item.plain_text().contains("Items"));
    }

    #[test]
    fn lines_split_multi_line_entries() {
        let mut view = View::new();
        view.push(ViewItem::Error("I don't know what you mean...".into()));
        view.push(ViewItem::HealthChange {
            item: "an orange".into(),
            before: 0,
            after: 10,
        });
        assert_eq!(
            view.lines(),
            vec!["I don't know what you mean...", "You ate an orange.", "Health: 0 -> 10"]
        );
    }

    #[test]
    fn help_lists_command_words() {
        let help = ViewItem::Help {
            text: "You are lost.".into(),
            verbs: vec![Verb::Go, Verb::Quit],
        };
        assert!(help.plain_text().ends_with("go quit"));
    }

    #[test]
    fn flush_clears_buffer() {
        let mut view = View::new();
        view.push(ViewItem::ActionSuccess("ok".into()));
        assert!(!view.is_empty());
        view.flush();
        assert!(view.is_empty());
    }
}
