//! REPL and command handling.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement one handler per verb; each handler reads and mutates the
//! [`ZuulWorld`] and reports what happened through the [`View`].

mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use crate::command::{Command, Verb, parse_command};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::ZuulWorld;

use anyhow::Result;
use log::info;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

impl ReplControl {
    pub fn is_quit(self) -> bool {
        self == ReplControl::Quit
    }
}

/// Apply one parsed command to the world: exactly one transition per call.
///
/// Bad input (missing argument, no such exit, nothing to eat...) is reported
/// through the view and leaves the world unchanged; it is not an error.
///
/// # Errors
/// - if the player's location has gone missing from the graph
pub fn process_command(world: &mut ZuulWorld, view: &mut View, command: &Command) -> Result<ReplControl> {
    match command.verb {
        Verb::Go => go_handler(world, view, command.argument())?,
        Verb::Look => look_handler(world, view)?,
        Verb::Help => help_handler(view),
        Verb::Get => get_handler(world, view)?,
        Verb::Eat => eat_handler(world, view),
        Verb::Transport => transport_handler(world, view)?,
        Verb::Inventory => inventory_handler(world, view),
        Verb::Quit => return Ok(quit_handler(world, view, command.argument())),
        Verb::Unknown => unknown_handler(view),
    }
    Ok(ReplControl::Continue)
}

/// Run the main read–eval–print loop until the user quits.
///
/// Handles prompting, command parsing, and dispatching to the handler modules.
/// Returns when a handler signals `Quit`.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing location for the player.
pub fn run_repl(world: &mut ZuulWorld) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();
    let mut turn: usize = 0;

    loop {
        let prompt = "> ".prompt_style().to_string();

        let input_event = if let Ok(event) = input_manager.read_line(&prompt) {
            event
        } else {
            view.push(ViewItem::Error("Failed to read input. Try again.".to_string()));
            view.flush();
            continue;
        };

        let input = match input_event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                view.push(ViewItem::TransitionMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };

        turn += 1;
        info!("================> BEGIN TURN {turn} <================");

        let command = parse_command(&input);
        if command.verb.is_unknown() {
            info!("unrecognized input: {:?}", input.trim());
        }
        let control = process_command(world, &mut view, &command)?;
        view.flush();
        if control.is_quit() {
            break;
        }
    }
    Ok(())
}
