//! `repl::system` module
//!
//! Contains repl loop handlers for help, quitting, and input we don't understand.

use crate::command::Verb;
use crate::repl::ReplControl;
use crate::view::{View, ViewItem};
use crate::world::ZuulWorld;

use log::info;

const HELP_TEXT: &str = "You are lost. You are alone. You wander around at the university.";

/// Quit the game, unless the player said "quit" followed by something else.
pub fn quit_handler(world: &ZuulWorld, view: &mut View, argument: Option<&str>) -> ReplControl {
    if argument.is_some() {
        view.push(ViewItem::ActionFailure("Quit what?".to_string()));
        return ReplControl::Continue;
    }
    info!(
        "player quit at {} with health {} carrying {} item(s)",
        world.player.location,
        world.player.health,
        world.player.inventory.len()
    );
    world
        .player
        .inventory
        .iter()
        .for_each(|item| info!("- {}", item.description()));
    ReplControl::Quit
}

/// Show available commands.
pub fn help_handler(view: &mut View) {
    view.push(ViewItem::Help {
        text: HELP_TEXT.to_string(),
        verbs: Verb::VOCABULARY.to_vec(),
    });
}

/// Feedback for input that didn't start with a known verb.
pub fn unknown_handler(view: &mut View) {
    view.push(ViewItem::Error("I don't know what you mean...".to_string()));
}
