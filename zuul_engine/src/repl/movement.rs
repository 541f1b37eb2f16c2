//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location.

use crate::repl::look::describe_location;
use crate::view::{View, ViewItem};
use crate::world::ZuulWorld;

use anyhow::{Result, anyhow};
use log::info;

/// Move the player through the exit in `direction`, if there is one.
///
/// # Errors
/// - if the player's location or the exit's destination is missing from the graph
pub fn go_handler(world: &mut ZuulWorld, view: &mut View, direction: Option<&str>) -> Result<()> {
    let Some(direction) = direction else {
        view.push(ViewItem::ActionFailure("Go where?".to_string()));
        return Ok(());
    };

    let leaving = world.player_location_ref()?;
    let Some(destination_id) = leaving.exit(direction) else {
        info!("no exit '{direction}' from '{}'", leaving.symbol());
        view.push(ViewItem::ActionFailure("There is no door!".to_string()));
        return Ok(());
    };
    let leaving_symbol = leaving.symbol().to_string();

    let destination = world
        .graph
        .location(destination_id)
        .ok_or_else(|| anyhow!("exit '{direction}' from '{leaving_symbol}' leads to unknown location {destination_id}"))?;
    world.player.location = destination_id;
    info!(
        "player went {direction} from '{leaving_symbol}' to '{}' ({destination_id})",
        destination.symbol()
    );
    describe_location(destination, view);
    Ok(())
}

/// Whisk the player away to a random location other than the current one.
///
/// Refused from locations marked as not transportable, and when there is no
/// other location to go to.
///
/// # Errors
/// - if the player's location is missing from the graph
pub fn transport_handler(world: &mut ZuulWorld, view: &mut View) -> Result<()> {
    let here = world.player_location_ref()?;
    if !here.is_transportable() {
        info!("transport refused from '{}'", here.symbol());
        view.push(ViewItem::ActionFailure(
            "The transporter won't work in here. You'll have to find your own way out.".to_string(),
        ));
        return Ok(());
    }
    let from_symbol = here.symbol().to_string();

    let current = world.player.location;
    let Some(destination_id) = world.graph.random_other(current, &mut world.rng) else {
        info!("transport refused: '{from_symbol}' is the only location");
        view.push(ViewItem::ActionFailure("There is nowhere else to go.".to_string()));
        return Ok(());
    };

    world.player.location = destination_id;
    let destination = world.player_location_ref()?;
    info!("player transported from '{from_symbol}' to '{}'", destination.symbol());
    view.push(ViewItem::TransitionMessage(
        "The air shimmers and you are pulled somewhere else...".to_string(),
    ));
    describe_location(destination, view);
    Ok(())
}
