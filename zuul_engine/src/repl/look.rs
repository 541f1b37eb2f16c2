//! `repl::look` module
//!
//! Contains the handler for looking around, and the shared long description.

use crate::location::Location;
use crate::view::{View, ViewItem};
use crate::world::ZuulWorld;

use anyhow::Result;

/// Push the long description of a location: where you are, the ways out,
/// and anything lying here.
pub fn describe_location(location: &Location, view: &mut View) {
    view.push(ViewItem::LocationDescription {
        description: location.description().to_string(),
        exits: location.exit_directions(),
        items: location.items().to_vec(),
    });
}

/// Describe the player's current location again. Changes nothing.
///
/// # Errors
/// - if the player's location is not in the graph
pub fn look_handler(world: &ZuulWorld, view: &mut View) -> Result<()> {
    describe_location(world.player_location_ref()?, view);
    Ok(())
}
