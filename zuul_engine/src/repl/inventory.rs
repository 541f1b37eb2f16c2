//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory and health.

use crate::item::ItemHolder;
use crate::view::{View, ViewItem};
use crate::world::ZuulWorld;

use anyhow::Result;
use log::info;

/// Pick up everything lying in the current location.
///
/// Items keep the order they had on the floor and go to the back of the
/// inventory, so they will be eaten after anything already carried.
///
/// # Errors
/// - if the player's location is missing from the graph
pub fn get_handler(world: &mut ZuulWorld, view: &mut View) -> Result<()> {
    let here = world.player_location_mut()?;
    if !here.holds_items() {
        view.push(ViewItem::ActionFailure("There are no items here.".to_string()));
        return Ok(());
    }
    let symbol = here.symbol().to_string();
    let taken = here.take_items();

    for item in taken {
        info!("player picked up {} in '{symbol}'", item.description());
        view.push(ViewItem::ActionSuccess(format!("You picked up {}.", item.description())));
        world.player.add_item(item);
    }
    Ok(())
}

/// Eat the item carried longest and gain health.
pub fn eat_handler(world: &mut ZuulWorld, view: &mut View) {
    let Some((meal, before)) = world.player.eat_oldest() else {
        view.push(ViewItem::ActionFailure("You have no food.".to_string()));
        return;
    };
    info!(
        "player ate {}: health {before} -> {}",
        meal.description(),
        world.player.health
    );
    view.push(ViewItem::HealthChange {
        item: meal.description().to_string(),
        before,
        after: world.player.health,
    });
}

/// Show what the player carries, the total weight and their health.
pub fn inventory_handler(world: &ZuulWorld, view: &mut View) {
    view.push(ViewItem::Inventory {
        items: world.player.inventory.iter().cloned().collect(),
        total_weight: world.player.carried_weight(),
        health: world.player.health,
    });
}
