//! Player -- the session's mutable state.
use std::collections::VecDeque;

use crate::item::{Item, ItemHolder};
use crate::location::LocationId;

/// Health gained from eating one item.
pub const HEALTH_PER_MEAL: u32 = 10;

/// Where the player is, what they carry, and how healthy they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub location: LocationId,
    /// Carried items, oldest pickup first.
    pub inventory: VecDeque<Item>,
    pub health: u32,
}

impl Player {
    /// A fresh player standing at `start` with nothing in hand.
    pub fn new(start: LocationId) -> Self {
        Self {
            location: start,
            inventory: VecDeque::new(),
            health: 0,
        }
    }

    pub fn carried_weight(&self) -> u32 {
        self.inventory.iter().map(Item::weight).sum()
    }

    /// Eat the item that has been carried longest.
    ///
    /// Returns the item eaten and the health before eating, or `None` (with no
    /// change) if the inventory is empty.
    pub fn eat_oldest(&mut self) -> Option<(Item, u32)> {
        let meal = self.inventory.pop_front()?;
        let before = self.health;
        self.health = self.health.saturating_add(HEALTH_PER_MEAL);
        Some((meal, before))
    }
}

impl ItemHolder for Player {
    fn add_item(&mut self, item: Item) {
        self.inventory.push_back(item);
    }

    fn item_count(&self) -> usize {
        self.inventory.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_is_empty_handed() {
        let player = Player::new(LocationId(3));
        assert_eq!(player.location, LocationId(3));
        assert_eq!(player.health, 0);
        assert!(!player.holds_items());
    }

    #[test]
    fn eating_is_first_in_first_out() {
        let mut player = Player::new(LocationId(0));
        player.add_item(Item::new("an orange", 1));
        player.add_item(Item::new("a banana", 1));

        let (eaten, before) = player.eat_oldest().unwrap();
        assert_eq!(eaten.description(), "an orange");
        assert_eq!(before, 0);
        assert_eq!(player.health, HEALTH_PER_MEAL);
        assert_eq!(player.inventory.len(), 1);
        assert_eq!(player.inventory[0].description(), "a banana");
    }

    #[test]
    fn eating_nothing_changes_nothing() {
        let mut player = Player::new(LocationId(0));
        assert!(player.eat_oldest().is_none());
        assert_eq!(player.health, 0);
    }

    #[test]
    fn carried_weight_sums_inventory() {
        let mut player = Player::new(LocationId(0));
        player.add_item(Item::new("a mop", 4));
        player.add_item(Item::new("a bucket", 3));
        assert_eq!(player.carried_weight(), 7);
    }
}
