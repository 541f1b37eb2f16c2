//! Item types and the holders that carry them.
//!
//! Items are plain values. They are never shared: an item sits in exactly one
//! location or in the player's inventory, and moves between them by value.

use std::fmt::Display;

/// Something lying around the campus that the player can pick up (and eat).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    description: String,
    weight: u32,
}

impl Item {
    /// Create an item with the given short description and weight.
    pub fn new(description: impl Into<String>, weight: u32) -> Self {
        Self {
            description: description.into(),
            weight,
        }
    }

    /// The short description, e.g. "an orange".
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (weight {})", self.description, self.weight)
    }
}

/// Anything that can hold items: locations and the player.
pub trait ItemHolder {
    /// Accept an item, placing it after anything already held.
    fn add_item(&mut self, item: Item);
    fn item_count(&self) -> usize;
    fn holds_items(&self) -> bool {
        self.item_count() > 0
    }
}
