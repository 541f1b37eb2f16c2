//! Locations and the ids that refer to them.
//!
//! Any place the player can stand is a [`Location`], whether it's a closet or
//! a parking lot. Locations are owned by the [`LocationGraph`](crate::graph::LocationGraph);
//! exits point at other locations by [`LocationId`] rather than owning them.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::item::{Item, ItemHolder};

/// Index of a location within its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub(crate) usize);

impl LocationId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A visitable place in the game world.
#[derive(Debug, Clone)]
pub struct Location {
    id: LocationId,
    symbol: String,
    description: String,
    transportable: bool,
    exits: BTreeMap<String, LocationId>,
    items: Vec<Item>,
}

impl Location {
    pub(crate) fn new(id: LocationId, symbol: &str, description: &str) -> Self {
        Self {
            id,
            symbol: symbol.to_string(),
            description: description.to_string(),
            transportable: true,
            exits: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    /// Short identifier used in world data, e.g. "cafeteria".
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Description completing the phrase "You are ...".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the transporter may carry the player away from here.
    pub fn is_transportable(&self) -> bool {
        self.transportable
    }

    /// Neighbor in the given direction, if there is an exit that way.
    pub fn exit(&self, direction: &str) -> Option<LocationId> {
        self.exits.get(direction).copied()
    }

    /// All exits as (direction, destination) pairs, ordered by direction.
    pub fn exits(&self) -> impl Iterator<Item = (&str, LocationId)> {
        self.exits.iter().map(|(dir, to)| (dir.as_str(), *to))
    }

    pub fn exit_directions(&self) -> Vec<String> {
        self.exits.keys().cloned().collect()
    }

    /// Items lying here, in the order they were placed.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn set_transportable(&mut self, transportable: bool) {
        self.transportable = transportable;
    }

    /// Wire an exit. Returns false (and leaves the old exit alone) if this
    /// direction is already taken.
    pub(crate) fn set_exit(&mut self, direction: &str, to: LocationId) -> bool {
        if self.exits.contains_key(direction) {
            return false;
        }
        self.exits.insert(direction.to_string(), to);
        true
    }

    /// Remove and return every item here, preserving their order.
    pub(crate) fn take_items(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }
}

impl ItemHolder for Location {
    fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }
}
