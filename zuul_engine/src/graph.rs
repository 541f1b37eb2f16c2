//! The location graph.
//!
//! All locations live in one arena owned by [`LocationGraph`]. Construction
//! happens in two passes through [`GraphBuilder`]: every location is added
//! first, then exits are wired between the ids handed out in the first pass,
//! so forward references never need placeholders.
//!
//! Exits are one-way. An exit from A east to B says nothing about a path
//! back from B; two-way passages need an exit on each side.

use log::info;
use rand::Rng;
use thiserror::Error;

use crate::item::{Item, ItemHolder};
use crate::location::{Location, LocationId};

/// Problems detected while assembling a graph. These indicate broken content
/// or a programming mistake, never bad player input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("location graph has no locations")]
    Empty,
    #[error("no entry location was set")]
    NoEntry,
    #[error("duplicate location symbol '{0}'")]
    DuplicateSymbol(String),
    #[error("location {0} is not part of this graph")]
    UnknownLocation(LocationId),
    #[error("location '{location}' already has an exit '{direction}'")]
    DuplicateExit { location: String, direction: String },
}

/// Two-pass builder for a [`LocationGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    locations: Vec<Location>,
    entry: Option<LocationId>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a location with no exits and no items.
    ///
    /// # Errors
    /// - if another location already uses `symbol`
    pub fn add_location(&mut self, symbol: &str, description: &str) -> Result<LocationId, GraphError> {
        if self.locations.iter().any(|loc| loc.symbol() == symbol) {
            return Err(GraphError::DuplicateSymbol(symbol.to_string()));
        }
        let id = LocationId(self.locations.len());
        self.locations.push(Location::new(id, symbol, description));
        Ok(id)
    }

    /// Wire a one-way exit from `from` to `to`.
    ///
    /// # Errors
    /// - if either id was not issued by this builder
    /// - if `from` already has an exit in this direction
    pub fn set_exit(&mut self, from: LocationId, direction: &str, to: LocationId) -> Result<(), GraphError> {
        self.check(to)?;
        let location = self.get_mut(from)?;
        if location.set_exit(direction, to) {
            Ok(())
        } else {
            Err(GraphError::DuplicateExit {
                location: location.symbol().to_string(),
                direction: direction.to_string(),
            })
        }
    }

    /// Put an item in a location, after any items already there.
    ///
    /// # Errors
    /// - if `at` was not issued by this builder
    pub fn place_item(&mut self, at: LocationId, item: Item) -> Result<(), GraphError> {
        self.get_mut(at)?.add_item(item);
        Ok(())
    }

    /// Mark whether the transporter works from this location.
    ///
    /// # Errors
    /// - if `at` was not issued by this builder
    pub fn set_transportable(&mut self, at: LocationId, transportable: bool) -> Result<(), GraphError> {
        self.get_mut(at)?.set_transportable(transportable);
        Ok(())
    }

    /// Choose where the player starts.
    ///
    /// # Errors
    /// - if `id` was not issued by this builder
    pub fn set_entry(&mut self, id: LocationId) -> Result<(), GraphError> {
        self.check(id)?;
        self.entry = Some(id);
        Ok(())
    }

    /// Finish construction.
    ///
    /// # Errors
    /// - if no locations were added or no entry was chosen
    pub fn build(self) -> Result<LocationGraph, GraphError> {
        if self.locations.is_empty() {
            return Err(GraphError::Empty);
        }
        let entry = self.entry.ok_or(GraphError::NoEntry)?;
        let exit_count: usize = self.locations.iter().map(|loc| loc.exits().count()).sum();
        info!(
            "location graph built: {} locations, {} exits, entry '{}'",
            self.locations.len(),
            exit_count,
            self.locations[entry.0].symbol()
        );
        Ok(LocationGraph {
            locations: self.locations,
            entry,
        })
    }

    fn check(&self, id: LocationId) -> Result<(), GraphError> {
        if id.0 < self.locations.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownLocation(id))
        }
    }

    fn get_mut(&mut self, id: LocationId) -> Result<&mut Location, GraphError> {
        self.locations.get_mut(id.0).ok_or(GraphError::UnknownLocation(id))
    }
}

/// Directed, labeled graph of every location in the world.
///
/// The structure is fixed once built; only the items lying in each location
/// change during play.
#[derive(Debug, Clone)]
pub struct LocationGraph {
    locations: Vec<Location>,
    entry: LocationId,
}

impl LocationGraph {
    /// Where the player starts.
    pub fn entry(&self) -> LocationId {
        self.entry
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false for a built graph; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, id: LocationId) -> bool {
        id.0 < self.locations.len()
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub(crate) fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations.get_mut(id.0)
    }

    /// Every location, in creation order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Look a location up by its symbol from the world data.
    pub fn find(&self, symbol: &str) -> Option<LocationId> {
        self.locations.iter().find(|loc| loc.symbol() == symbol).map(Location::id)
    }

    /// Follow the exit in `direction` from `from`.
    ///
    /// Returns `None` for any direction without an exit, including made-up
    /// words; directions are free-form player input.
    pub fn get_exit(&self, from: LocationId, direction: &str) -> Option<LocationId> {
        self.location(from).and_then(|loc| loc.exit(direction))
    }

    /// Pick a location uniformly at random from every location except `current`.
    ///
    /// Draws one index over the N-1 eligible locations and shifts it past
    /// `current`, so a single draw always suffices. Returns `None` when there
    /// is nowhere else to go.
    pub fn random_other<R: Rng + ?Sized>(&self, current: LocationId, rng: &mut R) -> Option<LocationId> {
        let eligible = self.locations.len().checked_sub(1).filter(|n| *n > 0)?;
        let mut index = rng.random_range(0..eligible);
        if index >= current.0 {
            index += 1;
        }
        Some(LocationId(index))
    }
}
