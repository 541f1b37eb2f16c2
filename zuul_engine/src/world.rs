//! Data structures representing the running game.
//!
//! This module defines [`ZuulWorld`], the explicit state passed to every
//! command handler: the location graph, the player, and the random source
//! used by the transporter.

use anyhow::{Result, anyhow};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::graph::LocationGraph;
use crate::location::Location;
use crate::player::Player;

/// Complete state of the running game.
#[derive(Debug, Clone)]
pub struct ZuulWorld {
    pub title: String,
    pub intro: String,
    pub graph: LocationGraph,
    pub player: Player,
    pub(crate) rng: StdRng,
}

impl ZuulWorld {
    /// Start a session at the graph's entry location, with an OS-seeded transporter.
    pub fn new(graph: LocationGraph) -> ZuulWorld {
        Self::with_rng(graph, StdRng::from_os_rng())
    }

    /// Start a session whose transporter destinations are reproducible.
    pub fn with_seed(graph: LocationGraph, seed: u64) -> ZuulWorld {
        info!("transporter seeded with {seed}");
        Self::with_rng(graph, StdRng::seed_from_u64(seed))
    }

    fn with_rng(graph: LocationGraph, rng: StdRng) -> ZuulWorld {
        let player = Player::new(graph.entry());
        let world = Self {
            title: String::new(),
            intro: String::new(),
            graph,
            player,
            rng,
        };
        info!(
            "new 'ZuulWorld' created with {} locations; player starts at {}",
            world.graph.len(),
            world.player.location
        );
        world
    }

    /// Obtain a reference to the location the player occupies.
    /// # Errors
    /// - if the player's location id is not part of the graph
    pub fn player_location_ref(&self) -> Result<&Location> {
        self.graph
            .location(self.player.location)
            .ok_or_else(|| anyhow!("player's location ({}) not found in graph", self.player.location))
    }

    /// Obtain a mutable reference to the location the player occupies.
    /// # Errors
    /// - if the player's location id is not part of the graph
    pub fn player_location_mut(&mut self) -> Result<&mut Location> {
        let id = self.player.location;
        self.graph
            .location_mut(id)
            .ok_or_else(|| anyhow!("player's location ({id}) not found in graph"))
    }
}
