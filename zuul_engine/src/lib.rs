#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const ZUUL_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod graph;
pub mod item;
pub mod loader;
pub mod location;
pub mod player;
pub mod repl;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use command::{Command, Verb, parse_command};
pub use graph::{GraphBuilder, GraphError, LocationGraph};
pub use item::{Item, ItemHolder};
pub use loader::{build_world, campus_def, create_campus, load_world_def};
pub use location::{Location, LocationId};
pub use player::Player;
pub use repl::{ReplControl, process_command, run_repl};
pub use view::{View, ViewItem};
pub use world::ZuulWorld;
