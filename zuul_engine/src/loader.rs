//! Loader utilities for building a [`ZuulWorld`] from world data.
//!
//! World content is authored in TOML as a [`WorldDef`]. The campus ships
//! inside the binary; other worlds can be read from disk. Either way the
//! definition is validated as a whole before any location is created.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use zuul_data::WorldDef;

use crate::graph::{GraphBuilder, LocationGraph};
use crate::item::Item;
use crate::world::ZuulWorld;

const CAMPUS_TOML: &str = include_str!("../data/campus.toml");

/// The built-in university campus.
///
/// # Errors
/// - if the embedded world file fails to parse (a build-time content bug)
pub fn campus_def() -> Result<WorldDef> {
    parse_world_def(CAMPUS_TOML, "embedded campus")
}

/// Read a world definition from a TOML file.
///
/// # Errors
/// - on file IO or TOML parsing error
pub fn load_world_def(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading world file '{}'", path.display()))?;
    parse_world_def(&text, &path.display().to_string())
}

/// Parse a world definition from TOML text. `origin` names the source in errors.
///
/// # Errors
/// - on TOML parsing error
pub fn parse_world_def(text: &str, origin: &str) -> Result<WorldDef> {
    let def: WorldDef = toml::from_str(text).with_context(|| format!("parsing world definition from {origin}"))?;
    info!(
        "world '{}' parsed from {origin}: {} locations, {} items",
        def.game.title,
        def.locations.len(),
        def.items.len()
    );
    Ok(def)
}

/// Build the location graph described by `def`.
///
/// All locations are created first, then exits are wired between them, then
/// items are placed in definition order.
///
/// # Errors
/// - if the definition fails validation (all problems are listed)
/// - if graph construction rejects the result
pub fn build_graph(def: &WorldDef) -> Result<LocationGraph> {
    validate_worlddef(def)?;

    let mut builder = GraphBuilder::new();
    let mut ids = HashMap::new();
    for loc in &def.locations {
        let id = builder
            .add_location(&loc.id, &loc.desc)
            .with_context(|| format!("adding location '{}'", loc.id))?;
        builder.set_transportable(id, loc.transportable)?;
        ids.insert(loc.id.as_str(), id);
    }

    for loc in &def.locations {
        let from = ids[loc.id.as_str()];
        for exit in &loc.exits {
            let to = *ids
                .get(exit.to.as_str())
                .with_context(|| format!("exit '{}' from '{}'", exit.direction, loc.id))?;
            builder.set_exit(from, &exit.direction, to)?;
        }
    }

    for item in &def.items {
        let at = *ids
            .get(item.location.as_str())
            .with_context(|| format!("placing item '{}'", item.id))?;
        builder.place_item(at, Item::new(item.desc.as_str(), item.weight))?;
    }

    let entry = *ids
        .get(def.game.start.as_str())
        .with_context(|| format!("start location '{}'", def.game.start))?;
    builder.set_entry(entry)?;
    let graph = builder.build().context("while building location graph")?;
    info!("{} items placed in {} locations", def.items.len(), graph.len());
    Ok(graph)
}

/// Build the campus graph.
///
/// # Errors
/// - if the embedded campus is malformed
pub fn create_campus() -> Result<LocationGraph> {
    build_graph(&campus_def()?)
}

/// Build a playable world from a definition, optionally with a fixed transporter seed.
///
/// # Errors
/// - see [`build_graph`]
pub fn build_world(def: &WorldDef, seed: Option<u64>) -> Result<ZuulWorld> {
    let graph = build_graph(def)?;
    let mut world = match seed {
        Some(seed) => ZuulWorld::with_seed(graph, seed),
        None => ZuulWorld::new(graph),
    };
    world.title.clone_from(&def.game.title);
    world.intro.clone_from(&def.game.intro);
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = zuul_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
