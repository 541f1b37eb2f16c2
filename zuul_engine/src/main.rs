#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Zuul **
//! A very simple, text based adventure around a university campus.

use std::path::PathBuf;

use zuul_engine::repl::describe_location;
use zuul_engine::style::GameStyle;
use zuul_engine::{View, build_world, campus_def, load_world_def, run_repl};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "zuul", version, about = "Wander around the university.")]
struct Cli {
    /// Play a world from this TOML file instead of the built-in campus
    #[arg(long)]
    world: Option<PathBuf>,
    /// Seed for the transporter, for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    info!("Start: loading Zuul world...");
    let def = match &cli.world {
        Some(path) => load_world_def(path).context("while loading world file")?,
        None => campus_def().context("while loading built-in campus")?,
    };
    let mut world = build_world(&def, cli.seed).context("while building ZuulWorld")?;
    info!("ZuulWorld loaded successfully.");

    println!();
    println!("{}", world.title.title_style());
    if !world.intro.is_empty() {
        println!("{}", world.intro.description_style());
    }
    println!("Type '{}' if you need help.\n", "help".bold());

    let mut view = View::new();
    describe_location(world.player_location_ref()?, &mut view);
    view.flush();

    info!("Starting the game!");
    run_repl(&mut world)?;
    println!("Thank you for playing.  Good bye.");
    Ok(())
}
