use std::io::Write;

use zuul_engine as ze;
use ze::{Command, ReplControl, Verb, View, ViewItem, ZuulWorld, parse_command, process_command};

fn campus(seed: u64) -> ZuulWorld {
    ze::build_world(&ze::campus_def().unwrap(), Some(seed)).unwrap()
}

/// Feed one line through the interpreter and state machine, returning the
/// turn's output lines and whether the session should stop.
fn turn(world: &mut ZuulWorld, line: &str) -> (Vec<String>, bool) {
    let mut view = View::new();
    let control = process_command(world, &mut view, &parse_command(line)).unwrap();
    (view.lines(), control == ReplControl::Quit)
}

fn here(world: &ZuulWorld) -> &str {
    world.player_location_ref().unwrap().symbol()
}

fn inventory(world: &ZuulWorld) -> Vec<&str> {
    world.player.inventory.iter().map(ze::Item::description).collect()
}

#[test]
fn test_lib_version() {
    assert!(!ze::ZUUL_VERSION.is_empty());
}

#[test]
fn test_command_parse() {
    assert_eq!(parse_command("look"), Command::new(Verb::Look, None));
    assert_eq!(parse_command("go east"), Command::new(Verb::Go, Some("east")));
}

#[test]
fn go_east_then_north_hits_a_wall() {
    let mut world = campus(1);
    assert_eq!(here(&world), "outside");

    let (lines, done) = turn(&mut world, "go east");
    assert!(!done);
    assert_eq!(here(&world), "theater");
    assert_eq!(lines, vec!["You are in a lecture theater.", "Exits: west"]);

    let (lines, _) = turn(&mut world, "go north");
    assert_eq!(lines, vec!["There is no door!"]);
    assert_eq!(here(&world), "theater");
}

#[test]
fn go_with_no_direction_asks() {
    let mut world = campus(1);
    let (lines, _) = turn(&mut world, "go");
    assert_eq!(lines, vec!["Go where?"]);
    assert_eq!(here(&world), "outside");
}

#[test]
fn look_repeats_long_description() {
    let mut world = campus(1);
    let (lines, _) = turn(&mut world, "look");
    assert_eq!(
        lines,
        vec![
            "You are outside the main entrance of the university.",
            "Exits: east north south west",
        ]
    );
    assert_eq!(here(&world), "outside");
}

#[test]
fn get_in_cafeteria_then_eat() {
    let mut world = campus(1);
    turn(&mut world, "go south");
    let (lines, _) = turn(&mut world, "go west");
    assert_eq!(here(&world), "cafeteria");
    assert_eq!(
        lines.last().unwrap(),
        "Items here: an orange (weight 1), a banana (weight 1)"
    );

    turn(&mut world, "get");
    assert_eq!(inventory(&world), vec!["an orange", "a banana"]);
    assert!(world.player_location_ref().unwrap().items().is_empty());

    let (lines, _) = turn(&mut world, "get");
    assert_eq!(lines, vec!["There are no items here."]);

    let (lines, _) = turn(&mut world, "eat");
    assert_eq!(lines, vec!["You ate an orange.", "Health: 0 -> 10"]);
    assert_eq!(world.player.health, 10);
    assert_eq!(inventory(&world), vec!["a banana"]);

    turn(&mut world, "eat");
    assert_eq!(world.player.health, 20);
    let (lines, _) = turn(&mut world, "eat");
    assert_eq!(lines, vec!["You have no food."]);
    assert_eq!(world.player.health, 20);
}

#[test]
fn later_pickups_are_eaten_later() {
    let mut world = campus(1);
    turn(&mut world, "go west");
    turn(&mut world, "get");
    turn(&mut world, "go east");
    turn(&mut world, "go south");
    turn(&mut world, "go west");
    turn(&mut world, "get");
    assert_eq!(inventory(&world), vec!["a stale pretzel", "an orange", "a banana"]);

    turn(&mut world, "eat");
    assert_eq!(inventory(&world), vec!["an orange", "a banana"]);
}

#[test]
fn quit_with_and_without_argument() {
    let mut world = campus(1);
    let (lines, done) = turn(&mut world, "quit now");
    assert!(!done);
    assert_eq!(lines, vec!["Quit what?"]);

    let (lines, done) = turn(&mut world, "quit");
    assert!(done);
    assert!(lines.is_empty());
}

#[test]
fn unknown_and_empty_input() {
    let mut world = campus(1);
    for line in ["dance", "", "GO east", "Quit"] {
        let (lines, done) = turn(&mut world, line);
        assert!(!done);
        assert_eq!(lines, vec!["I don't know what you mean..."]);
    }
    assert_eq!(here(&world), "outside");
}

#[test]
fn help_lists_command_words() {
    let mut world = campus(1);
    let (lines, _) = turn(&mut world, "help");
    assert_eq!(lines.first().unwrap(), "You are lost. You are alone. You wander around at the university.");
    assert_eq!(lines.last().unwrap(), "go look get eat inventory transport help quit");
}

#[test]
fn transport_never_lands_where_it_started() {
    for seed in 0..200 {
        let mut world = campus(seed);
        let before = world.player.location;
        turn(&mut world, "transport");
        assert_ne!(world.player.location, before, "seed {seed}");
        assert!(world.graph.contains(world.player.location));
    }
}

#[test]
fn transport_reaches_every_other_location() {
    let mut world = campus(42);
    let start = world.player.location;
    let mut reached = std::collections::HashSet::new();
    for _ in 0..2000 {
        world.player.location = start;
        turn(&mut world, "transport");
        reached.insert(world.player.location);
    }
    assert_eq!(reached.len(), world.graph.len() - 1);
    assert!(!reached.contains(&start));
}

#[test]
fn locker_is_a_trap() {
    let mut world = campus(3);
    for step in ["go south", "go south", "go south", "go east", "go east"] {
        turn(&mut world, step);
    }
    assert_eq!(here(&world), "locker");

    let (lines, _) = turn(&mut world, "transport");
    assert_eq!(here(&world), "locker");
    assert_eq!(lines.len(), 1);
    let (lines, _) = turn(&mut world, "go west");
    assert_eq!(lines, vec!["There is no door!"]);
}

#[test]
fn transport_output_has_message_and_description() {
    let mut world = campus(8);
    let mut view = View::new();
    process_command(&mut world, &mut view, &parse_command("transport")).unwrap();
    assert!(matches!(view.items[0], ViewItem::TransitionMessage(_)));
    assert!(matches!(view.items[1], ViewItem::LocationDescription { .. }));
}

#[test]
fn inventory_shows_health() {
    let mut world = campus(1);
    let (lines, _) = turn(&mut world, "inventory");
    assert_eq!(lines, vec!["You are carrying: nothing", "Total weight: 0", "Health: 0"]);
}

#[test]
fn every_exit_on_campus_resolves() {
    let world = campus(1);
    for loc in world.graph.locations() {
        for (direction, to) in loc.exits() {
            assert_eq!(world.graph.get_exit(loc.id(), direction), Some(to));
            assert!(world.graph.contains(to));
        }
        assert_eq!(world.graph.get_exit(loc.id(), "up"), None);
    }
}

#[test]
fn world_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[game]
title = "Tiny"
start = "porch"

[[locations]]
id = "porch"
desc = "on a porch"
exits = [{{ direction = "in", to = "den" }}]

[[locations]]
id = "den"
desc = "in a den"

[[items]]
id = "apple"
desc = "an apple"
weight = 1
location = "den"
"#
    )
    .unwrap();

    let def = ze::load_world_def(file.path()).unwrap();
    let mut world = ze::build_world(&def, Some(2)).unwrap();
    assert_eq!(world.title, "Tiny");
    turn(&mut world, "go in");
    turn(&mut world, "get");
    assert_eq!(inventory(&world), vec!["an apple"]);
    let (lines, _) = turn(&mut world, "go out");
    assert_eq!(lines, vec!["There is no door!"]);
}

#[test]
fn missing_world_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ze::load_world_def(&dir.path().join("nope.toml")).is_err());
}
