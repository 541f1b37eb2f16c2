use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    DuplicateExit { location: String, direction: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::DuplicateExit { location, direction } => {
                write!(f, "location '{location}' has more than one '{direction}' exit")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// All problems are collected rather than stopping at the first one.
///
/// ```
/// use zuul_data::{ExitDef, GameDef, LocationDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: String::new(),
///         start: "hall".into(),
///     },
///     locations: vec![LocationDef {
///         id: "hall".into(),
///         desc: "in a hall".into(),
///         transportable: true,
///         exits: vec![ExitDef {
///             direction: "up".into(),
///             to: "hall".into(),
///         }],
///     }],
///     items: Vec::new(),
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut locations = HashSet::new();
    let mut items = HashSet::new();

    track_ids(
        "location",
        world.locations.iter().map(|l| l.id.as_str()),
        &mut locations,
        &mut errors,
    );
    track_ids("item", world.items.iter().map(|i| i.id.as_str()), &mut items, &mut errors);

    if world.locations.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "world has no locations".to_string(),
        });
    }

    if world.game.start.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game start location missing".to_string(),
        });
    } else {
        check_ref(
            "location",
            &world.game.start,
            &locations,
            "game start location".to_string(),
            &mut errors,
        );
    }

    for location in &world.locations {
        if location.desc.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("location '{}' has an empty description", location.id),
            });
        }
        let mut directions = HashSet::new();
        for exit in &location.exits {
            validate_direction(&location.id, &exit.direction, &mut errors);
            if !directions.insert(exit.direction.as_str()) {
                errors.push(ValidationError::DuplicateExit {
                    location: location.id.clone(),
                    direction: exit.direction.clone(),
                });
            }
            check_ref(
                "location",
                &exit.to,
                &locations,
                format!("location '{}' exit '{}'", location.id, exit.direction),
                &mut errors,
            );
        }
    }

    for item in &world.items {
        if item.desc.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("item '{}' has an empty description", item.id),
            });
        }
        check_ref(
            "location",
            &item.location,
            &locations,
            format!("item '{}'", item.id),
            &mut errors,
        );
    }

    errors
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

/// Players type directions as a single whitespace-delimited token, so a label
/// that is empty or contains whitespace could never be reached.
fn validate_direction(location_id: &str, direction: &str, errors: &mut Vec<ValidationError>) {
    if direction.is_empty() || direction.chars().any(char::is_whitespace) {
        errors.push(ValidationError::InvalidValue {
            context: format!("location '{location_id}' exit direction '{direction}' is not a single word"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str) -> LocationDef {
        LocationDef {
            id: id.to_string(),
            desc: format!("in the {id}"),
            transportable: true,
            exits: Vec::new(),
        }
    }

    fn exit(direction: &str, to: &str) -> ExitDef {
        ExitDef {
            direction: direction.to_string(),
            to: to.to_string(),
        }
    }

    fn base_world() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Demo".into(),
                intro: "Intro".into(),
                start: "start".into(),
            },
            locations: vec![location("start")],
            items: Vec::new(),
        }
    }

    fn item_at(id: &str, location_id: &str) -> ItemDef {
        ItemDef {
            id: id.to_string(),
            desc: format!("a {id}"),
            weight: 1,
            location: location_id.to_string(),
        }
    }

    #[test]
    fn base_world_is_valid() {
        assert!(validate_world(&base_world()).is_empty());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut world = base_world();
        world.locations = vec![location("start"), location("start")];

        let errors = validate_world(&world);
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "location" && id == "start")
        ));
    }

    #[test]
    fn dangling_exit_is_reported() {
        let mut world = base_world();
        world.locations[0].exits.push(exit("east", "nowhere"));

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "location" && id == "nowhere")));
    }

    #[test]
    fn second_exit_in_same_direction_is_reported() {
        let mut world = base_world();
        world.locations.push(location("pub"));
        world.locations[0].exits = vec![exit("west", "pub"), exit("west", "start")];

        let errors = validate_world(&world);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateExit {
                location: "start".into(),
                direction: "west".into(),
            }]
        );
    }

    #[test]
    fn multi_word_direction_is_invalid() {
        let mut world = base_world();
        world.locations[0].exits.push(exit("north east", "start"));

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::InvalidValue { .. })));
    }

    #[test]
    fn one_way_exits_are_allowed() {
        let mut world = base_world();
        world.locations.push(location("locker"));
        world.locations[0].exits.push(exit("east", "locker"));

        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn missing_start_location_is_reported() {
        let mut world = base_world();
        world.game.start = "lobby".into();

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::MissingReference { id, .. } if id == "lobby")));
    }

    #[test]
    fn item_in_unknown_location_is_reported() {
        let mut world = base_world();
        world.items = vec![item_at("orange", "start"), item_at("banana", "cellar")];

        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("item 'banana'"));
    }
}
