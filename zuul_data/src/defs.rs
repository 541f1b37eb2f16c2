use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub locations: Vec<LocationDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    /// Location the player starts in.
    pub start: Id,
}

/// Location definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDef {
    pub id: Id,
    pub desc: String,
    /// Whether the transporter may carry the player away from here.
    #[serde(default = "default_transportable")]
    pub transportable: bool,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
}

fn default_transportable() -> bool {
    true
}

/// A one-way labeled passage to another location.
///
/// Two-way passages are authored as two exits, one on each side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
}

/// An item and the location it starts in.
///
/// Items are placed in the order they appear in the world file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub desc: String,
    #[serde(default)]
    pub weight: u32,
    pub location: Id,
}
