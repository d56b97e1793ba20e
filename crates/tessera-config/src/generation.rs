//! Static world-generation tables: biome tiles, entity types and scatter tables.
//!
//! Every table here is an ordered sequence rather than a keyed map. Scatter
//! draws walk the entries in declaration order, so the order is part of the
//! meaning of the configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Terrain classification of a tile, in ascending elevation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Biome {
    DeepWater,
    ShallowWater,
    Beach,
    Plains,
    Forest,
}

impl Biome {
    /// All biomes, lowest band first.
    pub const ALL: [Biome; 5] = [
        Biome::DeepWater,
        Biome::ShallowWater,
        Biome::Beach,
        Biome::Plains,
        Biome::Forest,
    ];

    /// Position of this biome in [`Biome::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Biome::DeepWater => "deep_water",
            Biome::ShallowWater => "shallow_water",
            Biome::Beach => "beach",
            Biome::Plains => "plains",
            Biome::Forest => "forest",
        }
    }

    /// Returns `true` for the two water bands.
    pub fn is_water(self) -> bool {
        matches!(self, Biome::DeepWater | Biome::ShallowWater)
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ground tile definition for one biome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TileDef {
    pub biome: Biome,
    /// RGBA colour used by map views.
    pub minimap_color: [u8; 4],
}

/// Randomization applied to an entity's base height.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeightRandom {
    pub enabled: bool,
    /// Lower bound of the height multiplier.
    pub min: f64,
    /// Upper bound of the height multiplier.
    pub max: f64,
}

/// Visual height of an entity type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeightDef {
    /// Base height in tiles. Values above 1 are drawn above the player.
    pub value: f64,
    pub random: HeightRandom,
}

impl HeightDef {
    /// A height that never varies.
    pub fn fixed(value: f64) -> Self {
        Self {
            value,
            random: HeightRandom {
                enabled: false,
                min: 1.0,
                max: 1.0,
            },
        }
    }
}

/// Normalized sub-tile window an entity's visual anchor is drawn from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionWindow {
    pub enabled: bool,
    /// Top-left corner in `[0, 1]²`.
    pub tl: (f64, f64),
    /// Bottom-right corner in `[0, 1]²`.
    pub br: (f64, f64),
}

impl PositionWindow {
    /// A window centred in the tile with the given half-extent.
    pub fn centered(half_extent: f64) -> Self {
        Self {
            enabled: true,
            tl: (0.5 - half_extent, 0.5 - half_extent),
            br: (0.5 + half_extent, 0.5 + half_extent),
        }
    }

    /// No positional jitter.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            tl: (0.0, 0.0),
            br: (0.0, 0.0),
        }
    }
}

/// Static placement configuration for one resource entity type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityDef {
    /// Unique name referenced by scatter tables.
    pub name: String,
    pub minimap_color: [u8; 4],
    /// Whether the player is blocked by this entity.
    pub collision: bool,
    pub height: HeightDef,
    pub randomized_position: PositionWindow,
    /// Item id dropped when the entity is harvested.
    pub item: String,
}

/// Ordered `(entity name, probability)` pairs for one biome.
///
/// Probabilities need not sum to 1; the remainder means "no entity".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterEntry {
    pub biome: Biome,
    pub entries: Vec<(String, f64)>,
}

/// Parameters consumed by world generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Threshold separating water bands from land bands, in `(-1, 1)`.
    pub sea_level: f64,
    pub tiles: Vec<TileDef>,
    pub entities: Vec<EntityDef>,
    pub scatter: Vec<ScatterEntry>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            sea_level: -0.125,
            tiles: default_tiles(),
            entities: default_entities(),
            scatter: default_scatter(),
        }
    }
}

fn default_tiles() -> Vec<TileDef> {
    vec![
        TileDef {
            biome: Biome::DeepWater,
            minimap_color: [47, 40, 112, 255],
        },
        TileDef {
            biome: Biome::ShallowWater,
            minimap_color: [85, 77, 235, 255],
        },
        TileDef {
            biome: Biome::Beach,
            minimap_color: [255, 220, 78, 255],
        },
        TileDef {
            biome: Biome::Plains,
            minimap_color: [97, 133, 20, 255],
        },
        TileDef {
            biome: Biome::Forest,
            minimap_color: [37, 67, 16, 255],
        },
    ]
}

fn entity(
    name: &str,
    minimap_color: [u8; 4],
    collision: bool,
    height: HeightDef,
    randomized_position: PositionWindow,
    item: &str,
) -> EntityDef {
    EntityDef {
        name: name.to_string(),
        minimap_color,
        collision,
        height,
        randomized_position,
        item: item.to_string(),
    }
}

fn default_entities() -> Vec<EntityDef> {
    let small = || PositionWindow::centered(0.05);
    let wide = || PositionWindow::centered(0.25);
    vec![
        entity("stick", [63, 31, 31, 255], false, HeightDef::fixed(1.0), small(), "wood"),
        entity("stones", [33, 33, 33, 255], false, HeightDef::fixed(1.0), small(), "stone"),
        entity("large_stone", [63, 63, 63, 255], true, HeightDef::fixed(1.0), small(), "stone"),
        entity(
            "tree",
            [80, 120, 30, 255],
            true,
            HeightDef {
                value: 2.0,
                random: HeightRandom {
                    enabled: true,
                    min: 0.6,
                    max: 1.0,
                },
            },
            wide(),
            "wood",
        ),
        entity("grass", [100, 150, 50, 255], false, HeightDef::fixed(1.0), wide(), "fibers"),
        entity("copper_ore", [31, 127, 63, 255], true, HeightDef::fixed(1.0), small(), "copper_ore"),
        entity("iron_ore", [63, 31, 31, 255], true, HeightDef::fixed(1.0), small(), "iron_ore"),
        entity(
            "workbench",
            [63, 31, 127, 255],
            true,
            HeightDef::fixed(1.0),
            PositionWindow::disabled(),
            "workbench",
        ),
    ]
}

fn scatter(biome: Biome, entries: &[(&str, f64)]) -> ScatterEntry {
    ScatterEntry {
        biome,
        entries: entries
            .iter()
            .map(|&(name, probability)| (name.to_string(), probability))
            .collect(),
    }
}

fn default_scatter() -> Vec<ScatterEntry> {
    vec![
        scatter(Biome::Beach, &[("stones", 0.05)]),
        scatter(
            Biome::Plains,
            &[
                ("stick", 0.0025),
                ("stones", 0.025),
                ("large_stone", 0.00125),
                ("tree", 0.001),
                ("grass", 0.1),
                ("copper_ore", 0.0075),
            ],
        ),
        scatter(
            Biome::Forest,
            &[
                ("stick", 0.05),
                ("stones", 0.025),
                ("large_stone", 0.00625),
                ("tree", 0.2),
                ("copper_ore", 0.01),
                ("iron_ore", 0.0075),
            ],
        ),
    ]
}
