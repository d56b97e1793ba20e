//! Weighted per-biome entity scatter tables.
//!
//! A table is an ordered list of `(entity, probability)` pairs. A single
//! uniform roll walks the list accumulating probability and picks the first
//! entry whose running total exceeds the roll. Whatever probability mass
//! is left over means "no entity".

use tessera_config::{Biome, ScatterEntry};

use crate::entity::{EntityRegistry, EntityTypeId};
use crate::error::WorldGenError;

/// Ordered scatter table for one biome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatterTable {
    entries: Vec<(EntityTypeId, f64)>,
}

impl ScatterTable {
    pub fn new(entries: Vec<(EntityTypeId, f64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(EntityTypeId, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all probabilities.
    pub fn total_probability(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    /// Pick an entity for a uniform roll in `[0, 1)`.
    ///
    /// Overlaps resolve by declaration order. Returns `None` when the roll
    /// lands past the table's cumulative probability.
    pub fn draw(&self, roll: f64) -> Option<EntityTypeId> {
        let mut cumulative = 0.0;
        for &(id, probability) in &self.entries {
            cumulative += probability;
            if roll < cumulative {
                return Some(id);
            }
        }
        None
    }
}

/// One scatter table per biome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatterTables {
    tables: [ScatterTable; 5],
}

impl ScatterTables {
    /// Resolve configured scatter entries against the entity registry.
    ///
    /// Entries for the same biome are concatenated in configuration order.
    /// Probabilities are assumed validated (non-negative, summing to at most 1).
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::UnknownEntity`] for a name the registry lacks.
    pub fn from_config(
        scatter: &[ScatterEntry],
        registry: &EntityRegistry,
    ) -> Result<Self, WorldGenError> {
        let mut tables = Self::default();
        for entry in scatter {
            let table = &mut tables.tables[entry.biome.index()];
            for (name, probability) in &entry.entries {
                let id = registry.lookup_by_name(name).ok_or_else(|| {
                    WorldGenError::UnknownEntity {
                        biome: entry.biome,
                        name: name.clone(),
                    }
                })?;
                table.entries.push((id, *probability));
            }
        }
        Ok(tables)
    }

    pub fn for_biome(&self, biome: Biome) -> &ScatterTable {
        &self.tables[biome.index()]
    }

    /// Draw from the table of `biome`. Biomes without entries never yield an entity.
    pub fn draw(&self, biome: Biome, roll: f64) -> Option<EntityTypeId> {
        self.for_biome(biome).draw(roll)
    }
}
