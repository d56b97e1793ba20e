//! Entity type registry: maps compact [`EntityTypeId`] values to their [`EntityDef`].

use hashbrown::HashMap;
use tessera_config::EntityDef;

use crate::error::WorldGenError;

/// Compact identifier of a resource entity type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityTypeId(pub u16);

/// Stores all entity definitions with O(1) lookup by ID and by name.
#[derive(Clone, Debug, Default)]
pub struct EntityRegistry {
    defs: Vec<EntityDef>,
    name_to_id: HashMap<String, EntityTypeId>,
}

impl EntityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every definition in order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::DuplicateEntity`] on a repeated name.
    pub fn from_defs(defs: &[EntityDef]) -> Result<Self, WorldGenError> {
        let mut registry = Self::new();
        for def in defs {
            registry.register(def.clone())?;
        }
        Ok(registry)
    }

    /// Registers a new entity type, returning its assigned [`EntityTypeId`].
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::DuplicateEntity`] if the name is taken and
    /// [`WorldGenError::RegistryFull`] once every [`EntityTypeId`] is in use.
    pub fn register(&mut self, def: EntityDef) -> Result<EntityTypeId, WorldGenError> {
        if self.name_to_id.contains_key(&def.name) {
            return Err(WorldGenError::DuplicateEntity(def.name.clone()));
        }
        let index =
            u16::try_from(self.defs.len()).map_err(|_| WorldGenError::RegistryFull(def.name.clone()))?;
        let id = EntityTypeId(index);
        self.name_to_id.insert(def.name.clone(), id);
        self.defs.push(def);
        Ok(id)
    }

    /// Returns the definition for the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this registry.
    pub fn get(&self, id: EntityTypeId) -> &EntityDef {
        &self.defs[id.0 as usize]
    }

    /// Returns the definition for the given ID, or `None` if it is not registered here.
    pub fn try_get(&self, id: EntityTypeId) -> Option<&EntityDef> {
        self.defs.get(id.0 as usize)
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<EntityTypeId> {
        self.name_to_id.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate `(id, def)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityTypeId, &EntityDef)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, def)| (EntityTypeId(i as u16), def))
    }
}
