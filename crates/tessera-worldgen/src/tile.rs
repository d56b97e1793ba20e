//! Tile data model: ground tiles, their single optional occupant, and render layers.

use tessera_config::Biome;

use crate::entity::{EntityRegistry, EntityTypeId};
use crate::placement::PositionJitter;

/// Draw-order slot consumed by the renderer. Lower layers draw first.
///
/// The ordering is a contract:
/// `GroundUnderEntity < Ground < FlatEntity < Player < TallEntity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum RenderLayer {
    /// Ground of a tile that carries a generated resource entity.
    GroundUnderEntity = -3,
    /// Ground of a bare tile. Dropped item stacks also draw here.
    Ground = -2,
    /// Entities at most one tile tall, drawn beneath the player.
    FlatEntity = -1,
    Player = 0,
    /// Entities taller than one tile, drawn over the player.
    TallEntity = 1,
}

impl RenderLayer {
    /// Numeric depth value.
    pub fn depth(self) -> i8 {
        self as i8
    }

    /// Layer of an entity with the given visual height.
    pub fn for_entity_height(height: f64) -> Self {
        if height > 1.0 {
            RenderLayer::TallEntity
        } else {
            RenderLayer::FlatEntity
        }
    }
}

/// A generated, harvestable world entity.
#[derive(Clone, Debug, PartialEq)]
pub struct TileEntity {
    pub id: EntityTypeId,
    pub layer: RenderLayer,
    /// Visual height in tiles.
    pub height: f64,
    pub randomized_position: PositionJitter,
}

/// A stack of items dropped onto a tile by the player.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemStack {
    pub id: String,
    pub count: u32,
    pub max: u32,
}

/// The single thing that may sit on a tile.
#[derive(Clone, Debug, PartialEq)]
pub enum Occupant {
    Resource(TileEntity),
    Dropped(ItemStack),
}

impl Occupant {
    /// Entity type name for a resource, item id for a dropped stack.
    pub fn id<'a>(&'a self, registry: &'a EntityRegistry) -> &'a str {
        match self {
            Occupant::Resource(entity) => &registry.get(entity.id).name,
            Occupant::Dropped(stack) => &stack.id,
        }
    }

    pub fn layer(&self) -> RenderLayer {
        match self {
            Occupant::Resource(entity) => entity.layer,
            Occupant::Dropped(_) => RenderLayer::Ground,
        }
    }

    /// The resource entity, if this is one.
    pub fn as_resource(&self) -> Option<&TileEntity> {
        match self {
            Occupant::Resource(entity) => Some(entity),
            Occupant::Dropped(_) => None,
        }
    }
}

/// One grid cell: a fixed biome and ground layer plus at most one occupant.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    biome: Biome,
    layer: RenderLayer,
    entity: Option<Occupant>,
}

impl Tile {
    /// A tile without an occupant.
    pub fn bare(biome: Biome) -> Self {
        Self {
            biome,
            layer: RenderLayer::Ground,
            entity: None,
        }
    }

    /// A tile carrying a freshly placed resource entity.
    pub fn with_resource(biome: Biome, entity: TileEntity) -> Self {
        Self {
            biome,
            layer: RenderLayer::GroundUnderEntity,
            entity: Some(Occupant::Resource(entity)),
        }
    }

    pub fn biome(&self) -> Biome {
        self.biome
    }

    /// Ground layer fixed at generation time.
    pub fn layer(&self) -> RenderLayer {
        self.layer
    }

    pub fn entity(&self) -> Option<&Occupant> {
        self.entity.as_ref()
    }

    /// Replace the occupant, returning the previous one. The ground layer is kept.
    pub(crate) fn replace_entity(&mut self, occupant: Option<Occupant>) -> Option<Occupant> {
        std::mem::replace(&mut self.entity, occupant)
    }
}
