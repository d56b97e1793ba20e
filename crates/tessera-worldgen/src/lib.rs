//! Procedural tile-world generation: simplex noise, octave combination, biome
//! classification and weighted entity scatter, assembled into a [`World`] grid.

mod biome;
mod entity;
mod error;
mod generator;
mod octave;
mod placement;
mod scatter;
mod simplex;
mod spawn;
mod tile;
mod world;

pub mod debug_viz;
pub mod seed;

pub use biome::{BiomeBand, biome_bands, classify};
pub use entity::{EntityRegistry, EntityTypeId};
pub use error::WorldGenError;
pub use generator::{OCEAN_FREQUENCY, WorldGenerator, sample_elevation};
pub use octave::{OctaveParams, interpolated_octave, octave, smootherstep, try_octave};
pub use placement::{PositionJitter, entity_height, place_entity};
pub use scatter::{ScatterTable, ScatterTables};
pub use simplex::SimplexField;
pub use spawn::is_standable;
pub use tessera_config::Biome;
pub use tile::{ItemStack, Occupant, RenderLayer, Tile, TileEntity};
pub use world::World;
