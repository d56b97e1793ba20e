//! Debug visualization: renders a generated world as a minimap image.
//!
//! Each tile becomes one pixel in its biome's minimap color; tiles carrying
//! a resource entity are overdrawn with that entity's color.

mod image;

use tessera_config::{Biome, GenerationConfig};

use crate::entity::EntityRegistry;
use crate::tile::Occupant;
use crate::world::World;

pub use self::image::DebugImage;

/// Drawn for anything without a configured color.
pub const MISSING_COLOR: [u8; 4] = [255, 0, 255, 255];

/// Minimap color of a biome, or [`MISSING_COLOR`].
pub fn biome_color(config: &GenerationConfig, biome: Biome) -> [u8; 4] {
    config
        .tiles
        .iter()
        .find(|t| t.biome == biome)
        .map_or(MISSING_COLOR, |t| t.minimap_color)
}

/// Render `world` as a one-pixel-per-tile minimap.
///
/// Ground colors come from `config`, entity colors from the `registry`
/// the world was generated with.
pub fn render_biome_map(
    world: &World,
    config: &GenerationConfig,
    registry: &EntityRegistry,
) -> DebugImage {
    let palette = Biome::ALL.map(|biome| biome_color(config, biome));
    let mut image = DebugImage::new(world.width(), world.height());

    for (pos, tile) in world.tiles() {
        let color = match tile.entity() {
            Some(Occupant::Resource(entity)) => registry
                .try_get(entity.id)
                .map_or(MISSING_COLOR, |def| def.minimap_color),
            Some(Occupant::Dropped(_)) | None => palette[tile.biome().index()],
        };
        image.set_pixel(pos.x, pos.y, color);
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::WorldGenerator;
    use crate::tile::Tile;
    use glam::UVec2;
    use noise::Constant;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_bare_world_uses_biome_colors() {
        let config = GenerationConfig::default();
        let tiles = (0..10).map(|i| Tile::bare(Biome::ALL[i % 5])).collect();
        let world = World::from_tiles(5, 2, tiles).unwrap();

        let image = render_biome_map(&world, &config, &EntityRegistry::new());
        assert_eq!(image.dimensions(), (5, 2));
        assert_eq!(image.get_pixel(0, 0), [47, 40, 112, 255]);
        assert_eq!(image.get_pixel(4, 1), [37, 67, 16, 255]);
        assert_eq!(image.unique_color_count(), 5);
    }

    #[test]
    fn test_entities_overdraw_ground() {
        let config = GenerationConfig::default();
        let generator = WorldGenerator::new(&config).unwrap();
        let land = Constant::new(1.0);
        let world = generator
            .generate_with_noise(40, 40, &land, &land, &mut ChaCha8Rng::seed_from_u64(8))
            .unwrap();
        let image = render_biome_map(&world, &config, generator.registry());

        let forest = biome_color(&config, Biome::Forest);
        for (pos, tile) in world.tiles() {
            let pixel = image.get_pixel(pos.x, pos.y);
            match tile.entity() {
                Some(Occupant::Resource(entity)) => {
                    assert_eq!(pixel, generator.registry().get(entity.id).minimap_color)
                }
                _ => assert_eq!(pixel, forest, "bare tile at {pos} should show its biome"),
            }
        }
        assert!(world.entity_count() > 0);
        assert!(world.contains(UVec2::new(39, 39)));
    }

    #[test]
    fn test_unregistered_entity_uses_missing_color() {
        let config = GenerationConfig::default();
        let generator = WorldGenerator::new(&config).unwrap();
        let land = Constant::new(1.0);
        let world = generator
            .generate_with_noise(40, 40, &land, &land, &mut ChaCha8Rng::seed_from_u64(8))
            .unwrap();

        // A registry that knows none of the world's entity types.
        let image = render_biome_map(&world, &config, &EntityRegistry::new());
        let (pos, _) = world
            .tiles()
            .find(|(_, tile)| tile.entity().is_some())
            .unwrap();
        assert_eq!(image.get_pixel(pos.x, pos.y), MISSING_COLOR);
    }

    #[test]
    fn test_missing_tile_color() {
        let mut config = GenerationConfig::default();
        config.tiles.clear();
        assert_eq!(biome_color(&config, Biome::Beach), MISSING_COLOR);
    }
}
