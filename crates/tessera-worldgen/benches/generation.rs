use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tessera_config::GenerationConfig;
use tessera_worldgen::seed::world_rng;
use tessera_worldgen::{OctaveParams, SimplexField, WorldGenerator, interpolated_octave};

fn bench_generate_world(c: &mut Criterion) {
    let generator = WorldGenerator::new(&GenerationConfig::default()).unwrap();
    c.bench_function("generate_257x257", |b| {
        b.iter(|| generator.generate(black_box(257), black_box(257), &mut world_rng(42)))
    });
}

fn bench_interpolated_octave(c: &mut Criterion) {
    let field = SimplexField::new(&mut world_rng(7));
    c.bench_function("interpolated_octave", |b| {
        b.iter(|| {
            interpolated_octave(
                &field,
                black_box(12.5),
                black_box(40.25),
                &OctaveParams::TERRAIN,
            )
        })
    });
}

criterion_group!(benches, bench_generate_world, bench_interpolated_octave);
criterion_main!(benches);
