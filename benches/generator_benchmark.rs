// benches/generator_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glam::Vec2;
use primitive_demos::demo_scene::Demo;
use primitive_demos::generator::{Fill, ShapeGenerator, SquaresParams};
use primitive_demos::geometry::fan_indices;
use rand::Rng;

fn random_circle_params(rng: &mut impl Rng) -> (Vec2, f32, usize) {
    let center = Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
    (center, rng.gen_range(0.05..0.5), rng.gen_range(3..=1000))
}

fn generator_benchmark_fn(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    const NUM_BENCH_CIRCLES: usize = 100;
    let circles: Vec<(Vec2, f32, usize)> =
        (0..NUM_BENCH_CIRCLES).map(|_| random_circle_params(&mut rng)).collect();

    let mut group = c.benchmark_group("ShapeGeneration");

    group.bench_function("circle_100_random_params", |b| {
        let mut params_iter = circles.iter().cycle();
        b.iter(|| {
            let (center, radius, points) = params_iter.next().unwrap();
            ShapeGenerator::circle(
                black_box(*center),
                black_box(*radius),
                black_box(*points),
                Fill::Gradient,
            )
        })
    });

    group.bench_function("nested_squares_64_rings", |b| {
        let params = SquaresParams {
            center: Vec2::ZERO,
            ring_count: 64,
            initial_scale: 0.9,
            scale_step: 0.01,
        };
        b.iter(|| ShapeGenerator::nested_squares(black_box(&params)))
    });

    group.bench_function("fan_indices_1000_runs", |b| {
        let runs: Vec<_> = (0..1000u32).map(|i| i * 16..(i + 1) * 16).collect();
        b.iter(|| fan_indices(black_box(&runs)))
    });

    group.bench_function("picture_scene", |b| b.iter(|| Demo::Picture.shapes()));

    group.finish();
}

criterion_group!(benches, generator_benchmark_fn);
criterion_main!(benches);
