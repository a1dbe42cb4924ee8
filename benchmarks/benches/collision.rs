//! Collision benchmarks (criterion - wall-clock time).
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench collision
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- gjk

use convex_scene::physics::support::ConvexPointSet;
use convex_scene::physics::world_space::transform_points;
use convex_scene::{gjk3d, gjk_intersection, CollisionConfig, CollisionSystem};
use convex_scene_bench::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Mat4, Vec3};
use std::hint::black_box;

// ---------------------------------------------------------------------------
// Narrowphase
// ---------------------------------------------------------------------------

fn bench_gjk(c: &mut Criterion) {
    let config = CollisionConfig::default();

    {
        let mut group = c.benchmark_group("gjk/box_box");
        let a = box_flat(Vec3::ZERO, Vec3::splat(0.5));

        let hit = box_flat(Vec3::new(0.5, 0.0, 0.0), Vec3::splat(0.5));
        group.bench_function("intersecting", |b| {
            b.iter(|| gjk3d(black_box(&a), black_box(&hit)));
        });

        let miss = box_flat(Vec3::new(10.0, 0.0, 0.0), Vec3::splat(0.5));
        group.bench_function("separated", |b| {
            b.iter(|| gjk3d(black_box(&a), black_box(&miss)));
        });

        let touch = box_flat(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(0.5));
        group.bench_function("touching", |b| {
            b.iter(|| gjk3d(black_box(&a), black_box(&touch)));
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("gjk/sphere_hull");
        for &segments in &[8, 32, 128] {
            let a = sphere_points(Vec3::ZERO, 1.0, segments / 2, segments);
            let rotation = Mat4::from_rotation_z(0.4) * Mat4::from_translation(Vec3::X * 1.5);
            let b_points = transform_points(&a, &rotation);
            let sa = ConvexPointSet::from_points(&a).expect("non-empty");
            let sb = ConvexPointSet::from_points(&b_points).expect("non-empty");

            group.bench_with_input(
                BenchmarkId::from_parameter(a.len()),
                &segments,
                |b, _| {
                    b.iter(|| gjk_intersection(black_box(&sa), black_box(&sb), &config));
                },
            );
        }
        group.finish();
    }
}

// ---------------------------------------------------------------------------
// Sweep
// ---------------------------------------------------------------------------

fn bench_sweep(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("sweep/dense");
        for &n in &[10, 50, 100, 200] {
            let world = setup_cube_grid(n, 0.8).expect("scene setup");
            let mut system = CollisionSystem::default();
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
                b.iter(|| system.update(&world));
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("sweep/sparse");
        for &n in &[10, 50, 100, 200] {
            let world = setup_cube_grid(n, 3.0).expect("scene setup");
            let mut system = CollisionSystem::default();
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
                b.iter(|| system.update(&world));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_gjk, bench_sweep);
criterion_main!(benches);
