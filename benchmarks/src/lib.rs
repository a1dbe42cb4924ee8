//! Shared setup helpers for convex-scene benchmarks.
//!
//! ## Running
//!
//! Serial sweep (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision
//!
//! Parallel sweep:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision --features parallel
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- sweep

use convex_scene::physics::narrowphase::box_points;
use convex_scene::{cube_mesh, spawn_object, Material, Mesh, Transform};
use glam::{Quat, Vec3};

/// Flattened `[x, y, z, ...]` corners of an axis-aligned box.
pub fn box_flat(center: Vec3, half_extents: Vec3) -> Vec<f32> {
    box_points(center, half_extents)
        .iter()
        .flat_map(|p| p.to_array())
        .collect()
}

/// Points on a sphere of `radius` around `center`, latitude/longitude sampled.
pub fn sphere_points(center: Vec3, radius: f32, rings: usize, segments: usize) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(rings * segments + 2);
    points.push(center + Vec3::Y * radius);
    points.push(center - Vec3::Y * radius);
    for r in 1..=rings {
        let phi = std::f32::consts::PI * r as f32 / (rings + 1) as f32;
        for s in 0..segments {
            let theta = std::f32::consts::TAU * s as f32 / segments as f32;
            let dir = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            points.push(center + dir * radius);
        }
    }
    points
}

/// Spawn `n` cubes in a grid with spacing `spacing`.
///
/// Spacing below 1.0 makes neighbours overlap; above 1.0 leaves every pair separated.
pub fn setup_cube_grid(n: usize, spacing: f32) -> anyhow::Result<hecs::World> {
    let mut world = hecs::World::new();
    let mesh = cube_mesh()?;
    let cols = (n as f32).cbrt().ceil() as usize;

    for i in 0..n {
        let x = (i % cols) as f32 * spacing;
        let y = ((i / cols) % cols) as f32 * spacing;
        let z = (i / (cols * cols)) as f32 * spacing;
        spawn(&mut world, &mesh, Vec3::new(x, y, z), i);
    }
    Ok(world)
}

fn spawn(world: &mut hecs::World, mesh: &Mesh, position: Vec3, i: usize) {
    let rotation = Quat::from_rotation_y(i as f32 * 0.37);
    spawn_object(
        world,
        mesh.clone(),
        Transform::from_position(position).with_rotation(rotation),
        Material::default(),
    );
}
