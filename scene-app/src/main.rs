//! Headless scene driver.
//!
//! Slides a cube through a small row of static cubes, runs the collision
//! sweep every tick and logs which entities touch. Pass a path to an OBJ file
//! to use its vertices instead of the built-in cube:
//!
//!   RUST_LOG=scene_app=info,convex_scene=debug cargo run --manifest-path scene-app/Cargo.toml -- model.obj

use convex_scene::ecs::bridge::clone_object;
use convex_scene::{
    collision_flag_system, cube_mesh, load_obj_file, pick_entity, screen_point_to_ray,
    spawn_object, transform_ray, transform_system, CollisionState, CollisionSystem, Material,
    Mesh, Transform,
};
use glam::{Mat4, Vec2, Vec3};

const TICKS: usize = 25;
const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

fn load_mesh() -> anyhow::Result<Mesh> {
    match std::env::args().nth(1) {
        Some(path) => {
            let data = load_obj_file(&path)?;
            tracing::info!(%path, vertices = data.vertex_count(), "using OBJ mesh");
            Ok(Mesh::new(data.into_geometry()))
        }
        None => Ok(cube_mesh()?),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scene_app=info".into()),
        )
        .init();

    let mesh = load_mesh()?;
    let mut world = hecs::World::new();

    let anchor = spawn_object(
        &mut world,
        mesh.clone(),
        Transform::identity(),
        Material {
            color: Vec3::new(0.8, 0.3, 0.2),
        },
    );
    if let Some(copy) = clone_object(&mut world, anchor) {
        world.get::<&mut Transform>(copy)?.position = Vec3::new(1.8, 0.0, 0.0);
    }
    let mover = spawn_object(
        &mut world,
        mesh,
        Transform::from_position(Vec3::new(-3.0, 0.2, 0.0)),
        Material {
            color: Vec3::new(0.2, 0.6, 0.9),
        },
    );

    let mut collisions = CollisionSystem::default();
    for tick in 0..TICKS {
        world.get::<&mut Transform>(mover)?.position.x = -3.0 + tick as f32 * 0.25;

        transform_system(&mut world);
        collisions.update(&world);
        collision_flag_system(&mut world, &collisions);

        let colliding: Vec<hecs::Entity> = world
            .query::<&CollisionState>()
            .iter()
            .filter(|(_, state)| state.is_colliding)
            .map(|(entity, _)| entity)
            .collect();
        tracing::info!(
            tick,
            pairs = collisions.collisions().len(),
            ?colliding,
            "collision sweep"
        );
    }

    // Pick whatever sits under the screen center, camera looking down -Z.
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 6.0), Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective_rh(45f32.to_radians(), VIEWPORT.x / VIEWPORT.y, 0.1, 100.0);
    if let Some(ray) = screen_point_to_ray(VIEWPORT * 0.5, VIEWPORT, &projection) {
        let ray = transform_ray(&ray, &view.inverse());
        match pick_entity(&world, &ray) {
            Some((entity, t)) => tracing::info!(?entity, distance = t, "picked"),
            None => tracing::info!("nothing under the cursor"),
        }
    }

    Ok(())
}
