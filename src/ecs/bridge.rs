//! Helpers for spawning scene objects as ECS entities.

use crate::ecs::components::physics::{Collidable, CollisionState};
use crate::ecs::components::rendering::{Material, Mesh};
use crate::ecs::components::transform::{GlobalTransform, Transform};

/// Spawn a collidable scene object.
///
/// Creates an entity with Transform, GlobalTransform (already in sync with
/// the transform), Mesh, Material, Collidable and CollisionState components.
pub fn spawn_object(
    world: &mut hecs::World,
    mesh: Mesh,
    transform: Transform,
    material: Material,
) -> hecs::Entity {
    world.spawn((
        transform,
        GlobalTransform::from_transform(&transform),
        mesh,
        material,
        Collidable,
        CollisionState::default(),
    ))
}

/// Duplicate a scene object, sharing its mesh and copying its transform and material.
///
/// Returns `None` if `entity` does not exist or lacks a Mesh or Transform.
pub fn clone_object(world: &mut hecs::World, entity: hecs::Entity) -> Option<hecs::Entity> {
    let (mesh, transform, material) = {
        let mesh = Mesh::clone(&*world.get::<&Mesh>(entity).ok()?);
        let transform = *world.get::<&Transform>(entity).ok()?;
        let material = world
            .get::<&Material>(entity)
            .map(|m| *m)
            .unwrap_or_default();
        (mesh, transform, material)
    };
    Some(spawn_object(world, mesh, transform, material))
}
