//! Transform synchronization system.

use crate::ecs::components::transform::{GlobalTransform, Transform};

/// Write `GlobalTransform = Transform::to_matrix()` for every entity carrying both.
///
/// The scene is flat (no parent/child hierarchy), so the local transform is
/// the world transform.
pub fn transform_system(world: &mut hecs::World) {
    for (_, (transform, global)) in world.query_mut::<(&Transform, &mut GlobalTransform)>() {
        global.0 = transform.to_matrix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};

    #[test]
    fn test_transform_system_updates_global() {
        let mut world = hecs::World::new();
        let entity = world.spawn((
            Transform::from_position(Vec3::new(1.0, 2.0, 3.0)),
            GlobalTransform::default(),
        ));

        transform_system(&mut world);

        let global = world.get::<&GlobalTransform>(entity).unwrap();
        assert_eq!(global.0, Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_transform_system_tracks_changes() {
        let mut world = hecs::World::new();
        let entity = world.spawn((Transform::identity(), GlobalTransform::default()));

        world.get::<&mut Transform>(entity).unwrap().position = Vec3::new(0.0, 5.0, 0.0);
        transform_system(&mut world);

        let global = world.get::<&GlobalTransform>(entity).unwrap();
        assert_eq!(
            global.0.transform_point3(Vec3::ZERO),
            Vec3::new(0.0, 5.0, 0.0)
        );
    }

    #[test]
    fn test_entities_without_transform_untouched() {
        let mut world = hecs::World::new();
        let custom = Mat4::from_scale(Vec3::splat(2.0));
        let entity = world.spawn((GlobalTransform(custom),));

        transform_system(&mut world);

        assert_eq!(world.get::<&GlobalTransform>(entity).unwrap().0, custom);
    }
}
