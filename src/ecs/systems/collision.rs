//! Collision feedback system.

use crate::ecs::components::physics::CollisionState;
use crate::physics::CollisionSystem;

/// Refresh every `CollisionState` from the collision set of the last sweep.
pub fn collision_flag_system(world: &mut hecs::World, collisions: &CollisionSystem) {
    for (entity, state) in world.query_mut::<&mut CollisionState>() {
        state.is_colliding = collisions.is_colliding(entity);
    }
}
