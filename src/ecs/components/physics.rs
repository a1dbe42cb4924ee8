//! Collision components for ECS entities.

/// Marker for entities that take part in the collision sweep.
///
/// The entity's `Mesh` positions are used as its convex point set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collidable;

/// Per-entity collision flag, refreshed by `collision_flag_system`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionState {
    pub is_colliding: bool,
}
