//! Convex Scene
//!
//! Convex collision detection (GJK) for small interactive 3D scenes built on hecs.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **math** - Vector helpers shared by the collision code
//! 2. **physics** - GJK narrowphase and the all-pairs [`CollisionSystem`]
//! 3. **ecs** - hecs components, spawn helpers and per-tick systems
//! 4. **asset** - OBJ parsing and built-in sample meshes
//! 5. **picking** - Screen rays and ray/triangle tests for selecting entities
//!
//! A typical tick runs [`transform_system`], then [`CollisionSystem::update`],
//! then [`collision_flag_system`].

pub mod asset;
pub mod ecs;
pub mod math;
pub mod physics;
pub mod picking;

pub use asset::{cube_geometry, cube_mesh, load_obj_file, parse_obj, ObjData, ObjError};

pub use ecs::prelude::*;

pub use physics::{
    contact::Collision,
    error::{CollisionError, CollisionResult},
    gjk3d,
    narrowphase::{gjk_intersection, GjkOutcome},
    support::ConvexPointSet,
    try_gjk3d, CollisionConfig, CollisionSystem, SweepStats,
};

pub use picking::{pick_entity, ray_triangle_intersection, screen_point_to_ray, transform_ray, Ray, RayHit};

// Re-export glam and hecs for convenience
pub use glam;
pub use hecs;
