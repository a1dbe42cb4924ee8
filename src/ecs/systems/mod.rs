//! ECS systems (transform synchronization, collision feedback).

pub mod collision;
pub mod transform;

pub use collision::collision_flag_system;
pub use transform::transform_system;
