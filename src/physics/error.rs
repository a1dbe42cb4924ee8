//! Error types for collision detection.

use glam::Vec3;
use thiserror::Error;

/// Errors reported by the narrowphase and the collision sweep.
///
/// None of these abort a sweep: the affected pair is treated as
/// non-intersecting and the remaining pairs are still tested.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollisionError {
    /// Flattened point data whose length is not a multiple of three.
    #[error("point set has {len} components, expected a multiple of 3")]
    MalformedPointSet {
        /// Number of scalar components supplied.
        len: usize,
    },

    /// Point set without a single vertex.
    #[error("point set is empty")]
    EmptyPointSet,

    /// Entity taking part in collision detection without geometry.
    #[error("entity {entity:?} has no mesh geometry")]
    MissingGeometry {
        /// The offending entity.
        entity: hecs::Entity,
    },

    /// A direction that had to be normalized was zero or not finite.
    #[error("cannot normalize degenerate direction {direction}")]
    DegenerateDirection {
        /// The rejected vector.
        direction: Vec3,
    },
}

/// Result type for collision operations.
pub type CollisionResult<T> = std::result::Result<T, CollisionError>;
