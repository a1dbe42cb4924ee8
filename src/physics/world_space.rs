//! Local-to-world vertex transformation.

use glam::{Mat4, Vec3};

/// Transform local vertices by a model matrix.
///
/// Each point is extended to `(x, y, z, 1)` and multiplied by the full 4x4
/// matrix; the `xyz` part of the result is kept without a perspective divide.
pub fn transform_points(points: &[Vec3], model: &Mat4) -> Vec<Vec3> {
    points
        .iter()
        .map(|p| (*model * p.extend(1.0)).truncate())
        .collect()
}
