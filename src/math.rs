//! Vector algebra helpers shared by the collision code.
//!
//! Addition, subtraction, negation, scaling, dot and cross products are the
//! plain [`glam::Vec3`] operators and methods. This module only adds the few
//! operations GJK needs on top of them.

use glam::Vec3;

use crate::physics::error::{CollisionError, CollisionResult};

/// Triple cross product: `(a x b) x c`.
///
/// With `a = c = AB` and `b = AO` this yields the component of `AO`
/// perpendicular to the edge, pointing from the edge towards the origin.
#[inline]
pub fn triple_cross(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    a.cross(b).cross(c)
}

/// Normalize `v`, rejecting zero-length and non-finite input.
///
/// Callers must pass a non-zero vector; a violation is reported as
/// [`CollisionError::DegenerateDirection`] instead of producing NaN.
#[inline]
pub fn try_normalize(v: Vec3) -> CollisionResult<Vec3> {
    v.try_normalize()
        .ok_or(CollisionError::DegenerateDirection { direction: v })
}
