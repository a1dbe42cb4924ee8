//! Narrowphase collision detection: the GJK boolean intersection test.

use glam::Vec3;

use super::error::CollisionResult;
use super::simplex::{evolve, Evolution, Simplex};
use super::support::{minkowski_support, ConvexPointSet};
use super::CollisionConfig;
use crate::math::try_normalize;

/// How a GJK run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GjkOutcome {
    /// The Minkowski difference contains the origin (or touches it).
    Intersecting { iterations: u32 },
    /// A support point failed to pass the origin: a separating direction exists.
    Separated { iterations: u32 },
    /// The iteration cap was reached without a decision. Treated as separated;
    /// only happens for nearly-touching or flat (zero-volume) shapes.
    Exhausted { iterations: u32 },
}

impl GjkOutcome {
    /// Collapse the outcome to the intersection boolean.
    #[inline]
    pub fn is_intersecting(&self) -> bool {
        matches!(self, GjkOutcome::Intersecting { .. })
    }

    /// Number of main-loop iterations performed.
    pub fn iterations(&self) -> u32 {
        match *self {
            GjkOutcome::Intersecting { iterations }
            | GjkOutcome::Separated { iterations }
            | GjkOutcome::Exhausted { iterations } => iterations,
        }
    }
}

/// GJK intersection test between two convex point sets sharing one space.
pub fn gjk_intersection(
    a: &ConvexPointSet,
    b: &ConvexPointSet,
    config: &CollisionConfig,
) -> GjkOutcome {
    let first = minkowski_support(a, b, config.initial_direction);
    let mut simplex = Simplex::Point([first]);
    // Squared extent of the Minkowski difference seen so far.
    let mut scale_sq = first.length_squared();

    // A zero first support point puts the origin on the Minkowski boundary.
    let mut direction = match try_normalize(-first) {
        Ok(direction) => direction,
        Err(_) => {
            tracing::trace!("GJK seed support point is the origin, shapes touch");
            return GjkOutcome::Intersecting { iterations: 0 };
        }
    };

    for iteration in 1..=config.max_iterations {
        let new_point = minkowski_support(a, b, direction);
        if new_point.dot(direction) < 0.0 {
            return GjkOutcome::Separated {
                iterations: iteration,
            };
        }
        scale_sq = scale_sq.max(new_point.length_squared());

        match evolve(simplex.grow(new_point)) {
            Evolution::Enclosed(_) => {
                return GjkOutcome::Intersecting {
                    iterations: iteration,
                };
            }
            Evolution::Reduced {
                simplex: reduced,
                direction: next,
            } => {
                simplex = reduced;
                direction = next;
            }
        }

        if origin_on_simplex(&simplex, direction, scale_sq, config.degenerate_epsilon) {
            tracing::trace!(
                iteration,
                vertices = simplex.points().len(),
                "GJK search direction vanished, origin on simplex"
            );
            return GjkOutcome::Intersecting {
                iterations: iteration,
            };
        }
    }

    GjkOutcome::Exhausted {
        iterations: config.max_iterations,
    }
}

/// Whether the reduced search direction is zero relative to the simplex size,
/// meaning the origin lies on the simplex itself.
///
/// The direction is `-A` for a point, `AB x AO x AB` (length `|AB|^2 * dist`)
/// for an edge and a face normal (length `|AB| |AC| sin`) for a triangle, so
/// each case is compared against the matching power of the simplex size.
/// Uniformly scaling both shapes leaves the answer unchanged.
fn origin_on_simplex(simplex: &Simplex, direction: Vec3, scale_sq: f32, epsilon: f32) -> bool {
    if direction == Vec3::ZERO {
        return true;
    }
    let threshold = match *simplex {
        Simplex::Point(_) => epsilon * scale_sq,
        Simplex::Line([a, b]) => {
            let ab_sq = (b - a).length_squared();
            epsilon * ab_sq * ab_sq * scale_sq
        }
        Simplex::Triangle([a, b, c]) => {
            epsilon * (b - a).length_squared() * (c - a).length_squared()
        }
    };
    direction.length_squared() < threshold
}

/// GJK on flattened `[x, y, z, ...]` vertex data with the default configuration.
///
/// Malformed input (length not a multiple of 3, or empty) is returned as an error.
pub fn try_gjk3d(a: &[f32], b: &[f32]) -> CollisionResult<bool> {
    let a = ConvexPointSet::from_flat(a)?;
    let b = ConvexPointSet::from_flat(b)?;
    Ok(gjk_intersection(&a, &b, &CollisionConfig::default()).is_intersecting())
}

/// GJK on flattened vertex data. Malformed input is logged and reported as
/// "not intersecting".
pub fn gjk3d(a: &[f32], b: &[f32]) -> bool {
    match try_gjk3d(a, b) {
        Ok(hit) => hit,
        Err(e) => {
            tracing::error!("invalid vertices for GJK input: {e}");
            false
        }
    }
}

/// Axis-aligned box vertices, handy for tests and demos.
pub fn box_points(center: Vec3, half_extents: Vec3) -> [Vec3; 8] {
    let mut points = [Vec3::ZERO; 8];
    for (i, p) in points.iter_mut().enumerate() {
        let sign = Vec3::new(
            if i & 4 == 0 { -1.0 } else { 1.0 },
            if i & 2 == 0 { -1.0 } else { 1.0 },
            if i & 1 == 0 { -1.0 } else { 1.0 },
        );
        *p = center + sign * half_extents;
    }
    points
}
