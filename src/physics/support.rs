//! Convex point sets and the Minkowski-difference support function.

use glam::Vec3;

use super::error::{CollisionError, CollisionResult};

/// A borrowed, validated, non-empty set of vertices describing a convex shape.
///
/// The vertices may be in any common space (local or world); the hull of the
/// points is the shape. Construction is the only place input is checked, so
/// every query on a `ConvexPointSet` is infallible.
#[derive(Debug, Clone, Copy)]
pub struct ConvexPointSet<'a> {
    points: &'a [Vec3],
}

impl<'a> ConvexPointSet<'a> {
    /// Wrap a slice of vertices.
    pub fn from_points(points: &'a [Vec3]) -> CollisionResult<Self> {
        if points.is_empty() {
            return Err(CollisionError::EmptyPointSet);
        }
        Ok(Self { points })
    }

    /// Reinterpret flattened `[x0, y0, z0, x1, ...]` data as vertices without copying.
    pub fn from_flat(flat: &'a [f32]) -> CollisionResult<Self> {
        let points: &[Vec3] = bytemuck::try_cast_slice(flat)
            .map_err(|_| CollisionError::MalformedPointSet { len: flat.len() })?;
        Self::from_points(points)
    }

    /// The vertices of the set.
    #[inline]
    pub fn points(&self) -> &'a [Vec3] {
        self.points
    }

    /// Number of vertices (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertex farthest along `direction`. Ties keep the first maximum.
    #[inline]
    pub fn farthest_point(&self, direction: Vec3) -> Vec3 {
        let mut best = self.points[0];
        let mut best_dot = best.dot(direction);
        for p in &self.points[1..] {
            let d = p.dot(direction);
            if d > best_dot {
                best_dot = d;
                best = *p;
            }
        }
        best
    }
}

/// Support point of the Minkowski difference `A - B` along `direction`.
#[inline]
pub fn minkowski_support(a: &ConvexPointSet, b: &ConvexPointSet, direction: Vec3) -> Vec3 {
    a.farthest_point(direction) - b.farthest_point(-direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat() {
        let flat = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let set = ConvexPointSet::from_flat(&flat).unwrap();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.points()[1], Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_from_flat_malformed() {
        let flat = [0.0, 1.0, 2.0, 3.0];
        let err = ConvexPointSet::from_flat(&flat).unwrap_err();
        assert_eq!(err, CollisionError::MalformedPointSet { len: 4 });
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            ConvexPointSet::from_flat(&[]).unwrap_err(),
            CollisionError::EmptyPointSet
        );
        assert_eq!(
            ConvexPointSet::from_points(&[]).unwrap_err(),
            CollisionError::EmptyPointSet
        );
    }

    #[test]
    fn test_farthest_point() {
        let points = [
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
        ];
        let set = ConvexPointSet::from_points(&points).unwrap();
        assert_eq!(set.farthest_point(Vec3::X), points[1]);
        assert_eq!(set.farthest_point(Vec3::Y), points[2]);
        assert_eq!(set.farthest_point(-Vec3::X), points[0]);
    }

    #[test]
    fn test_farthest_point_tie_keeps_first() {
        let points = [
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ];
        let set = ConvexPointSet::from_points(&points).unwrap();
        assert_eq!(set.farthest_point(Vec3::X), points[0]);
    }

    #[test]
    fn test_minkowski_support() {
        let a = [Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)];
        let b = [Vec3::new(5.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)];
        let a = ConvexPointSet::from_points(&a).unwrap();
        let b = ConvexPointSet::from_points(&b).unwrap();

        // farthest(A, +X) = 1, farthest(B, -X) = 3
        assert_eq!(minkowski_support(&a, &b, Vec3::X), Vec3::new(-2.0, 0.0, 0.0));
        // farthest(A, -X) = -1, farthest(B, +X) = 5
        assert_eq!(
            minkowski_support(&a, &b, -Vec3::X),
            Vec3::new(-6.0, 0.0, 0.0)
        );
    }
}
