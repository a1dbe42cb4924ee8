//! Simplex evolution for the GJK intersection test.
//!
//! A simplex is stored as a fixed array of Minkowski-difference vertices with
//! index 0 holding the most recently added vertex ("A"). The remaining order
//! encodes the winding of the triangle case, which the tetrahedron case relies
//! on.
//!
//! [`Simplex`] is what GJK carries between iterations (one to three vertices).
//! Growing it by a fresh support point yields a [`GrownSimplex`] (two to four
//! vertices), the only input [`evolve`] accepts. Empty, single-point and
//! oversized simplices therefore never reach the case analysis.

use glam::Vec3;

use crate::math::triple_cross;

/// A simplex that can accept one more support point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Simplex {
    Point([Vec3; 1]),
    Line([Vec3; 2]),
    Triangle([Vec3; 3]),
}

impl Simplex {
    /// Vertices, most recent first.
    pub fn points(&self) -> &[Vec3] {
        match self {
            Simplex::Point(p) => p,
            Simplex::Line(p) => p,
            Simplex::Triangle(p) => p,
        }
    }

    /// Append `a` as the new most recent vertex.
    #[inline]
    pub fn grow(self, a: Vec3) -> GrownSimplex {
        match self {
            Simplex::Point([b]) => GrownSimplex::Line([a, b]),
            Simplex::Line([b, c]) => GrownSimplex::Triangle([a, b, c]),
            Simplex::Triangle([b, c, d]) => GrownSimplex::Tetrahedron([a, b, c, d]),
        }
    }
}

/// A simplex that has just received a new support point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrownSimplex {
    Line([Vec3; 2]),
    Triangle([Vec3; 3]),
    Tetrahedron([Vec3; 4]),
}

impl GrownSimplex {
    /// Vertices, most recent first.
    pub fn points(&self) -> &[Vec3] {
        match self {
            GrownSimplex::Line(p) => p,
            GrownSimplex::Triangle(p) => p,
            GrownSimplex::Tetrahedron(p) => p,
        }
    }
}

/// Result of one evolution step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evolution {
    /// The tetrahedron encloses the origin.
    Enclosed([Vec3; 4]),
    /// The simplex was reduced to the feature nearest the origin.
    Reduced {
        simplex: Simplex,
        /// Next search direction, not normalized.
        direction: Vec3,
    },
}

/// Test the grown simplex for origin containment, otherwise reduce it and
/// compute the next search direction.
pub fn evolve(simplex: GrownSimplex) -> Evolution {
    match simplex {
        GrownSimplex::Line([a, b]) => evolve_line(a, b),
        GrownSimplex::Triangle([a, b, c]) => evolve_triangle(a, b, c),
        GrownSimplex::Tetrahedron([a, b, c, d]) => evolve_tetrahedron(a, b, c, d),
    }
}

fn evolve_line(a: Vec3, b: Vec3) -> Evolution {
    let ab = b - a;
    let ao = -a;

    if ab.dot(ao) > 0.0 {
        Evolution::Reduced {
            simplex: Simplex::Line([a, b]),
            direction: triple_cross(ab, ao, ab),
        }
    } else {
        Evolution::Reduced {
            simplex: Simplex::Point([a]),
            direction: ao,
        }
    }
}

fn evolve_triangle(a: Vec3, b: Vec3, c: Vec3) -> Evolution {
    let ab = b - a;
    let ac = c - a;
    let ao = -a;
    let abc = ab.cross(ac);

    if abc.cross(ac).dot(ao) > 0.0 {
        // Outside edge AC
        if ac.dot(ao) > 0.0 {
            return Evolution::Reduced {
                simplex: Simplex::Line([a, c]),
                direction: triple_cross(ac, ao, ac),
            };
        }
        return edge_ab_or_vertex_a(a, b, ab, ao);
    }

    if ab.cross(abc).dot(ao) > 0.0 {
        // Outside edge AB
        return edge_ab_or_vertex_a(a, b, ab, ao);
    }

    // Origin is above or below the triangle
    if abc.dot(ao) > 0.0 {
        Evolution::Reduced {
            simplex: Simplex::Triangle([a, b, c]),
            direction: abc,
        }
    } else {
        Evolution::Reduced {
            simplex: Simplex::Triangle([a, c, b]),
            direction: -abc,
        }
    }
}

/// Region shared by both edge tests of the triangle case.
fn edge_ab_or_vertex_a(a: Vec3, b: Vec3, ab: Vec3, ao: Vec3) -> Evolution {
    if ab.dot(ao) > 0.0 {
        Evolution::Reduced {
            simplex: Simplex::Line([a, b]),
            direction: triple_cross(ab, ao, ab),
        }
    } else {
        Evolution::Reduced {
            simplex: Simplex::Point([a]),
            direction: ao,
        }
    }
}

fn evolve_tetrahedron(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Evolution {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let ao = -a;

    // Face normals adjacent to A, flipped away from the opposite vertex.
    let abc = outward(ab.cross(ac), ad);
    let acd = outward(ac.cross(ad), ab);
    let adb = outward(ad.cross(ab), ac);

    if abc.dot(ao) > 0.0 {
        return Evolution::Reduced {
            simplex: Simplex::Triangle([a, b, c]),
            direction: abc,
        };
    }
    if acd.dot(ao) > 0.0 {
        return Evolution::Reduced {
            simplex: Simplex::Triangle([a, c, d]),
            direction: acd,
        };
    }
    if adb.dot(ao) > 0.0 {
        return Evolution::Reduced {
            simplex: Simplex::Triangle([a, d, b]),
            direction: adb,
        };
    }

    Evolution::Enclosed([a, b, c, d])
}

#[inline]
fn outward(normal: Vec3, towards_opposite: Vec3) -> Vec3 {
    if normal.dot(towards_opposite) > 0.0 {
        -normal
    } else {
        normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduced(evolution: Evolution) -> (Simplex, Vec3) {
        match evolution {
            Evolution::Reduced { simplex, direction } => (simplex, direction),
            Evolution::Enclosed(_) => panic!("expected a reduction, got {evolution:?}"),
        }
    }

    #[test]
    fn test_grow() {
        let p = Vec3::X;
        let q = Vec3::Y;
        let r = Vec3::Z;
        let s = Vec3::ONE;

        let line = Simplex::Point([p]).grow(q);
        assert_eq!(line, GrownSimplex::Line([q, p]));

        let tri = Simplex::Line([q, p]).grow(r);
        assert_eq!(tri, GrownSimplex::Triangle([r, q, p]));

        let tet = Simplex::Triangle([r, q, p]).grow(s);
        assert_eq!(tet, GrownSimplex::Tetrahedron([s, r, q, p]));
        assert_eq!(tet.points().len(), 4);
    }

    #[test]
    fn test_line_keeps_edge() {
        let a = Vec3::new(1.0, 1.0, 0.0);
        let b = Vec3::new(-1.0, 1.0, 0.0);
        let (simplex, direction) = reduced(evolve(GrownSimplex::Line([a, b])));
        assert_eq!(simplex, Simplex::Line([a, b]));
        assert_eq!(direction, Vec3::new(0.0, -4.0, 0.0));
    }

    #[test]
    fn test_line_reduces_to_vertex() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(2.0, 0.0, 0.0);
        let (simplex, direction) = reduced(evolve(GrownSimplex::Line([a, b])));
        assert_eq!(simplex, Simplex::Point([a]));
        assert_eq!(direction, -a);
    }

    #[test]
    fn test_triangle_outside_edge_ac() {
        let a = Vec3::new(1.0, 1.0, 0.0);
        let b = Vec3::new(3.0, 1.0, 0.0);
        let c = Vec3::new(1.0, -1.0, 0.0);
        let (simplex, direction) = reduced(evolve(GrownSimplex::Triangle([a, b, c])));
        assert_eq!(simplex, Simplex::Line([a, c]));
        assert!((direction - Vec3::new(-4.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_triangle_outside_edge_ab() {
        let a = Vec3::new(1.0, 1.0, 0.0);
        let b = Vec3::new(1.0, -1.0, 0.0);
        let c = Vec3::new(3.0, 1.0, 0.0);
        let (simplex, direction) = reduced(evolve(GrownSimplex::Triangle([a, b, c])));
        assert_eq!(simplex, Simplex::Line([a, b]));
        assert!((direction - Vec3::new(-4.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_triangle_reduces_to_vertex() {
        let a = Vec3::new(1.0, 1.0, 0.0);
        let b = Vec3::new(2.0, 2.0, 0.0);
        let c = Vec3::new(2.0, 1.0, 0.0);
        let (simplex, direction) = reduced(evolve(GrownSimplex::Triangle([a, b, c])));
        assert_eq!(simplex, Simplex::Point([a]));
        assert_eq!(direction, -a);
    }

    #[test]
    fn test_triangle_origin_below_reorders() {
        let a = Vec3::new(-1.0, -1.0, 1.0);
        let b = Vec3::new(1.0, -1.0, 1.0);
        let c = Vec3::new(0.0, 1.0, 1.0);
        let (simplex, direction) = reduced(evolve(GrownSimplex::Triangle([a, b, c])));
        assert_eq!(simplex, Simplex::Triangle([a, c, b]));
        assert!((direction - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-6);
    }

    #[test]
    fn test_triangle_origin_above_keeps_order() {
        let a = Vec3::new(-1.0, -1.0, -1.0);
        let b = Vec3::new(1.0, -1.0, -1.0);
        let c = Vec3::new(0.0, 1.0, -1.0);
        let (simplex, direction) = reduced(evolve(GrownSimplex::Triangle([a, b, c])));
        assert_eq!(simplex, Simplex::Triangle([a, b, c]));
        assert!((direction - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-6);
    }

    #[test]
    fn test_tetrahedron_encloses_origin() {
        let tet = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        ];
        assert_eq!(
            evolve(GrownSimplex::Tetrahedron(tet)),
            Evolution::Enclosed(tet)
        );
    }

    #[test]
    fn test_tetrahedron_reduces_to_face_adb() {
        let a = Vec3::new(3.0, 0.0, 1.0);
        let b = Vec3::new(2.0, -1.0, -1.0);
        let c = Vec3::new(4.0, -1.0, -1.0);
        let d = Vec3::new(3.0, 1.0, -1.0);
        let (simplex, direction) = reduced(evolve(GrownSimplex::Tetrahedron([a, b, c, d])));
        assert_eq!(simplex, Simplex::Triangle([a, d, b]));
        assert!((direction - Vec3::new(-4.0, 2.0, 1.0)).length() < 1e-6);
        assert!(direction.dot(-a) > 0.0);
    }

    #[test]
    fn test_tetrahedron_reduces_to_face_acd() {
        let a = Vec3::new(3.0, 0.0, 1.0);
        let b = Vec3::new(4.0, -1.0, -1.0);
        let c = Vec3::new(3.0, 1.0, -1.0);
        let d = Vec3::new(2.0, -1.0, -1.0);
        let (simplex, direction) = reduced(evolve(GrownSimplex::Tetrahedron([a, b, c, d])));
        assert_eq!(simplex, Simplex::Triangle([a, c, d]));
        assert!((direction - Vec3::new(-4.0, 2.0, 1.0)).length() < 1e-6);
        assert!(direction.dot(-a) > 0.0);
    }

    #[test]
    fn test_tetrahedron_reduces_to_face_abc() {
        let a = Vec3::new(3.0, 0.0, 1.0);
        let b = Vec3::new(2.0, -1.0, -1.0);
        let c = Vec3::new(3.0, 1.0, -1.0);
        let d = Vec3::new(4.0, -1.0, -1.0);
        let (simplex, direction) = reduced(evolve(GrownSimplex::Tetrahedron([a, b, c, d])));
        assert_eq!(simplex, Simplex::Triangle([a, b, c]));
        assert!((direction - Vec3::new(-4.0, 2.0, 1.0)).length() < 1e-6);
    }
}
