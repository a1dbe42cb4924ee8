//! Ray casting for selecting scene entities with the mouse.
//!
//! Provides screen-to-ray unprojection, ray transformation and a
//! ray/triangle test used to find the nearest entity under the cursor.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::ecs::components::rendering::{Geometry, Mesh};
use crate::ecs::components::transform::GlobalTransform;

/// Below this `|dot(direction, normal)|` a ray counts as parallel to a triangle.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// A half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A ray/triangle hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Unit normal of the triangle's winding (`AB x AC`).
    pub normal: Vec3,
    /// Distance along the ray.
    pub t: f32,
}

/// Build a view-space ray through a pixel.
///
/// `screen` is in pixels with the origin at the top-left corner. The pixel is
/// mapped to NDC, unprojected onto the far plane through the inverse
/// projection, and the ray starts at the view-space origin.
///
/// Returns `None` for an empty viewport or a singular projection.
pub fn screen_point_to_ray(screen: Vec2, viewport_size: Vec2, projection: &Mat4) -> Option<Ray> {
    if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 || projection.determinant() == 0.0 {
        return None;
    }

    let ndc = Vec2::new(
        2.0 * screen.x / viewport_size.x - 1.0,
        1.0 - 2.0 * screen.y / viewport_size.y,
    );
    let far = projection.inverse() * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let far = far.truncate() / far.w;

    Some(Ray::new(Vec3::ZERO, far.try_normalize()?))
}

/// Move a ray into another space: the origin as a point, the direction as a
/// vector (w = 0), renormalized afterwards.
pub fn transform_ray(ray: &Ray, m: &Mat4) -> Ray {
    Ray {
        origin: m.transform_point3(ray.origin),
        direction: m.transform_vector3(ray.direction).normalize_or_zero(),
    }
}

/// Intersect a ray with a triangle given in model space.
///
/// Hits from either side of the triangle are accepted. Returns `None` when
/// the ray is parallel to the triangle plane, the plane lies behind the
/// origin, or the plane hit falls outside the triangle.
pub fn ray_triangle_intersection(ray: &Ray, triangle: [Vec3; 3], model: &Mat4) -> Option<RayHit> {
    let [a, b, c] = triangle.map(|p| model.transform_point3(p));

    let normal = (b - a).cross(c - a);
    let denom = ray.direction.dot(normal);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (a - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }

    let p = ray.at(t);
    for (start, end) in [(a, b), (b, c), (c, a)] {
        if normal.dot((end - start).cross(p - start)) < 0.0 {
            return None;
        }
    }

    Some(RayHit {
        normal: normal.normalize_or_zero(),
        t,
    })
}

/// Nearest hit of a ray against a geometry's triangles.
pub fn ray_geometry_intersection(ray: &Ray, geometry: &Geometry, model: &Mat4) -> Option<RayHit> {
    let corners: Vec<Vec3> = geometry
        .positions
        .chunks_exact(3)
        .map(Vec3::from_slice)
        .collect();

    let triangles: Vec<[Vec3; 3]> = match &geometry.indices {
        Some(indices) => indices
            .chunks_exact(3)
            .filter_map(|tri| {
                Some([
                    *corners.get(tri[0] as usize)?,
                    *corners.get(tri[1] as usize)?,
                    *corners.get(tri[2] as usize)?,
                ])
            })
            .collect(),
        None => corners
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect(),
    };

    triangles
        .into_iter()
        .filter_map(|tri| ray_triangle_intersection(ray, tri, model))
        .min_by(|x, y| x.t.total_cmp(&y.t))
}

/// Find the entity whose mesh the ray hits first.
///
/// Considers every entity with a `Mesh` and a `GlobalTransform`; returns the
/// entity and the hit distance.
pub fn pick_entity(world: &hecs::World, ray: &Ray) -> Option<(hecs::Entity, f32)> {
    let mut query = world.query::<(&Mesh, &GlobalTransform)>();
    let nearest = query
        .iter()
        .filter_map(|(entity, (mesh, global))| {
            ray_geometry_intersection(ray, mesh.geometry(), &global.0).map(|hit| (entity, hit.t))
        })
        .min_by(|x, y| x.1.total_cmp(&y.1));

    if let Some((entity, t)) = nearest {
        tracing::debug!(?entity, t, "picked entity");
    }
    nearest
}
