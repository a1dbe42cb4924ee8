//! Geometry and appearance components for ECS entities.

use std::sync::Arc;

use glam::Vec3;

/// Raw vertex data of a mesh, flattened as `[x, y, z, ...]` triples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub positions: Vec<f32>,
    pub normals: Option<Vec<f32>>,
    pub uvs: Option<Vec<f32>>,
    pub indices: Option<Vec<u32>>,
}

impl Geometry {
    /// Geometry with positions only.
    pub fn from_positions(positions: Vec<f32>) -> Self {
        Self {
            positions,
            ..Default::default()
        }
    }

    /// Number of complete vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Shared geometry handle. Cloning an entity's mesh shares the vertex data.
#[derive(Debug, Clone)]
pub struct Mesh(pub Arc<Geometry>);

impl Mesh {
    pub fn new(geometry: Geometry) -> Self {
        Self(Arc::new(geometry))
    }

    pub fn geometry(&self) -> &Geometry {
        &self.0
    }
}

/// Flat surface color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Vec3,
}

impl Default for Material {
    fn default() -> Self {
        Self { color: Vec3::ONE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count() {
        let g = Geometry::from_positions(vec![0.0; 9]);
        assert_eq!(g.vertex_count(), 3);
        assert!(g.normals.is_none());
    }

    #[test]
    fn test_mesh_clone_shares_geometry() {
        let mesh = Mesh::new(Geometry::from_positions(vec![1.0, 2.0, 3.0]));
        let clone = mesh.clone();
        assert!(Arc::ptr_eq(&mesh.0, &clone.0));
        assert_eq!(clone.geometry().positions, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_material_default_white() {
        assert_eq!(Material::default().color, Vec3::ONE);
    }
}
