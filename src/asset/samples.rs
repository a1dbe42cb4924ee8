//! Built-in sample meshes.

use super::obj::{parse_obj, ObjResult};
use crate::ecs::components::rendering::{Geometry, Mesh};

/// Axis-aligned cube centered at the origin with half-extent 0.5.
pub const CUBE_OBJ: &str = "\
# unit cube, half-extent 0.5
v -0.5 -0.5  0.5
v  0.5 -0.5  0.5
v  0.5  0.5  0.5
v -0.5  0.5  0.5
v -0.5 -0.5 -0.5
v  0.5 -0.5 -0.5
v  0.5  0.5 -0.5
v -0.5  0.5 -0.5
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn  0  0  1
vn  0  0 -1
vn  1  0  0
vn -1  0  0
vn  0  1  0
vn  0 -1  0
f 1/1/1 2/2/1 3/3/1 4/4/1
f 6/1/2 5/2/2 8/3/2 7/4/2
f 2/1/3 6/2/3 7/3/3 3/4/3
f 5/1/4 1/2/4 4/3/4 8/4/4
f 4/1/5 3/2/5 7/3/5 8/4/5
f 5/1/6 6/2/6 2/3/6 1/4/6
";

/// Geometry of the built-in cube: 12 triangles, 36 corners, with normals and uvs.
pub fn cube_geometry() -> ObjResult<Geometry> {
    parse_obj(CUBE_OBJ).map(|data| data.into_geometry())
}

/// Shared mesh handle for the built-in cube.
pub fn cube_mesh() -> ObjResult<Mesh> {
    cube_geometry().map(Mesh::new)
}
