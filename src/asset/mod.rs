//! Mesh assets: OBJ parsing and built-in sample shapes.

pub mod obj;
pub mod samples;

pub use obj::{load_obj_file, parse_obj, ObjData, ObjError, ObjResult};
pub use samples::{cube_geometry, cube_mesh};
