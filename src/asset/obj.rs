//! Wavefront OBJ parsing.
//!
//! Produces a non-indexed triangle list: every face corner becomes its own
//! vertex, and faces with more than three corners are fan-triangulated.
//! Only `v`, `vn`, `vt` and `f` records are read; other records (`o`, `g`,
//! `s`, `usemtl`, `mtllib`, ...) are ignored.

use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use crate::ecs::components::rendering::Geometry;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjError {
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: `{keyword}` needs {expected} components, found {found}")]
    MissingComponents {
        line: usize,
        keyword: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid index `{token}`")]
    InvalidIndex { line: usize, token: String },
    #[error("line {line}: {kind} index {index} out of range ({count} defined)")]
    IndexOutOfRange {
        line: usize,
        kind: &'static str,
        index: i64,
        count: usize,
    },
    #[error("line {line}: face has {count} vertices, expected at least 3")]
    DegenerateFace { line: usize, count: usize },
    #[error("no faces found")]
    NoFaces,
}

pub type ObjResult<T> = Result<T, ObjError>;

/// Flattened per-corner attributes of a parsed OBJ file.
///
/// `normals` and `uvs` are present only when every face corner references one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjData {
    pub vertices: Vec<f32>,
    pub normals: Option<Vec<f32>>,
    pub uvs: Option<Vec<f32>>,
}

impl ObjData {
    /// Number of emitted triangle corners.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn into_geometry(self) -> Geometry {
        Geometry {
            positions: self.vertices,
            normals: self.normals,
            uvs: self.uvs,
            indices: None,
        }
    }
}

#[derive(Clone, Copy)]
struct Corner {
    position: usize,
    uv: Option<usize>,
    normal: Option<usize>,
}

#[derive(Default)]
struct ObjBuilder {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    out: ObjData,
    out_normals: Vec<f32>,
    out_uvs: Vec<f32>,
    all_normals: bool,
    all_uvs: bool,
    faces: usize,
}

impl ObjBuilder {
    fn new() -> Self {
        Self {
            all_normals: true,
            all_uvs: true,
            ..Default::default()
        }
    }

    fn push_corner(&mut self, corner: Corner) {
        self.out
            .vertices
            .extend_from_slice(&self.positions[corner.position]);
        match corner.normal {
            Some(n) => self.out_normals.extend_from_slice(&self.normals[n]),
            None => self.all_normals = false,
        }
        match corner.uv {
            Some(t) => self.out_uvs.extend_from_slice(&self.uvs[t]),
            None => self.all_uvs = false,
        }
    }

    fn push_face(&mut self, corners: &[Corner]) {
        for i in 1..corners.len() - 1 {
            self.push_corner(corners[0]);
            self.push_corner(corners[i]);
            self.push_corner(corners[i + 1]);
        }
        self.faces += 1;
    }

    fn finish(mut self) -> ObjResult<ObjData> {
        if self.faces == 0 {
            return Err(ObjError::NoFaces);
        }
        self.out.normals = self.all_normals.then_some(self.out_normals);
        self.out.uvs = self.all_uvs.then_some(self.out_uvs);
        Ok(self.out)
    }
}

/// Parse OBJ text into a flat triangle list.
pub fn parse_obj(text: &str) -> ObjResult<ObjData> {
    let mut builder = ObjBuilder::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or("");
        let mut parts = content.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match keyword {
            "v" => {
                let [x, y, z] = parse_floats::<3>(line, "v", &args)?;
                builder.positions.push([x, y, z]);
            }
            "vn" => {
                let [x, y, z] = parse_floats::<3>(line, "vn", &args)?;
                builder.normals.push([x, y, z]);
            }
            "vt" => {
                // `v` is optional and defaults to 0
                let [u] = parse_floats::<1>(line, "vt", &args)?;
                let v = match args.get(1) {
                    Some(token) => parse_float(line, token)?,
                    None => 0.0,
                };
                builder.uvs.push([u, v]);
            }
            "f" => {
                if args.len() < 3 {
                    return Err(ObjError::DegenerateFace {
                        line,
                        count: args.len(),
                    });
                }
                let corners = args
                    .iter()
                    .map(|token| parse_corner(line, token, &builder))
                    .collect::<ObjResult<Vec<_>>>()?;
                builder.push_face(&corners);
            }
            _ => {}
        }
    }

    builder.finish()
}

/// Read and parse an OBJ file from disk.
pub fn load_obj_file<P: AsRef<Path>>(path: P) -> anyhow::Result<ObjData> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let data =
        parse_obj(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), vertices = data.vertex_count(), "loaded OBJ");
    Ok(data)
}

/// Read the first `N` components; extra components (such as `w`) are ignored.
fn parse_floats<const N: usize>(
    line: usize,
    keyword: &'static str,
    args: &[&str],
) -> ObjResult<[f32; N]> {
    if args.len() < N {
        return Err(ObjError::MissingComponents {
            line,
            keyword,
            expected: N,
            found: args.len(),
        });
    }
    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(args) {
        *slot = parse_float(line, token)?;
    }
    Ok(out)
}

fn parse_float(line: usize, token: &str) -> ObjResult<f32> {
    token.parse().map_err(|_| ObjError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Parse one `v`, `v/vt`, `v//vn` or `v/vt/vn` face corner.
fn parse_corner(line: usize, token: &str, builder: &ObjBuilder) -> ObjResult<Corner> {
    let mut fields = token.split('/');
    let position = fields.next().unwrap_or("");
    let uv = fields.next().filter(|s| !s.is_empty());
    let normal = fields.next().filter(|s| !s.is_empty());
    if fields.next().is_some() {
        return Err(ObjError::InvalidIndex {
            line,
            token: token.to_string(),
        });
    }

    Ok(Corner {
        position: resolve_index(line, position, "position", builder.positions.len())?,
        uv: uv
            .map(|s| resolve_index(line, s, "texture", builder.uvs.len()))
            .transpose()?,
        normal: normal
            .map(|s| resolve_index(line, s, "normal", builder.normals.len()))
            .transpose()?,
    })
}

/// Convert a 1-based (or negative, relative to the end) OBJ index to 0-based.
fn resolve_index(line: usize, token: &str, kind: &'static str, count: usize) -> ObjResult<usize> {
    let index: i64 = token.parse().map_err(|_| ObjError::InvalidIndex {
        line,
        token: token.to_string(),
    })?;
    let resolved = if index > 0 {
        index - 1
    } else {
        count as i64 + index
    };
    if index == 0 || resolved < 0 || resolved >= count as i64 {
        return Err(ObjError::IndexOutOfRange {
            line,
            kind,
            index,
            count,
        });
    }
    Ok(resolved as usize)
}
