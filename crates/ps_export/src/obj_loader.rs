//! OBJ mesh provider
//!
//! A line-oriented Wavefront OBJ reader producing the [`Mesh`] snapshot the
//! exporter consumes. Handles only what the export path needs: positions,
//! texture coordinates, normals, and faces; all other commands are ignored.
//! Faces are kept at their source arity — quads and n-gons go through the
//! triangulation pass afterwards.
//!
//! Per-corner texture coordinates are appended to a mesh-level loop array as
//! faces are read, so each corner's loop index is simply its position in
//! that array. The result carries a single active UV layer.

use crate::mesh::{Face, Mesh, UvLayer};
use crate::triangulate::triangle_normal;
use log::debug;
use nalgebra::Vector3;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading an OBJ document.
#[derive(Error, Debug)]
pub enum ObjError {
    /// IO failure on the input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A numeric field failed to parse
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Structurally invalid document
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Wavefront OBJ reader.
pub struct ObjLoader;

impl ObjLoader {
    /// Load an OBJ file into a mesh snapshot.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be opened or [`read_obj`](Self::read_obj)
    /// rejects its contents.
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, ObjError> {
        let file = File::open(path)?;
        Self::read_obj(BufReader::new(file))
    }

    /// Read an OBJ document from any buffered reader.
    ///
    /// # Errors
    ///
    /// Fails on unreadable input, malformed numeric fields, face indices
    /// outside the vertex list, or a document with no vertices at all.
    pub fn read_obj<R: BufRead>(reader: R) -> Result<Mesh, ObjError> {
        let mut positions: Vec<[f32; 3]> = Vec::new();
        let mut normals: Vec<[f32; 3]> = Vec::new();
        let mut tex_coords: Vec<[f32; 2]> = Vec::new();
        let mut loops: Vec<[f32; 2]> = Vec::new();
        let mut faces: Vec<Face> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts[0] {
                "v" if parts.len() >= 4 => {
                    let x: f32 = parts[1]
                        .parse()
                        .map_err(|_| ObjError::ParseError("Invalid vertex x".to_string()))?;
                    let y: f32 = parts[2]
                        .parse()
                        .map_err(|_| ObjError::ParseError("Invalid vertex y".to_string()))?;
                    let z: f32 = parts[3]
                        .parse()
                        .map_err(|_| ObjError::ParseError("Invalid vertex z".to_string()))?;
                    positions.push([x, y, z]);
                }
                "vn" if parts.len() >= 4 => {
                    let x: f32 = parts[1]
                        .parse()
                        .map_err(|_| ObjError::ParseError("Invalid normal x".to_string()))?;
                    let y: f32 = parts[2]
                        .parse()
                        .map_err(|_| ObjError::ParseError("Invalid normal y".to_string()))?;
                    let z: f32 = parts[3]
                        .parse()
                        .map_err(|_| ObjError::ParseError("Invalid normal z".to_string()))?;
                    normals.push([x, y, z]);
                }
                "vt" if parts.len() >= 3 => {
                    let u: f32 = parts[1]
                        .parse()
                        .map_err(|_| ObjError::ParseError("Invalid tex coord u".to_string()))?;
                    let v: f32 = parts[2]
                        .parse()
                        .map_err(|_| ObjError::ParseError("Invalid tex coord v".to_string()))?;
                    tex_coords.push([u, v]);
                }
                "f" if parts.len() >= 4 => {
                    let face = Self::read_face(
                        &parts[1..],
                        &positions,
                        &normals,
                        &tex_coords,
                        &mut loops,
                    )?;
                    faces.push(face);
                }
                _ => {
                    // Ignore other commands
                }
            }
        }

        if positions.is_empty() {
            return Err(ObjError::InvalidFormat(
                "No vertices found in OBJ file".to_string(),
            ));
        }

        debug!(
            "read OBJ document: {} vertices, {} faces, {} loops",
            positions.len(),
            faces.len(),
            loops.len()
        );

        Ok(Mesh {
            vertices: positions,
            faces,
            uv_layers: vec![UvLayer::new("UVMap", loops)],
            active_uv_layer: Some(0),
        })
    }

    /// Parse one `f` command's corner list into a face, appending each
    /// corner's UV to the mesh-level loop array.
    fn read_face(
        corners: &[&str],
        positions: &[[f32; 3]],
        normals: &[[f32; 3]],
        tex_coords: &[[f32; 2]],
        loops: &mut Vec<[f32; 2]>,
    ) -> Result<Face, ObjError> {
        let mut vertices = Vec::with_capacity(corners.len());
        let mut loop_indices = Vec::with_capacity(corners.len());
        let mut corner_normals: Vec<[f32; 3]> = Vec::new();

        for corner in corners {
            let indices: Vec<&str> = corner.split('/').collect();

            // Position index (1-based in OBJ)
            let pos_idx: usize = indices[0]
                .parse()
                .map_err(|_| ObjError::ParseError("Invalid position index".to_string()))?;
            let pos_idx = pos_idx
                .checked_sub(1)
                .ok_or_else(|| ObjError::ParseError("Position index is zero".to_string()))?;
            if pos_idx >= positions.len() {
                return Err(ObjError::InvalidFormat(
                    "Position index out of bounds".to_string(),
                ));
            }

            // Texture coordinate index; absent fields default to the zero
            // UV, but a field that is present must resolve — the exported
            // format's UVs are addressed by these loops
            let uv = match indices.get(1).filter(|s| !s.is_empty()) {
                Some(field) => {
                    let tex_idx: usize = field.parse().map_err(|_| {
                        ObjError::ParseError("Invalid tex coord index".to_string())
                    })?;
                    let tex_idx = tex_idx.checked_sub(1).ok_or_else(|| {
                        ObjError::ParseError("Tex coord index is zero".to_string())
                    })?;
                    *tex_coords.get(tex_idx).ok_or_else(|| {
                        ObjError::InvalidFormat("Tex coord index out of bounds".to_string())
                    })?
                }
                None => [0.0, 0.0],
            };

            // Normal index if present
            if let Some(normal) = indices
                .get(2)
                .filter(|s| !s.is_empty())
                .and_then(|s| s.parse::<usize>().ok())
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| normals.get(i))
            {
                corner_normals.push(*normal);
            }

            loops.push(uv);
            #[allow(clippy::cast_possible_truncation)]
            {
                vertices.push(pos_idx as u32);
                loop_indices.push((loops.len() - 1) as u32);
            }
        }

        let normal = Self::face_normal(&vertices, &corner_normals, positions);
        Ok(Face::new(vertices, normal, loop_indices))
    }

    /// Average the corner normals when the document provides them,
    /// otherwise derive a geometric normal from the first three corners.
    fn face_normal(
        vertices: &[u32],
        corner_normals: &[[f32; 3]],
        positions: &[[f32; 3]],
    ) -> [f32; 3] {
        if !corner_normals.is_empty() {
            let sum: Vector3<f32> = corner_normals
                .iter()
                .map(|n| Vector3::from(*n))
                .sum::<Vector3<f32>>();
            if sum.norm() > f32::EPSILON {
                return (sum / sum.norm()).into();
            }
        }

        if vertices.len() >= 3 {
            if let Some(normal) = triangle_normal(
                positions[vertices[0] as usize],
                positions[vertices[1] as usize],
                positions[vertices[2] as usize],
            ) {
                return normal;
            }
        }

        // Default up vector, matching the loader's other fallbacks
        [0.0, 1.0, 0.0]
    }
}
