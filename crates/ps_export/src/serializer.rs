//! Geometry serializer for the `.ps` text format
//!
//! The format is four labeled blocks, each label on its own line, with no
//! header, counts, or footer — a reader consumes lines until the next known
//! label:
//!
//! ```text
//! vertices:
//! <x> <y> <z>                         one line per vertex
//! faces:
//! <i0> <i1> <i2>                      one line per triangle
//! normals:
//! <nx> <ny> <nz>                      one line per face, same order
//! textureCoordinates:
//! <faceIndex> <vertexIndex> <u> <v>   one line per face corner
//! ```
//!
//! Floats are written with 6 fractional digits, indices as plain integers.
//! Output is deterministic: the same mesh always serializes byte-for-byte
//! identically. Writes are incremental with no transactional wrapping, so a
//! failure mid-export can leave a partial file behind.

use crate::error::ExportError;
use crate::mesh::{Mesh, UvSource};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize `mesh` to `out`, reading UVs from `uvs`.
///
/// The mesh must already be triangulated (see
/// [`triangulated`](crate::triangulate::triangulated)); faces with more or
/// fewer than 3 corners are rejected rather than truncated, as are faces
/// whose vertex and loop index lists disagree in length.
///
/// # Errors
///
/// Fails on structural violations of the face invariant, on loop indices
/// with no UV entry, and on any write failure of the output stream.
pub fn export<W: Write>(mesh: &Mesh, uvs: &impl UvSource, out: &mut W) -> Result<(), ExportError> {
    for (index, face) in mesh.faces.iter().enumerate() {
        if !face.is_triangle() {
            return Err(ExportError::NotTriangulated {
                face: index,
                count: face.vertices.len(),
            });
        }
        if face.loop_indices.len() != face.vertices.len() {
            return Err(ExportError::LoopCountMismatch {
                face: index,
                vertices: face.vertices.len(),
                loops: face.loop_indices.len(),
            });
        }
    }

    write_vertices(mesh, out)?;
    write_faces_and_normals(mesh, out)?;
    write_texture_coordinates(mesh, uvs, out)?;

    info!(
        "exported {} vertices, {} faces",
        mesh.vertices.len(),
        mesh.faces.len()
    );
    Ok(())
}

/// Serialize `mesh` using its active UV layer.
///
/// # Errors
///
/// Fails with [`ExportError::MissingUvLayer`] when the mesh has no active
/// layer, and otherwise as [`export`] does.
pub fn export_with_active_uvs<W: Write>(mesh: &Mesh, out: &mut W) -> Result<(), ExportError> {
    let layer = mesh.active_uv_layer().ok_or(ExportError::MissingUvLayer)?;
    export(mesh, layer, out)
}

/// Serialize `mesh` to a file at `path` using its active UV layer.
///
/// The file is created, buffered, flushed, and closed within this call.
///
/// # Errors
///
/// Fails as [`export_with_active_uvs`] does, plus on file creation errors.
pub fn export_to_path<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<(), ExportError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    export_with_active_uvs(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn write_vertices<W: Write>(mesh: &Mesh, out: &mut W) -> Result<(), ExportError> {
    writeln!(out, "vertices:")?;
    for vertex in &mesh.vertices {
        writeln!(out, "{:.6} {:.6} {:.6}", vertex[0], vertex[1], vertex[2])?;
    }
    debug!("wrote {} vertex lines", mesh.vertices.len());
    Ok(())
}

// Faces and normals are two parallel blocks correlated by position only.
fn write_faces_and_normals<W: Write>(mesh: &Mesh, out: &mut W) -> Result<(), ExportError> {
    writeln!(out, "faces:")?;
    for face in &mesh.faces {
        writeln!(
            out,
            "{} {} {}",
            face.vertices[0], face.vertices[1], face.vertices[2]
        )?;
    }

    writeln!(out, "normals:")?;
    for face in &mesh.faces {
        writeln!(
            out,
            "{:.6} {:.6} {:.6}",
            face.normal[0], face.normal[1], face.normal[2]
        )?;
    }
    debug!("wrote {} face and normal lines", mesh.faces.len());
    Ok(())
}

fn write_texture_coordinates<W: Write>(
    mesh: &Mesh,
    uvs: &impl UvSource,
    out: &mut W,
) -> Result<(), ExportError> {
    writeln!(out, "textureCoordinates:")?;
    for (face_index, face) in mesh.faces.iter().enumerate() {
        for (&vertex, &loop_index) in face.vertices.iter().zip(&face.loop_indices) {
            let [u, v] = uvs
                .uv(loop_index)
                .ok_or(ExportError::MissingUv { loop_index })?;
            writeln!(out, "{face_index} {vertex} {u:.6} {v:.6}")?;
        }
    }
    Ok(())
}
