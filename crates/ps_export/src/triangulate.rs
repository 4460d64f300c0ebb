//! Fan triangulation of quads and n-gons
//!
//! The serializer requires every face to have exactly 3 corners. Hosts that
//! hand over quads or n-gons run this pass first; it splits each polygon
//! into a triangle fan anchored at the first corner, carrying the matching
//! loop indices so UV addressing survives the split.

use crate::error::ExportError;
use crate::mesh::{Face, Mesh};
use nalgebra::Vector3;

/// Geometric normal of a triangle, or `None` if it is degenerate.
pub(crate) fn triangle_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Option<[f32; 3]> {
    let a = Vector3::from(a);
    let b = Vector3::from(b);
    let c = Vector3::from(c);
    let normal = (b - a).cross(&(c - a));
    let length = normal.norm();
    if length > f32::EPSILON {
        Some((normal / length).into())
    } else {
        None
    }
}

/// Return a copy of `mesh` in which every face is a triangle.
///
/// Triangle faces pass through unchanged. Quads and n-gons are split
/// fan-wise into `(c0, ci, ci+1)` triangles; each new triangle's normal is
/// recomputed from its vertex positions, falling back to the source
/// polygon's normal when the triangle is degenerate.
///
/// # Errors
///
/// Fails on faces with fewer than 3 corners, mismatched vertex/loop index
/// list lengths, or vertex indices outside the mesh.
pub fn triangulated(mesh: &Mesh) -> Result<Mesh, ExportError> {
    let mut faces = Vec::with_capacity(mesh.faces.len());

    for (index, face) in mesh.faces.iter().enumerate() {
        if face.vertices.len() != face.loop_indices.len() {
            return Err(ExportError::LoopCountMismatch {
                face: index,
                vertices: face.vertices.len(),
                loops: face.loop_indices.len(),
            });
        }
        if face.vertices.len() < 3 {
            return Err(ExportError::DegenerateFace {
                face: index,
                count: face.vertices.len(),
            });
        }
        for &vertex in &face.vertices {
            if vertex as usize >= mesh.vertices.len() {
                return Err(ExportError::VertexIndexOutOfBounds {
                    vertex,
                    len: mesh.vertices.len(),
                });
            }
        }

        if face.is_triangle() {
            faces.push(face.clone());
            continue;
        }

        for i in 1..face.vertices.len() - 1 {
            let corners = vec![face.vertices[0], face.vertices[i], face.vertices[i + 1]];
            let loops = vec![
                face.loop_indices[0],
                face.loop_indices[i],
                face.loop_indices[i + 1],
            ];
            let normal = triangle_normal(
                mesh.vertices[corners[0] as usize],
                mesh.vertices[corners[1] as usize],
                mesh.vertices[corners[2] as usize],
            )
            .unwrap_or(face.normal);
            faces.push(Face::new(corners, normal, loops));
        }
    }

    Ok(Mesh {
        vertices: mesh.vertices.clone(),
        faces,
        uv_layers: mesh.uv_layers.clone(),
        active_uv_layer: mesh.active_uv_layer,
    })
}
