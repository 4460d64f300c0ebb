//! Error types for the export pipeline

use thiserror::Error;

/// Errors raised while serializing a mesh to the `.ps` format.
///
/// None of these are recovered from: the export is a single operation that
/// either completes or fails, and a failure after writing has begun may
/// leave a partial file behind.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO failure on the output stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A face still has more (or fewer) than 3 vertices
    #[error("face {face} has {count} vertices; mesh must be triangulated before export")]
    NotTriangulated {
        /// Index of the offending face
        face: usize,
        /// Number of vertex indices on that face
        count: usize,
    },

    /// A face's vertex-index and loop-index lists differ in length
    #[error("face {face} has {vertices} vertex indices but {loops} loop indices")]
    LoopCountMismatch {
        /// Index of the offending face
        face: usize,
        /// Length of the vertex-index list
        vertices: usize,
        /// Length of the loop-index list
        loops: usize,
    },

    /// A face references fewer than 3 corners
    #[error("face {face} is degenerate with only {count} corners")]
    DegenerateFace {
        /// Index of the offending face
        face: usize,
        /// Number of corners on that face
        count: usize,
    },

    /// A face references a vertex the mesh does not have
    #[error("vertex index {vertex} is out of bounds for a mesh of {len} vertices")]
    VertexIndexOutOfBounds {
        /// The offending vertex index
        vertex: u32,
        /// Number of vertices in the mesh
        len: usize,
    },

    /// A loop index has no entry in the UV source
    #[error("loop index {loop_index} has no UV coordinate in the active layer")]
    MissingUv {
        /// The loop index with no UV entry
        loop_index: u32,
    },

    /// The mesh exposes no active UV layer
    #[error("mesh has no active UV layer")]
    MissingUvLayer,
}
