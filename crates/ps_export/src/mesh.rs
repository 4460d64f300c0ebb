//! Mesh snapshot model consumed by the exporter
//!
//! These types mirror what a host 3D application hands over for a single
//! export: vertex positions, faces carrying their own normal and loop
//! indices, and one or more UV layers addressed by loop index. The snapshot
//! is read-only for the duration of the export and is not persisted.
//!
//! A *loop index* points into a per-face-corner array rather than the vertex
//! array; the distinction matters because one vertex may carry different UVs
//! on each adjacent face.

/// A single polygon face of a mesh.
///
/// The face's index within the mesh is its position in [`Mesh::faces`].
/// `vertices` and `loop_indices` run in corresponding corner order; after
/// triangulation both have exactly 3 entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Vertex indices into [`Mesh::vertices`], in corner order
    pub vertices: Vec<u32>,
    /// Face normal
    pub normal: [f32; 3],
    /// Loop indices into the per-corner UV arrays, in corner order
    pub loop_indices: Vec<u32>,
}

impl Face {
    /// Create a face from its corner data
    pub fn new(vertices: Vec<u32>, normal: [f32; 3], loop_indices: Vec<u32>) -> Self {
        Self {
            vertices,
            normal,
            loop_indices,
        }
    }

    /// Whether this face has exactly 3 vertex indices
    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }
}

/// A named UV map whose entries are addressed by loop index.
#[derive(Debug, Clone, PartialEq)]
pub struct UvLayer {
    /// Layer name as reported by the host (e.g. `UVMap`)
    pub name: String,
    /// UV coordinates, one per mesh loop
    pub uvs: Vec<[f32; 2]>,
}

impl UvLayer {
    /// Create a layer from its loop-ordered UV data
    pub fn new(name: impl Into<String>, uvs: Vec<[f32; 2]>) -> Self {
        Self {
            name: name.into(),
            uvs,
        }
    }
}

/// Abstract UV-provider contract: look up the UV pair for a loop index.
///
/// The serializer only ever reads UVs through this trait, so a host can
/// supply its own layer representation without copying into [`UvLayer`].
pub trait UvSource {
    /// Return the `[u, v]` pair for `loop_index`, or `None` if the source
    /// has no entry for it.
    fn uv(&self, loop_index: u32) -> Option<[f32; 2]>;
}

impl UvSource for UvLayer {
    fn uv(&self, loop_index: u32) -> Option<[f32; 2]> {
        self.uvs.get(loop_index as usize).copied()
    }
}

/// Read-only mesh snapshot for one export call.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions in mesh order
    pub vertices: Vec<[f32; 3]>,
    /// Faces in mesh order
    pub faces: Vec<Face>,
    /// UV layers; entries are indexed by loop index
    pub uv_layers: Vec<UvLayer>,
    /// Index into [`Mesh::uv_layers`] of the currently active layer
    pub active_uv_layer: Option<usize>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// The single UV map selected as current, if any
    pub fn active_uv_layer(&self) -> Option<&UvLayer> {
        self.active_uv_layer
            .and_then(|index| self.uv_layers.get(index))
    }

    /// Whether every face already has exactly 3 vertices
    pub fn is_triangulated(&self) -> bool {
        self.faces.iter().all(Face::is_triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_uv_layer_resolves_selected_layer() {
        let mut mesh = Mesh::new();
        mesh.uv_layers.push(UvLayer::new("base", vec![[0.0, 0.0]]));
        mesh.uv_layers.push(UvLayer::new("lightmap", vec![[0.5, 0.5]]));
        mesh.active_uv_layer = Some(1);

        let layer = mesh.active_uv_layer().unwrap();
        assert_eq!(layer.name, "lightmap");
    }

    #[test]
    fn active_uv_layer_is_none_without_selection() {
        let mut mesh = Mesh::new();
        mesh.uv_layers.push(UvLayer::new("base", vec![]));
        assert!(mesh.active_uv_layer().is_none());
    }

    #[test]
    fn uv_source_lookup_is_bounds_checked() {
        let layer = UvLayer::new("base", vec![[0.25, 0.75]]);
        assert_eq!(layer.uv(0), Some([0.25, 0.75]));
        assert_eq!(layer.uv(1), None);
    }

    #[test]
    fn is_triangulated_detects_ngons() {
        let mut mesh = Mesh::new();
        mesh.vertices = vec![[0.0; 3]; 4];
        mesh.faces
            .push(Face::new(vec![0, 1, 2], [0.0, 0.0, 1.0], vec![0, 1, 2]));
        assert!(mesh.is_triangulated());

        mesh.faces
            .push(Face::new(vec![0, 1, 2, 3], [0.0, 0.0, 1.0], vec![3, 4, 5, 6]));
        assert!(!mesh.is_triangulated());
    }
}
