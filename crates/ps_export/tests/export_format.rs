//! End-to-end checks of the `.ps` output format: block structure, line
//! counts, ordering, and file round-trips through the OBJ provider.

use ps_export::{export_to_path, triangulated, Face, Mesh, ObjLoader, UvLayer};
use std::collections::HashSet;
use std::io::Cursor;

/// Split exported text into (label, data lines) sections.
fn sections(text: &str) -> Vec<(String, Vec<String>)> {
    let labels = ["vertices:", "faces:", "normals:", "textureCoordinates:"];
    let mut result: Vec<(String, Vec<String>)> = Vec::new();
    for line in text.lines() {
        if labels.contains(&line) {
            result.push((line.to_string(), Vec::new()));
        } else {
            result
                .last_mut()
                .expect("data line before any label")
                .1
                .push(line.to_string());
        }
    }
    result
}

fn cube_like_mesh() -> Mesh {
    let mut mesh = Mesh::new();
    mesh.vertices = vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.5, 0.5, 1.0],
    ];
    // One quad and one triangle; loop indices run densely in corner order
    mesh.faces
        .push(Face::new(vec![0, 1, 2, 3], [0.0, 0.0, -1.0], vec![0, 1, 2, 3]));
    mesh.faces
        .push(Face::new(vec![0, 1, 4], [0.0, -1.0, 0.0], vec![4, 5, 6]));
    mesh.uv_layers.push(UvLayer::new(
        "UVMap",
        vec![
            [0.0, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
            [0.0, 1.0],
            [0.0, 0.0],
            [1.0, 0.0],
            [0.5, 1.0],
        ],
    ));
    mesh.active_uv_layer = Some(0);
    mesh
}

fn export_to_string(mesh: &Mesh) -> String {
    let mut out = Vec::new();
    ps_export::export_with_active_uvs(mesh, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn blocks_have_expected_line_counts() {
    let mesh = triangulated(&cube_like_mesh()).unwrap();
    let text = export_to_string(&mesh);
    let sections = sections(&text);

    let vertex_count = mesh.vertices.len();
    let face_count = mesh.faces.len();
    assert_eq!(face_count, 3); // quad split into 2, plus the triangle

    assert_eq!(sections[0].0, "vertices:");
    assert_eq!(sections[0].1.len(), vertex_count);
    assert_eq!(sections[1].0, "faces:");
    assert_eq!(sections[1].1.len(), face_count);
    assert_eq!(sections[2].0, "normals:");
    assert_eq!(sections[2].1.len(), face_count);
    assert_eq!(sections[3].0, "textureCoordinates:");
    assert_eq!(sections[3].1.len(), 3 * face_count);
}

#[test]
fn vertex_lines_round_trip_to_source_coordinates() {
    let mesh = triangulated(&cube_like_mesh()).unwrap();
    let text = export_to_string(&mesh);
    let sections = sections(&text);

    for (line, expected) in sections[0].1.iter().zip(&mesh.vertices) {
        let parsed: Vec<f32> = line
            .split(' ')
            .map(|field| field.parse().expect("unparseable coordinate"))
            .collect();
        assert_eq!(parsed.len(), 3);
        for (got, want) in parsed.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6);
        }
    }
}

#[test]
fn face_lines_are_three_integers_in_range() {
    let mesh = triangulated(&cube_like_mesh()).unwrap();
    let text = export_to_string(&mesh);
    let sections = sections(&text);

    for line in &sections[1].1 {
        let indices: Vec<usize> = line
            .split(' ')
            .map(|field| field.parse().expect("unparseable index"))
            .collect();
        assert_eq!(indices.len(), 3);
        for index in indices {
            assert!(index < mesh.vertices.len());
        }
    }
}

#[test]
fn texture_coordinate_pairs_are_unique_and_in_range() {
    let mesh = triangulated(&cube_like_mesh()).unwrap();
    let text = export_to_string(&mesh);
    let sections = sections(&text);
    let face_count = mesh.faces.len();

    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    for line in &sections[3].1 {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 4);

        let face_index: usize = fields[0].parse().unwrap();
        let vertex_index: usize = fields[1].parse().unwrap();
        let _u: f32 = fields[2].parse().unwrap();
        let _v: f32 = fields[3].parse().unwrap();

        assert!(face_index < face_count);
        assert!(seen.insert((face_index, vertex_index)), "duplicate pair");
    }
}

#[test]
fn zero_face_mesh_exports_empty_trailing_blocks() {
    let mut mesh = Mesh::new();
    mesh.vertices = vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    mesh.uv_layers.push(UvLayer::new("UVMap", vec![]));
    mesh.active_uv_layer = Some(0);

    let sections = sections(&export_to_string(&mesh));
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[0].1.len(), 2);
    assert!(sections[1].1.is_empty());
    assert!(sections[2].1.is_empty());
    assert!(sections[3].1.is_empty());
}

#[test]
fn obj_document_exports_through_the_full_pipeline() {
    let doc = "\
        v 0.0 0.0 0.0\n\
        v 1.0 0.0 0.0\n\
        v 1.0 1.0 0.0\n\
        v 0.0 1.0 0.0\n\
        vt 0.0 0.0\n\
        vt 1.0 0.0\n\
        vt 1.0 1.0\n\
        vt 0.0 1.0\n\
        vn 0.0 0.0 1.0\n\
        f 1/1/1 2/2/1 3/3/1 4/4/1\n";

    let mesh = ObjLoader::read_obj(Cursor::new(doc)).unwrap();
    let mesh = triangulated(&mesh).unwrap();
    let text = export_to_string(&mesh);
    let sections = sections(&text);

    assert_eq!(sections[0].1.len(), 4);
    assert_eq!(sections[1].1.len(), 2);
    assert_eq!(sections[1].1[0], "0 1 2");
    assert_eq!(sections[1].1[1], "0 2 3");
    assert_eq!(sections[3].1.len(), 6);
    // Corner UVs survive the split through the shared loop array
    assert_eq!(sections[3].1[0], "0 0 0.000000 0.000000");
    assert_eq!(sections[3].1[5], "1 3 0.000000 1.000000");
}

#[test]
fn export_to_path_writes_the_same_bytes_as_a_buffer() {
    let mesh = triangulated(&cube_like_mesh()).unwrap();
    let expected = export_to_string(&mesh);

    let path = std::env::temp_dir().join(format!("ps_export_it_{}.ps", std::process::id()));
    export_to_path(&mesh, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(written, expected);
}
