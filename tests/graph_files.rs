use std::path::{Path, PathBuf};

use planarmap::{
    build, face_neighbor_layers, face_neighbors, face_polylines, locate_point, read_raw_graph,
    read_serialized_graph, write_serialized_graph, DcelError, Location,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

#[test]
fn build_write_read_query() {
    let raw = read_raw_graph(&fixture("two_squares.raw.json")).unwrap();
    let graph = build(&raw).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    write_serialized_graph(&path, &graph).unwrap();
    let reloaded = read_serialized_graph(&path).unwrap();
    assert_eq!(reloaded, graph);

    assert_eq!(locate_point(&reloaded, [0.5, 0.5]).unwrap(), Location::Face("p0".into()));
    assert_eq!(face_neighbors(&reloaded, "p0").unwrap().neighbors, vec!["p1"]);
    assert_eq!(face_neighbor_layers(&reloaded, 0usize).unwrap(), vec![vec!["p0"], vec!["p1"]]);
}

#[test]
fn written_graph_uses_faces_key() {
    let graph = build(&read_raw_graph(&fixture("two_squares.raw.json")).unwrap()).unwrap();
    let file = tempfile::NamedTempFile::new().unwrap();
    write_serialized_graph(file.path(), &graph).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["faces"], serde_json::json!([[1, 11, 9, 13], [3, 12, 7, 5]]));
    assert!(json.get("polygons").is_none());
}

#[test]
fn legacy_polygons_key_loads() {
    let graph = read_serialized_graph(&fixture("triangle.polygons.json")).unwrap();
    assert_eq!(graph.faces, vec![vec![1, 5, 3]]);
    assert_eq!(locate_point(&graph, [1.0, 1.0]).unwrap().to_string(), "p0");
    assert_eq!(locate_point(&graph, [2.0, 0.0]).unwrap(), Location::NoFace);
    assert_eq!(face_polylines(&graph).unwrap(), vec!["4,0 0,0 0,4"]);
}

#[test]
fn raw_graph_is_rejected_where_faces_are_expected() {
    let err = read_serialized_graph(&fixture("two_squares.raw.json")).unwrap_err();
    assert!(format!("{err:#}").contains("faces"), "{err:#}");
}

#[test]
fn bad_face_reference_surfaces_typed_error() {
    let graph = read_serialized_graph(&fixture("bad_face.json")).unwrap();
    let err = locate_point(&graph, [1.0, 1.0]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DcelError>(),
        Some(DcelError::InvalidHalfEdge { face: 0, half_edge: 30, count: 6 }),
    ));
}

#[test]
fn missing_file_names_the_path() {
    let err = read_raw_graph(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
