//! Network Loader Tests
//!
//! Tests verify:
//! - JSON parsing of vertices and edges
//! - Explicit vs distance-derived weights
//! - Directed vs bidirectional edges
//! - Error reporting for bad documents and files

use std::fs;

use citynet::loader::NetworkDescription;
use citynet::{CityError, Config, RouteEngine};
use tempfile::TempDir;

const NETWORK: &str = r#"{
    "vertices": [
        { "name": "ISB-01", "lat": 0.0, "lon": 0.0 },
        { "name": "ISB-02", "lat": 1.0, "lon": 0.0 },
        { "name": "DEPOT" }
    ],
    "edges": [
        { "from": "isb-01", "to": "isb-02" },
        { "from": "ISB-02", "to": "DEPOT", "weight": 2.5, "bidirectional": false }
    ]
}"#;

fn write_network(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("network.json");
    fs::write(&path, json).unwrap();
    path
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_description() {
    let description = NetworkDescription::from_json(NETWORK).unwrap();

    assert_eq!(description.vertices.len(), 3);
    assert_eq!(description.vertices[2].lat, None);
    assert_eq!(description.edges[0].weight, None);
    assert!(description.edges[0].bidirectional);
    assert!(!description.edges[1].bidirectional);
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(matches!(
        NetworkDescription::from_json("{ not json"),
        Err(CityError::Json(_))
    ));
}

// =============================================================================
// Build Tests
// =============================================================================

#[test]
fn test_build_derives_missing_weights() {
    let graph = NetworkDescription::from_json(NETWORK)
        .unwrap()
        .build(&Config::default())
        .unwrap();

    let derived = graph.get_edge_weight("ISB-01", "ISB-02").unwrap();
    assert!((derived - 111.19).abs() < 0.01);
    assert_eq!(graph.get_edge_weight("ISB-02", "ISB-01"), Some(derived));
}

#[test]
fn test_build_respects_directed_edges() {
    let graph = NetworkDescription::from_json(NETWORK)
        .unwrap()
        .build(&Config::default())
        .unwrap();

    assert_eq!(graph.get_edge_weight("ISB-02", "DEPOT"), Some(2.5));
    assert_eq!(graph.get_edge_weight("DEPOT", "ISB-02"), None);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_derived_weight_needs_coordinates() {
    let json = r#"{
        "vertices": [{ "name": "A", "lat": 0, "lon": 0 }, { "name": "B" }],
        "edges": [{ "from": "A", "to": "B" }]
    }"#;

    let result = NetworkDescription::from_json(json)
        .unwrap()
        .build(&Config::default());
    assert!(matches!(result, Err(CityError::Unplaced(name)) if name == "B"));
}

#[test]
fn test_half_placed_vertex_is_rejected() {
    let json = r#"{ "vertices": [{ "name": "a", "lat": 1.0 }] }"#;

    let result = NetworkDescription::from_json(json)
        .unwrap()
        .build(&Config::default());
    assert!(matches!(result, Err(CityError::Config(msg)) if msg.contains("vertex a ")));
}

#[test]
fn test_edge_to_unknown_vertex_is_rejected() {
    let json = r#"{
        "vertices": [{ "name": "A" }],
        "edges": [{ "from": "A", "to": "Z", "weight": 1 }]
    }"#;

    let result = NetworkDescription::from_json(json)
        .unwrap()
        .build(&Config::default());
    assert!(matches!(result, Err(CityError::VertexNotFound(name)) if name == "Z"));
}

#[test]
fn test_duplicate_vertex_in_description() {
    let json = r#"{ "vertices": [{ "name": "stop" }, { "name": "STOP" }] }"#;

    let result = NetworkDescription::from_json(json)
        .unwrap()
        .build(&Config::default());
    assert!(matches!(result, Err(CityError::DuplicateVertex(_))));
}

#[test]
fn test_description_larger_than_capacity() {
    let json = r#"{ "vertices": [{ "name": "a" }, { "name": "b" }, { "name": "c" }] }"#;
    let config = Config::builder().graph_capacity(2).build();

    let result = NetworkDescription::from_json(json).unwrap().build(&config);
    assert!(matches!(result, Err(CityError::CapacityExceeded { capacity: 2, .. })));
}

// =============================================================================
// File Tests
// =============================================================================

#[test]
fn test_engine_loads_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_network(&dir, NETWORK);

    let mut engine = RouteEngine::load(&path, Config::default()).unwrap();
    let route = engine.shortest_route("isb-01", "depot").unwrap();

    assert_eq!(route.stops, vec!["ISB-01", "ISB-02", "DEPOT"]);
    assert!(engine.shortest_route("depot", "isb-01").is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    assert!(matches!(
        RouteEngine::load(&path, Config::default()),
        Err(CityError::Io(_))
    ));
}
