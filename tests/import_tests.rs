use std::io::Write;
use stella::config::{GraphConfig, Layout};
use stella::graph::{AdjacencyList, AdjacencyMatrix, DirectedAdjacencyList, GraphStore, Inspect};
use stella::import::{build, load_into, GraphDescription, Importer};
use stella::Error;
use tempfile::NamedTempFile;

const K4: &str = r#"{
    "nodes": ["A", "B", "C", "D"],
    "edges": [
        {"label": "ab", "n1": "A", "n2": "B", "weight": 4},
        {"label": "ac", "n1": "A", "n2": "C"},
        {"label": "ad", "n1": "A", "n2": "D", "weight": 0},
        {"label": "bc", "n1": "B", "n2": "C", "weight": 2},
        {"label": "bd", "n1": "B", "n2": "D"},
        {"label": "cd", "n1": "C", "n2": "D", "weight": 7}
    ]
}"#;

#[test]
fn test_loaded_graph_matches_hand_built() {
    let desc: GraphDescription = K4.parse().unwrap();
    let loaded: AdjacencyList = build(&desc).unwrap();

    let mut manual = AdjacencyList::new();
    for label in ["A", "B", "C", "D"] {
        manual.add_node(label).unwrap();
    }
    manual.add_edge_between("ab", "A", "B", 4).unwrap();
    manual.add_unit_edge("ac", "A", "C").unwrap();
    manual.add_unit_edge("ad", "D", "A").unwrap();
    manual.add_edge_between("bc", "C", "B", 2).unwrap();
    manual.add_unit_edge("bd", "B", "D").unwrap();
    manual.add_edge_between("cd", "C", "D", 7).unwrap();

    assert_eq!(loaded, manual);
    assert_eq!(loaded.get_edge("ad").unwrap().weight(), 1);
    assert!(loaded.is_complete());

    let matrix: AdjacencyMatrix = build(&desc).unwrap();
    assert!(matrix.structurally_eq(&loaded));
}

#[test]
fn test_nodes_loaded_before_edges() {
    // 边引用了排在后面的节点，仍然可以载入
    let desc: GraphDescription =
        r#"{"edges": [{"label": "e1", "n1": "A", "n2": "B"}], "nodes": ["A", "B"]}"#
            .parse()
            .unwrap();
    let g: DirectedAdjacencyList = build(&desc).unwrap();
    assert_eq!(g.edges_between("A", "B").len(), 1);
}

#[test]
fn test_load_into_existing_graph() {
    let mut g = AdjacencyMatrix::new();
    g.add_node("Z").unwrap();

    let desc: GraphDescription = K4.parse().unwrap();
    let stats = load_into(&mut g, &desc).unwrap();
    assert_eq!(stats.nodes_imported, 4);
    assert_eq!(stats.edges_imported, 6);
    assert_eq!(g.node_count(), 5);
    assert_eq!(g.non_adjacent_pairs().len(), 4);
}

#[test]
fn test_importer_with_config_file() {
    let mut config_file = NamedTempFile::new().unwrap();
    write!(config_file, r#"{{"layout": "matrix", "directed": false}}"#).unwrap();
    let mut desc_file = NamedTempFile::new().unwrap();
    write!(desc_file, "{}", K4).unwrap();

    let config = GraphConfig::from_path(config_file.path()).unwrap();
    assert_eq!(config.layout, Layout::Matrix);

    let (graph, stats) = Importer::new(config).import_path(desc_file.path()).unwrap();
    assert_eq!(graph.kind_name(), "AdjacencyMatrix");
    assert_eq!(stats.edges_imported, 6);
    assert_eq!(graph.degree("A").unwrap(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = GraphDescription::from_path("/nonexistent/stella.json").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
