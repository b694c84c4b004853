use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use stella::graph::{
    AdjacencyList, AdjacencyMatrix, DirectedAdjacencyList, DirectedAdjacencyMatrix, DirectedEdge,
    Edge, GraphStore, Node,
};
use stella::Error;

fn random_labels(rng: &mut StdRng, count: usize) -> Vec<String> {
    let mut labels: Vec<String> = (0..count).map(|i| format!("n{}", i)).collect();
    labels.shuffle(rng);
    labels
}

fn check_node_insertion<G: GraphStore + Default>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = rng.gen_range(1..40);
    let labels = random_labels(&mut rng, count);

    let mut g = G::default();
    for label in &labels {
        g.add_node(label.as_str()).unwrap();
        assert_eq!(g.get_node(label).unwrap().label(), label);
    }

    let taken = labels.choose(&mut rng).unwrap();
    let err = g.add_node(Node::new(taken.clone())).unwrap_err();
    assert!(matches!(err, Error::DuplicateLabel { .. }));
    assert_eq!(g.node_count(), labels.len());

    let order: Vec<&str> = g.get_all_nodes().iter().map(|n| n.label()).collect();
    assert_eq!(order, labels.iter().map(String::as_str).collect::<Vec<_>>());
}

fn check_edge_insertion<G: GraphStore + Default>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let labels = random_labels(&mut rng, 12);

    let mut g = G::default();
    for label in &labels {
        g.add_node(label.as_str()).unwrap();
    }

    for i in 0..30 {
        let a = labels.choose(&mut rng).unwrap();
        let b = labels.choose(&mut rng).unwrap();
        let w: i64 = rng.gen_range(-10..100);
        let label = format!("e{}", i);

        g.add_edge_between(&label, a, b, w).unwrap();
        let e = g.get_edge(&label).unwrap();
        assert_eq!(e.weight(), w);
        assert_eq!(e.n1().label(), a);
        assert_eq!(e.n2().label(), b);
    }
    assert_eq!(g.edge_count(), 30);
    assert_eq!(g.edges().len(), 30);

    let before = g.edge_count();
    let err = g.add_unit_edge("missing", &labels[0], "nowhere").unwrap_err();
    assert!(matches!(err, Error::UnknownNode { .. }));
    assert_eq!(g.edge_count(), before);
    assert!(g.get_edge("missing").is_none());
}

fn check_round_trip<G: GraphStore + Default>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let labels = random_labels(&mut rng, 8);
    let edges: Vec<(String, String, String, i64)> = (0..15)
        .map(|i| {
            (
                format!("e{}", i),
                labels.choose(&mut rng).unwrap().clone(),
                labels.choose(&mut rng).unwrap().clone(),
                rng.gen_range(1..10),
            )
        })
        .collect();

    let build = || {
        let mut g = G::default();
        for label in &labels {
            g.add_node(label.as_str()).unwrap();
        }
        for (label, a, b, w) in &edges {
            g.add_edge_between(label, a, b, *w).unwrap();
        }
        g
    };

    assert!(build().structurally_eq(&build()));
}

#[test]
fn test_node_insertion_all_stores() {
    for seed in 0..8 {
        check_node_insertion::<AdjacencyList>(seed);
        check_node_insertion::<DirectedAdjacencyList>(seed);
        check_node_insertion::<AdjacencyMatrix>(seed);
        check_node_insertion::<DirectedAdjacencyMatrix>(seed);
    }
}

#[test]
fn test_edge_insertion_all_stores() {
    for seed in 0..8 {
        check_edge_insertion::<AdjacencyList>(seed);
        check_edge_insertion::<DirectedAdjacencyList>(seed);
        check_edge_insertion::<AdjacencyMatrix>(seed);
        check_edge_insertion::<DirectedAdjacencyMatrix>(seed);
    }
}

#[test]
fn test_round_trip_equality_all_stores() {
    for seed in 0..4 {
        check_round_trip::<AdjacencyList>(seed);
        check_round_trip::<DirectedAdjacencyList>(seed);
        check_round_trip::<AdjacencyMatrix>(seed);
        check_round_trip::<DirectedAdjacencyMatrix>(seed);
    }
}

#[test]
fn test_equality_ignores_capacity() {
    let mut small = AdjacencyList::new();
    let mut large = AdjacencyList::with_capacity(128, 128);
    for g in [&mut small, &mut large] {
        g.add_node("A").unwrap();
        g.add_node("B").unwrap();
        g.add_edge_between("e1", "A", "B", 3).unwrap();
    }
    assert_eq!(small, large);
}

#[test]
fn test_edge_equality_semantics() {
    let mut rng = StdRng::seed_from_u64(7);
    let labels = random_labels(&mut rng, 6);
    for a in &labels {
        for b in &labels {
            let w = rng.gen_range(0..5);
            assert_eq!(
                Edge::with_weight("e", a.as_str(), b.as_str(), w),
                Edge::with_weight("e2", b.as_str(), a.as_str(), w)
            );

            let forward = DirectedEdge::new("e", a.as_str(), b.as_str());
            let backward = DirectedEdge::new("e2", b.as_str(), a.as_str());
            assert_eq!(forward == backward, a == b);
        }
    }
}

#[test]
fn test_triangular_growth_invariant() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        let n = rng.gen_range(1..30);
        let mut m = AdjacencyMatrix::new();
        for label in random_labels(&mut rng, n) {
            m.add_node(label).unwrap();
        }
        let rows = m.get_all_edges();
        assert_eq!(rows.len(), n);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), i + 1);
        }
    }
}

#[test]
fn test_list_scenario() {
    let mut g = AdjacencyList::new();
    g.add_node("A").unwrap();
    g.add_node("B").unwrap();
    g.add_node("C").unwrap();
    g.add_edge_between("e1", "A", "B", 5).unwrap();

    let labels: Vec<&str> = g.get_all_nodes().iter().map(|n| n.label()).collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
    assert_eq!(g.get_edge("e1").unwrap().weight(), 5);
    assert!(g.get_node("D").is_none());
}

#[test]
fn test_directed_matrix_scenario() {
    let mut g = DirectedAdjacencyMatrix::new();
    g.add_node("X").unwrap();
    g.add_node("Y").unwrap();
    g.add_edge(DirectedEdge::with_weight("d1", "X", "Y", 2)).unwrap();

    let x = g.node_index("X").unwrap().index();
    let y = g.node_index("Y").unwrap().index();
    assert!(g.cell(x, y).unwrap().contains_key("d1"));
    assert!(g.cell(y, x).unwrap().is_empty());
}

#[test]
fn test_undirected_matrix_counts_each_edge_once() {
    let mut g = AdjacencyMatrix::new();
    for label in ["A", "B", "C"] {
        g.add_node(label).unwrap();
    }
    g.add_unit_edge("ab", "A", "B").unwrap();
    g.add_unit_edge("ba", "B", "A").unwrap();
    g.add_unit_edge("aa", "A", "A").unwrap();
    g.add_unit_edge("cc", "C", "C").unwrap();

    let mut labels: Vec<&str> = g.edges().iter().map(|e| e.label()).collect();
    labels.sort_unstable();
    assert_eq!(labels, vec!["aa", "ab", "ba", "cc"]);
    assert_eq!(g.edges_between("A", "B").len(), 2);
}

#[test]
fn test_list_and_matrix_agree() {
    let mut list = AdjacencyList::new();
    let mut matrix = AdjacencyMatrix::new();
    for label in ["A", "B", "C", "D"] {
        list.add_node(label).unwrap();
        matrix.add_node(label).unwrap();
    }
    for (label, a, b) in [("e1", "A", "B"), ("e2", "C", "A"), ("e3", "D", "D")] {
        list.add_unit_edge(label, a, b).unwrap();
        matrix.add_unit_edge(label, b, a).unwrap();
    }

    assert!(list.structurally_eq(&matrix));
    assert!(matrix.structurally_eq(&list));

    matrix.add_unit_edge("e4", "B", "C").unwrap();
    assert!(!list.structurally_eq(&matrix));
}
