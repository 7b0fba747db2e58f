use routes_core::graph::{DirectedGraph, GraphError};

#[test]
fn test_new_graph_has_no_edges() {
    let g = DirectedGraph::new(4);
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 0);
    assert!((0..4).all(|v| g.successors(v).unwrap().is_empty()));
}

#[test]
fn test_empty_graph() {
    let g = DirectedGraph::new(0);
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.transpose(), g);
    assert!(g.reachable_from(0).is_err());
}

#[test]
fn test_successors_out_of_range() {
    let g = DirectedGraph::new(2);
    assert_eq!(
        g.successors(2),
        Err(GraphError::IndexOutOfRange {
            index: 2,
            vertex_count: 2
        })
    );
}

#[test]
fn test_add_edge_appends_in_order() {
    let mut g = DirectedGraph::new(3);
    g.add_edge(0, 2).unwrap();
    g.add_edge(0, 1).unwrap();
    g.add_edge(0, 2).unwrap();

    assert_eq!(g.successors(0).unwrap(), &[2, 1, 2]);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn test_add_edge_rejects_out_of_range_source() {
    let mut g = DirectedGraph::new(3);
    assert_eq!(
        g.add_edge(3, 0),
        Err(GraphError::IndexOutOfRange {
            index: 3,
            vertex_count: 3
        })
    );
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_add_edge_rejects_out_of_range_target() {
    let mut g = DirectedGraph::new(3);
    let err = g.add_edge(0, 3).unwrap_err();
    assert!(matches!(err, GraphError::IndexOutOfRange { index: 3, .. }));
    // Storage must not grow to fit the bad index.
    assert_eq!(g.vertex_count(), 3);
    assert!(g.successors(0).unwrap().is_empty());
}

#[test]
fn test_error_messages() {
    let err = GraphError::IndexOutOfRange {
        index: 7,
        vertex_count: 5,
    };
    assert_eq!(
        err.to_string(),
        "vertex 7 out of range for graph with 5 vertices"
    );
    assert!(
        GraphError::StartVertexNotFound(2)
            .to_string()
            .contains("start vertex 2")
    );
}

#[test]
fn test_transpose_reverses_every_edge() {
    let mut g = DirectedGraph::new(3);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(0, 2).unwrap();

    let t = g.transpose();
    let mut edges: Vec<(usize, usize)> = t.edges().collect();
    edges.sort_unstable();
    assert_eq!(edges, vec![(1, 0), (2, 0), (2, 1)]);

    // Receiver is untouched.
    assert_eq!(g.successors(0).unwrap(), &[1, 2]);
    assert_eq!(t.transpose().edge_count(), g.edge_count());
}

#[test]
fn test_transpose_keeps_duplicates() {
    let mut g = DirectedGraph::new(2);
    g.add_edge(0, 1).unwrap();
    g.add_edge(0, 1).unwrap();
    assert_eq!(g.transpose().successors(1).unwrap(), &[0, 0]);
}

#[test]
fn test_reachable_from() {
    let mut g = DirectedGraph::new(5);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 0).unwrap();
    g.add_edge(3, 0).unwrap();

    let seen = g.reachable_from(1).unwrap();
    assert_eq!(seen, vec![true, true, true, false, false]);
}

#[test]
fn test_edges_iterator_matches_adjacency() {
    let mut g = DirectedGraph::new(3);
    g.add_edge(2, 0).unwrap();
    g.add_edge(0, 1).unwrap();
    let edges: Vec<(usize, usize)> = g.edges().collect();
    assert_eq!(edges, vec![(0, 1), (2, 0)]);
}
