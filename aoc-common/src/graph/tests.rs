//! Tests for the adjacency list.

use super::*;
use crate::error::GraphError;

fn chain(len: usize) -> (AdjacencyList<usize>, Vec<Vertex<usize>>) {
    let mut graph = AdjacencyList::new();
    let vertices: Vec<_> = (0..len).map(|i| graph.create_vertex(i * 10)).collect();
    for pair in vertices.windows(2) {
        graph.add_directed_edge(&pair[0], &pair[1], None).unwrap();
    }
    (graph, vertices)
}

#[test]
fn test_vertex_indices_are_sequential() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex('a');
    let b = graph.create_vertex('b');
    assert_eq!((a.index(), b.index()), (0, 1));
    assert_eq!(b.data(), &'b');
    assert_eq!(graph.vertex(1), Some(&b));
    assert_eq!(graph.vertex_count(), 2);
    assert!(graph.contains(&a));
}

#[test]
fn test_duplicate_edges_are_ignored() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex("a");
    let b = graph.create_vertex("b");
    assert_eq!(graph.add_directed_edge(&a, &b, Some(3)), Ok(true));
    assert_eq!(graph.add_directed_edge(&a, &b, Some(3)), Ok(false));
    // A different weight is a different edge.
    assert_eq!(graph.add_directed_edge(&a, &b, None), Ok(true));
    assert_eq!(graph.edge_count(), 2);

    let weights: Vec<Option<i64>> = graph.edges(&a).unwrap().iter().map(Edge::weight).collect();
    assert_eq!(weights, vec![Some(3), None]);
    assert!(graph.edges(&b).unwrap().is_empty());
}

#[test]
fn test_foreign_vertices_are_rejected() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex(1);

    let mut other = AdjacencyList::new();
    other.create_vertex(1);
    let stranger = other.create_vertex(2);

    assert_eq!(
        graph.add_directed_edge(&a, &stranger, None),
        Err(GraphError::VertexNotFound(1))
    );
    assert_eq!(graph.get_cycle(&stranger), Err(GraphError::VertexNotFound(1)));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_three_cycle_is_found() {
    let (mut graph, v) = chain(3);
    graph.add_directed_edge(&v[2], &v[0], None).unwrap();

    let cycle = graph.get_cycle(&v[0]).unwrap().unwrap();
    assert_eq!(cycle, v);
    // Starting elsewhere on the cycle finds it too.
    assert_eq!(graph.get_cycle(&v[1]).unwrap().map(|c| c.len()), Some(3));
}

#[test]
fn test_acyclic_chain_has_no_cycle() {
    let (graph, v) = chain(3);
    assert_eq!(graph.get_cycle(&v[0]), Ok(None));
}

#[test]
fn test_diamond_is_not_a_cycle() {
    let mut graph = AdjacencyList::new();
    let [a, b, c, d] = ["a", "b", "c", "d"].map(|name| graph.create_vertex(name));
    graph.add_directed_edge(&a, &b, None).unwrap();
    graph.add_directed_edge(&a, &c, None).unwrap();
    graph.add_directed_edge(&b, &d, None).unwrap();
    graph.add_directed_edge(&c, &d, None).unwrap();
    assert_eq!(graph.get_cycle(&a), Ok(None));
}

#[test]
fn test_cycle_result_includes_exhausted_branches() {
    let mut graph = AdjacencyList::new();
    let [a, b, c, d] = [0, 1, 2, 3].map(|n| graph.create_vertex(n));
    graph.add_directed_edge(&a, &b, None).unwrap();
    graph.add_directed_edge(&a, &c, None).unwrap();
    graph.add_directed_edge(&c, &d, None).unwrap();
    graph.add_directed_edge(&d, &c, None).unwrap();

    let visited = graph.get_cycle(&a).unwrap().unwrap();
    assert_eq!(visited, vec![a, b, c, d]);
}

#[test]
fn test_self_loop() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex(());
    graph.add_directed_edge(&a, &a, None).unwrap();
    assert_eq!(graph.get_cycle(&a), Ok(Some(vec![a])));
}

#[test]
fn test_cycle_not_reachable_from_start() {
    let (mut graph, v) = chain(4);
    graph.add_directed_edge(&v[3], &v[2], None).unwrap();
    assert!(graph.get_cycle(&v[0]).unwrap().is_some());

    let lonely = graph.create_vertex(99);
    assert_eq!(graph.get_cycle(&lonely), Ok(None));
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let (mut graph, v) = chain(100_000);
    assert_eq!(graph.get_cycle(&v[0]), Ok(None));
    graph
        .add_directed_edge(&v[99_999], &v[50_000], None)
        .unwrap();
    assert_eq!(graph.get_cycle(&v[0]).unwrap().map(|c| c.len()), Some(100_000));
}

#[test]
fn test_prune_is_single_pass() {
    let (mut graph, v) = chain(3);

    let removed = graph.prune_graph();
    assert_eq!(removed, vec![v[2].clone()]);
    assert!(!graph.contains(&v[2]));
    // v[1] lost its only edge but survives until the next pass.
    assert!(graph.contains(&v[1]));
    assert!(graph.edges(&v[1]).unwrap().is_empty());

    assert_eq!(graph.prune_graph(), vec![v[1].clone()]);
    assert_eq!(graph.prune_graph(), vec![v[0].clone()]);
    assert!(graph.is_empty());
}

#[test]
fn test_prune_keeps_indices_stable() {
    let (mut graph, v) = chain(3);
    graph.prune_graph();
    let fresh = graph.create_vertex(7);
    assert_eq!(fresh.index(), 3);
    assert_eq!(graph.vertex(0), Some(&v[0]));
}

#[test]
fn test_prune_to_fixed_point_keeps_cycles() {
    let (mut graph, v) = chain(5);
    graph.add_directed_edge(&v[1], &v[0], None).unwrap();

    let removed = graph.prune_to_fixed_point();
    assert_eq!(removed.len(), 3);
    let remaining: Vec<usize> = graph.vertices().map(Vertex::index).collect();
    assert_eq!(remaining, vec![0, 1]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_undirected_edges_form_a_cycle() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex('a');
    let b = graph.create_vertex('b');
    assert_eq!(graph.add_undirected_edge(&a, &b, Some(1)), Ok(true));
    assert_eq!(graph.add_undirected_edge(&b, &a, Some(1)), Ok(false));
    let neighbours: Vec<&Vertex<char>> = graph.neighbours(&b).unwrap().collect();
    assert_eq!(neighbours, vec![&a]);
    assert!(graph.get_cycle(&a).unwrap().is_some());
}
