// Integration tests for the graph traversals

use algoviz::graph::bfs::bfs_order;
use algoviz::graph::dfs::dfs_order;
use algoviz::graph::{Graph, NodeId, TraversalAlgorithm, TraversalOutcome};

const A: NodeId = 0;
const F: NodeId = 5;

/// Nodes reachable from `start` when `removed` is taken out of the graph
fn reachable_without(graph: &Graph, start: NodeId, removed: NodeId) -> Vec<bool> {
    let mut seen = vec![false; graph.len()];
    let mut stack = vec![start];
    seen[start] = true;
    while let Some(node) = stack.pop() {
        for edge in &graph.node(node).unwrap().neighbors {
            if edge.to != removed && !seen[edge.to] {
                seen[edge.to] = true;
                stack.push(edge.to);
            }
        }
    }
    seen
}

#[test]
fn test_bfs_visits_in_non_decreasing_distance() {
    let graph = Graph::demo();
    let order = bfs_order(&graph, A).unwrap();
    // Hop distances from A in the demo graph
    let distance = [0, 1, 1, 2, 2, 2];

    assert_eq!(order.len(), graph.len());
    for pair in order.windows(2) {
        assert!(distance[pair[0]] <= distance[pair[1]], "order {order:?}");
    }
}

#[test]
fn test_dfs_visits_cut_vertex_before_what_hangs_off_it() {
    let graph = Graph::demo();
    let order = dfs_order(&graph, A).unwrap();
    let position = |id: NodeId| order.iter().position(|&n| n == id).unwrap();

    for through in 0..graph.len() {
        if through == A {
            continue;
        }
        let still_reachable = reachable_without(&graph, A, through);
        for node in 0..graph.len() {
            if node != through && !still_reachable[node] {
                assert!(
                    position(through) < position(node),
                    "{} must come before {} in {order:?}",
                    graph.label(through),
                    graph.label(node)
                );
            }
        }
    }
}

#[test]
fn test_dijkstra_a_to_f() {
    let graph = Graph::weighted_demo();
    let traversal = TraversalAlgorithm::Dijkstra
        .traverse(&graph, A, Some(F))
        .unwrap();
    assert_eq!(
        traversal.outcome,
        TraversalOutcome::Path {
            path: vec![0, 2, 5],
            distance: 3
        }
    );
    assert_eq!(graph.describe(&[0, 2, 5]), "A → C → F");
}

#[test]
fn test_every_traversal_ends_with_its_outcome() {
    for algorithm in TraversalAlgorithm::ALL {
        let graph = algorithm.demo_graph();
        let traversal = algorithm.traverse(&graph, A, Some(F)).unwrap();
        match traversal.events.last() {
            Some(algoviz::graph::TraversalEvent::Finish(outcome)) => {
                assert_eq!(outcome, &traversal.outcome)
            }
            other => panic!("{algorithm} ended with {other:?}"),
        }
    }
}

#[test]
fn test_unknown_start_is_rejected() {
    let graph = Graph::demo();
    assert!(TraversalAlgorithm::Bfs.traverse(&graph, 42, None).is_err());
}
