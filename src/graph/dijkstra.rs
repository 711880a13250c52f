use super::{Graph, NodeId, Relaxation, Traversal, TraversalEvent, TraversalOutcome};
use crate::errors::Result;

/// Distances and predecessors after a full Dijkstra run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub start: NodeId,
    /// `None` for nodes unreachable from `start`
    pub distances: Vec<Option<u64>>,
    pub predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    /// Walk predecessors back from `end`; `None` unless the walk reaches `start`
    pub fn path_to(&self, end: NodeId) -> Option<Vec<NodeId>> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(previous) = self.predecessors.get(current).copied().flatten() {
            // A predecessor chain is at most one entry per node
            if path.len() > self.predecessors.len() {
                return None;
            }
            path.push(previous);
            current = previous;
        }
        path.reverse();
        (path.first() == Some(&self.start)).then_some(path)
    }
}

/// Single-source shortest paths with a linear scan for the next node.
///
/// Each round picks the unvisited node with the smallest tentative distance
/// (lowest id on ties), stops early when that distance is infinite, relaxes the
/// node's edges to unvisited neighbors and marks it visited. Weights are assumed
/// positive; [`Graph::add_edge`] enforces that.
pub fn shortest_paths(graph: &Graph, start: NodeId) -> Result<(ShortestPaths, Vec<TraversalEvent>)> {
    graph.node(start)?;

    let n = graph.len();
    let mut distances: Vec<Option<u64>> = vec![None; n];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut events = vec![TraversalEvent::Initialize { start }];
    distances[start] = Some(0);

    loop {
        let next = (0..n)
            .filter(|&id| !visited[id])
            .filter_map(|id| distances[id].map(|d| (d, id)))
            .min();
        let Some((distance, current)) = next else {
            break;
        };

        events.push(TraversalEvent::Select { node: current });

        let mut relaxed = Vec::new();
        for edge in &graph.node(current)?.neighbors {
            if visited[edge.to] {
                continue;
            }
            let candidate = distance + edge.weight;
            if distances[edge.to].map_or(true, |d| candidate < d) {
                distances[edge.to] = Some(candidate);
                predecessors[edge.to] = Some(current);
                relaxed.push(Relaxation {
                    node: edge.to,
                    distance: candidate,
                    predecessor: current,
                });
            }
        }

        visited[current] = true;
        events.push(TraversalEvent::Settle {
            node: current,
            relaxed,
        });
    }

    Ok((
        ShortestPaths {
            start,
            distances,
            predecessors,
        },
        events,
    ))
}

/// Shortest path from `start` to `end`, with the events that animate it
pub fn dijkstra(graph: &Graph, start: NodeId, end: NodeId) -> Result<Traversal> {
    graph.node(end)?;
    let (paths, mut events) = shortest_paths(graph, start)?;

    let outcome = match (paths.path_to(end), paths.distances[end]) {
        (Some(path), Some(distance)) => TraversalOutcome::Path { path, distance },
        _ => TraversalOutcome::NoPath,
    };
    events.push(TraversalEvent::Finish(outcome.clone()));
    Ok(Traversal { events, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_to_f() {
        let graph = Graph::weighted_demo();
        let traversal = dijkstra(&graph, 0, 5).unwrap();
        assert_eq!(
            traversal.outcome,
            TraversalOutcome::Path {
                path: vec![0, 2, 5],
                distance: 3
            }
        );
    }

    #[test]
    fn test_all_distances_from_a() {
        let graph = Graph::weighted_demo();
        let (paths, _) = shortest_paths(&graph, 0).unwrap();
        // A=0, B=4, C=2, D=7, E=5 (via F; ties keep the first relaxation), F=3
        assert_eq!(
            paths.distances,
            vec![Some(0), Some(4), Some(2), Some(7), Some(5), Some(3)]
        );
        assert_eq!(paths.path_to(4), Some(vec![0, 2, 5, 4]));
    }

    #[test]
    fn test_start_equals_end() {
        let graph = Graph::weighted_demo();
        let traversal = dijkstra(&graph, 3, 3).unwrap();
        assert_eq!(
            traversal.outcome,
            TraversalOutcome::Path {
                path: vec![3],
                distance: 0
            }
        );
    }

    #[test]
    fn test_unreachable_reports_no_path() {
        let mut graph = Graph::new(true);
        for label in ["A", "B", "C"] {
            graph.add_node(label, 0.0, 0.0);
        }
        graph.add_edge(0, 1, 2).unwrap();

        let traversal = dijkstra(&graph, 0, 2).unwrap();
        assert_eq!(traversal.outcome, TraversalOutcome::NoPath);

        // Loop stops once only infinite distances remain: A and B settled, C never selected
        let selects = traversal
            .events
            .iter()
            .filter(|e| matches!(e, TraversalEvent::Select { .. }))
            .count();
        assert_eq!(selects, 2);
    }
}
