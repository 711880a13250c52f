use super::{Graph, NodeId, Traversal, TraversalEvent, TraversalOutcome};
use crate::errors::Result;
use std::collections::VecDeque;

/// Breadth-first traversal from `start`.
///
/// A neighbor joins the queue the first time it is seen, i.e. when it is neither
/// visited nor already queued. Nodes are visited when dequeued.
pub fn bfs(graph: &Graph, start: NodeId) -> Result<Traversal> {
    graph.node(start)?;

    let mut visited = vec![false; graph.len()];
    let mut queued = vec![false; graph.len()];
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();
    let mut events = Vec::new();

    queued[start] = true;
    events.push(TraversalEvent::Discover {
        node: start,
        frontier: vec![start],
    });

    while let Some(node) = queue.pop_front() {
        queued[node] = false;
        events.push(TraversalEvent::Enter {
            node,
            frontier: queue.iter().copied().collect(),
        });

        visited[node] = true;
        order.push(node);

        let mut discovered = Vec::new();
        for edge in &graph.node(node)?.neighbors {
            if !visited[edge.to] && !queued[edge.to] {
                queued[edge.to] = true;
                queue.push_back(edge.to);
                discovered.push(edge.to);
            }
        }

        events.push(TraversalEvent::Expand {
            node,
            discovered,
            frontier: queue.iter().copied().collect(),
        });
    }

    let outcome = TraversalOutcome::Order(order);
    events.push(TraversalEvent::Finish(outcome.clone()));
    Ok(Traversal { events, outcome })
}

/// Visit order of a breadth-first traversal from `start`
pub fn bfs_order(graph: &Graph, start: NodeId) -> Result<Vec<NodeId>> {
    match bfs(graph, start)?.outcome {
        TraversalOutcome::Order(order) => Ok(order),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_order_from_a() {
        let graph = Graph::demo();
        assert_eq!(bfs_order(&graph, 0).unwrap(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_demo_order_from_d() {
        let graph = Graph::demo();
        // D → B → A, E → C, F
        assert_eq!(bfs_order(&graph, 3).unwrap(), vec![3, 1, 0, 4, 2, 5]);
    }

    #[test]
    fn test_event_shape() {
        let graph = Graph::demo();
        let traversal = bfs(&graph, 0).unwrap();

        assert_eq!(
            traversal.events[0],
            TraversalEvent::Discover {
                node: 0,
                frontier: vec![0]
            }
        );
        assert_eq!(
            traversal.events[2],
            TraversalEvent::Expand {
                node: 0,
                discovered: vec![1, 2],
                frontier: vec![1, 2]
            }
        );
        // Discover, then Enter + Expand per node, then Finish
        assert_eq!(traversal.events.len(), 1 + 2 * 6 + 1);
    }

    #[test]
    fn test_unknown_start_rejected() {
        assert!(bfs(&Graph::demo(), 9).is_err());
    }
}
