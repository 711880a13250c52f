use super::{Graph, NodeId, Traversal, TraversalEvent, TraversalOutcome};
use crate::errors::Result;

/// Depth-first traversal from `start` with an explicit stack.
///
/// Unvisited neighbors are pushed in reverse so they pop in their stored order.
/// A neighbor already on the stack is not pushed again, and a popped node that is
/// already visited is skipped without expansion. The "already on the stack" check
/// means a node keeps its original stack position even when a deeper path reaches
/// it first, which can differ from a visited-set-only DFS on cyclic graphs.
pub fn dfs(graph: &Graph, start: NodeId) -> Result<Traversal> {
    graph.node(start)?;

    let mut visited = vec![false; graph.len()];
    let mut stack = vec![start];
    let mut order = Vec::new();
    let mut events = vec![TraversalEvent::Discover {
        node: start,
        frontier: vec![start],
    }];

    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }

        events.push(TraversalEvent::Enter {
            node,
            frontier: stack.clone(),
        });

        visited[node] = true;
        order.push(node);

        let mut discovered = Vec::new();
        for edge in graph.node(node)?.neighbors.iter().rev() {
            if !visited[edge.to] && !stack.contains(&edge.to) {
                stack.push(edge.to);
                discovered.push(edge.to);
            }
        }

        events.push(TraversalEvent::Expand {
            node,
            discovered,
            frontier: stack.clone(),
        });
    }

    let outcome = TraversalOutcome::Order(order);
    events.push(TraversalEvent::Finish(outcome.clone()));
    Ok(Traversal { events, outcome })
}

/// Visit order of a depth-first traversal from `start`
pub fn dfs_order(graph: &Graph, start: NodeId) -> Result<Vec<NodeId>> {
    match dfs(graph, start)?.outcome {
        TraversalOutcome::Order(order) => Ok(order),
        _ => Ok(Vec::new()),
    }
}
