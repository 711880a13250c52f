//! Graph model and traversals
//!
//! This module provides the small fixed graphs the search visualizers run on:
//! - [`Graph`]: nodes with display coordinates, labels and ordered neighbor lists
//! - [`NodeFlags`]: transient traversal state (visited, frontier, current, distance)
//! - [`TraversalEvent`]: one animated change produced by a traversal
//!
//! # Traversals
//!
//! - [`bfs`]: FIFO frontier, layered visit order
//! - [`dfs`]: LIFO frontier, neighbors pushed in reverse so they pop in order
//! - [`dijkstra`]: linear-scan shortest path with predecessor reconstruction
//!
//! Traversals read only the topology. They return the complete event list up front;
//! the visualizer replays it through the animation timeline and applies each event
//! to the flags with [`Graph::apply`].
//!
//! # Neighbor order
//!
//! Neighbor lists keep insertion order and every traversal scans them in that
//! order, so the order edges are added in fixes the visit order.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use crate::errors::{Result, VisualizerError};
use std::fmt;

pub type NodeId = usize;

/// Directed half of an undirected edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: u64,
}

/// Transient per-node traversal state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFlags {
    pub visited: bool,
    /// Waiting in the BFS queue or DFS stack
    pub in_frontier: bool,
    pub current: bool,
    /// Tentative distance; `None` means infinity
    pub distance: Option<u64>,
    pub predecessor: Option<NodeId>,
    pub on_path: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub neighbors: Vec<Edge>,
    pub flags: NodeFlags,
}

/// Undirected graph with positive edge weights
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    weighted: bool,
}

/// One relaxation performed while settling a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relaxation {
    pub node: NodeId,
    pub distance: u64,
    pub predecessor: NodeId,
}

/// Final result of a traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalOutcome {
    /// BFS/DFS visitation order
    Order(Vec<NodeId>),
    /// Shortest path from start to end, inclusive, and its total weight
    Path { path: Vec<NodeId>, distance: u64 },
    /// End is unreachable from start
    NoPath,
}

/// A single animated change to the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalEvent {
    /// Start node placed on the frontier
    Discover { node: NodeId, frontier: Vec<NodeId> },
    /// Node taken off the frontier and made current
    Enter { node: NodeId, frontier: Vec<NodeId> },
    /// Node visited; newly discovered neighbors joined the frontier
    Expand {
        node: NodeId,
        discovered: Vec<NodeId>,
        frontier: Vec<NodeId>,
    },
    /// Distances initialized: start at zero, everything else infinite
    Initialize { start: NodeId },
    /// Unvisited node with the smallest tentative distance chosen
    Select { node: NodeId },
    /// Node's neighbors relaxed and node marked visited
    Settle {
        node: NodeId,
        relaxed: Vec<Relaxation>,
    },
    /// Traversal complete
    Finish(TraversalOutcome),
}

/// Events plus the outcome they lead to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pub events: Vec<TraversalEvent>,
    pub outcome: TraversalOutcome,
}

/// The traversals that can be visualized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalAlgorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl TraversalAlgorithm {
    pub const ALL: [TraversalAlgorithm; 3] = [
        TraversalAlgorithm::Bfs,
        TraversalAlgorithm::Dfs,
        TraversalAlgorithm::Dijkstra,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TraversalAlgorithm::Bfs => "BFS",
            TraversalAlgorithm::Dfs => "DFS",
            TraversalAlgorithm::Dijkstra => "Dijkstra",
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            TraversalAlgorithm::Bfs | TraversalAlgorithm::Dfs => "O(V + E)",
            TraversalAlgorithm::Dijkstra => "O(V²) with a linear scan",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TraversalAlgorithm::Bfs => "Explores level by level with a queue",
            TraversalAlgorithm::Dfs => "Follows one branch as deep as possible with a stack",
            TraversalAlgorithm::Dijkstra => "Shortest path on a graph with positive weights",
        }
    }

    /// Dijkstra needs an end node and the weighted graph
    pub fn needs_target(self) -> bool {
        self == TraversalAlgorithm::Dijkstra
    }

    pub fn demo_graph(self) -> Graph {
        if self.needs_target() {
            Graph::weighted_demo()
        } else {
            Graph::demo()
        }
    }

    /// Run the traversal; `end` is only read by Dijkstra and defaults to the start
    pub fn traverse(self, graph: &Graph, start: NodeId, end: Option<NodeId>) -> Result<Traversal> {
        match self {
            TraversalAlgorithm::Bfs => bfs::bfs(graph, start),
            TraversalAlgorithm::Dfs => dfs::dfs(graph, start),
            TraversalAlgorithm::Dijkstra => dijkstra::dijkstra(graph, start, end.unwrap_or(start)),
        }
    }

    pub fn next(self) -> Self {
        match self {
            TraversalAlgorithm::Bfs => TraversalAlgorithm::Dfs,
            TraversalAlgorithm::Dfs => TraversalAlgorithm::Dijkstra,
            TraversalAlgorithm::Dijkstra => TraversalAlgorithm::Bfs,
        }
    }
}

impl fmt::Display for TraversalAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Graph {
    pub fn new(weighted: bool) -> Self {
        Graph {
            nodes: Vec::new(),
            weighted,
        }
    }

    /// The six-node graph used by BFS and DFS
    pub fn demo() -> Self {
        let mut graph = Self::with_demo_nodes(false);
        for (a, b) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (4, 5)] {
            graph.link(a, b, 1);
        }
        graph
    }

    /// The six-node weighted graph used by Dijkstra
    pub fn weighted_demo() -> Self {
        let mut graph = Self::with_demo_nodes(true);
        for (a, b, w) in [
            (0, 1, 4),
            (0, 2, 2),
            (1, 3, 3),
            (1, 4, 1),
            (2, 4, 7),
            (2, 5, 1),
            (4, 5, 2),
        ] {
            graph.link(a, b, w);
        }
        graph
    }

    fn with_demo_nodes(weighted: bool) -> Self {
        let mut graph = Graph::new(weighted);
        for (label, x, y) in [
            ("A", 200.0, 100.0),
            ("B", 100.0, 200.0),
            ("C", 300.0, 200.0),
            ("D", 50.0, 300.0),
            ("E", 150.0, 300.0),
            ("F", 250.0, 300.0),
        ] {
            graph.add_node(label, x, y);
        }
        graph
    }

    pub fn add_node(&mut self, label: &str, x: f64, y: f64) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(GraphNode {
            id,
            label: label.to_string(),
            x,
            y,
            neighbors: Vec::new(),
            flags: NodeFlags::default(),
        });
        id
    }

    /// Add an undirected edge; weights must be positive
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: i64) -> Result<()> {
        self.node(a)?;
        self.node(b)?;
        if weight <= 0 {
            return Err(VisualizerError::NonPositiveWeight {
                from: a,
                to: b,
                weight,
            });
        }
        self.link(a, b, weight as u64);
        Ok(())
    }

    fn link(&mut self, a: NodeId, b: NodeId, weight: u64) {
        self.nodes[a].neighbors.push(Edge { to: b, weight });
        self.nodes[b].neighbors.push(Edge { to: a, weight });
    }

    pub fn node(&self, id: NodeId) -> Result<&GraphNode> {
        self.nodes.get(id).ok_or(VisualizerError::UnknownNode { id })
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn label(&self, id: NodeId) -> &str {
        self.nodes.get(id).map(|n| n.label.as_str()).unwrap_or("?")
    }

    /// Labels joined with arrows, e.g. `A → B → C`
    pub fn describe(&self, ids: &[NodeId]) -> String {
        ids.iter()
            .map(|&id| self.label(id))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Each undirected edge once, as `(low, high, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, u64)> + '_ {
        self.nodes.iter().flat_map(|node| {
            node.neighbors
                .iter()
                .filter(move |edge| node.id < edge.to)
                .map(move |edge| (node.id, edge.to, edge.weight))
        })
    }

    /// Clear every traversal flag
    pub fn reset_flags(&mut self) {
        for node in &mut self.nodes {
            node.flags = NodeFlags::default();
        }
    }

    /// Apply one traversal event to the node flags
    pub fn apply(&mut self, event: &TraversalEvent) {
        match event {
            TraversalEvent::Discover { node, .. } => {
                if let Some(n) = self.nodes.get_mut(*node) {
                    n.flags.in_frontier = true;
                }
            }
            TraversalEvent::Enter { node, .. } | TraversalEvent::Select { node } => {
                for n in &mut self.nodes {
                    n.flags.current = n.id == *node;
                }
                if let Some(n) = self.nodes.get_mut(*node) {
                    n.flags.in_frontier = false;
                }
            }
            TraversalEvent::Expand {
                node, discovered, ..
            } => {
                if let Some(n) = self.nodes.get_mut(*node) {
                    n.flags.visited = true;
                    n.flags.current = false;
                }
                for &id in discovered {
                    if let Some(n) = self.nodes.get_mut(id) {
                        n.flags.in_frontier = true;
                    }
                }
            }
            TraversalEvent::Initialize { start } => {
                for n in &mut self.nodes {
                    n.flags = NodeFlags {
                        distance: (n.id == *start).then_some(0),
                        ..NodeFlags::default()
                    };
                }
            }
            TraversalEvent::Settle { node, relaxed } => {
                for relaxation in relaxed {
                    if let Some(n) = self.nodes.get_mut(relaxation.node) {
                        n.flags.distance = Some(relaxation.distance);
                        n.flags.predecessor = Some(relaxation.predecessor);
                    }
                }
                if let Some(n) = self.nodes.get_mut(*node) {
                    n.flags.visited = true;
                    n.flags.current = false;
                }
            }
            TraversalEvent::Finish(TraversalOutcome::Path { path, .. }) => {
                for &id in path {
                    if let Some(n) = self.nodes.get_mut(id) {
                        n.flags.on_path = true;
                    }
                }
            }
            TraversalEvent::Finish(_) => {}
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_neighbor_order() {
        let graph = Graph::demo();
        let neighbors = |id: NodeId| -> Vec<NodeId> {
            graph.node(id).unwrap().neighbors.iter().map(|e| e.to).collect()
        };
        assert_eq!(neighbors(0), vec![1, 2]);
        assert_eq!(neighbors(1), vec![0, 3, 4]);
        assert_eq!(neighbors(2), vec![0, 5]);
        assert_eq!(neighbors(3), vec![1]);
        assert_eq!(neighbors(4), vec![1, 5]);
        assert_eq!(neighbors(5), vec![2, 4]);
    }

    #[test]
    fn test_weighted_demo_edges() {
        let graph = Graph::weighted_demo();
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges.len(), 7);
        assert!(edges.contains(&(2, 4, 7)));
        assert!(edges.contains(&(2, 5, 1)));
        assert!(graph.is_weighted());
    }

    #[test]
    fn test_add_edge_rejects_non_positive_weight() {
        let mut graph = Graph::new(true);
        let a = graph.add_node("A", 0.0, 0.0);
        let b = graph.add_node("B", 1.0, 0.0);
        assert_eq!(
            graph.add_edge(a, b, 0),
            Err(VisualizerError::NonPositiveWeight {
                from: a,
                to: b,
                weight: 0
            })
        );
        assert!(graph.add_edge(a, 7, 3).is_err());
        assert!(graph.add_edge(a, b, 3).is_ok());
    }

    #[test]
    fn test_reset_clears_flags() {
        let mut graph = Graph::demo();
        graph.apply(&TraversalEvent::Discover {
            node: 0,
            frontier: vec![0],
        });
        graph.apply(&TraversalEvent::Enter {
            node: 0,
            frontier: vec![],
        });
        assert!(graph.node(0).unwrap().flags.current);

        graph.reset_flags();
        assert!(graph
            .nodes()
            .iter()
            .all(|n| n.flags == NodeFlags::default()));
    }
}
