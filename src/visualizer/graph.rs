use crate::animation::{RunToken, Timeline};
use crate::config::Config;
use crate::errors::{Result, VisualizerError};
use crate::graph::{Graph, NodeId, TraversalAlgorithm, TraversalEvent, TraversalOutcome};
use crate::input::{parse_node_id, parse_node_pair};
use crate::notify::Notification;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// BFS, DFS or Dijkstra animated on the demo graph
#[derive(Debug)]
pub struct TraversalVisualizer {
    algorithm: TraversalAlgorithm,
    graph: Graph,
    timeline: Timeline<TraversalEvent>,
    frontier: Vec<NodeId>,
    order: Vec<NodeId>,
    outcome: Option<TraversalOutcome>,
    step_delay: Duration,
    select_delay: Duration,
}

impl TraversalVisualizer {
    pub fn new(algorithm: TraversalAlgorithm, config: &Config, now: Instant) -> Self {
        TraversalVisualizer {
            algorithm,
            graph: algorithm.demo_graph(),
            timeline: Timeline::new(now),
            frontier: Vec::new(),
            order: Vec::new(),
            outcome: None,
            step_delay: config.step_delay,
            select_delay: config.select_delay(),
        }
    }

    pub fn algorithm(&self) -> TraversalAlgorithm {
        self.algorithm
    }

    /// Run from typed input: a start id, or `start,end` for Dijkstra
    pub fn run_input(&mut self, text: &str, now: Instant) -> Result<Notification> {
        let count = self.graph.len();
        let (start, end) = if self.algorithm.needs_target() {
            let (start, end) = parse_node_pair(text, count)?;
            (start, Some(end))
        } else {
            (parse_node_id(text, count)?, None)
        };
        self.run(start, end, now)
    }

    /// Compute the traversal and schedule its events; rejected while a run is active
    pub fn run(&mut self, start: NodeId, end: Option<NodeId>, now: Instant) -> Result<Notification> {
        if self.timeline.is_running() {
            debug!(algorithm = %self.algorithm, "run rejected, already running");
            return Err(VisualizerError::AlreadyRunning);
        }
        let traversal = self.algorithm.traverse(&self.graph, start, end)?;

        self.clear_progress();
        let count = traversal.events.len();
        let events = self.schedule(traversal.events);
        self.timeline.start(events, now)?;
        info!(
            algorithm = %self.algorithm,
            start = self.graph.label(start),
            events = count,
            "traversal started"
        );

        let description = match end {
            Some(end) if self.algorithm.needs_target() => format!(
                "From {} to {}",
                self.graph.label(start),
                self.graph.label(end)
            ),
            _ => format!("Starting at {}", self.graph.label(start)),
        };
        Ok(Notification::info(
            format!("{} running", self.algorithm),
            description,
        ))
    }

    /// Pair each event with the pause that precedes it
    fn schedule(&self, events: Vec<TraversalEvent>) -> Vec<(Duration, TraversalEvent)> {
        let mut previous: Option<&TraversalEvent> = None;
        let mut delays = Vec::with_capacity(events.len());
        for event in &events {
            let delay = match (previous, event) {
                (None, _) | (_, TraversalEvent::Finish(_)) => Duration::ZERO,
                (Some(TraversalEvent::Select { .. }), _) => self.select_delay,
                _ => self.step_delay,
            };
            delays.push(delay);
            previous = Some(event);
        }
        delays.into_iter().zip(events).collect()
    }

    /// Stop any scheduled events and clear every traversal flag
    pub fn reset(&mut self) {
        self.timeline.cancel();
        self.clear_progress();
        debug!(algorithm = %self.algorithm, "traversal reset");
    }

    fn clear_progress(&mut self) {
        self.graph.reset_flags();
        self.frontier.clear();
        self.order.clear();
        self.outcome = None;
    }

    /// Deliver every event that is due
    pub fn tick(&mut self, now: Instant) -> Option<Notification> {
        let mut finished = None;
        while let Some((token, event)) = self.timeline.poll(now) {
            if let Some(notification) = self.apply(token, event) {
                finished = Some(notification);
            }
        }
        finished
    }

    /// Apply one delivered event; events from a superseded run are dropped
    pub fn apply(&mut self, token: RunToken, event: TraversalEvent) -> Option<Notification> {
        if !self.timeline.is_current(token) {
            debug!(algorithm = %self.algorithm, "stale event discarded");
            return None;
        }

        self.graph.apply(&event);
        match event {
            TraversalEvent::Discover { frontier, .. } => self.frontier = frontier,
            TraversalEvent::Enter { node, frontier } => {
                self.order.push(node);
                self.frontier = frontier;
            }
            TraversalEvent::Expand { frontier, .. } => self.frontier = frontier,
            TraversalEvent::Settle { node, .. } => self.order.push(node),
            TraversalEvent::Initialize { .. } | TraversalEvent::Select { .. } => {}
            TraversalEvent::Finish(outcome) => {
                let notification = self.summarize(&outcome);
                info!(algorithm = %self.algorithm, outcome = ?outcome, "traversal finished");
                self.outcome = Some(outcome);
                return Some(notification);
            }
        }
        None
    }

    fn summarize(&self, outcome: &TraversalOutcome) -> Notification {
        match outcome {
            TraversalOutcome::Order(order) => Notification::info(
                format!("{} complete", self.algorithm),
                format!("Visit order: {}", self.graph.describe(order)),
            ),
            TraversalOutcome::Path { path, distance } => Notification::info(
                "Shortest path",
                format!("{} (distance {distance})", self.graph.describe(path)),
            ),
            TraversalOutcome::NoPath => Notification::error(
                "No path",
                "No path exists between the selected nodes",
            ),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Queue (BFS) or stack (DFS) contents, front/bottom first
    pub fn frontier(&self) -> &[NodeId] {
        &self.frontier
    }

    /// Nodes visited so far (settled, for Dijkstra)
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    pub fn outcome(&self) -> Option<&TraversalOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.timeline.is_running()
    }
}
