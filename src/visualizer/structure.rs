use crate::animation::{RunToken, Timeline};
use crate::config::Config;
use crate::errors::{Result, VisualizerError};
use crate::ident::Token;
use crate::input::parse_int;
use crate::notify::Notification;
use crate::structures::bst::{BinarySearchTree, NodeLayout};
use crate::structures::doubly_linked_list::DoublyLinkedList;
use crate::structures::linked_list::LinkedList;
use crate::structures::queue::Queue;
use crate::structures::stack::Stack;
use crate::structures::{Item, SearchTrace, StructureKind};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// User-facing operations on a structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureOp {
    /// Append, push, enqueue or tree insert
    Insert,
    /// Remove by value
    Remove,
    /// Pop or dequeue
    Take,
    /// Peek or front
    Inspect,
    Search,
}

impl StructureOp {
    pub fn supported_by(self, kind: StructureKind) -> bool {
        use StructureKind::*;
        match self {
            StructureOp::Insert => true,
            StructureOp::Remove => matches!(kind, LinkedList | DoublyLinkedList),
            StructureOp::Take | StructureOp::Inspect => matches!(kind, Stack | Queue),
            StructureOp::Search => kind.is_searchable(),
        }
    }

    /// Name of the operation as this structure calls it
    pub fn label(self, kind: StructureKind) -> &'static str {
        match (self, kind) {
            (StructureOp::Insert, StructureKind::Stack) => "push",
            (StructureOp::Insert, StructureKind::Queue) => "enqueue",
            (StructureOp::Insert, StructureKind::BinarySearchTree) => "insert",
            (StructureOp::Insert, _) => "append",
            (StructureOp::Remove, _) => "remove",
            (StructureOp::Take, StructureKind::Queue) => "dequeue",
            (StructureOp::Take, _) => "pop",
            (StructureOp::Inspect, StructureKind::Queue) => "front",
            (StructureOp::Inspect, _) => "peek",
            (StructureOp::Search, _) => "search",
        }
    }
}

/// One step of an animated search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// Node compared against the target
    Visit(Token),
    Found {
        value: i64,
        token: Token,
        position: usize,
    },
    Missing {
        value: i64,
    },
    /// Highlight removed after the result was shown
    Clear,
}

#[derive(Debug)]
enum Model {
    List(LinkedList),
    Doubly(DoublyLinkedList),
    Tree(BinarySearchTree),
    Stack(Stack),
    Queue(Queue),
}

/// A single structure with its operations and search animation
#[derive(Debug)]
pub struct StructureVisualizer {
    kind: StructureKind,
    model: Model,
    timeline: Timeline<SearchEvent>,
    highlight: Option<Token>,
    found: Option<Token>,
    step_delay: Duration,
}

impl StructureVisualizer {
    pub fn new(kind: StructureKind, config: &Config, now: Instant) -> Self {
        StructureVisualizer {
            kind,
            model: Self::empty_model(kind),
            timeline: Timeline::new(now),
            highlight: None,
            found: None,
            step_delay: config.step_delay,
        }
    }

    fn empty_model(kind: StructureKind) -> Model {
        match kind {
            StructureKind::LinkedList => Model::List(LinkedList::new()),
            StructureKind::DoublyLinkedList => Model::Doubly(DoublyLinkedList::new()),
            StructureKind::BinarySearchTree => Model::Tree(BinarySearchTree::new()),
            StructureKind::Stack => Model::Stack(Stack::new()),
            StructureKind::Queue => Model::Queue(Queue::new()),
        }
    }

    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    fn unsupported(&self, op: StructureOp) -> VisualizerError {
        VisualizerError::UnsupportedOperation {
            operation: op.label(self.kind),
            structure: self.kind.noun(),
        }
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.timeline.is_running() {
            return Err(VisualizerError::AlreadyRunning);
        }
        Ok(())
    }

    /// Append, push, enqueue or insert the typed value
    pub fn insert(&mut self, text: &str) -> Result<Notification> {
        self.ensure_idle()?;
        let value = parse_int(text)?;

        let notification = match &mut self.model {
            Model::List(list) => {
                list.append(value);
                Notification::info("Node added", format!("Added {value} to the end of the list"))
            }
            Model::Doubly(list) => {
                list.append(value);
                Notification::info("Node added", format!("Added {value} to the end of the list"))
            }
            Model::Tree(tree) => match tree.insert(value) {
                Some(_) if tree.len() == 1 => {
                    Notification::info("Node added", format!("Added {value} as the root"))
                }
                Some(_) => Notification::info("Node added", format!("Added {value} to the tree")),
                None => {
                    debug!(value, "duplicate insert ignored");
                    Notification::info("Duplicate", format!("{value} is already in the tree"))
                }
            },
            Model::Stack(stack) => {
                stack.push(value);
                Notification::info("Push", format!("Pushed {value} onto the stack"))
            }
            Model::Queue(queue) => {
                queue.enqueue(value);
                Notification::info("Enqueue", format!("Enqueued {value}"))
            }
        };
        debug!(kind = %self.kind, value, len = self.len(), "inserted");
        Ok(notification)
    }

    /// Remove the first node holding the typed value (lists only)
    pub fn remove(&mut self, text: &str) -> Result<Notification> {
        self.ensure_idle()?;
        let value = parse_int(text)?;
        let unsupported = self.unsupported(StructureOp::Remove);

        let removed = match &mut self.model {
            Model::List(list) => list.remove(value)?,
            Model::Doubly(list) => list.remove(value)?,
            _ => return Err(unsupported),
        };
        debug!(kind = %self.kind, value = removed.value, "removed");
        Ok(Notification::info(
            "Node removed",
            format!("Removed {} from the list", removed.value),
        ))
    }

    /// Pop the stack or dequeue the queue
    pub fn take(&mut self) -> Result<Notification> {
        self.ensure_idle()?;
        let unsupported = self.unsupported(StructureOp::Take);
        let notification = match &mut self.model {
            Model::Stack(stack) => {
                let item = stack.pop()?;
                Notification::info("Pop", format!("Popped {}", item.value))
            }
            Model::Queue(queue) => {
                let item = queue.dequeue()?;
                Notification::info("Dequeue", format!("Dequeued {}", item.value))
            }
            _ => return Err(unsupported),
        };
        debug!(kind = %self.kind, len = self.len(), "took item");
        Ok(notification)
    }

    /// Peek the stack or look at the queue front, without mutating
    pub fn inspect(&mut self) -> Result<Notification> {
        let notification = match &self.model {
            Model::Stack(stack) => {
                let item = stack.peek()?;
                Notification::info("Peek", format!("Top of the stack is {}", item.value))
            }
            Model::Queue(queue) => {
                let item = queue.front()?;
                Notification::info("Front", format!("Front of the queue is {}", item.value))
            }
            _ => return Err(self.unsupported(StructureOp::Inspect)),
        };
        self.highlight = match &self.model {
            Model::Stack(stack) => stack.items().last().map(|item| item.token),
            Model::Queue(queue) => queue.iter().next().map(|item| item.token),
            _ => None,
        };
        Ok(notification)
    }

    /// Animate a search: one highlighted node per step, then the result
    pub fn search(&mut self, text: &str, now: Instant) -> Result<Notification> {
        self.ensure_idle()?;
        let value = parse_int(text)?;

        let trace = match &self.model {
            Model::List(list) => list.search(value)?,
            Model::Doubly(list) => list.search(value)?,
            Model::Tree(tree) => tree.search(value)?,
            _ => return Err(self.unsupported(StructureOp::Search)),
        };

        self.highlight = None;
        self.found = None;
        let steps = trace.path.len();
        let events = self.schedule(value, &trace);
        self.timeline.start(events, now)?;
        info!(kind = %self.kind, value, steps, found = trace.found, "search started");

        Ok(Notification::info("Searching", format!("Looking for {value}")))
    }

    fn schedule(&self, value: i64, trace: &SearchTrace) -> Vec<(Duration, SearchEvent)> {
        let mut events: Vec<(Duration, SearchEvent)> = trace
            .path
            .iter()
            .enumerate()
            .map(|(i, &token)| {
                let delay = if i == 0 { Duration::ZERO } else { self.step_delay };
                (delay, SearchEvent::Visit(token))
            })
            .collect();

        let result = match (trace.hit(), trace.position()) {
            (Some(token), Some(position)) => SearchEvent::Found {
                value,
                token,
                position,
            },
            _ => SearchEvent::Missing { value },
        };
        events.push((self.step_delay, result));
        events.push((self.step_delay, SearchEvent::Clear));
        events
    }

    /// Deliver due search events; returns the result notification when it lands
    pub fn tick(&mut self, now: Instant) -> Option<Notification> {
        let mut result = None;
        while let Some((token, event)) = self.timeline.poll(now) {
            if let Some(notification) = self.apply(token, event) {
                result = Some(notification);
            }
        }
        result
    }

    /// Apply one delivered event; events from a superseded run are dropped
    pub fn apply(&mut self, token: RunToken, event: SearchEvent) -> Option<Notification> {
        if !self.timeline.is_current(token) {
            debug!(kind = %self.kind, "stale search event discarded");
            return None;
        }

        match event {
            SearchEvent::Visit(node) => {
                self.highlight = Some(node);
                None
            }
            SearchEvent::Found {
                value,
                token,
                position,
            } => {
                self.found = Some(token);
                let description = match self.kind {
                    StructureKind::BinarySearchTree => format!("Value {value} is in the tree"),
                    _ => format!("Value {value} is at position {position}"),
                };
                Some(Notification::info("Found!", description))
            }
            SearchEvent::Missing { value } => {
                self.highlight = None;
                Some(Notification::from(VisualizerError::ValueNotFound {
                    value,
                    structure: self.kind.noun(),
                }))
            }
            SearchEvent::Clear => {
                self.highlight = None;
                self.found = None;
                None
            }
        }
    }

    /// Cancel a running search and drop every highlight
    pub fn reset(&mut self) {
        self.timeline.cancel();
        self.highlight = None;
        self.found = None;
    }

    /// Reset and empty the structure
    pub fn clear(&mut self) -> Notification {
        self.reset();
        self.model = Self::empty_model(self.kind);
        debug!(kind = %self.kind, "cleared");
        Notification::info("Cleared", format!("The {} is empty", self.kind.noun()))
    }

    /// Items in display order: list order, stack bottom to top, queue front to
    /// back, tree in order
    pub fn items(&self) -> Vec<Item> {
        match &self.model {
            Model::List(list) => list.iter().copied().collect(),
            Model::Doubly(list) => list.iter().copied().collect(),
            Model::Tree(tree) => tree.in_order(),
            Model::Stack(stack) => stack.items().to_vec(),
            Model::Queue(queue) => queue.iter().copied().collect(),
        }
    }

    /// Node positions for drawing, for the tree only
    pub fn tree_layout(&self) -> Option<Vec<NodeLayout>> {
        match &self.model {
            Model::Tree(tree) => Some(tree.layout()),
            _ => None,
        }
    }

    pub fn tree_height(&self) -> usize {
        match &self.model {
            Model::Tree(tree) => tree.height(),
            _ => 0,
        }
    }

    pub fn len(&self) -> usize {
        match &self.model {
            Model::List(list) => list.len(),
            Model::Doubly(list) => list.len(),
            Model::Tree(tree) => tree.len(),
            Model::Stack(stack) => stack.len(),
            Model::Queue(queue) => queue.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node currently compared by a search
    pub fn highlight(&self) -> Option<Token> {
        self.highlight
    }

    /// Node a search just found
    pub fn found(&self) -> Option<Token> {
        self.found
    }

    pub fn is_running(&self) -> bool {
        self.timeline.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visualizer(kind: StructureKind, values: &[i64]) -> StructureVisualizer {
        let config = Config {
            step_delay: Duration::from_millis(10),
            ..Config::default()
        };
        let mut v = StructureVisualizer::new(kind, &config, Instant::now());
        for value in values {
            v.insert(&value.to_string()).unwrap();
        }
        v
    }

    fn finish(v: &mut StructureVisualizer, t0: Instant) -> Vec<Notification> {
        let mut out = Vec::new();
        let mut t = t0;
        while v.is_running() {
            out.extend(v.tick(t));
            t += Duration::from_millis(20);
        }
        out
    }

    #[test]
    fn test_tree_search_found_and_missing() {
        let t0 = Instant::now();
        let mut v = visualizer(StructureKind::BinarySearchTree, &[5, 3, 8, 1, 4]);

        v.search("4", t0).unwrap();
        let results = finish(&mut v, t0);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Found!");
        assert!(v.highlight().is_none());

        v.search("99", t0).unwrap();
        let results = finish(&mut v, t0);
        assert!(results[0].is_error());
        assert_eq!(results[0].title, "Not found");
    }

    #[test]
    fn test_list_search_reports_position() {
        let t0 = Instant::now();
        let mut v = visualizer(StructureKind::DoublyLinkedList, &[10, 20, 30]);
        v.search("30", t0).unwrap();
        let results = finish(&mut v, t0);
        assert_eq!(results[0].description, "Value 30 is at position 2");
    }

    #[test]
    fn test_mutation_rejected_during_search() {
        let t0 = Instant::now();
        let mut v = visualizer(StructureKind::LinkedList, &[1, 2, 3]);
        v.search("3", t0).unwrap();
        assert_eq!(v.insert("4"), Err(VisualizerError::AlreadyRunning));
        assert_eq!(v.search("1", t0), Err(VisualizerError::AlreadyRunning));

        v.reset();
        assert!(v.insert("4").is_ok());
    }

    #[test]
    fn test_stale_search_event_ignored() {
        let t0 = Instant::now();
        let mut v = visualizer(StructureKind::LinkedList, &[1, 2]);
        v.search("2", t0).unwrap();
        let (token, event) = v.timeline.poll(t0).unwrap();
        v.reset();
        assert!(v.apply(token, event).is_none());
        assert!(v.highlight().is_none());
    }

    #[test]
    fn test_stack_operations() {
        let mut v = visualizer(StructureKind::Stack, &[1, 2, 3]);
        assert_eq!(v.take().unwrap().description, "Popped 3");
        assert_eq!(v.take().unwrap().description, "Popped 2");
        let values: Vec<i64> = v.items().iter().map(|i| i.value).collect();
        assert_eq!(values, vec![1]);
        assert_eq!(v.inspect().unwrap().description, "Top of the stack is 1");
        assert!(matches!(
            v.remove("1"),
            Err(VisualizerError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_invalid_and_empty_inputs() {
        let mut v = visualizer(StructureKind::Queue, &[]);
        assert!(matches!(
            v.insert("abc"),
            Err(VisualizerError::InvalidNumber { .. })
        ));
        assert_eq!(
            v.take(),
            Err(VisualizerError::EmptyStructure { structure: "queue" })
        );
        assert!(v.is_empty());
    }

    #[test]
    fn test_tree_duplicate_is_reported_not_inserted() {
        let mut v = visualizer(StructureKind::BinarySearchTree, &[5]);
        assert_eq!(v.insert("5").unwrap().title, "Duplicate");
        assert_eq!(v.len(), 1);
    }
}
