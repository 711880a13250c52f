//! Per-topic controllers
//!
//! A visualizer owns one structure, the generator or traversal that runs on it,
//! and the driver that animates the result:
//!
//! - [`sort::SortVisualizer`]: precomputed step history scrubbed by a playback cursor
//! - [`graph::TraversalVisualizer`]: traversal events replayed through a timeline
//! - [`structure::StructureVisualizer`]: direct mutations plus animated searches
//!
//! Every user-facing operation returns `Result<Notification>`; the caller reports
//! either side to the notification log. `tick` delivers due animation steps and
//! returns a notification when a run completes.

pub mod graph;
pub mod sort;
pub mod structure;

pub use graph::TraversalVisualizer;
pub use sort::SortVisualizer;
pub use structure::{StructureOp, StructureVisualizer};
