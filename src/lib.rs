//! # Introduction
//!
//! AlgoViz shows classic data structures and algorithms one step at a time in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Structure / Array / Graph → Steps or Events → Playback / Timeline → TUI
//! ```
//!
//! 1. [`input`] parses typed numbers, arrays and node ids.
//! 2. [`sorting`] runs quicksort and mergesort, recording a [`snapshot::Snapshot`]
//!    after every step; [`snapshot::Playback`] scrubs through them.
//! 3. [`graph`] runs BFS, DFS and Dijkstra on small demo graphs and returns the
//!    events to animate.
//! 4. [`structures`] holds the linked lists, binary search tree, stack and queue.
//! 5. [`animation`] delivers scheduled events with a cancellable [`animation::Timeline`].
//! 6. [`visualizer`] ties a structure, its algorithm and its driver together.
//! 7. [`compare`] lists the algorithms with their complexities and counts
//!    operations on shared random input.
//! 8. [`ui`] renders it all; not part of the stable library API.
//!
//! Every user-facing operation returns `Result<Notification, VisualizerError>` and
//! leaves state untouched on the error path.

pub mod animation;
pub mod compare;
pub mod config;
pub mod errors;
pub mod graph;
pub mod ident;
pub mod input;
pub mod notify;
pub mod snapshot;
pub mod sorting;
pub mod structures;
pub mod ui;
pub mod visualizer;
