//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`home`]: Section cards on the home view, and the not-found view
//! - [`tabs`]: Visualizer tabs at the top of each topic view
//! - [`bars`]: Sorting bar chart coloured by element state, with the step panel
//! - [`graph`]: Graph canvas with nodes coloured by traversal flags
//! - [`structures`]: Lists, stack and queue as boxes; the tree on a canvas
//! - [`compare`]: Catalog, growth and comparison tables
//! - [`input`]: The single-line input field
//! - [`notifications`]: Notification log
//! - [`status`]: Status bar with keybindings and state badge
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function, plus a `RenderData`
//! struct where the pane needs more than a couple of values. Panes only read state.

pub mod bars;
pub mod compare;
pub mod graph;
pub mod home;
pub mod input;
pub mod notifications;
pub mod status;
pub mod structures;
pub mod tabs;

// Re-export render functions for convenience
pub use bars::{render_bars_pane, SortRenderData};
pub use compare::{render_compare_pane, CompareRenderData};
pub use graph::{render_graph_pane, GraphRenderData};
pub use home::{render_home_pane, render_not_found_pane};
pub use input::render_input_line;
pub use notifications::render_notifications_pane;
pub use status::{render_status_bar, Badge, StatusRenderData};
pub use structures::{render_structure_pane, StructureRenderData};
pub use tabs::render_tabs;
