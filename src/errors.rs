//! Error types for the visualizers
//!
//! This module defines [`VisualizerError`], which represents every failure a user
//! interaction can produce: malformed input, operations on empty structures,
//! missing values, out-of-range graph nodes and rejected re-entry while an
//! animation is still running.
//!
//! No error is fatal. Each one is reported as a notification by the control that
//! triggered it, and the structure it concerns is left untouched.

use thiserror::Error;

/// Errors that can occur while driving a visualizer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualizerError {
    /// Input could not be read as an integer
    #[error("Please enter a valid number (got '{input}')")]
    InvalidNumber { input: String },

    /// Array input contained no usable numbers
    #[error("Enter comma-separated numbers, e.g. 64,34,25")]
    EmptyArray,

    /// Search, removal or inspection on an empty structure
    #[error("The {structure} is empty")]
    EmptyStructure { structure: &'static str },

    /// Removal or search of a value that is not present
    #[error("The value {value} does not exist in the {structure}")]
    ValueNotFound {
        value: i64,
        structure: &'static str,
    },

    /// Node id outside the fixed graph
    #[error("Node {id} is out of range (valid ids are 0-{max})")]
    NodeOutOfRange { id: i64, max: usize },

    /// Node id that the graph does not contain
    #[error("Unknown node {id}")]
    UnknownNode { id: usize },

    /// Edge weights must stay positive for shortest paths to be correct
    #[error("Edge {from}-{to} has weight {weight}; weights must be positive")]
    NonPositiveWeight { from: usize, to: usize, weight: i64 },

    /// Operation the structure does not offer (e.g. removing by value from a stack)
    #[error("The {structure} does not support {operation}")]
    UnsupportedOperation {
        operation: &'static str,
        structure: &'static str,
    },

    /// A run is already in progress on this visualizer
    #[error("An animation is already running; reset it or wait for it to finish")]
    AlreadyRunning,

    /// Playback was requested before any steps were generated
    #[error("No steps recorded yet; start the algorithm first")]
    NoSteps,

    /// Stepping past either end of the recorded history
    #[error("{message}")]
    HistoryBoundary { message: String },

    /// Step history grew beyond its memory budget
    #[error("Step history limit exceeded: {current} bytes > {limit} bytes")]
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// Algorithm name not present in the catalog
    #[error("Unknown algorithm '{name}'")]
    UnknownAlgorithm { name: String },
}

impl VisualizerError {
    /// Short title used for the notification headline
    pub fn title(&self) -> &'static str {
        match self {
            VisualizerError::InvalidNumber { .. } | VisualizerError::EmptyArray => "Error",
            VisualizerError::EmptyStructure { .. } => "Empty",
            VisualizerError::ValueNotFound { .. } => "Not found",
            VisualizerError::NodeOutOfRange { .. } | VisualizerError::UnknownNode { .. } => {
                "Invalid node"
            }
            VisualizerError::NonPositiveWeight { .. } => "Invalid weight",
            VisualizerError::UnsupportedOperation { .. } => "Unsupported",
            VisualizerError::AlreadyRunning => "Busy",
            VisualizerError::NoSteps | VisualizerError::HistoryBoundary { .. } => "Playback",
            VisualizerError::SnapshotLimitExceeded { .. } => "Too many steps",
            VisualizerError::UnknownAlgorithm { .. } => "Unknown algorithm",
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, VisualizerError>;
