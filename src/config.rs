//! Command-line flags and runtime configuration
//!
//! [`Args`] is what clap parses; [`Config`] is the validated form the rest of the
//! crate reads. Tests build a [`Config::default()`] directly.

use crate::compare::Algorithm;
use crate::snapshot::{MAX_SPEED, MIN_SPEED};
use crate::sorting::SortAlgorithm;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Default playback speed on the `MIN_SPEED..=MAX_SPEED` scale
pub const DEFAULT_SPEED: u64 = 500;

/// Delay between traversal and search animation events
pub const DEFAULT_STEP_DELAY_MS: u64 = 1000;

/// Length of a randomized array
pub const RANDOM_ARRAY_LEN: usize = 8;

pub const DEFAULT_SNAPSHOT_LIMIT_MB: u64 = 64;

/// Step-by-step visualizer for data structures and algorithms
#[derive(Parser, Debug, Clone)]
#[command(name = "algoviz")]
#[command(about = "Step-by-step terminal visualizer for data structures and algorithms")]
pub struct Args {
    /// View to open first: /, /structures, /sorting, /search or /compare
    #[arg(long, default_value = "/")]
    pub view: String,

    /// Initial array for the sorting visualizers, e.g. "5,3,8,1"
    #[arg(long)]
    pub array: Option<String>,

    /// Sorting playback speed (100 = slowest, 1000 = fastest)
    #[arg(long, default_value_t = DEFAULT_SPEED, value_parser = clap::value_parser!(u64).range(MIN_SPEED..=MAX_SPEED))]
    pub speed: u64,

    /// Delay between traversal and search animation events, in milliseconds
    #[arg(long, default_value_t = DEFAULT_STEP_DELAY_MS, value_parser = clap::value_parser!(u64).range(10..=10_000))]
    pub step_delay_ms: u64,

    /// Seed for randomized arrays and comparisons
    #[arg(long)]
    pub seed: Option<u64>,

    /// First algorithm on the Compare view: quicksort, mergesort, bfs, dfs or dijkstra
    #[arg(long, default_value = "quicksort", value_parser = Algorithm::from_key)]
    pub first: Algorithm,

    /// Second algorithm on the Compare view
    #[arg(long, default_value = "mergesort", value_parser = Algorithm::from_key)]
    pub second: Algorithm,

    /// Memory budget for recorded sorting steps, in MiB
    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_LIMIT_MB, value_parser = clap::value_parser!(u64).range(1..=4096))]
    pub snapshot_limit_mb: u64,

    /// File that receives log output (the terminal is owned by the UI)
    #[arg(long, default_value = "algoviz.log")]
    pub log_file: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub start_view: String,
    /// Overrides both sorting visualizers' default input
    pub array_input: Option<String>,
    pub speed: u64,
    pub step_delay: Duration,
    pub seed: Option<u64>,
    /// Initial selections of the Compare view
    pub compare: (Algorithm, Algorithm),
    /// Bytes
    pub snapshot_limit: usize,
}

impl Config {
    /// Pause after Dijkstra selects a node, longer than a plain step
    pub fn select_delay(&self) -> Duration {
        self.step_delay * 3 / 2
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_view: "/".to_string(),
            array_input: None,
            speed: DEFAULT_SPEED,
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
            seed: None,
            compare: (
                Algorithm::Sort(SortAlgorithm::QuickSort),
                Algorithm::Sort(SortAlgorithm::MergeSort),
            ),
            snapshot_limit: (DEFAULT_SNAPSHOT_LIMIT_MB * 1024 * 1024) as usize,
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config {
            start_view: args.view.clone(),
            array_input: args.array.clone(),
            speed: args.speed.clamp(MIN_SPEED, MAX_SPEED),
            step_delay: Duration::from_millis(args.step_delay_ms),
            seed: args.seed,
            compare: (args.first, args.second),
            snapshot_limit: usize::try_from(args.snapshot_limit_mb.saturating_mul(1024 * 1024))
                .unwrap_or(usize::MAX),
        }
    }
}
