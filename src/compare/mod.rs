//! Algorithm catalog and operation-count comparison
//!
//! The Compare view shows three things:
//! - the catalog of every algorithm with its textbook complexity
//! - a growth table of n, n log₂ n and n² for a few sizes
//! - a head-to-head comparison of two algorithms on the same input
//!
//! Comparisons count the operations the step generators actually perform, using
//! an [`OperationCounter`] sink so no frames are stored. Nothing is timed.
//! Traversals always run on the demo graph, so for them the size is ignored and
//! the count is the number of traversal events.

use crate::errors::{Result, VisualizerError};
use crate::graph::{Graph, TraversalAlgorithm};
use crate::sorting::{count_operations, random_values, OperationCounter, SortAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use tracing::info;

/// Input sizes offered for comparisons
pub const DATA_SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Sizes shown in the growth table
pub const GROWTH_SIZES: [usize; 4] = [10, 100, 1_000, 10_000];

/// Any algorithm in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sort(SortAlgorithm),
    Traversal(TraversalAlgorithm),
}

impl Algorithm {
    /// Every algorithm, sorts first
    pub fn catalog() -> Vec<Algorithm> {
        SortAlgorithm::ALL
            .into_iter()
            .map(Algorithm::Sort)
            .chain(TraversalAlgorithm::ALL.into_iter().map(Algorithm::Traversal))
            .collect()
    }

    /// Short lower-case name, e.g. `quicksort`
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Sort(SortAlgorithm::QuickSort) => "quicksort",
            Algorithm::Sort(SortAlgorithm::MergeSort) => "mergesort",
            Algorithm::Traversal(TraversalAlgorithm::Bfs) => "bfs",
            Algorithm::Traversal(TraversalAlgorithm::Dfs) => "dfs",
            Algorithm::Traversal(TraversalAlgorithm::Dijkstra) => "dijkstra",
        }
    }

    pub fn from_key(name: &str) -> Result<Algorithm> {
        let wanted = name.trim().to_ascii_lowercase();
        Self::catalog()
            .into_iter()
            .find(|algorithm| algorithm.key() == wanted)
            .ok_or_else(|| VisualizerError::UnknownAlgorithm {
                name: name.trim().to_string(),
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Sort(sort) => sort.label(),
            Algorithm::Traversal(traversal) => traversal.label(),
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Sort(sort) => sort.complexity(),
            Algorithm::Traversal(traversal) => traversal.complexity(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Sort(sort) => sort.description(),
            Algorithm::Traversal(traversal) => traversal.description(),
        }
    }

    /// Next entry in catalog order, wrapping around
    pub fn next(self) -> Algorithm {
        let catalog = Self::catalog();
        let index = catalog.iter().position(|&a| a == self).unwrap_or(0);
        catalog[(index + 1) % catalog.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the growth table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthRow {
    pub n: usize,
    pub n_log_n: u64,
    pub n_squared: u64,
}

/// n, n log₂ n (rounded) and n² for each size
pub fn complexity_table(sizes: &[usize]) -> Vec<GrowthRow> {
    sizes
        .iter()
        .map(|&n| {
            let n_log_n = if n < 2 {
                0
            } else {
                (n as f64 * (n as f64).log2()).round() as u64
            };
            GrowthRow {
                n,
                n_log_n,
                n_squared: (n as u64).saturating_mul(n as u64),
            }
        })
        .collect()
}

/// Counted work of one algorithm on one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub counts: OperationCounter,
}

impl Measurement {
    pub fn operations(&self) -> usize {
        self.counts.operations()
    }
}

/// Result of a head-to-head comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub size: usize,
    pub seed: u64,
    pub first: Measurement,
    pub second: Measurement,
}

impl Comparison {
    /// Algorithm with fewer operations; `None` on a tie
    pub fn winner(&self) -> Option<Algorithm> {
        match self.first.operations().cmp(&self.second.operations()) {
            std::cmp::Ordering::Less => Some(self.first.algorithm),
            std::cmp::Ordering::Greater => Some(self.second.algorithm),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Count what `algorithm` does on `values` (or on the demo graph)
pub fn measure(algorithm: Algorithm, values: &[i64]) -> Result<Measurement> {
    let counts = match algorithm {
        Algorithm::Sort(sort) => count_operations(sort, values)?,
        Algorithm::Traversal(traversal) => {
            let graph = traversal.demo_graph();
            let end = graph.len().checked_sub(1);
            let events = traversal.traverse(&graph, 0, end)?.events.len();
            OperationCounter {
                steps: events,
                comparisons: edge_checks(&graph),
                ..OperationCounter::default()
            }
        }
    };
    Ok(Measurement { algorithm, counts })
}

// Every traversal scans each reachable node's neighbor list once
fn edge_checks(graph: &Graph) -> usize {
    graph.nodes().iter().map(|node| node.neighbors.len()).sum()
}

/// Run both algorithms on the same random input of `size` values
pub fn compare(first: Algorithm, second: Algorithm, size: usize, seed: u64) -> Result<Comparison> {
    let mut rng = StdRng::seed_from_u64(seed);
    let values = random_values(&mut rng, size);

    let comparison = Comparison {
        size,
        seed,
        first: measure(first, &values)?,
        second: measure(second, &values)?,
    };
    info!(
        first = first.key(),
        second = second.key(),
        size,
        first_ops = comparison.first.operations(),
        second_ops = comparison.second.operations(),
        "comparison finished"
    );
    Ok(comparison)
}

/// Operation counts of every sort at every size, on one random input per size
pub fn sort_growth(sizes: &[usize], seed: u64) -> Result<Vec<(usize, Vec<Measurement>)>> {
    let mut rng = StdRng::seed_from_u64(seed);
    sizes
        .iter()
        .map(|&size| {
            let values = random_values(&mut rng, size);
            let row = SortAlgorithm::ALL
                .into_iter()
                .map(|sort| measure(Algorithm::Sort(sort), &values))
                .collect::<Result<Vec<_>>>()?;
            Ok((size, row))
        })
        .collect()
}
