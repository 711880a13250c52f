//! Sorting step generators
//!
//! Each generator sorts a slice of [`ArrayElement`]s in place and reports every
//! intermediate state to a [`StepSink`]:
//!
//! - [`quick`]: Lomuto partition, pivot = last element of the sub-range
//! - [`merge`]: top-down recursive split, stable merge
//!
//! # Step capture
//!
//! The generators never decide what happens to a step. The snapshot recorder
//! stores a full copy of the array for playback, while [`OperationCounter`] only
//! counts, which keeps comparisons on large inputs cheap.

pub mod merge;
pub mod quick;

use crate::errors::Result;
use crate::ident::{Token, TokenSource};
use rand::Rng;
use std::fmt;

/// Display state of an array element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementState {
    Normal,
    Pivot,
    Comparing,
    Swapping,
    Dividing,
    Merging,
    Sorted,
}

/// One bar of the sorting display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayElement {
    pub value: i64,
    pub state: ElementState,
    pub token: Token,
}

impl ArrayElement {
    pub fn new(value: i64, token: Token) -> Self {
        ArrayElement {
            value,
            state: ElementState::Normal,
            token,
        }
    }
}

/// What happened in a recorded step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Pivot of the current sub-range selected
    Pivot,
    /// Element compared against the pivot
    Compare,
    /// Pair marked for a swap
    MarkSwap,
    /// Pair exchanged
    Swap,
    /// Pivot moved to its final index
    Place,
    /// Range split in two
    Divide,
    /// Range marked for merging
    Merge,
    /// Element written back during a merge; `compared` is false for tail copies
    Write { compared: bool },
    /// Merged range returned to normal
    Merged,
    /// Everything sorted
    Finish,
}

/// Receiver of the steps produced by a generator
pub trait StepSink {
    fn record(&mut self, kind: StepKind, elements: &[ArrayElement]) -> Result<()>;
}

/// Counts operations without keeping any frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationCounter {
    pub steps: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub writes: usize,
}

impl OperationCounter {
    /// Comparisons plus data movements
    pub fn operations(&self) -> usize {
        self.comparisons + self.swaps + self.writes
    }
}

impl StepSink for OperationCounter {
    fn record(&mut self, kind: StepKind, _elements: &[ArrayElement]) -> Result<()> {
        self.steps += 1;
        match kind {
            StepKind::Compare => self.comparisons += 1,
            StepKind::Swap | StepKind::Place => self.swaps += 1,
            StepKind::Write { compared } => {
                self.writes += 1;
                if compared {
                    self.comparisons += 1;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// The sorting algorithms that can be visualized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    QuickSort,
    MergeSort,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::QuickSort, SortAlgorithm::MergeSort];

    pub fn label(self) -> &'static str {
        match self {
            SortAlgorithm::QuickSort => "Quick Sort",
            SortAlgorithm::MergeSort => "Merge Sort",
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            SortAlgorithm::QuickSort => "O(n log n) average",
            SortAlgorithm::MergeSort => "O(n log n) always",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SortAlgorithm::QuickSort => "Divide and conquer around a pivot; fast but not stable",
            SortAlgorithm::MergeSort => "Splits the array, then merges the halves in order; stable",
        }
    }

    /// Input shown when the visualizer opens
    pub fn default_input(self) -> &'static str {
        match self {
            SortAlgorithm::QuickSort => "64,34,25,12,22,11,90",
            SortAlgorithm::MergeSort => "64,34,25,12,22,11,90,88",
        }
    }

    /// Sort `elements` in place, feeding every step to `sink`
    pub fn run<S: StepSink>(self, elements: &mut [ArrayElement], sink: &mut S) -> Result<()> {
        match self {
            SortAlgorithm::QuickSort => quick::quick_sort(elements, sink),
            SortAlgorithm::MergeSort => merge::merge_sort(elements, sink),
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortAlgorithm::QuickSort => SortAlgorithm::MergeSort,
            SortAlgorithm::MergeSort => SortAlgorithm::QuickSort,
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wrap raw values in elements with fresh tokens
pub fn elements_from_values(values: &[i64], tokens: &mut TokenSource) -> Vec<ArrayElement> {
    values
        .iter()
        .map(|&value| ArrayElement::new(value, tokens.next_token()))
        .collect()
}

/// Random values in `1..=100`
pub fn random_values<R: Rng>(rng: &mut R, count: usize) -> Vec<i64> {
    (0..count).map(|_| rng.gen_range(1..=100)).collect()
}

/// Count the operations `algorithm` performs on `values`
pub fn count_operations(algorithm: SortAlgorithm, values: &[i64]) -> Result<OperationCounter> {
    let mut tokens = TokenSource::new();
    let mut elements = elements_from_values(values, &mut tokens);
    let mut counter = OperationCounter::default();
    algorithm.run(&mut elements, &mut counter)?;
    Ok(counter)
}

/// Mark every element in `range` with `state`
pub(crate) fn mark(
    elements: &mut [ArrayElement],
    range: std::ops::RangeInclusive<usize>,
    state: ElementState,
) {
    for element in &mut elements[range] {
        element.state = state;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Sink that keeps every frame, for assertions
    #[derive(Default)]
    pub struct FrameLog {
        pub frames: Vec<(StepKind, Vec<ArrayElement>)>,
    }

    impl StepSink for FrameLog {
        fn record(&mut self, kind: StepKind, elements: &[ArrayElement]) -> Result<()> {
            self.frames.push((kind, elements.to_vec()));
            Ok(())
        }
    }

    pub fn values(frame: &[ArrayElement]) -> Vec<i64> {
        frame.iter().map(|e| e.value).collect()
    }
}
