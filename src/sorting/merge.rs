//! Top-down mergesort
//!
//! Every split marks its range [`ElementState::Dividing`]; every merge marks its
//! range [`ElementState::Merging`] and records a frame after each element is
//! written back. Ties take the element from the left half, so the sort is stable.

use super::{mark, ArrayElement, ElementState, StepKind, StepSink};
use crate::errors::Result;

/// Sort `elements` in place, recording every split and every merge write
pub fn merge_sort<S: StepSink>(elements: &mut [ArrayElement], sink: &mut S) -> Result<()> {
    if !elements.is_empty() {
        sort_range(elements, 0, elements.len() - 1, sink)?;
        mark(elements, 0..=elements.len() - 1, ElementState::Sorted);
    }
    sink.record(StepKind::Finish, elements)
}

fn sort_range<S: StepSink>(
    elements: &mut [ArrayElement],
    left: usize,
    right: usize,
    sink: &mut S,
) -> Result<()> {
    if left >= right {
        return Ok(());
    }

    mark(elements, left..=right, ElementState::Dividing);
    sink.record(StepKind::Divide, elements)?;

    let mid = left + (right - left) / 2;
    sort_range(elements, left, mid, sink)?;
    sort_range(elements, mid + 1, right, sink)?;
    merge(elements, left, mid, right, sink)
}

fn merge<S: StepSink>(
    elements: &mut [ArrayElement],
    left: usize,
    mid: usize,
    right: usize,
    sink: &mut S,
) -> Result<()> {
    mark(elements, left..=right, ElementState::Merging);
    sink.record(StepKind::Merge, elements)?;

    let left_half = elements[left..=mid].to_vec();
    let right_half = elements[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_half.len() && j < right_half.len() {
        // `<=` keeps equal elements in input order
        if left_half[i].value <= right_half[j].value {
            elements[k] = left_half[i];
            i += 1;
        } else {
            elements[k] = right_half[j];
            j += 1;
        }
        elements[k].state = ElementState::Merging;
        k += 1;
        sink.record(StepKind::Write { compared: true }, elements)?;
    }

    for &element in left_half[i..].iter().chain(&right_half[j..]) {
        elements[k] = element;
        elements[k].state = ElementState::Merging;
        k += 1;
        sink.record(StepKind::Write { compared: false }, elements)?;
    }

    mark(elements, left..=right, ElementState::Normal);
    sink.record(StepKind::Merged, elements)
}
