//! Quicksort with Lomuto partitioning
//!
//! The pivot is the last element of each sub-range. Elements are scanned left to
//! right; anything strictly smaller than the pivot is swapped behind the boundary.
//! Once a pivot lands on its final index it stays marked [`ElementState::Sorted`].
//!
//! Not stable, and quadratic on already-sorted or reverse-sorted input.

use super::{mark, ArrayElement, ElementState, StepKind, StepSink};
use crate::errors::Result;

/// Sort `elements` in place, recording every pivot, comparison and swap
pub fn quick_sort<S: StepSink>(elements: &mut [ArrayElement], sink: &mut S) -> Result<()> {
    if !elements.is_empty() {
        sort_range(elements, 0, elements.len() - 1, sink)?;
        mark(elements, 0..=elements.len() - 1, ElementState::Sorted);
    }
    sink.record(StepKind::Finish, elements)
}

fn sort_range<S: StepSink>(
    elements: &mut [ArrayElement],
    low: usize,
    high: usize,
    sink: &mut S,
) -> Result<()> {
    if low >= high {
        return Ok(());
    }

    let pivot_index = partition(elements, low, high, sink)?;
    if pivot_index > low {
        sort_range(elements, low, pivot_index - 1, sink)?;
    }
    sort_range(elements, pivot_index + 1, high, sink)
}

/// Partition `low..=high` around `elements[high]`, returning the pivot's final index
fn partition<S: StepSink>(
    elements: &mut [ArrayElement],
    low: usize,
    high: usize,
    sink: &mut S,
) -> Result<usize> {
    let pivot_value = elements[high].value;
    elements[high].state = ElementState::Pivot;
    sink.record(StepKind::Pivot, elements)?;

    // Next slot for an element smaller than the pivot
    let mut boundary = low;

    for scan in low..high {
        elements[scan].state = ElementState::Comparing;
        sink.record(StepKind::Compare, elements)?;

        if elements[scan].value < pivot_value {
            elements[boundary].state = ElementState::Swapping;
            elements[scan].state = ElementState::Swapping;
            sink.record(StepKind::MarkSwap, elements)?;

            elements.swap(boundary, scan);
            sink.record(StepKind::Swap, elements)?;

            elements[boundary].state = ElementState::Normal;
            boundary += 1;
        }

        elements[scan].state = ElementState::Normal;
    }

    elements[boundary].state = ElementState::Swapping;
    elements[high].state = ElementState::Swapping;
    sink.record(StepKind::MarkSwap, elements)?;

    elements.swap(boundary, high);
    if boundary != high {
        elements[high].state = ElementState::Normal;
    }
    elements[boundary].state = ElementState::Sorted;
    sink.record(StepKind::Place, elements)?;

    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::TokenSource;
    use crate::sorting::elements_from_values;
    use crate::sorting::test_support::{values, FrameLog};

    fn run(input: &[i64]) -> FrameLog {
        let mut tokens = TokenSource::new();
        let mut elements = elements_from_values(input, &mut tokens);
        let mut log = FrameLog::default();
        quick_sort(&mut elements, &mut log).unwrap();
        log
    }

    #[test]
    fn test_single_element_is_one_step() {
        let log = run(&[42]);
        assert_eq!(log.frames.len(), 1);
        assert_eq!(log.frames[0].0, StepKind::Finish);
        assert_eq!(log.frames[0].1[0].state, ElementState::Sorted);
    }

    #[test]
    fn test_first_step_marks_last_element_as_pivot() {
        let log = run(&[3, 1, 2]);
        let (kind, frame) = &log.frames[0];
        assert_eq!(*kind, StepKind::Pivot);
        assert_eq!(frame[2].state, ElementState::Pivot);
        assert_eq!(frame[2].value, 2);
    }

    #[test]
    fn test_placed_pivot_stays_sorted() {
        let log = run(&[64, 34, 25, 12, 22, 11, 90]);
        let (_, placed) = log
            .frames
            .iter()
            .find(|(kind, _)| *kind == StepKind::Place)
            .unwrap();
        let index = placed
            .iter()
            .position(|e| e.state == ElementState::Sorted)
            .unwrap();

        // Every later frame keeps that slot sorted with the same value
        let value = placed[index].value;
        let later = log
            .frames
            .iter()
            .skip_while(|(kind, _)| *kind != StepKind::Place);
        for (_, frame) in later {
            assert_eq!(frame[index].state, ElementState::Sorted);
            assert_eq!(frame[index].value, value);
        }
    }

    #[test]
    fn test_final_frame_sorted() {
        let log = run(&[64, 34, 25, 12, 22, 11, 90]);
        let (kind, last) = log.frames.last().unwrap();
        assert_eq!(*kind, StepKind::Finish);
        assert_eq!(values(last), vec![11, 12, 22, 25, 34, 64, 90]);
        assert!(last.iter().all(|e| e.state == ElementState::Sorted));
    }

    #[test]
    fn test_tokens_follow_values() {
        let mut tokens = TokenSource::new();
        let mut elements = elements_from_values(&[5, 1, 4], &mut tokens);
        let before: Vec<_> = elements.iter().map(|e| (e.token, e.value)).collect();
        quick_sort(&mut elements, &mut FrameLog::default()).unwrap();

        for element in &elements {
            assert!(before.contains(&(element.token, element.value)));
        }
    }
}
