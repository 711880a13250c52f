// Integration tests for the sorting step generators and playback

use algoviz::ident::TokenSource;
use algoviz::snapshot::{Playback, SnapshotManager};
use algoviz::sorting::{elements_from_values, ElementState, SortAlgorithm, StepKind};
use proptest::prelude::*;
use std::time::Instant;

const LIMIT: usize = 64 * 1024 * 1024;

fn record(algorithm: SortAlgorithm, values: &[i64]) -> SnapshotManager {
    let mut tokens = TokenSource::new();
    let mut elements = elements_from_values(values, &mut tokens);
    let mut history = SnapshotManager::new(LIMIT);
    algorithm
        .run(&mut elements, &mut history)
        .expect("sorting should record within the limit");
    history
}

fn final_values(history: &SnapshotManager) -> Vec<i64> {
    history
        .last()
        .expect("at least one step")
        .elements
        .iter()
        .map(|e| e.value)
        .collect()
}

proptest! {
    #[test]
    fn test_final_step_is_sorted_permutation(
        values in prop::collection::vec(-50i64..50, 0..40),
        merge in any::<bool>(),
    ) {
        let algorithm = if merge { SortAlgorithm::MergeSort } else { SortAlgorithm::QuickSort };
        let history = record(algorithm, &values);

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(final_values(&history), expected);

        let last = history.last().expect("at least one step");
        prop_assert_eq!(last.kind, StepKind::Finish);
        prop_assert!(last.elements.iter().all(|e| e.state == ElementState::Sorted));
    }

    #[test]
    fn test_merge_sort_is_stable(values in prop::collection::vec(0i64..5, 1..30)) {
        let history = record(SortAlgorithm::MergeSort, &values);
        let last = history.last().expect("at least one step");

        // Tokens were handed out in input order, so equal values must keep ascending tokens
        for pair in last.elements.windows(2) {
            if pair[0].value == pair[1].value {
                prop_assert!(pair[0].token < pair[1].token);
            }
        }
    }
}

#[test]
fn test_empty_and_single_inputs_record_only_finish() {
    for algorithm in SortAlgorithm::ALL {
        let history = record(algorithm, &[]);
        assert_eq!(history.len(), 1);

        let history = record(algorithm, &[7]);
        assert_eq!(history.len(), 1);
        assert_eq!(final_values(&history), vec![7]);
    }
}

#[test]
fn test_reverse_sorted_quick_sort_still_sorts() {
    let values: Vec<i64> = (1..=20).rev().collect();
    let history = record(SortAlgorithm::QuickSort, &values);
    assert_eq!(final_values(&history), (1..=20).collect::<Vec<_>>());
}

#[test]
fn test_playback_walks_recorded_history() {
    let history = record(SortAlgorithm::QuickSort, &[3, 1, 2]);
    let total = history.len();
    let now = Instant::now();
    let mut playback = Playback::new(history, 500, now).unwrap();

    assert!(playback.is_at_start());
    playback.jump_to_end();
    assert!(playback.is_at_end());
    assert_eq!(playback.position(), total - 1);
    assert!(playback.step_forward().is_err());

    playback.rewind_to_start();
    assert_eq!(playback.position(), 0);
    assert!(playback.step_backward().is_err());
}
