//! Property tests for the availability board and the drag gesture.

use std::collections::BTreeSet;

use proptest::prelude::*;
use tutorhub::models::subject::Subject;
use tutorhub::services::availability::{AvailabilityBoard, AvailabilityError, CandidateRange};
use tutorhub::ui::grid::{GridCell, Selection};

fn board_with_one_subject() -> AvailabilityBoard {
    let subject = Subject::new("1", "Calculus 2", "MT1007", true).unwrap();
    AvailabilityBoard::with_subjects(6..21, vec![subject])
}

// A candidate within the grid's hour range
fn candidate_strategy() -> impl Strategy<Value = CandidateRange> {
    (0u8..7, 6u8..20, 1u8..4).prop_map(|(day, start, len)| CandidateRange {
        day,
        start_hour: start,
        end_hour: (start + len).min(21),
    })
}

proptest! {
    /// Whatever sequence of commits is attempted, the store never holds
    /// two intersecting slots, and every rejection is the overlap error.
    #[test]
    fn store_never_overlaps(candidates in prop::collection::vec(candidate_strategy(), 1..40)) {
        let mut board = board_with_one_subject();
        let chosen: BTreeSet<String> = ["1".to_string()].into();

        for candidate in &candidates {
            match board.commit_slot(candidate, &chosen) {
                Ok(_) => {}
                Err(err) => prop_assert_eq!(err, AvailabilityError::Overlap),
            }
            prop_assert!(board.no_overlaps());
        }
    }

    /// A commit is accepted exactly when the validator accepts it.
    #[test]
    fn commit_agrees_with_check(candidates in prop::collection::vec(candidate_strategy(), 1..40)) {
        let mut board = board_with_one_subject();
        let chosen: BTreeSet<String> = ["1".to_string()].into();

        for candidate in &candidates {
            let allowed = board.check_candidate(candidate).is_ok();
            let committed = board.commit_slot(candidate, &chosen).is_ok();
            prop_assert_eq!(allowed, committed);
        }
    }

    /// Deleting a slot always restores the space it occupied.
    #[test]
    fn delete_frees_the_range(candidate in candidate_strategy()) {
        let mut board = board_with_one_subject();
        let chosen: BTreeSet<String> = ["1".to_string()].into();

        let id = board.commit_slot(&candidate, &chosen).unwrap();
        prop_assert!(board.check_candidate(&candidate).is_err());

        board.delete_slot(id).unwrap();
        prop_assert!(board.check_candidate(&candidate).is_ok());
    }

    /// Any drag resolves to a well-formed half-open range on the anchor's
    /// day, regardless of direction or day wandering.
    #[test]
    fn gesture_resolves_to_valid_range(
        anchor_day in 0u8..7,
        anchor_hour in 6u8..21,
        moves in prop::collection::vec((0u8..7, 6u8..21), 0..10),
    ) {
        let mut selection = Selection::default();
        selection.begin(GridCell::new(anchor_day, anchor_hour));
        for (day, hour) in moves {
            selection.extend(GridCell::new(day, hour));
        }

        let candidate = selection.resolve().unwrap();
        prop_assert_eq!(candidate.day, anchor_day);
        prop_assert!(candidate.start_hour < candidate.end_hour);
        prop_assert!(candidate.start_hour >= 6 && candidate.end_hour <= 21);
        prop_assert!(!selection.is_selecting());
    }
}
