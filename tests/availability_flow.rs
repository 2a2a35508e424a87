//! End-to-end flows over the availability board: the drag gesture feeding
//! the slot store, exactly as the grid wires them together.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use tutorhub::models::slot::SlotStatus;
use tutorhub::services::availability::{AvailabilityBoard, AvailabilityError, CandidateRange};
use tutorhub::ui::grid::{GridCell, Selection};

fn subject_ids(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// Drag on a column, release, tag with a subject, commit. The happy path.
#[test]
fn drag_then_tag_creates_a_slot() {
    let mut board = AvailabilityBoard::seeded();
    let mut selection = Selection::default();

    // Drag Sunday 10:00 down to 11:00
    board.check_selection_start(0, 10).unwrap();
    selection.begin(GridCell::new(0, 10));
    selection.extend(GridCell::new(0, 11));

    let candidate = selection.resolve().unwrap();
    assert_eq!(
        candidate,
        CandidateRange {
            day: 0,
            start_hour: 10,
            end_hour: 12
        }
    );
    board.check_candidate(&candidate).unwrap();

    let id = board.commit_slot(&candidate, &subject_ids(&["1"])).unwrap();
    let slot = board.slots().iter().find(|s| s.id == id).unwrap();
    assert_eq!(slot.status, SlotStatus::Available);
    assert_eq!(slot.time_range(), "10:00 - 12:00");
    assert!(board.no_overlaps());
}

/// Saving the dialog with nothing checked is rejected and leaves the
/// store untouched; the user can retry with a subject checked.
#[test]
fn empty_subject_save_rejected_then_retried() {
    let mut board = AvailabilityBoard::seeded();
    let before = board.slots().len();
    let candidate = CandidateRange {
        day: 2,
        start_hour: 8,
        end_hour: 9,
    };

    let err = board.commit_slot(&candidate, &BTreeSet::new()).unwrap_err();
    assert_eq!(err, AvailabilityError::NoSubjectsSelected);
    assert_eq!(board.slots().len(), before);

    board.commit_slot(&candidate, &subject_ids(&["2"])).unwrap();
    assert_eq!(board.slots().len(), before + 1);
}

/// A drag released over an existing slot is rejected by the overlap
/// check, including when the drag started in free space.
#[test]
fn overlapping_release_is_rejected() {
    let board = AvailabilityBoard::seeded();
    let mut selection = Selection::default();

    // Seed slot 1 covers Sunday 08:00-10:00. Drag from 07:00 into it.
    board.check_selection_start(0, 7).unwrap();
    selection.begin(GridCell::new(0, 7));
    selection.extend(GridCell::new(0, 9));

    let candidate = selection.resolve().unwrap();
    assert_eq!(
        board.check_candidate(&candidate),
        Err(AvailabilityError::Overlap)
    );
}

/// A slot ending exactly where another begins is accepted.
#[test]
fn touching_slots_are_accepted() {
    let mut board = AvailabilityBoard::seeded();

    // Seed slot 1 is Sunday 08:00-10:00; add 10:00-12:00 right after.
    let candidate = CandidateRange {
        day: 0,
        start_hour: 10,
        end_hour: 12,
    };
    board.commit_slot(&candidate, &subject_ids(&["1"])).unwrap();
    assert!(board.no_overlaps());
}

/// Starting a drag on a booked cell is rejected before any selection
/// state is created.
#[test]
fn drag_cannot_start_on_booked_cell() {
    let board = AvailabilityBoard::seeded();
    assert_eq!(
        board.check_selection_start(0, 14),
        Err(AvailabilityError::BookedCell)
    );
}

/// With no registered subject, the grid is inert.
#[test]
fn no_registered_subjects_blocks_the_grid() {
    let board = AvailabilityBoard::new(6..21);
    assert_eq!(
        board.check_selection_start(3, 9),
        Err(AvailabilityError::NoRegisteredSubjects)
    );
}

/// Deleting an available slot frees its cells for a new drag; deleting a
/// booked slot is rejected.
#[test]
fn delete_respects_booked_immutability() {
    let mut board = AvailabilityBoard::seeded();

    board.delete_slot(1).unwrap();
    assert!(board
        .check_candidate(&CandidateRange {
            day: 0,
            start_hour: 8,
            end_hour: 10
        })
        .is_ok());

    assert_eq!(
        board.delete_slot(2),
        Err(AvailabilityError::BookedImmutable)
    );
}
