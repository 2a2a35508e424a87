//! Tutor availability board: the weekly slot store behind the
//! drag-to-select grid.
//!
//! Owns the tutor's registered subjects and time slots, enforces the
//! no-overlap invariant, and gates every mutation behind the rules the
//! grid surfaces as toasts. All state is in-memory for the component's
//! lifetime.

use std::collections::BTreeSet;
use std::ops::Range;

use thiserror::Error;

use crate::models::slot::{SlotId, SlotStatus, TimeSlot};
use crate::models::subject::{Subject, SubjectId};

/// Rejection reasons for grid interactions. Every variant maps to a
/// user-facing notice; none of these abort the application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    #[error("Register at least one subject before setting availability")]
    NoRegisteredSubjects,
    #[error("Cannot modify booked time")]
    BookedCell,
    #[error("This time range overlaps an existing slot")]
    Overlap,
    #[error("Select at least one subject for this slot")]
    NoSubjectsSelected,
    #[error("Subject '{0}' is not registered")]
    UnregisteredSubject(SubjectId),
    #[error("Cannot delete a booked time slot")]
    BookedImmutable,
    #[error("Time slot {0} not found")]
    SlotNotFound(SlotId),
}

/// The provisional time selection produced by a completed drag gesture,
/// normalized to a half-open hour range on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateRange {
    pub day: u8,
    pub start_hour: u8,
    /// Exclusive upper bound
    pub end_hour: u8,
}

/// In-memory repository for one tutor's subjects and availability slots
pub struct AvailabilityBoard {
    subjects: Vec<Subject>,
    slots: Vec<TimeSlot>,
    /// Hour range rendered by the grid, half-open
    hours: Range<u8>,
}

impl AvailabilityBoard {
    /// Create an empty board over the given hour range
    pub fn new(hours: Range<u8>) -> Self {
        debug_assert!(hours.start < hours.end && hours.end <= 24);
        Self {
            subjects: Vec::new(),
            slots: Vec::new(),
            hours,
        }
    }

    /// Empty board with a known subject list
    pub fn with_subjects(hours: Range<u8>, subjects: Vec<Subject>) -> Self {
        let mut board = Self::new(hours);
        board.subjects = subjects;
        board
    }

    /// Board seeded with the demo tutor's subjects and slots
    pub fn seeded() -> Self {
        let mut board = Self::new(6..21);

        board.subjects = vec![
            Subject::new("1", "Calculus 2", "MT1007", true),
            Subject::new("2", "Linear Algebra", "MT1003", true),
            Subject::new("3", "Discrete Mathematics", "MT1013", true),
            Subject::new("4", "Probability & Statistics", "MT2013", false),
            Subject::new("5", "Calculus 3", "MT2007", false),
            Subject::new("6", "Differential Equations", "MT2015", false),
        ]
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("seed subjects are valid");

        board.slots = vec![
            TimeSlot::new(1, 0, 8, 10, subject_set(&["1", "2"])).expect("seed slot is valid"),
            TimeSlot {
                id: 2,
                day: 0,
                start_hour: 14,
                end_hour: 16,
                status: SlotStatus::Booked {
                    occupant: "Nguyen Van A".to_string(),
                },
                subjects: subject_set(&["1"]),
            },
            TimeSlot::new(3, 1, 9, 11, subject_set(&["2", "3"])).expect("seed slot is valid"),
            TimeSlot::new(4, 1, 15, 17, subject_set(&["1", "2", "3"])).expect("seed slot is valid"),
        ];

        debug_assert!(board.no_overlaps());
        board
    }

    pub fn hours(&self) -> Range<u8> {
        self.hours.clone()
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn registered_subjects(&self) -> Vec<&Subject> {
        self.subjects.iter().filter(|s| s.registered).collect()
    }

    pub fn subject_name(&self, id: &str) -> Option<&str> {
        self.subjects
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
    }

    /// Flip a subject's registration. Existing slots keep their tags;
    /// registration only gates future slot creation.
    pub fn toggle_subject(&mut self, id: &str) -> anyhow::Result<bool> {
        let subject = self
            .subjects
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| anyhow::anyhow!("Subject with id {} not found", id))?;
        subject.registered = !subject.registered;
        Ok(subject.registered)
    }

    /// Slot covering the one-hour cell, if any
    pub fn slot_at(&self, day: u8, hour: u8) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.covers_cell(day, hour))
    }

    /// Gate for starting a drag on `(day, hour)`: the tutor must have a
    /// registered subject and the cell must not be booked.
    pub fn check_selection_start(&self, day: u8, hour: u8) -> Result<(), AvailabilityError> {
        if self.registered_subjects().is_empty() {
            return Err(AvailabilityError::NoRegisteredSubjects);
        }
        if self
            .slot_at(day, hour)
            .is_some_and(|s| s.status.is_booked())
        {
            return Err(AvailabilityError::BookedCell);
        }
        Ok(())
    }

    /// Overlap validator: reject iff any existing slot on the candidate's
    /// day intersects its half-open range. Touching ranges pass.
    pub fn check_candidate(&self, candidate: &CandidateRange) -> Result<(), AvailabilityError> {
        let conflict = self
            .slots
            .iter()
            .any(|s| s.overlaps(candidate.day, candidate.start_hour, candidate.end_hour));
        if conflict {
            return Err(AvailabilityError::Overlap);
        }
        Ok(())
    }

    /// Append a new available slot for the candidate range, tagged with
    /// the chosen subjects.
    ///
    /// The chosen set must be non-empty and drawn from the currently
    /// registered subjects; the overlap check is re-run so the store can
    /// never be driven into an inconsistent state by a stale dialog.
    pub fn commit_slot(
        &mut self,
        candidate: &CandidateRange,
        chosen: &BTreeSet<SubjectId>,
    ) -> Result<SlotId, AvailabilityError> {
        if chosen.is_empty() {
            return Err(AvailabilityError::NoSubjectsSelected);
        }
        for id in chosen {
            let registered = self
                .subjects
                .iter()
                .any(|s| s.id == *id && s.registered);
            if !registered {
                return Err(AvailabilityError::UnregisteredSubject(id.clone()));
            }
        }
        self.check_candidate(candidate)?;

        let id = self.next_id();
        let slot = TimeSlot::new(
            id,
            candidate.day,
            candidate.start_hour,
            candidate.end_hour,
            chosen.clone(),
        )
        .map_err(|_| AvailabilityError::Overlap)?;

        self.slots.push(slot);
        debug_assert!(self.no_overlaps());
        log::info!(
            "Added availability slot {} on day {} ({:02}:00-{:02}:00)",
            id,
            candidate.day,
            candidate.start_hour,
            candidate.end_hour
        );
        Ok(id)
    }

    /// Remove an available slot. Booked slots are immutable and rejected
    /// even though the delete control is hidden for them.
    pub fn delete_slot(&mut self, id: SlotId) -> Result<(), AvailabilityError> {
        let slot = self
            .slots
            .iter()
            .find(|s| s.id == id)
            .ok_or(AvailabilityError::SlotNotFound(id))?;
        if slot.status.is_booked() {
            log::warn!("Rejected delete of booked slot {}", id);
            return Err(AvailabilityError::BookedImmutable);
        }
        self.slots.retain(|s| s.id != id);
        log::info!("Deleted availability slot {}", id);
        Ok(())
    }

    /// Slots on one day, ordered by start hour (for the list rendering)
    pub fn slots_for_day(&self, day: u8) -> Vec<&TimeSlot> {
        let mut slots: Vec<&TimeSlot> = self.slots.iter().filter(|s| s.day == day).collect();
        slots.sort_by_key(|s| s.start_hour);
        slots
    }

    /// Invariant: no two slots on the same day intersect
    pub fn no_overlaps(&self) -> bool {
        for (i, a) in self.slots.iter().enumerate() {
            for b in &self.slots[i + 1..] {
                if a.overlaps(b.day, b.start_hour, b.end_hour) {
                    return false;
                }
            }
        }
        true
    }

    fn next_id(&self) -> SlotId {
        self.slots.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }
}

fn subject_set(ids: &[&str]) -> BTreeSet<SubjectId> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_board_with_subject() -> AvailabilityBoard {
        let mut board = AvailabilityBoard::new(6..21);
        board.subjects = vec![Subject::new("1", "Calculus 2", "MT1007", true).unwrap()];
        board
    }

    fn candidate(day: u8, start: u8, end: u8) -> CandidateRange {
        CandidateRange {
            day,
            start_hour: start,
            end_hour: end,
        }
    }

    #[test]
    fn test_seeded_board_is_consistent() {
        let board = AvailabilityBoard::seeded();
        assert!(board.no_overlaps());
        assert_eq!(board.registered_subjects().len(), 3);
        assert_eq!(board.hours(), 6..21);
    }

    #[test]
    fn test_first_id_is_one() {
        let mut board = empty_board_with_subject();
        let id = board
            .commit_slot(&candidate(0, 8, 9), &subject_set(&["1"]))
            .unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn test_ids_are_max_plus_one() {
        let mut board = empty_board_with_subject();
        board
            .commit_slot(&candidate(0, 8, 9), &subject_set(&["1"]))
            .unwrap();
        let id = board
            .commit_slot(&candidate(3, 8, 9), &subject_set(&["1"]))
            .unwrap();
        assert_eq!(id, 2);
    }

    #[test]
    fn test_selection_start_requires_registered_subject() {
        let board = AvailabilityBoard::new(6..21);
        assert_eq!(
            board.check_selection_start(0, 8),
            Err(AvailabilityError::NoRegisteredSubjects)
        );
    }

    #[test]
    fn test_selection_start_rejects_booked_cell() {
        let board = AvailabilityBoard::seeded();
        // Seed slot 2 is booked on Sunday 14:00-16:00
        assert_eq!(
            board.check_selection_start(0, 14),
            Err(AvailabilityError::BookedCell)
        );
        assert_eq!(
            board.check_selection_start(0, 15),
            Err(AvailabilityError::BookedCell)
        );
        assert!(board.check_selection_start(0, 16).is_ok());
    }

    #[test]
    fn test_selection_start_allows_available_cell() {
        let board = AvailabilityBoard::seeded();
        // Available slots do not block a new gesture; the overlap check
        // rejects the resulting candidate instead.
        assert!(board.check_selection_start(0, 8).is_ok());
    }

    #[test]
    fn test_overlap_rejected_touching_accepted() {
        let mut board = empty_board_with_subject();
        board
            .commit_slot(&candidate(1, 9, 11), &subject_set(&["1"]))
            .unwrap();

        assert_eq!(
            board.check_candidate(&candidate(1, 10, 12)),
            Err(AvailabilityError::Overlap)
        );
        assert!(board.check_candidate(&candidate(1, 11, 13)).is_ok());
        assert!(board.check_candidate(&candidate(2, 10, 12)).is_ok());
    }

    #[test]
    fn test_commit_requires_subjects() {
        let mut board = empty_board_with_subject();
        let err = board
            .commit_slot(&candidate(0, 8, 9), &BTreeSet::new())
            .unwrap_err();
        assert_eq!(err, AvailabilityError::NoSubjectsSelected);
        assert!(board.slots().is_empty());
    }

    #[test]
    fn test_commit_rejects_unregistered_subject() {
        let mut board = empty_board_with_subject();
        board.subjects.push(Subject::new("4", "Probability & Statistics", "MT2013", false).unwrap());

        let err = board
            .commit_slot(&candidate(0, 8, 9), &subject_set(&["4"]))
            .unwrap_err();
        assert_eq!(err, AvailabilityError::UnregisteredSubject("4".to_string()));
    }

    #[test]
    fn test_commit_rechecks_overlap() {
        let mut board = empty_board_with_subject();
        board
            .commit_slot(&candidate(2, 9, 11), &subject_set(&["1"]))
            .unwrap();
        let err = board
            .commit_slot(&candidate(2, 10, 12), &subject_set(&["1"]))
            .unwrap_err();
        assert_eq!(err, AvailabilityError::Overlap);
        assert_eq!(board.slots().len(), 1);
    }

    #[test]
    fn test_delete_available_slot() {
        let mut board = empty_board_with_subject();
        let id = board
            .commit_slot(&candidate(0, 8, 9), &subject_set(&["1"]))
            .unwrap();
        board.delete_slot(id).unwrap();
        assert!(board.slots().is_empty());
    }

    #[test]
    fn test_delete_booked_slot_rejected_store_unchanged() {
        let mut board = AvailabilityBoard::seeded();
        let before = board.slots().to_vec();

        let err = board.delete_slot(2).unwrap_err();
        assert_eq!(err, AvailabilityError::BookedImmutable);
        assert_eq!(board.slots(), before.as_slice());
    }

    #[test]
    fn test_delete_unknown_slot() {
        let mut board = empty_board_with_subject();
        assert_eq!(
            board.delete_slot(99),
            Err(AvailabilityError::SlotNotFound(99))
        );
    }

    #[test]
    fn test_unregistering_keeps_existing_slots() {
        let mut board = AvailabilityBoard::seeded();
        board.toggle_subject("1").unwrap();
        // Slot 1 still carries subject "1"
        assert!(board.slots()[0].subjects.contains("1"));
        // But new slots can no longer be tagged with it
        let err = board
            .commit_slot(&candidate(4, 8, 9), &subject_set(&["1"]))
            .unwrap_err();
        assert_eq!(err, AvailabilityError::UnregisteredSubject("1".to_string()));
    }

    #[test]
    fn test_slots_for_day_sorted() {
        let board = AvailabilityBoard::seeded();
        let monday = board.slots_for_day(1);
        assert_eq!(monday.len(), 2);
        assert!(monday[0].start_hour < monday[1].start_hour);
    }
}
