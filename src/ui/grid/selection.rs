//! Drag-selection state machine for the weekly availability grid.
//!
//! The gesture is modeled as an explicit state enum instead of nullable
//! coordinates: idle -> selecting on pointer-down, selecting -> selecting
//! on pointer-enter, selecting -> idle on pointer-up or pointer-leave.
//! Resolution always happens, so the grid can never be left with a stuck
//! selection.

use crate::services::availability::CandidateRange;

/// One cell of the hour-by-weekday matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// 0 = Sunday .. 6 = Saturday
    pub day: u8,
    pub hour: u8,
}

impl GridCell {
    pub fn new(day: u8, hour: u8) -> Self {
        Self { day, hour }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selecting {
        anchor: GridCell,
        cursor: GridCell,
    },
}

impl Selection {
    /// Pointer-down: start a gesture anchored at `cell`. Guards (subject
    /// registration, booked cells) are the board's job and run before this.
    pub fn begin(&mut self, cell: GridCell) {
        *self = Selection::Selecting {
            anchor: cell,
            cursor: cell,
        };
    }

    /// Pointer-enter while dragging: move the cursor. Cross-day drags are
    /// clamped to the anchor's day, only the hour follows the pointer.
    /// Entering a cell above the anchor re-anchors the gesture there, so
    /// a selection only ever grows downward from its anchor.
    pub fn extend(&mut self, cell: GridCell) {
        if let Selection::Selecting { anchor, cursor } = self {
            if cell.hour < anchor.hour {
                let restart = GridCell::new(anchor.day, cell.hour);
                *anchor = restart;
                *cursor = restart;
            } else {
                *cursor = GridCell::new(anchor.day, cell.hour);
            }
        }
    }

    /// Pointer-up (or pointer-leave, treated identically): finish the
    /// gesture and normalize it to a half-open candidate range
    /// `[min(anchor, cursor), max(anchor, cursor) + 1)` on the anchor's day.
    pub fn resolve(&mut self) -> Option<CandidateRange> {
        match *self {
            Selection::Idle => None,
            Selection::Selecting { anchor, cursor } => {
                *self = Selection::Idle;
                let start = anchor.hour.min(cursor.hour);
                let end = anchor.hour.max(cursor.hour) + 1;
                Some(CandidateRange {
                    day: anchor.day,
                    start_hour: start,
                    end_hour: end,
                })
            }
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, Selection::Selecting { .. })
    }

    /// Whether `cell` falls inside the in-progress selection (for the
    /// highlight while dragging)
    pub fn covers(&self, cell: GridCell) -> bool {
        match self {
            Selection::Idle => false,
            Selection::Selecting { anchor, cursor } => {
                let lo = anchor.hour.min(cursor.hour);
                let hi = anchor.hour.max(cursor.hour);
                cell.day == anchor.day && lo <= cell.hour && cell.hour <= hi
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(10, 8, 8, 9; "decreasing drag re-anchors at the entered cell")]
    #[test_case(8, 10, 8, 11; "increasing drag extends from the anchor")]
    #[test_case(8, 8, 8, 9; "single cell is one hour")]
    fn resolve_normalizes(anchor_hour: u8, cursor_hour: u8, start: u8, end: u8) {
        let mut selection = Selection::default();
        selection.begin(GridCell::new(2, anchor_hour));
        selection.extend(GridCell::new(2, cursor_hour));

        let candidate = selection.resolve().unwrap();
        assert_eq!(candidate.day, 2);
        assert_eq!(candidate.start_hour, start);
        assert_eq!(candidate.end_hour, end);
        assert_eq!(selection, Selection::Idle);
    }

    #[test]
    fn test_cross_day_drag_clamped_to_anchor_day() {
        let mut selection = Selection::default();
        selection.begin(GridCell::new(3, 9));
        selection.extend(GridCell::new(5, 12));

        let candidate = selection.resolve().unwrap();
        assert_eq!(candidate.day, 3);
        assert_eq!(candidate.start_hour, 9);
        assert_eq!(candidate.end_hour, 13);
    }

    #[test]
    fn test_resolve_idle_is_none() {
        let mut selection = Selection::default();
        assert!(selection.resolve().is_none());
    }

    #[test]
    fn test_extend_without_begin_is_ignored() {
        let mut selection = Selection::default();
        selection.extend(GridCell::new(1, 10));
        assert_eq!(selection, Selection::Idle);
    }

    #[test]
    fn test_covers_during_drag() {
        let mut selection = Selection::default();
        selection.begin(GridCell::new(1, 8));
        selection.extend(GridCell::new(1, 10));

        assert!(selection.covers(GridCell::new(1, 8)));
        assert!(selection.covers(GridCell::new(1, 9)));
        assert!(selection.covers(GridCell::new(1, 10)));
        assert!(!selection.covers(GridCell::new(1, 11)));
        assert!(!selection.covers(GridCell::new(2, 9)));
    }

    #[test]
    fn test_re_anchor_drops_cells_above_the_new_anchor() {
        let mut selection = Selection::default();
        selection.begin(GridCell::new(1, 10));
        selection.extend(GridCell::new(1, 8));

        // The gesture restarted at 8; the original anchor is gone.
        assert!(selection.covers(GridCell::new(1, 8)));
        assert!(!selection.covers(GridCell::new(1, 9)));
        assert!(!selection.covers(GridCell::new(1, 10)));
    }

    #[test]
    fn test_growing_again_after_re_anchor() {
        let mut selection = Selection::default();
        selection.begin(GridCell::new(2, 10));
        selection.extend(GridCell::new(2, 8));
        selection.extend(GridCell::new(2, 9));

        let candidate = selection.resolve().unwrap();
        assert_eq!(candidate.day, 2);
        assert_eq!(candidate.start_hour, 8);
        assert_eq!(candidate.end_hour, 10);
    }

    #[test]
    fn test_gesture_always_resolves() {
        let mut selection = Selection::default();
        selection.begin(GridCell::new(0, 8));
        // Pointer leaves the grid: resolve is still called and the state
        // machine returns to idle.
        assert!(selection.resolve().is_some());
        assert!(!selection.is_selecting());
    }
}
