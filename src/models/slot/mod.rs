// Time slot module
// Bookable availability window on the tutor's weekly grid

use std::collections::BTreeSet;

use crate::models::subject::SubjectId;

pub type SlotId = i64;

/// Day-of-week index used throughout the grid: 0 = Sunday .. 6 = Saturday.
pub const DAYS_PER_WEEK: u8 = 7;

pub const DAY_NAMES: [&str; DAYS_PER_WEEK as usize] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStatus {
    /// Open for students to book
    Available,
    /// Booked by a student; immutable until an external cancellation
    /// (not modeled in this component) flips it back
    Booked { occupant: String },
}

impl SlotStatus {
    pub fn is_booked(&self) -> bool {
        matches!(self, SlotStatus::Booked { .. })
    }
}

/// A contiguous hour range on one weekday during which a tutor declares
/// availability or holds a confirmed booking.
///
/// The hour range is half-open: `start_hour..end_hour` covers
/// `end_hour - start_hour` whole hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: SlotId,
    /// 0 = Sunday .. 6 = Saturday
    pub day: u8,
    pub start_hour: u8,
    /// Exclusive upper bound
    pub end_hour: u8,
    pub status: SlotStatus,
    /// Subject ids taught in this window; non-empty for available slots
    pub subjects: BTreeSet<SubjectId>,
}

impl TimeSlot {
    /// Create a new available slot with required fields
    ///
    /// # Returns
    /// Returns `Result<TimeSlot, String>` with validation
    pub fn new(
        id: SlotId,
        day: u8,
        start_hour: u8,
        end_hour: u8,
        subjects: BTreeSet<SubjectId>,
    ) -> Result<Self, String> {
        let slot = Self {
            id,
            day,
            start_hour,
            end_hour,
            status: SlotStatus::Available,
            subjects,
        };
        slot.validate()?;
        Ok(slot)
    }

    /// Validate the slot invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.day >= DAYS_PER_WEEK {
            return Err(format!("Day index {} out of range 0-6", self.day));
        }
        if self.start_hour >= self.end_hour {
            return Err("Slot end hour must be after start hour".to_string());
        }
        if self.end_hour > 24 {
            return Err("Slot end hour cannot exceed 24".to_string());
        }
        if !self.status.is_booked() && self.subjects.is_empty() {
            return Err("Available slot must have at least one subject".to_string());
        }
        Ok(())
    }

    /// Standard half-open interval intersection test against another range
    /// on the same day. Touching ranges do not overlap.
    pub fn overlaps(&self, day: u8, start_hour: u8, end_hour: u8) -> bool {
        self.day == day && self.start_hour < end_hour && self.end_hour > start_hour
    }

    /// Whether the one-hour cell `(day, hour)` falls inside this slot
    pub fn covers_cell(&self, day: u8, hour: u8) -> bool {
        self.day == day && self.start_hour <= hour && hour < self.end_hour
    }

    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[self.day as usize]
    }

    /// Display form of the hour range, e.g. "08:00 - 10:00"
    pub fn time_range(&self) -> String {
        format!("{:02}:00 - {:02}:00", self.start_hour, self.end_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects(ids: &[&str]) -> BTreeSet<SubjectId> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_slot_success() {
        let slot = TimeSlot::new(1, 0, 8, 10, subjects(&["1"])).unwrap();
        assert_eq!(slot.status, SlotStatus::Available);
        assert_eq!(slot.time_range(), "08:00 - 10:00");
        assert_eq!(slot.day_name(), "Sunday");
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = TimeSlot::new(1, 0, 10, 8, subjects(&["1"]));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Slot end hour must be after start hour");
    }

    #[test]
    fn test_empty_range_rejected() {
        assert!(TimeSlot::new(1, 0, 8, 8, subjects(&["1"])).is_err());
    }

    #[test]
    fn test_day_out_of_range_rejected() {
        assert!(TimeSlot::new(1, 7, 8, 9, subjects(&["1"])).is_err());
    }

    #[test]
    fn test_available_without_subjects_rejected() {
        let result = TimeSlot::new(1, 2, 8, 9, BTreeSet::new());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least one subject"));
    }

    #[test]
    fn test_booked_slot_may_have_empty_subjects_on_validate() {
        let slot = TimeSlot {
            id: 2,
            day: 1,
            start_hour: 14,
            end_hour: 16,
            status: SlotStatus::Booked {
                occupant: "Nguyen Van A".to_string(),
            },
            subjects: BTreeSet::new(),
        };
        assert!(slot.validate().is_ok());
    }

    #[test]
    fn test_overlap_intersecting() {
        let slot = TimeSlot::new(1, 1, 9, 11, subjects(&["1"])).unwrap();
        assert!(slot.overlaps(1, 10, 12));
        assert!(slot.overlaps(1, 8, 10));
        assert!(slot.overlaps(1, 9, 11));
    }

    #[test]
    fn test_overlap_touching_is_not_overlap() {
        let slot = TimeSlot::new(1, 1, 9, 11, subjects(&["1"])).unwrap();
        assert!(!slot.overlaps(1, 11, 13));
        assert!(!slot.overlaps(1, 7, 9));
    }

    #[test]
    fn test_overlap_other_day() {
        let slot = TimeSlot::new(1, 1, 9, 11, subjects(&["1"])).unwrap();
        assert!(!slot.overlaps(2, 9, 11));
    }

    #[test]
    fn test_covers_cell() {
        let slot = TimeSlot::new(1, 3, 14, 16, subjects(&["1"])).unwrap();
        assert!(slot.covers_cell(3, 14));
        assert!(slot.covers_cell(3, 15));
        assert!(!slot.covers_cell(3, 16));
        assert!(!slot.covers_cell(4, 14));
    }
}
