//! Feedback desk: student ratings for completed sessions and the admin
//! review queue built on top of them.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::models::feedback::{FeedbackEntry, ReviewStatus};

pub struct FeedbackDesk {
    entries: Vec<FeedbackEntry>,
}

impl FeedbackDesk {
    pub fn seeded() -> Self {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("seed date is valid");
        let entry = |id, session_id, student: &str, tutor: &str, subject: &str, date, rating, comment: &str, status| {
            let mut e = FeedbackEntry::new(id, session_id, student, tutor, subject, date, rating, comment)
                .expect("seed feedback is valid");
            e.status = status;
            e
        };

        let entries = vec![
            entry(1, 3, "Nguyen Van A", "Le Thi E", "General Physics", d(2025, 10, 25), 5,
                "Very clear explanations, helped me with the problem set.", ReviewStatus::Pending),
            entry(2, 7, "Pham Thi D", "Tran Thi B", "Calculus 2", d(2025, 10, 27), 4,
                "Good session, would like more practice problems.", ReviewStatus::Reviewed),
            entry(3, 12, "Le Van C", "Hoang Van E", "C++ Programming", d(2025, 10, 22), 2,
                "Tutor arrived 20 minutes late and seemed unprepared.", ReviewStatus::ActionRequired),
            entry(4, 4, "Nguyen Van A", "Pham Van F", "Database Systems", d(2025, 10, 23), 5,
                "Excellent walkthrough of normalization.", ReviewStatus::Pending),
        ];

        Self { entries }
    }

    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    pub fn by_status(&self, status: ReviewStatus) -> Vec<&FeedbackEntry> {
        self.entries.iter().filter(|e| e.status == status).collect()
    }

    /// Whether a rating has already been submitted for this session
    pub fn has_feedback_for(&self, session_id: i64) -> bool {
        self.entries.iter().any(|e| e.session_id == session_id)
    }

    /// Submit a new student rating for one session. Ratings are validated
    /// by the model (1-5); the comment may be empty. A session can only
    /// be rated once.
    pub fn submit(
        &mut self,
        session_id: i64,
        student: &str,
        tutor: &str,
        subject: &str,
        date: NaiveDate,
        rating: u8,
        comment: &str,
    ) -> Result<i64> {
        if self.has_feedback_for(session_id) {
            return Err(anyhow!("Session {} has already been rated", session_id));
        }
        let id = self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let entry = FeedbackEntry::new(id, session_id, student, tutor, subject, date, rating, comment)
            .map_err(|e| anyhow!(e))?;
        self.entries.push(entry);
        log::info!("Feedback {} submitted for session {}", id, session_id);
        Ok(id)
    }

    /// Admin review: attach a note and settle the entry's status
    pub fn review(&mut self, id: i64, note: &str, status: ReviewStatus) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| anyhow!("Feedback with id {} not found", id))?;
        entry.admin_note = note.to_string();
        entry.status = status;
        Ok(())
    }

    /// Mean rating across all entries, None when empty
    pub fn average_rating(&self) -> Option<f32> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: u32 = self.entries.iter().map(|e| e.rating as u32).sum();
        Some(sum as f32 / self.entries.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_requires_valid_rating() {
        let mut desk = FeedbackDesk::seeded();
        let date = NaiveDate::from_ymd_opt(2025, 10, 28).unwrap();
        assert!(desk.submit(9, "s", "t", "subj", date, 0, "").is_err());
        let id = desk.submit(9, "Nguyen Van A", "Tran Thi B", "Calculus 2", date, 5, "").unwrap();
        assert_eq!(id, 5);
    }

    #[test]
    fn test_one_rating_per_session() {
        let mut desk = FeedbackDesk::seeded();
        let date = NaiveDate::from_ymd_opt(2025, 10, 28).unwrap();

        // Seed entry 1 already rates session 3
        assert!(desk.has_feedback_for(3));
        assert!(desk
            .submit(3, "Nguyen Van A", "Le Thi E", "General Physics", date, 4, "")
            .is_err());

        // A different session with the same tutor and subject is fine
        assert!(!desk.has_feedback_for(8));
        desk.submit(8, "Nguyen Van A", "Le Thi E", "General Physics", date, 4, "")
            .unwrap();
        assert!(desk.has_feedback_for(8));
    }

    #[test]
    fn test_review_updates_entry() {
        let mut desk = FeedbackDesk::seeded();
        desk.review(1, "Thanked the tutor", ReviewStatus::Reviewed).unwrap();
        let entry = desk.entries().iter().find(|e| e.id == 1).unwrap();
        assert_eq!(entry.status, ReviewStatus::Reviewed);
        assert_eq!(entry.admin_note, "Thanked the tutor");
    }

    #[test]
    fn test_review_unknown_id() {
        let mut desk = FeedbackDesk::seeded();
        assert!(desk.review(99, "", ReviewStatus::Reviewed).is_err());
    }

    #[test]
    fn test_average_rating() {
        let desk = FeedbackDesk::seeded();
        let avg = desk.average_rating().unwrap();
        assert!((avg - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_by_status() {
        let desk = FeedbackDesk::seeded();
        assert_eq!(desk.by_status(ReviewStatus::Pending).len(), 2);
        assert_eq!(desk.by_status(ReviewStatus::ActionRequired).len(), 1);
    }
}
