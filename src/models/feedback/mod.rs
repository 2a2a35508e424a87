// Feedback module
// Post-session ratings from students and the admin review queue

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Reviewed,
    ActionRequired,
}

impl ReviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Reviewed => "Reviewed",
            ReviewStatus::ActionRequired => "Action required",
        }
    }
}

/// A rating a student left for a completed session, queued for admin review
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackEntry {
    pub id: i64,
    /// The session this rating is about; one rating per session
    pub session_id: i64,
    pub student: String,
    pub tutor: String,
    pub subject: String,
    pub date: NaiveDate,
    /// 1 to 5 stars
    pub rating: u8,
    pub comment: String,
    pub status: ReviewStatus,
    pub admin_note: String,
}

impl FeedbackEntry {
    pub fn new(
        id: i64,
        session_id: i64,
        student: impl Into<String>,
        tutor: impl Into<String>,
        subject: impl Into<String>,
        date: NaiveDate,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<Self, String> {
        if !(1..=5).contains(&rating) {
            return Err("Rating must be between 1 and 5 stars".to_string());
        }

        Ok(Self {
            id,
            session_id,
            student: student.into(),
            tutor: tutor.into(),
            subject: subject.into(),
            date,
            rating,
            comment: comment.into(),
            status: ReviewStatus::Pending,
            admin_note: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 25).unwrap()
    }

    #[test]
    fn test_new_feedback() {
        let f = FeedbackEntry::new(1, 3, "Nguyen Van A", "Tran Thi B", "Calculus 2", sample_date(), 5, "Great")
            .unwrap();
        assert_eq!(f.status, ReviewStatus::Pending);
        assert_eq!(f.session_id, 3);
        assert!(f.admin_note.is_empty());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(FeedbackEntry::new(1, 1, "a", "b", "c", sample_date(), 0, "").is_err());
        assert!(FeedbackEntry::new(1, 1, "a", "b", "c", sample_date(), 6, "").is_err());
        assert!(FeedbackEntry::new(1, 1, "a", "b", "c", sample_date(), 1, "").is_ok());
    }
}
