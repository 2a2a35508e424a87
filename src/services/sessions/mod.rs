//! Session book: the schedule shared by the student and tutor portals.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::models::session::{Session, SessionId, SessionKind, SessionStatus};

/// In-memory repository of tutoring sessions
pub struct SessionBook {
    sessions: Vec<Session>,
}

impl SessionBook {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
        }
    }

    /// Book seeded with the demo schedule
    pub fn seeded() -> Self {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("seed date is valid");
        let s = |id, tutor: &str, student: &str, subject: &str, date, time: &str, location: &str, kind, status| {
            Session::new(id, tutor, student, subject, date, time, location, kind, status)
                .expect("seed session is valid")
        };

        let sessions = vec![
            s(
                1,
                "Tran Thi B",
                "Nguyen Van A",
                "Calculus 2",
                d(2025, 10, 30),
                "14:00 - 16:00",
                "Google Meet",
                SessionKind::Online,
                SessionStatus::Upcoming,
            )
            .with_meet_link("https://meet.google.com/abc-defg-hij"),
            s(
                2,
                "Nguyen Van D",
                "Nguyen Van A",
                "C++ Programming",
                d(2025, 10, 31),
                "09:00 - 11:00",
                "Room H1-101",
                SessionKind::Offline,
                SessionStatus::Upcoming,
            ),
            s(
                3,
                "Le Thi E",
                "Nguyen Van A",
                "General Physics",
                d(2025, 10, 25),
                "14:00 - 16:00",
                "Zoom",
                SessionKind::Online,
                SessionStatus::Completed,
            ),
            s(
                4,
                "Pham Van F",
                "Nguyen Van A",
                "Database Systems",
                d(2025, 10, 23),
                "10:00 - 12:00",
                "Room H6-202",
                SessionKind::Offline,
                SessionStatus::Completed,
            ),
            s(
                5,
                "Hoang Thi G",
                "Nguyen Van A",
                "English",
                d(2025, 10, 20),
                "15:00 - 17:00",
                "Google Meet",
                SessionKind::Online,
                SessionStatus::Cancelled,
            ),
            // The demo tutor's side of the book
            s(
                6,
                "Tran Thi B",
                "Le Van C",
                "Linear Algebra",
                d(2025, 10, 31),
                "09:00 - 11:00",
                "Room B4-203",
                SessionKind::Offline,
                SessionStatus::Upcoming,
            ),
            s(
                7,
                "Tran Thi B",
                "Pham Thi D",
                "Calculus 2",
                d(2025, 10, 27),
                "14:00 - 16:00",
                "Google Meet",
                SessionKind::Online,
                SessionStatus::Completed,
            ),
        ];

        Self { sessions }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Sessions for the student portal, filtered by status
    pub fn student_sessions(&self, student: &str, status: SessionStatus) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|s| s.student == student && s.status == status)
            .collect()
    }

    /// Sessions for the tutor portal, filtered by status
    pub fn tutor_sessions(&self, tutor: &str, status: SessionStatus) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|s| s.tutor == tutor && s.status == status)
            .collect()
    }

    /// Cancel an upcoming session (student flow, behind a confirmation)
    pub fn cancel(&mut self, id: SessionId) -> Result<()> {
        let session = self.get_mut(id)?;
        if session.status != SessionStatus::Upcoming {
            return Err(anyhow!("Only upcoming sessions can be cancelled"));
        }
        session.status = SessionStatus::Cancelled;
        log::info!("Cancelled session {}", id);
        Ok(())
    }

    /// Record a reschedule request. The mock has no tutor inbox, so this
    /// only validates the target and reports success.
    pub fn request_reschedule(&self, id: SessionId) -> Result<()> {
        let session = self
            .get(id)
            .ok_or_else(|| anyhow!("Session with id {} not found", id))?;
        if session.status != SessionStatus::Upcoming {
            return Err(anyhow!("Only upcoming sessions can be rescheduled"));
        }
        log::info!("Reschedule requested for session {}", id);
        Ok(())
    }

    /// Tutor check-in for an upcoming session
    pub fn check_in(&mut self, id: SessionId) -> Result<()> {
        let session = self.get_mut(id)?;
        session.checked_in = true;
        Ok(())
    }

    /// Save the tutor's notes and mark the session completed
    pub fn complete_with_notes(&mut self, id: SessionId, notes: &str) -> Result<()> {
        let session = self.get_mut(id)?;
        session.notes = notes.to_string();
        session.status = SessionStatus::Completed;
        log::info!("Completed session {}", id);
        Ok(())
    }

    fn get_mut(&mut self, id: SessionId) -> Result<&mut Session> {
        self.sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| anyhow!("Session with id {} not found", id))
    }
}

impl Default for SessionBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_split_by_party() {
        let book = SessionBook::seeded();
        assert_eq!(
            book.student_sessions("Nguyen Van A", SessionStatus::Upcoming)
                .len(),
            2
        );
        assert_eq!(
            book.tutor_sessions("Tran Thi B", SessionStatus::Upcoming).len(),
            2
        );
    }

    #[test]
    fn test_cancel_upcoming() {
        let mut book = SessionBook::seeded();
        book.cancel(1).unwrap();
        assert_eq!(book.get(1).unwrap().status, SessionStatus::Cancelled);
    }

    #[test]
    fn test_cancel_completed_rejected() {
        let mut book = SessionBook::seeded();
        assert!(book.cancel(3).is_err());
    }

    #[test]
    fn test_cancel_unknown_rejected() {
        let mut book = SessionBook::seeded();
        assert!(book.cancel(999).is_err());
    }

    #[test]
    fn test_check_in_and_complete() {
        let mut book = SessionBook::seeded();
        book.check_in(6).unwrap();
        assert!(book.get(6).unwrap().checked_in);

        book.complete_with_notes(6, "Covered eigenvalues").unwrap();
        let session = book.get(6).unwrap();
        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(session.notes, "Covered eigenvalues");
    }

    #[test]
    fn test_reschedule_only_upcoming() {
        let book = SessionBook::seeded();
        assert!(book.request_reschedule(1).is_ok());
        assert!(book.request_reschedule(3).is_err());
    }
}
