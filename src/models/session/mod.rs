// Session module
// A scheduled tutoring meeting between one tutor and one student

use chrono::NaiveDate;

pub type SessionId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "Upcoming",
            SessionStatus::Completed => "Completed",
            SessionStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Online,
    Offline,
}

impl SessionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Online => "Online",
            SessionKind::Offline => "In person",
        }
    }
}

/// One tutoring session as shown in both the student and tutor schedules.
/// Both counterpart names are carried so either portal can render its side.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: SessionId,
    pub tutor: String,
    pub student: String,
    pub subject: String,
    pub date: NaiveDate,
    /// Display time range, e.g. "14:00 - 16:00"
    pub time: String,
    /// Meeting room or conferencing product name
    pub location: String,
    pub kind: SessionKind,
    pub status: SessionStatus,
    pub meet_link: Option<String>,
    /// Tutor has confirmed attendance for this session
    pub checked_in: bool,
    /// Free-form notes the tutor records after the session
    pub notes: String,
}

impl Session {
    pub fn new(
        id: SessionId,
        tutor: impl Into<String>,
        student: impl Into<String>,
        subject: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
        location: impl Into<String>,
        kind: SessionKind,
        status: SessionStatus,
    ) -> Result<Self, String> {
        let subject = subject.into();
        if subject.trim().is_empty() {
            return Err("Session subject cannot be empty".to_string());
        }

        Ok(Self {
            id,
            tutor: tutor.into(),
            student: student.into(),
            subject,
            date,
            time: time.into(),
            location: location.into(),
            kind,
            status,
            meet_link: None,
            checked_in: false,
            notes: String::new(),
        })
    }

    pub fn with_meet_link(mut self, link: impl Into<String>) -> Self {
        self.meet_link = Some(link.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 30).unwrap()
    }

    #[test]
    fn test_new_session() {
        let s = Session::new(
            1,
            "Tran Thi B",
            "Nguyen Van A",
            "Calculus 2",
            sample_date(),
            "14:00 - 16:00",
            "Google Meet",
            SessionKind::Online,
            SessionStatus::Upcoming,
        )
        .unwrap();
        assert_eq!(s.status, SessionStatus::Upcoming);
        assert!(!s.checked_in);
        assert!(s.meet_link.is_none());
    }

    #[test]
    fn test_empty_subject_rejected() {
        let result = Session::new(
            1,
            "Tran Thi B",
            "Nguyen Van A",
            " ",
            sample_date(),
            "14:00 - 16:00",
            "Room H1-101",
            SessionKind::Offline,
            SessionStatus::Upcoming,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_with_meet_link() {
        let s = Session::new(
            1,
            "Tran Thi B",
            "Nguyen Van A",
            "Calculus 2",
            sample_date(),
            "14:00 - 16:00",
            "Google Meet",
            SessionKind::Online,
            SessionStatus::Upcoming,
        )
        .unwrap()
        .with_meet_link("https://meet.google.com/abc-defg-hij");
        assert!(s.meet_link.is_some());
    }
}
