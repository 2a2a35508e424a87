//! People directories: the student-facing tutor search, the tutor's
//! student roster, and the admin user roster.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::models::user::Role;

/// A tutor card as shown in the student's Find Tutor screen
#[derive(Debug, Clone, PartialEq)]
pub struct TutorCard {
    pub id: i64,
    pub name: String,
    pub subjects: Vec<String>,
    pub rating: f32,
    pub total_reviews: u32,
    pub experience: String,
    pub available: bool,
}

/// A student in the tutor's roster
#[derive(Debug, Clone, PartialEq)]
pub struct RosterStudent {
    pub id: i64,
    pub name: String,
    pub student_id: String,
    pub subjects: Vec<String>,
    pub total_sessions: u32,
    pub completed_sessions: u32,
    pub last_session: NaiveDate,
}

impl RosterStudent {
    /// Fraction of this student's sessions that were completed, in 0..=1
    pub fn completion_ratio(&self) -> f32 {
        if self.total_sessions == 0 {
            return 0.0;
        }
        self.completed_sessions as f32 / self.total_sessions as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Disabled,
}

/// An account row in the admin's user management table
#[derive(Debug, Clone, PartialEq)]
pub struct ManagedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    pub joined: NaiveDate,
    pub total_sessions: u32,
    /// Average rating, tutors only
    pub rating: Option<f32>,
}

/// In-memory repository for all three people listings
pub struct Directory {
    tutors: Vec<TutorCard>,
    roster: Vec<RosterStudent>,
    users: Vec<ManagedUser>,
}

impl Directory {
    pub fn seeded() -> Self {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("seed date is valid");
        let strs = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let tutor = |id, name: &str, subjects: &[&str], rating, reviews, years: u8, available| TutorCard {
            id,
            name: name.to_string(),
            subjects: strs(subjects),
            rating,
            total_reviews: reviews,
            experience: format!("{} years experience", years),
            available,
        };

        let tutors = vec![
            tutor(1, "Tran Thi B", &["Calculus 2", "Linear Algebra", "Discrete Mathematics"], 4.8, 42, 3, true),
            tutor(2, "Nguyen Van D", &["C++ Programming", "Data Structures", "Algorithms"], 4.9, 38, 4, true),
            tutor(3, "Le Thi E", &["General Physics", "Engineering Mechanics"], 4.7, 35, 2, true),
            tutor(4, "Pham Van F", &["Database Systems", "DBMS", "SQL"], 4.9, 51, 5, true),
            tutor(5, "Hoang Thi G", &["Technical English", "IELTS", "TOEIC"], 4.8, 29, 3, false),
            tutor(6, "Dang Van H", &["General Chemistry", "Organic Chemistry"], 4.6, 24, 2, true),
        ];

        let roster = vec![
            RosterStudent {
                id: 1,
                name: "Nguyen Van A".to_string(),
                student_id: "2212345".to_string(),
                subjects: strs(&["Calculus 2"]),
                total_sessions: 8,
                completed_sessions: 6,
                last_session: d(2025, 10, 27),
            },
            RosterStudent {
                id: 2,
                name: "Le Van C".to_string(),
                student_id: "2254321".to_string(),
                subjects: strs(&["Linear Algebra", "Discrete Mathematics"]),
                total_sessions: 5,
                completed_sessions: 4,
                last_session: d(2025, 10, 24),
            },
            RosterStudent {
                id: 3,
                name: "Pham Thi D".to_string(),
                student_id: "2267890".to_string(),
                subjects: strs(&["Calculus 2", "Linear Algebra"]),
                total_sessions: 12,
                completed_sessions: 11,
                last_session: d(2025, 10, 29),
            },
        ];

        let user = |id, name: &str, email: &str, role, status, joined, sessions, rating| ManagedUser {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            joined,
            total_sessions: sessions,
            rating,
        };

        let users = vec![
            user(1, "Nguyen Van A", "nguyenvana@hcmut.edu.vn", Role::Student, AccountStatus::Active, d(2025, 9, 1), 12, None),
            user(2, "Tran Thi B", "tranthib@hcmut.edu.vn", Role::Tutor, AccountStatus::Active, d(2025, 8, 15), 48, Some(4.8)),
            user(3, "Le Van C", "levanc@hcmut.edu.vn", Role::Student, AccountStatus::Active, d(2025, 9, 10), 8, None),
            user(4, "Pham Thi D", "phamthid@hcmut.edu.vn", Role::Student, AccountStatus::Active, d(2025, 9, 5), 15, None),
            user(5, "Hoang Van E", "hoangvane@hcmut.edu.vn", Role::Tutor, AccountStatus::Active, d(2025, 8, 20), 35, Some(4.6)),
            user(6, "Do Thi F", "dothif@hcmut.edu.vn", Role::Student, AccountStatus::Disabled, d(2025, 8, 1), 3, None),
        ];

        Self {
            tutors,
            roster,
            users,
        }
    }

    /// Tutor cards matching a free-text query and subject filter.
    /// The query matches names and subjects case-insensitively; an empty
    /// subject filter matches everything.
    pub fn search_tutors(&self, query: &str, subjects: &[String]) -> Vec<&TutorCard> {
        let query = query.to_lowercase();
        self.tutors
            .iter()
            .filter(|t| {
                let matches_query = query.is_empty()
                    || t.name.to_lowercase().contains(&query)
                    || t.subjects.iter().any(|s| s.to_lowercase().contains(&query));
                let matches_subject =
                    subjects.is_empty() || t.subjects.iter().any(|s| subjects.contains(s));
                matches_query && matches_subject
            })
            .collect()
    }

    pub fn tutors(&self) -> &[TutorCard] {
        &self.tutors
    }

    pub fn roster(&self) -> &[RosterStudent] {
        &self.roster
    }

    pub fn users(&self) -> &[ManagedUser] {
        &self.users
    }

    /// Admin roster filtered by role and a name/email query
    pub fn filter_users(&self, query: &str, role: Option<Role>) -> Vec<&ManagedUser> {
        let query = query.to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                let matches_query = query.is_empty()
                    || u.name.to_lowercase().contains(&query)
                    || u.email.to_lowercase().contains(&query);
                let matches_role = role.map_or(true, |r| u.role == r);
                matches_query && matches_role
            })
            .collect()
    }

    pub fn tutor(&self, id: i64) -> Option<&TutorCard> {
        self.tutors.iter().find(|t| t.id == id)
    }

    pub fn roster_student(&self, id: i64) -> Option<&RosterStudent> {
        self.roster.iter().find(|s| s.id == id)
    }

    /// Validate and record a session request against a tutor. The mock
    /// has no tutor inbox, so a valid request only reports success.
    pub fn request_session(&self, tutor_id: i64, subject: &str) -> Result<()> {
        let tutor = self
            .tutor(tutor_id)
            .ok_or_else(|| anyhow!("Tutor with id {} not found", tutor_id))?;
        if !tutor.available {
            return Err(anyhow!("{} is not taking new students right now", tutor.name));
        }
        if !tutor.subjects.iter().any(|s| s == subject) {
            return Err(anyhow!("{} does not tutor {}", tutor.name, subject));
        }
        log::info!("Session requested with tutor {} for {}", tutor_id, subject);
        Ok(())
    }

    /// Flip an account between active and disabled
    pub fn toggle_user_status(&mut self, id: i64) -> Result<AccountStatus> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| anyhow!("User with id {} not found", id))?;
        user.status = match user.status {
            AccountStatus::Active => AccountStatus::Disabled,
            AccountStatus::Disabled => AccountStatus::Active,
        };
        log::info!("User {} is now {:?}", id, user.status);
        Ok(user.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_by_name() {
        let dir = Directory::seeded();
        let hits = dir.search_tutors("tran", &[]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Tran Thi B");
    }

    #[test]
    fn test_search_by_subject_text() {
        let dir = Directory::seeded();
        let hits = dir.search_tutors("physics", &[]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Le Thi E");
    }

    #[test]
    fn test_subject_filter() {
        let dir = Directory::seeded();
        let filter = vec!["Calculus 2".to_string(), "SQL".to_string()];
        let hits = dir.search_tutors("", &filter);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_empty_search_returns_all() {
        let dir = Directory::seeded();
        assert_eq!(dir.search_tutors("", &[]).len(), dir.tutors().len());
    }

    #[test]
    fn test_filter_users_by_role() {
        let dir = Directory::seeded();
        assert_eq!(dir.filter_users("", Some(Role::Tutor)).len(), 2);
        assert_eq!(dir.filter_users("", None).len(), 6);
    }

    #[test]
    fn test_request_session_validates_tutor_and_subject() {
        let dir = Directory::seeded();

        assert!(dir.request_session(1, "Calculus 2").is_ok());
        // Tutor 5 is marked unavailable in the seed data
        assert!(dir.request_session(5, "IELTS").is_err());
        assert!(dir.request_session(1, "General Physics").is_err());
        assert!(dir.request_session(999, "Calculus 2").is_err());
    }

    #[test]
    fn test_completion_ratio() {
        let dir = Directory::seeded();
        let student = dir.roster_student(1).unwrap();
        assert!((student.completion_ratio() - 0.75).abs() < 1e-6);

        let empty = RosterStudent {
            id: 9,
            name: "X".to_string(),
            student_id: "0".to_string(),
            subjects: vec![],
            total_sessions: 0,
            completed_sessions: 0,
            last_session: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        };
        assert_eq!(empty.completion_ratio(), 0.0);
    }

    #[test]
    fn test_toggle_user_status() {
        let mut dir = Directory::seeded();
        assert_eq!(dir.toggle_user_status(1).unwrap(), AccountStatus::Disabled);
        assert_eq!(dir.toggle_user_status(1).unwrap(), AccountStatus::Active);
        assert!(dir.toggle_user_status(999).is_err());
    }
}
