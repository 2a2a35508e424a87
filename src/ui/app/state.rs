//! Per-screen UI state.
//!
//! Everything here is transient widget state (active tab, filter text,
//! half-filled forms). Domain data lives in the service context.

use chrono::NaiveDate;

use crate::models::resource::ResourceKind;
use crate::models::session::SessionStatus;
use crate::models::user::Role;
use crate::ui::grid::{Selection, SlotSubjectDialog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentPage {
    #[default]
    Dashboard,
    FindTutor,
    Schedule,
    Courses,
    Resources,
    Feedback,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TutorPage {
    #[default]
    Dashboard,
    Schedule,
    TutoringSetup,
    Students,
    Resources,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminPage {
    #[default]
    Dashboard,
    Users,
    Classes,
    Catalog,
    Evaluation,
    Reports,
}

/// Tutor search screen: free-text query, subject chips, and the tutor
/// detail dialog with its booking form
#[derive(Debug, Default)]
pub struct FindTutorState {
    pub query: String,
    pub selected_subjects: Vec<String>,
    /// Tutor whose detail dialog is open
    pub detail: Option<i64>,
    pub booking_subject: String,
    pub booking_message: String,
}

impl FindTutorState {
    pub fn open_detail(&mut self, tutor_id: i64) {
        self.detail = Some(tutor_id);
        self.booking_subject.clear();
        self.booking_message.clear();
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.booking_subject.clear();
        self.booking_message.clear();
    }
}

/// Schedule list, shared shape between the student and tutor portals
#[derive(Debug)]
pub struct ScheduleState {
    pub tab: SessionStatus,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            tab: SessionStatus::Upcoming,
        }
    }
}

/// Session feedback form on the student side
#[derive(Debug, Default)]
pub struct FeedbackFormState {
    pub session_id: Option<i64>,
    pub rating: u8,
    pub comment: String,
}

impl FeedbackFormState {
    pub fn open_for(&mut self, session_id: i64) {
        self.session_id = Some(session_id);
        self.rating = 5;
        self.comment.clear();
    }

    pub fn close(&mut self) {
        self.session_id = None;
    }
}

/// Post-session evaluation form on the tutor side
#[derive(Debug, Default)]
pub struct EvaluationFormState {
    pub session_id: Option<i64>,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupTab {
    #[default]
    Subjects,
    Availability,
}

/// Tutoring setup screen: subject registration and the availability grid
#[derive(Debug, Default)]
pub struct TutoringSetupState {
    pub tab: SetupTab,
    pub selection: Selection,
    pub subject_dialog: SlotSubjectDialog,
}

/// Tutor resource-sharing form
#[derive(Debug)]
pub struct ShareResourceState {
    pub open: bool,
    pub title: String,
    pub kind: ResourceKind,
    pub subject: String,
    pub url: String,
}

impl Default for ShareResourceState {
    fn default() -> Self {
        Self {
            open: false,
            title: String::new(),
            kind: ResourceKind::Pdf,
            subject: String::new(),
            url: String::new(),
        }
    }
}

/// Profile screens: read-only card until the edit form is opened
#[derive(Debug, Default)]
pub struct ProfileEditState {
    pub editing: bool,
    pub name: String,
    pub email: String,
}

impl ProfileEditState {
    pub fn open(&mut self, name: &str, email: &str) {
        self.editing = true;
        self.name = name.to_string();
        self.email = email.to_string();
    }

    pub fn close(&mut self) {
        self.editing = false;
        self.name.clear();
        self.email.clear();
    }
}

/// Admin user management filters
#[derive(Debug, Default)]
pub struct UserFilterState {
    pub query: String,
    pub role: Option<Role>,
}

/// Admin class-creation form
#[derive(Debug, Default)]
pub struct CreateClassState {
    pub open: bool,
    pub name: String,
    pub subject: String,
    pub tutor: String,
    pub max_students: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogTab {
    #[default]
    Courses,
    Skills,
}

/// Admin catalog screen: add-course and add-skill forms
#[derive(Debug, Default)]
pub struct CatalogFormState {
    pub tab: CatalogTab,
    pub course_code: String,
    pub course_name: String,
    pub course_faculty: String,
    pub course_credits: u8,
    pub skill_name: String,
    pub skill_category: String,
}

/// Admin feedback review panel
#[derive(Debug, Default)]
pub struct ReviewState {
    pub entry_id: Option<i64>,
    pub note: String,
}

/// All portal screen state in one place, reset on logout
#[derive(Debug, Default)]
pub struct AppState {
    pub student_page: StudentPage,
    pub tutor_page: TutorPage,
    pub admin_page: AdminPage,

    pub find_tutor: FindTutorState,
    pub student_schedule: ScheduleState,
    pub feedback_form: FeedbackFormState,
    pub resource_subject_filter: Option<String>,

    pub tutor_schedule: ScheduleState,
    pub evaluation_form: EvaluationFormState,
    pub tutoring_setup: TutoringSetupState,
    pub share_resource: ShareResourceState,
    /// Roster student whose progress dialog is open
    pub roster_detail: Option<i64>,

    pub profile_edit: ProfileEditState,

    pub user_filter: UserFilterState,
    pub create_class: CreateClassState,
    pub catalog_form: CatalogFormState,
    pub review: ReviewState,
}

/// Demo date shown across dashboards and used when stamping new records
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 28).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_detail_resets_booking_form() {
        let mut state = FindTutorState::default();
        state.booking_subject = "Calculus 2".to_string();
        state.booking_message = "old draft".to_string();

        state.open_detail(2);
        assert_eq!(state.detail, Some(2));
        assert!(state.booking_subject.is_empty());
        assert!(state.booking_message.is_empty());

        state.close_detail();
        assert_eq!(state.detail, None);
    }

    #[test]
    fn test_profile_edit_opens_prefilled() {
        let mut edit = ProfileEditState::default();
        edit.open("Nguyen Van A", "a@hcmut.edu.vn");
        assert!(edit.editing);
        assert_eq!(edit.name, "Nguyen Van A");

        edit.close();
        assert!(!edit.editing);
        assert!(edit.name.is_empty());
    }
}
