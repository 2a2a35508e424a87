//! Portal navigation sidebar. The entries depend on the signed-in role.

use super::state::{AdminPage, StudentPage, TutorPage};
use super::TutorHubApp;
use crate::models::user::Role;
use egui::RichText;

const SIDEBAR_WIDTH: f32 = 170.0;

fn nav_button<P: PartialEq + Copy>(ui: &mut egui::Ui, current: &mut P, page: P, label: &str) {
    let selected = *current == page;
    let text = if selected {
        RichText::new(label).strong()
    } else {
        RichText::new(label)
    };
    if ui
        .add_sized([SIDEBAR_WIDTH - 20.0, 28.0], egui::SelectableLabel::new(selected, text))
        .clicked()
    {
        *current = page;
    }
}

impl TutorHubApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        let Some(role) = self.current_user.as_ref().map(|u| u.role) else {
            return;
        };

        egui::SidePanel::left("sidebar")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                match role {
                    Role::Student => self.student_nav(ui),
                    Role::Tutor => self.tutor_nav(ui),
                    Role::Admin => self.admin_nav(ui),
                }
            });
    }

    fn student_nav(&mut self, ui: &mut egui::Ui) {
        let page = &mut self.state.student_page;
        nav_button(ui, page, StudentPage::Dashboard, "🏠 Dashboard");
        nav_button(ui, page, StudentPage::FindTutor, "🔍 Find a Tutor");
        nav_button(ui, page, StudentPage::Schedule, "📅 My Schedule");
        nav_button(ui, page, StudentPage::Courses, "📚 My Courses");
        nav_button(ui, page, StudentPage::Resources, "📂 Resources");
        nav_button(ui, page, StudentPage::Feedback, "⭐ Feedback");
        nav_button(ui, page, StudentPage::Profile, "👤 Profile");
    }

    fn tutor_nav(&mut self, ui: &mut egui::Ui) {
        let page = &mut self.state.tutor_page;
        nav_button(ui, page, TutorPage::Dashboard, "🏠 Dashboard");
        nav_button(ui, page, TutorPage::Schedule, "📅 My Schedule");
        nav_button(ui, page, TutorPage::TutoringSetup, "🗓 Tutoring Setup");
        nav_button(ui, page, TutorPage::Students, "🎓 My Students");
        nav_button(ui, page, TutorPage::Resources, "📂 Resources");
        nav_button(ui, page, TutorPage::Profile, "👤 Profile");
    }

    fn admin_nav(&mut self, ui: &mut egui::Ui) {
        let page = &mut self.state.admin_page;
        nav_button(ui, page, AdminPage::Dashboard, "🏠 Dashboard");
        nav_button(ui, page, AdminPage::Users, "👥 User Management");
        nav_button(ui, page, AdminPage::Classes, "🏫 Class Management");
        nav_button(ui, page, AdminPage::Catalog, "📚 Catalog");
        nav_button(ui, page, AdminPage::Evaluation, "⭐ Evaluation");
        nav_button(ui, page, AdminPage::Reports, "📊 Reports");
    }
}
