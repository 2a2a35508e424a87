//! Admin landing page: platform totals and the attention queue.

use egui::{RichText, Ui};

use crate::models::feedback::ReviewStatus;
use crate::models::user::Role;
use crate::ui::app::context::AppContext;
use crate::ui::views::{page_heading, stat_card};

pub fn render(ui: &mut Ui, context: &AppContext) {
    page_heading(ui, "Admin Dashboard", "Platform overview");

    let tutors = context
        .directory
        .users()
        .iter()
        .filter(|u| u.role == Role::Tutor)
        .count();
    let students = context
        .directory
        .users()
        .iter()
        .filter(|u| u.role == Role::Student)
        .count();

    ui.horizontal(|ui| {
        stat_card(ui, "Students", &students.to_string());
        stat_card(ui, "Tutors", &tutors.to_string());
        stat_card(ui, "Classes", &context.catalog.classes().len().to_string());
        stat_card(ui, "Sessions", &context.sessions.sessions().len().to_string());
    });

    ui.add_space(16.0);
    ui.label(RichText::new("Needs attention").strong());
    ui.add_space(4.0);

    let flagged = context.feedback.by_status(ReviewStatus::ActionRequired);
    let pending = context.feedback.by_status(ReviewStatus::Pending);
    if flagged.is_empty() && pending.is_empty() {
        ui.label(RichText::new("Nothing pending.").weak());
        return;
    }
    for entry in flagged.iter().chain(pending.iter()) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{}★ feedback for {} ({})",
                    entry.rating, entry.tutor, entry.subject
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(entry.date.to_string()).weak());
                });
            });
        });
    }
}
