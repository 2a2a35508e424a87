//! Student landing page: quick stats and the next upcoming sessions.

use egui::{RichText, Ui};

use crate::models::session::SessionStatus;
use crate::models::user::User;
use crate::ui::app::context::AppContext;
use crate::ui::views::{page_heading, stat_card};

pub fn render(ui: &mut Ui, context: &AppContext, user: &User) {
    page_heading(ui, &format!("Hello, {}", user.name), "Here is your week at a glance");

    let upcoming = context
        .sessions
        .student_sessions(&user.name, SessionStatus::Upcoming);
    let completed = context
        .sessions
        .student_sessions(&user.name, SessionStatus::Completed);

    ui.horizontal(|ui| {
        stat_card(ui, "Upcoming sessions", &upcoming.len().to_string());
        stat_card(ui, "Completed sessions", &completed.len().to_string());
        stat_card(
            ui,
            "Registered courses",
            &context.catalog.registered_count().to_string(),
        );
        stat_card(
            ui,
            "Available tutors",
            &context
                .directory
                .tutors()
                .iter()
                .filter(|t| t.available)
                .count()
                .to_string(),
        );
    });

    ui.add_space(16.0);
    ui.label(RichText::new("Next sessions").strong());
    ui.add_space(4.0);

    if upcoming.is_empty() {
        ui.label(RichText::new("No upcoming sessions. Find a tutor to book one.").weak());
        return;
    }
    for session in upcoming {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&session.subject).strong());
                ui.label(format!("with {}", session.tutor));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{} · {}", session.date, session.time)).weak(),
                    );
                });
            });
        });
    }
}
