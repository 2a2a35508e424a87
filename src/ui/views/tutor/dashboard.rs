//! Tutor landing page: teaching load at a glance.

use egui::{RichText, Ui};

use crate::models::session::SessionStatus;
use crate::models::user::User;
use crate::ui::app::context::AppContext;
use crate::ui::views::{page_heading, stat_card};

pub fn render(ui: &mut Ui, context: &AppContext, user: &User) {
    page_heading(ui, &format!("Hello, {}", user.name), "Your tutoring overview");

    let upcoming = context
        .sessions
        .tutor_sessions(&user.name, SessionStatus::Upcoming);
    let completed = context
        .sessions
        .tutor_sessions(&user.name, SessionStatus::Completed);
    let open_slots = context
        .availability
        .slots()
        .iter()
        .filter(|s| !s.status.is_booked())
        .count();

    ui.horizontal(|ui| {
        stat_card(ui, "Upcoming sessions", &upcoming.len().to_string());
        stat_card(ui, "Completed sessions", &completed.len().to_string());
        stat_card(ui, "Open availability slots", &open_slots.to_string());
        stat_card(ui, "Students", &context.directory.roster().len().to_string());
    });

    ui.add_space(16.0);
    ui.label(RichText::new("Next sessions").strong());
    ui.add_space(4.0);

    if upcoming.is_empty() {
        ui.label(RichText::new("No upcoming sessions.").weak());
        return;
    }
    for session in upcoming {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&session.subject).strong());
                ui.label(format!("with {}", session.student));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("{} · {}", session.date, session.time)).weak());
                });
            });
        });
    }
}
