//! Student schedule: upcoming, completed and cancelled session lists.

use egui::{Color32, RichText, Ui};

use crate::models::session::{Session, SessionKind, SessionStatus};
use crate::models::user::User;
use crate::services::sessions::SessionBook;
use crate::ui::app::confirm::{ConfirmAction, ConfirmDialogState};
use crate::ui::app::state::ScheduleState;
use crate::ui::app::toast::ToastManager;
use crate::ui::views::page_heading;

pub(crate) fn status_tabs(ui: &mut Ui, tab: &mut SessionStatus) {
    ui.horizontal(|ui| {
        for status in [
            SessionStatus::Upcoming,
            SessionStatus::Completed,
            SessionStatus::Cancelled,
        ] {
            if ui.selectable_label(*tab == status, status.label()).clicked() {
                *tab = status;
            }
        }
    });
}

pub(crate) fn session_header(ui: &mut Ui, session: &Session) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(&session.subject).strong());
        let kind = match session.kind {
            SessionKind::Online => {
                RichText::new(session.kind.label()).color(Color32::from_rgb(40, 120, 200))
            }
            SessionKind::Offline => RichText::new(&session.location).weak(),
        };
        ui.label(kind);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("{} · {}", session.date, session.time)).weak());
        });
    });
}

pub fn render(
    ui: &mut Ui,
    sessions: &mut SessionBook,
    user: &User,
    state: &mut ScheduleState,
    confirm: &mut ConfirmDialogState,
    toasts: &mut ToastManager,
) {
    page_heading(ui, "My Schedule", "Your tutoring sessions");
    status_tabs(ui, &mut state.tab);
    ui.add_space(8.0);

    let listed: Vec<Session> = sessions
        .student_sessions(&user.name, state.tab)
        .into_iter()
        .cloned()
        .collect();
    if listed.is_empty() {
        ui.label(RichText::new("Nothing here.").weak());
        return;
    }

    for session in &listed {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            session_header(ui, session);
            ui.horizontal(|ui| {
                ui.label(format!("Tutor: {}", session.tutor));
                if let Some(link) = &session.meet_link {
                    ui.hyperlink_to("Join meeting", link);
                }
            });

            if session.status == SessionStatus::Upcoming {
                ui.horizontal(|ui| {
                    if ui.button("Request Reschedule").clicked() {
                        match sessions.request_reschedule(session.id) {
                            Ok(()) => toasts.info("Reschedule request sent to the tutor"),
                            Err(err) => toasts.error(err.to_string()),
                        }
                    }
                    if ui.button("Cancel Session").clicked() {
                        confirm.ask(ConfirmAction::CancelSession {
                            id: session.id,
                            subject: session.subject.clone(),
                        });
                    }
                });
            }
            if session.status == SessionStatus::Completed && !session.notes.is_empty() {
                ui.label(RichText::new(format!("Tutor notes: {}", session.notes)).small().weak());
            }
        });
        ui.add_space(4.0);
    }
}
