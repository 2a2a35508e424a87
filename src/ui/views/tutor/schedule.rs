//! Tutor schedule: upcoming sessions with check-in and post-session
//! evaluation notes.

use egui::{RichText, Ui};

use crate::models::session::{Session, SessionStatus};
use crate::models::user::User;
use crate::services::sessions::SessionBook;
use crate::ui::app::state::{EvaluationFormState, ScheduleState};
use crate::ui::app::toast::ToastManager;
use crate::ui::views::page_heading;
use crate::ui::views::student::schedule::{session_header, status_tabs};

pub fn render(
    ui: &mut Ui,
    sessions: &mut SessionBook,
    user: &User,
    state: &mut ScheduleState,
    eval: &mut EvaluationFormState,
    toasts: &mut ToastManager,
) {
    page_heading(ui, "My Schedule", "Sessions you are tutoring");
    status_tabs(ui, &mut state.tab);
    ui.add_space(8.0);

    let listed: Vec<Session> = sessions
        .tutor_sessions(&user.name, state.tab)
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
                ui.label(format!("Student: {}", session.student));
                if let Some(link) = &session.meet_link {
                    ui.hyperlink_to("Join meeting", link);
                }
            });

            if session.status == SessionStatus::Upcoming {
                ui.horizontal(|ui| {
                    if session.checked_in {
                        ui.label(RichText::new("✓ Checked in").weak());
                        if ui.button("Complete & Evaluate").clicked() {
                            eval.session_id = Some(session.id);
                            eval.notes.clear();
                        }
                    } else if ui.button("Check In").clicked() {
                        match sessions.check_in(session.id) {
                            Ok(()) => toasts.success("Checked in"),
                            Err(err) => toasts.error(err.to_string()),
                        }
                    }
                });
            }
            if session.status == SessionStatus::Completed && !session.notes.is_empty() {
                ui.label(RichText::new(format!("Notes: {}", session.notes)).small().weak());
            }
        });
        ui.add_space(4.0);
    }

    evaluation_window(ui, sessions, eval, toasts);
}

/// Post-session evaluation dialog: notes saved to the session record on
/// completion.
fn evaluation_window(
    ui: &Ui,
    sessions: &mut SessionBook,
    eval: &mut EvaluationFormState,
    toasts: &mut ToastManager,
) {
    let Some(session_id) = eval.session_id else {
        return;
    };
    let Some(session) = sessions.get(session_id).cloned() else {
        eval.session_id = None;
        return;
    };

    let mut close = false;
    egui::Window::new("Session Evaluation")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(format!("{} with {}", session.subject, session.student));
            ui.add_space(8.0);
            ui.label("How did the session go? What should the student work on?");
            ui.text_edit_multiline(&mut eval.notes);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save & Complete").clicked() {
                    match sessions.complete_with_notes(session_id, &eval.notes) {
                        Ok(()) => {
                            toasts.success("Session completed");
                            close = true;
                        }
                        Err(err) => toasts.error(err.to_string()),
                    }
                }
                if ui.button("Cancel").clicked() {
                    close = true;
                }
            });
        });
    if close {
        eval.session_id = None;
    }
}
