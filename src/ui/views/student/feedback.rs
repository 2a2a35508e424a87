//! Session feedback: rate completed sessions and review past ratings.

use egui::{Color32, RichText, Ui};

use crate::models::session::SessionStatus;
use crate::models::user::User;
use crate::services::feedback::FeedbackDesk;
use crate::services::sessions::SessionBook;
use crate::ui::app::state::{today, FeedbackFormState};
use crate::ui::app::toast::ToastManager;
use crate::ui::views::page_heading;

fn star_row(ui: &mut Ui, rating: &mut u8) {
    ui.horizontal(|ui| {
        for star in 1..=5u8 {
            let label = if star <= *rating { "★" } else { "☆" };
            if ui
                .label(RichText::new(label).size(20.0).color(Color32::from_rgb(220, 170, 30)))
                .interact(egui::Sense::click())
                .clicked()
            {
                *rating = star;
            }
        }
    });
}

pub fn render(
    ui: &mut Ui,
    sessions: &SessionBook,
    desk: &mut FeedbackDesk,
    user: &User,
    form: &mut FeedbackFormState,
    toasts: &mut ToastManager,
) {
    page_heading(ui, "Feedback", "Rate your completed sessions");

    let completed = sessions.student_sessions(&user.name, SessionStatus::Completed);
    if completed.is_empty() {
        ui.label(RichText::new("Complete a session to leave feedback.").weak());
    }

    for session in &completed {
        let already_rated = desk.has_feedback_for(session.id);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&session.subject).strong());
                ui.label(format!("with {}", session.tutor));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if already_rated {
                        ui.label(RichText::new("✓ Rated").weak());
                    } else if ui.button("Rate Session").clicked() {
                        form.open_for(session.id);
                    }
                });
            });
        });
        ui.add_space(4.0);
    }

    // Rating form for the selected session
    if let Some(session_id) = form.session_id {
        if let Some(session) = sessions.get(session_id) {
            let mut close = false;
            egui::Window::new("Rate Session")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ui.ctx(), |ui| {
                    ui.label(format!("{} with {}", session.subject, session.tutor));
                    ui.add_space(8.0);
                    star_row(ui, &mut form.rating);
                    ui.add_space(8.0);
                    ui.text_edit_multiline(&mut form.comment);
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Submit").clicked() {
                            match desk.submit(
                                session.id,
                                &user.name,
                                &session.tutor,
                                &session.subject,
                                today(),
                                form.rating,
                                &form.comment,
                            ) {
                                Ok(_) => {
                                    toasts.success("Thanks for your feedback");
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
                form.close();
            }
        } else {
            form.close();
        }
    }
}
