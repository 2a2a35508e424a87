//! Admin feedback review: the queue of student ratings and the review
//! form that settles them.

use egui::{Color32, RichText, Ui};

use crate::models::feedback::ReviewStatus;
use crate::services::feedback::FeedbackDesk;
use crate::ui::app::state::ReviewState;
use crate::ui::app::toast::ToastManager;
use crate::ui::views::page_heading;

fn status_label(status: ReviewStatus) -> RichText {
    let text = RichText::new(status.label());
    match status {
        ReviewStatus::Pending => text.color(Color32::from_rgb(200, 140, 20)),
        ReviewStatus::Reviewed => text.color(Color32::from_rgb(40, 140, 60)),
        ReviewStatus::ActionRequired => text.color(Color32::from_rgb(180, 60, 60)),
    }
}

fn stars(rating: u8) -> String {
    "★".repeat(rating as usize) + &"☆".repeat(5usize.saturating_sub(rating as usize))
}

pub fn render(
    ui: &mut Ui,
    desk: &mut FeedbackDesk,
    state: &mut ReviewState,
    toasts: &mut ToastManager,
) {
    page_heading(ui, "Session Evaluation", "Student feedback across all tutors");

    if let Some(avg) = desk.average_rating() {
        ui.label(format!("Platform average rating: {:.1} / 5", avg));
        ui.add_space(8.0);
    }

    for entry in desk.entries().to_vec() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(stars(entry.rating)).color(Color32::from_rgb(220, 170, 30)));
                ui.label(RichText::new(&entry.subject).strong());
                ui.label(format!("{} → {}", entry.student, entry.tutor));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(status_label(entry.status));
                    ui.label(RichText::new(entry.date.to_string()).weak());
                });
            });
            if !entry.comment.is_empty() {
                ui.label(RichText::new(format!("\"{}\"", entry.comment)).italics());
            }
            if !entry.admin_note.is_empty() {
                ui.label(RichText::new(format!("Admin note: {}", entry.admin_note)).small().weak());
            }

            if entry.status != ReviewStatus::Reviewed {
                if state.entry_id == Some(entry.id) {
                    ui.add_space(4.0);
                    ui.text_edit_singleline(&mut state.note);
                    ui.horizontal(|ui| {
                        if ui.button("Mark Reviewed").clicked() {
                            settle(desk, state, entry.id, ReviewStatus::Reviewed, toasts);
                        }
                        if ui.button("Needs Action").clicked() {
                            settle(desk, state, entry.id, ReviewStatus::ActionRequired, toasts);
                        }
                        if ui.button("Close").clicked() {
                            state.entry_id = None;
                        }
                    });
                } else if ui.small_button("Review").clicked() {
                    state.entry_id = Some(entry.id);
                    state.note.clear();
                }
            }
        });
        ui.add_space(4.0);
    }
}

fn settle(
    desk: &mut FeedbackDesk,
    state: &mut ReviewState,
    id: i64,
    status: ReviewStatus,
    toasts: &mut ToastManager,
) {
    match desk.review(id, &state.note, status) {
        Ok(()) => {
            toasts.success("Feedback reviewed");
            state.entry_id = None;
        }
        Err(err) => toasts.error(err.to_string()),
    }
}
