//! Tutor search: free-text query plus subject chips over the directory.

use egui::{Color32, RichText, Ui};

use crate::services::directory::Directory;
use crate::ui::app::state::FindTutorState;
use crate::ui::app::toast::ToastManager;
use crate::ui::views::page_heading;

pub fn render(
    ui: &mut Ui,
    directory: &Directory,
    state: &mut FindTutorState,
    toasts: &mut ToastManager,
) {
    page_heading(ui, "Find a Tutor", "Search by name or subject");

    ui.horizontal(|ui| {
        ui.label("🔍");
        ui.add(
            egui::TextEdit::singleline(&mut state.query)
                .hint_text("e.g. physics, Tran Thi B")
                .desired_width(280.0),
        );
        if !state.query.is_empty() && ui.small_button("✖").clicked() {
            state.query.clear();
        }
    });

    // Subject chips built from what the tutors actually offer
    let mut all_subjects: Vec<String> = directory
        .tutors()
        .iter()
        .flat_map(|t| t.subjects.iter().cloned())
        .collect();
    all_subjects.sort();
    all_subjects.dedup();

    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for subject in &all_subjects {
            let selected = state.selected_subjects.contains(subject);
            if ui.selectable_label(selected, subject).clicked() {
                if selected {
                    state.selected_subjects.retain(|s| s != subject);
                } else {
                    state.selected_subjects.push(subject.clone());
                }
            }
        }
    });

    ui.add_space(12.0);
    let hits = directory.search_tutors(&state.query, &state.selected_subjects);
    if hits.is_empty() {
        ui.label(RichText::new("No tutors match your search.").weak());
        return;
    }

    for tutor in hits {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&tutor.name).strong());
                        ui.label(
                            RichText::new(format!(
                                "★ {:.1} ({} reviews)",
                                tutor.rating, tutor.total_reviews
                            ))
                            .color(Color32::from_rgb(200, 150, 20)),
                        );
                    });
                    ui.label(RichText::new(tutor.subjects.join(" · ")).weak());
                    ui.label(RichText::new(&tutor.experience).small().weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("View Profile").clicked() {
                        state.open_detail(tutor.id);
                    }
                    if !tutor.available {
                        ui.label(RichText::new("Fully booked").weak());
                    }
                });
            });
        });
        ui.add_space(4.0);
    }

    render_detail(ui, directory, state, toasts);
}

/// Tutor detail dialog with the booking form. Nothing is scheduled in
/// the mock until the tutor accepts, so a valid request only toasts.
fn render_detail(
    ui: &mut Ui,
    directory: &Directory,
    state: &mut FindTutorState,
    toasts: &mut ToastManager,
) {
    let Some(tutor_id) = state.detail else {
        return;
    };
    let Some(tutor) = directory.tutor(tutor_id) else {
        state.close_detail();
        return;
    };

    let mut close = false;
    egui::Window::new(tutor.name.clone())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(
                RichText::new(format!(
                    "★ {:.1} ({} reviews)",
                    tutor.rating, tutor.total_reviews
                ))
                .color(Color32::from_rgb(200, 150, 20)),
            );
            ui.label(&tutor.experience);
            if !tutor.available {
                ui.label(RichText::new("Not taking new students right now").weak());
            }
            ui.add_space(8.0);

            ui.label(RichText::new("Subjects").strong());
            for subject in &tutor.subjects {
                ui.label(format!("• {}", subject));
            }
            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            ui.label(RichText::new("Request a session").strong());
            egui::ComboBox::from_id_source("booking_subject")
                .selected_text(if state.booking_subject.is_empty() {
                    "Choose a subject"
                } else {
                    state.booking_subject.as_str()
                })
                .show_ui(ui, |ui| {
                    for subject in &tutor.subjects {
                        ui.selectable_value(
                            &mut state.booking_subject,
                            subject.clone(),
                            subject,
                        );
                    }
                });
            ui.add_space(4.0);
            ui.add(
                egui::TextEdit::multiline(&mut state.booking_message)
                    .hint_text("What would you like help with? (optional)")
                    .desired_rows(3),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Send Request").clicked() {
                    if state.booking_subject.is_empty() {
                        toasts.warning("Choose a subject first");
                    } else {
                        match directory.request_session(tutor.id, &state.booking_subject) {
                            Ok(()) => {
                                toasts.success(format!(
                                    "Session request sent to {}",
                                    tutor.name
                                ));
                                close = true;
                            }
                            Err(err) => toasts.error(err.to_string()),
                        }
                    }
                }
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        });
    if close {
        state.close_detail();
    }
}
