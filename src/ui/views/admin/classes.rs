//! Admin class management: tutoring class list, creation and deletion.

use egui::{Color32, RichText, Ui};

use crate::models::course::ClassStatus;
use crate::services::catalog::Catalog;
use crate::ui::app::confirm::{ConfirmAction, ConfirmDialogState};
use crate::ui::app::state::{today, CreateClassState};
use crate::ui::app::toast::ToastManager;
use crate::ui::views::page_heading;

fn status_label(status: ClassStatus) -> RichText {
    let text = RichText::new(status.label());
    match status {
        ClassStatus::Active => text.color(Color32::from_rgb(40, 140, 60)),
        ClassStatus::Full => text.color(Color32::from_rgb(200, 140, 20)),
        ClassStatus::Closed => text.weak(),
    }
}

pub fn render(
    ui: &mut Ui,
    catalog: &mut Catalog,
    state: &mut CreateClassState,
    confirm: &mut ConfirmDialogState,
    toasts: &mut ToastManager,
) {
    page_heading(ui, "Class Management", "Tutoring classes across the platform");

    if ui.button("➕ Create Class").clicked() {
        state.open = true;
        state.max_students = 10;
    }
    ui.add_space(8.0);

    for class in catalog.classes().to_vec() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&class.name).strong());
                        ui.label(status_label(class.status));
                    });
                    ui.label(
                        RichText::new(format!(
                            "{} · {} · created {}",
                            class.subject, class.tutor, class.created
                        ))
                        .small()
                        .weak(),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("🗑").on_hover_text("Delete class").clicked() {
                        confirm.ask(ConfirmAction::DeleteClass {
                            id: class.id,
                            name: class.name.clone(),
                        });
                    }
                    ui.label(format!("{}/{} students", class.current_students, class.max_students));
                });
            });
        });
        ui.add_space(4.0);
    }

    create_form(ui, catalog, state, toasts);
}

fn create_form(
    ui: &Ui,
    catalog: &mut Catalog,
    state: &mut CreateClassState,
    toasts: &mut ToastManager,
) {
    if !state.open {
        return;
    }

    let mut close = false;
    egui::Window::new("Create Tutoring Class")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.set_min_width(300.0);

            ui.label("Class name");
            ui.text_edit_singleline(&mut state.name);
            ui.add_space(6.0);

            ui.label("Subject");
            ui.text_edit_singleline(&mut state.subject);
            ui.add_space(6.0);

            ui.label("Tutor");
            ui.text_edit_singleline(&mut state.tutor);
            ui.add_space(6.0);

            ui.label("Max students");
            ui.add(egui::Slider::new(&mut state.max_students, 1..=30));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Create").clicked() {
                    match catalog.create_class(
                        &state.name,
                        &state.subject,
                        &state.tutor,
                        state.max_students,
                        today(),
                    ) {
                        Ok(_) => {
                            toasts.success(format!("Created class '{}'", state.name));
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
        *state = CreateClassState::default();
    }
}
