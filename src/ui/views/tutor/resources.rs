//! Tutor resource sharing: materials you have shared plus the share form.

use egui::{RichText, Ui};

use crate::models::resource::ResourceKind;
use crate::models::user::User;
use crate::services::availability::AvailabilityBoard;
use crate::services::resources::ResourceShelf;
use crate::ui::app::state::{today, ShareResourceState};
use crate::ui::app::toast::ToastManager;
use crate::ui::views::page_heading;

pub fn render(
    ui: &mut Ui,
    shelf: &mut ResourceShelf,
    board: &AvailabilityBoard,
    user: &User,
    state: &mut ShareResourceState,
    toasts: &mut ToastManager,
) {
    page_heading(ui, "Resources", "Materials you have shared with students");

    if ui.button("➕ Share Resource").clicked() {
        state.open = true;
    }
    ui.add_space(8.0);

    let shared: Vec<_> = shelf.by_tutor(&user.name).into_iter().cloned().collect();
    if shared.is_empty() {
        ui.label(RichText::new("You have not shared anything yet.").weak());
    }
    for resource in &shared {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.hyperlink_to(&resource.title, &resource.url);
            ui.label(
                RichText::new(format!("{} · {}", resource.subject, resource.uploaded))
                    .small()
                    .weak(),
            );
        });
        ui.add_space(4.0);
    }

    share_form(ui, shelf, board, user, state, toasts);
}

fn share_form(
    ui: &Ui,
    shelf: &mut ResourceShelf,
    board: &AvailabilityBoard,
    user: &User,
    state: &mut ShareResourceState,
    toasts: &mut ToastManager,
) {
    if !state.open {
        return;
    }

    let mut close = false;
    egui::Window::new("Share Resource")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.set_min_width(300.0);

            ui.label("Title");
            ui.text_edit_singleline(&mut state.title);
            ui.add_space(6.0);

            ui.label("Type");
            ui.horizontal(|ui| {
                for kind in [ResourceKind::Pdf, ResourceKind::Link, ResourceKind::Video] {
                    ui.selectable_value(&mut state.kind, kind, kind.label());
                }
            });
            ui.add_space(6.0);

            ui.label("Subject");
            egui::ComboBox::from_id_source("share_resource_subject")
                .selected_text(if state.subject.is_empty() {
                    "Choose a subject"
                } else {
                    state.subject.as_str()
                })
                .show_ui(ui, |ui| {
                    for subject in board.registered_subjects() {
                        ui.selectable_value(
                            &mut state.subject,
                            subject.name.clone(),
                            &subject.name,
                        );
                    }
                });
            ui.add_space(6.0);

            ui.label("URL");
            ui.text_edit_singleline(&mut state.url);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Share").clicked() {
                    match shelf.add(
                        &state.title,
                        state.kind,
                        &state.subject,
                        &user.name,
                        today(),
                        &state.url,
                    ) {
                        Ok(_) => {
                            toasts.success("Resource shared");
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
        *state = ShareResourceState::default();
    }
}
