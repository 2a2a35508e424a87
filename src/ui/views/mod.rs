//! Portal screens, one module per role.

pub mod admin;
pub mod student;
pub mod tutor;

use egui::{RichText, Ui};

use crate::models::user::User;
use crate::ui::app::state::ProfileEditState;
use crate::ui::app::toast::ToastManager;

pub(crate) fn page_heading(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.add_space(4.0);
    ui.heading(title);
    if !subtitle.is_empty() {
        ui.label(RichText::new(subtitle).weak());
    }
    ui.add_space(12.0);
}

/// Name and email card at the top of both profile screens, with the
/// edit form behind an Edit button. Returns the updated identity once
/// the user saves a valid change.
pub(crate) fn identity_card(
    ui: &mut Ui,
    user: &User,
    edit: &mut ProfileEditState,
    toasts: &mut ToastManager,
) -> Option<User> {
    let mut updated = None;

    if edit.editing {
        ui.label(RichText::new("Name").small().weak());
        ui.text_edit_singleline(&mut edit.name);
        ui.label(RichText::new("Email").small().weak());
        ui.text_edit_singleline(&mut edit.email);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                match user.updated(&edit.name, &edit.email) {
                    Ok(user) => {
                        toasts.success("Profile updated");
                        updated = Some(user);
                        edit.close();
                    }
                    Err(err) => toasts.error(err),
                }
            }
            if ui.button("Cancel").clicked() {
                edit.close();
            }
        });
    } else {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&user.name).size(20.0).strong());
                ui.label(RichText::new(&user.email).weak());
                ui.label(format!("Role: {}", user.role));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                if ui.button("Edit").clicked() {
                    edit.open(&user.name, &user.email);
                }
            });
        });
    }

    updated
}

/// Small labeled statistic, used by the dashboards
pub(crate) fn stat_card(ui: &mut Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(16.0, 10.0))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(value).size(22.0).strong());
                ui.label(RichText::new(label).small().weak());
            });
        });
}
