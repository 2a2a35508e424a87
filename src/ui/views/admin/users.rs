//! Admin user management: filterable account table with enable/disable.

use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::models::user::Role;
use crate::services::directory::{AccountStatus, Directory};
use crate::ui::app::state::UserFilterState;
use crate::ui::app::toast::ToastManager;
use crate::ui::views::page_heading;

pub fn render(
    ui: &mut Ui,
    directory: &mut Directory,
    state: &mut UserFilterState,
    toasts: &mut ToastManager,
) {
    page_heading(ui, "User Management", "All accounts on the platform");

    ui.horizontal(|ui| {
        ui.label("🔍");
        ui.add(
            egui::TextEdit::singleline(&mut state.query)
                .hint_text("Name or email")
                .desired_width(220.0),
        );
        ui.separator();
        for (role, label) in [
            (None, "All"),
            (Some(Role::Student), "Students"),
            (Some(Role::Tutor), "Tutors"),
            (Some(Role::Admin), "Admins"),
        ] {
            if ui.selectable_label(state.role == role, label).clicked() {
                state.role = role;
            }
        }
    });
    ui.add_space(8.0);

    let rows: Vec<_> = directory
        .filter_users(&state.query, state.role)
        .into_iter()
        .cloned()
        .collect();

    let mut toggle_request = None;
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(80.0))
        .header(22.0, |mut header| {
            for title in ["Name", "Email", "Role", "Sessions", "Status", ""] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for user in &rows {
                body.row(24.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&user.name);
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&user.email).weak());
                    });
                    row.col(|ui| {
                        let mut role = user.role.to_string();
                        if let Some(rating) = user.rating {
                            role.push_str(&format!(" ★{:.1}", rating));
                        }
                        ui.label(role);
                    });
                    row.col(|ui| {
                        ui.label(user.total_sessions.to_string());
                    });
                    row.col(|ui| match user.status {
                        AccountStatus::Active => {
                            ui.label(
                                RichText::new("Active").color(Color32::from_rgb(40, 140, 60)),
                            );
                        }
                        AccountStatus::Disabled => {
                            ui.label(
                                RichText::new("Disabled").color(Color32::from_rgb(180, 60, 60)),
                            );
                        }
                    });
                    row.col(|ui| {
                        let label = match user.status {
                            AccountStatus::Active => "Disable",
                            AccountStatus::Disabled => "Enable",
                        };
                        if ui.small_button(label).clicked() {
                            toggle_request = Some((user.id, user.name.clone()));
                        }
                    });
                });
            }
        });

    if let Some((id, name)) = toggle_request {
        match directory.toggle_user_status(id) {
            Ok(AccountStatus::Active) => toasts.success(format!("Enabled {}", name)),
            Ok(AccountStatus::Disabled) => toasts.info(format!("Disabled {}", name)),
            Err(err) => toasts.error(err.to_string()),
        }
    }
}
