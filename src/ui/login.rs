//! Login screen with the demo role shortcuts.
//!
//! There is no real credential check. The username decides the role: it
//! is matched case-insensitively, "tutor" routes to the tutor portal,
//! "admin" to the admin portal, anything else to the student portal.

use egui::{Color32, Context, RichText};

/// Login form fields. The password is collected for realism only and
/// never inspected.
#[derive(Debug, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
}

/// Render the centered login card. Returns the submitted username once
/// the user signs in.
pub fn render_login(ctx: &Context, state: &mut LoginState) -> Option<String> {
    let mut submitted = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.22);

            ui.heading(RichText::new("TutorHub").size(28.0));
            ui.label(RichText::new("University Tutoring Support").weak());
            ui.add_space(24.0);

            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(20.0))
                .show(ui, |ui| {
                    ui.set_max_width(320.0);

                    ui.label("Username");
                    ui.text_edit_singleline(&mut state.username);
                    ui.add_space(8.0);

                    ui.label("Password");
                    let password_response = ui.add(
                        egui::TextEdit::singleline(&mut state.password).password(true),
                    );
                    ui.add_space(16.0);

                    let enter_pressed = password_response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    let clicked = ui
                        .add_sized([280.0, 32.0], egui::Button::new("Sign In"))
                        .clicked();

                    if (clicked || enter_pressed) && !state.username.trim().is_empty() {
                        submitted = Some(state.username.trim().to_string());
                    }
                });

            ui.add_space(16.0);
            ui.label(
                RichText::new("Demo accounts: try \"student1\", \"tutor1\" or \"admin1\"")
                    .small()
                    .color(Color32::from_gray(130)),
            );
        });
    });

    submitted
}
