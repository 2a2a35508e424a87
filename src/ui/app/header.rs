//! Top bar: app identity, the signed-in user and the logout control.

use super::TutorHubApp;
use egui::{Color32, RichText};

impl TutorHubApp {
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        let Some(user) = self.current_user.clone() else {
            return;
        };

        let mut logout = false;
        egui::TopBottomPanel::top("header")
            .exact_height(44.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(RichText::new("TutorHub").size(18.0).strong());
                    ui.label(
                        RichText::new(user.role.portal_label())
                            .small()
                            .color(Color32::from_gray(130)),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Sign Out").clicked() {
                            logout = true;
                        }
                        ui.label(RichText::new(&user.name).strong());
                        // Avatar placeholder: the user's initial in a circle
                        let (rect, _) = ui
                            .allocate_exact_size(egui::Vec2::splat(26.0), egui::Sense::hover());
                        ui.painter().circle_filled(
                            rect.center(),
                            13.0,
                            Color32::from_rgb(90, 120, 200),
                        );
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            user.initial(),
                            egui::FontId::proportional(14.0),
                            Color32::WHITE,
                        );
                    });
                });
            });

        if logout {
            self.sign_out();
        }
    }
}
