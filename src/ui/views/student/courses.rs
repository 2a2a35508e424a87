//! Course registration: the catalog with per-course register toggles.

use egui::{RichText, Ui};

use crate::services::catalog::Catalog;
use crate::ui::app::toast::ToastManager;
use crate::ui::views::page_heading;

pub fn render(ui: &mut Ui, catalog: &mut Catalog, toasts: &mut ToastManager) {
    page_heading(
        ui,
        "My Courses",
        "Register the courses you want tutoring support for",
    );

    let courses: Vec<_> = catalog.courses().to_vec();
    for course in &courses {
        let registered = catalog.is_registered(course.id);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&course.code).monospace());
                        ui.label(RichText::new(&course.name).strong());
                    });
                    ui.label(
                        RichText::new(format!("{} · {} credits", course.faculty, course.credits))
                            .small()
                            .weak(),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if registered { "Unregister" } else { "Register" };
                    if ui.button(label).clicked() {
                        match catalog.toggle_registration(course.id) {
                            Ok(true) => toasts.success(format!("Registered for {}", course.name)),
                            Ok(false) => toasts.info(format!("Unregistered from {}", course.name)),
                            Err(err) => toasts.error(err.to_string()),
                        }
                    }
                    if registered {
                        ui.label(RichText::new("✓ Registered").small());
                    }
                });
            });
        });
        ui.add_space(4.0);
    }
}
