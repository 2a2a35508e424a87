//! Student profile: editable identity card plus registered courses.

use egui::{RichText, Ui};

use crate::models::user::User;
use crate::services::catalog::Catalog;
use crate::ui::app::state::ProfileEditState;
use crate::ui::app::toast::ToastManager;
use crate::ui::views::{identity_card, page_heading};

pub fn render(
    ui: &mut Ui,
    user: &User,
    catalog: &Catalog,
    edit: &mut ProfileEditState,
    toasts: &mut ToastManager,
) -> Option<User> {
    page_heading(ui, "Profile", "");

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            let updated = identity_card(ui, user, edit, toasts);
            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            ui.label(RichText::new("Registered courses").strong());
            let registered: Vec<_> = catalog
                .courses()
                .iter()
                .filter(|c| catalog.is_registered(c.id))
                .collect();
            if registered.is_empty() {
                ui.label(RichText::new("None yet").weak());
            }
            for course in registered {
                ui.label(format!("• {} ({})", course.name, course.code));
            }

            updated
        })
        .inner
}
