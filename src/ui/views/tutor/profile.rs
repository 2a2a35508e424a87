//! Tutor profile: editable identity card plus registered subjects and
//! slot counts.

use egui::{RichText, Ui};

use crate::models::user::User;
use crate::services::availability::AvailabilityBoard;
use crate::ui::app::state::ProfileEditState;
use crate::ui::app::toast::ToastManager;
use crate::ui::views::{identity_card, page_heading};

pub fn render(
    ui: &mut Ui,
    user: &User,
    board: &AvailabilityBoard,
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

            ui.label(RichText::new("Tutoring subjects").strong());
            let registered = board.registered_subjects();
            if registered.is_empty() {
                ui.label(RichText::new("None yet").weak());
            }
            for subject in registered {
                ui.label(format!("• {} ({})", subject.name, subject.code));
            }

            ui.add_space(8.0);
            let booked = board.slots().iter().filter(|s| s.status.is_booked()).count();
            ui.label(format!(
                "{} availability slots, {} booked",
                board.slots().len(),
                booked
            ));

            updated
        })
        .inner
}
