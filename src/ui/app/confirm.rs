//! Confirmation dialog for destructive actions.
//!
//! Cancelling a session and deleting a tutoring class both pass through
//! here; deleting an availability slot deliberately does not.

use egui::{Color32, Context, RichText};

/// The pending action a confirmation dialog is asking about
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    CancelSession { id: i64, subject: String },
    DeleteClass { id: i64, name: String },
}

#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn ask(&mut self, action: ConfirmAction) {
        self.pending = Some(action);
    }

    fn title(action: &ConfirmAction) -> &'static str {
        match action {
            ConfirmAction::CancelSession { .. } => "Cancel Session",
            ConfirmAction::DeleteClass { .. } => "Delete Class",
        }
    }

    fn message(action: &ConfirmAction) -> String {
        match action {
            ConfirmAction::CancelSession { subject, .. } => format!(
                "Cancel your {} session? The tutor will be notified.",
                subject
            ),
            ConfirmAction::DeleteClass { name, .. } => format!(
                "Delete the class '{}'? This cannot be undone.",
                name
            ),
        }
    }

    fn confirm_text(action: &ConfirmAction) -> &'static str {
        match action {
            ConfirmAction::CancelSession { .. } => "Cancel Session",
            ConfirmAction::DeleteClass { .. } => "Delete",
        }
    }

    /// Render the modal if an action is pending. Returns the confirmed
    /// action once the user accepts; the caller executes it.
    pub fn render(&mut self, ctx: &Context) -> Option<ConfirmAction> {
        let action = self.pending.clone()?;
        let mut confirmed = false;
        let mut dismissed = false;

        egui::Window::new(Self::title(&action))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.add_space(4.0);
                ui.label(Self::message(&action));
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let confirm_label = RichText::new(Self::confirm_text(&action))
                            .color(Color32::WHITE);
                        let confirm_button = egui::Button::new(confirm_label)
                            .fill(Color32::from_rgb(200, 60, 60));
                        if ui.add(confirm_button).clicked() {
                            confirmed = true;
                        }
                        if ui.button("Keep").clicked() {
                            dismissed = true;
                        }
                    });
                });
            });

        if confirmed {
            self.pending = None;
            Some(action)
        } else {
            if dismissed {
                self.pending = None;
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_opens_dialog() {
        let mut dialog = ConfirmDialogState::default();
        assert!(!dialog.is_open());
        dialog.ask(ConfirmAction::DeleteClass {
            id: 3,
            name: "Linear Algebra".to_string(),
        });
        assert!(dialog.is_open());
    }

    #[test]
    fn test_messages_name_the_target() {
        let action = ConfirmAction::CancelSession {
            id: 1,
            subject: "Calculus 2".to_string(),
        };
        assert!(ConfirmDialogState::message(&action).contains("Calculus 2"));
    }
}
