//! Tutoring setup: subject registration and the weekly availability grid.

use egui::{RichText, Ui};

use crate::services::availability::AvailabilityBoard;
use crate::ui::app::state::{SetupTab, TutoringSetupState};
use crate::ui::app::toast::ToastManager;
use crate::ui::grid::availability_grid;
use crate::ui::views::page_heading;

pub fn render(
    ui: &mut Ui,
    board: &mut AvailabilityBoard,
    state: &mut TutoringSetupState,
    toasts: &mut ToastManager,
) {
    page_heading(
        ui,
        "Tutoring Setup",
        "Choose your subjects, then drag on the grid to add availability",
    );

    ui.horizontal(|ui| {
        for (tab, label) in [
            (SetupTab::Subjects, "Subjects"),
            (SetupTab::Availability, "Weekly Availability"),
        ] {
            if ui.selectable_label(state.tab == tab, label).clicked() {
                state.tab = tab;
            }
        }
    });
    ui.separator();
    ui.add_space(8.0);

    match state.tab {
        SetupTab::Subjects => subjects_tab(ui, board, toasts),
        SetupTab::Availability => availability_grid(
            ui,
            board,
            &mut state.selection,
            &mut state.subject_dialog,
            toasts,
        ),
    }
}

fn subjects_tab(ui: &mut Ui, board: &mut AvailabilityBoard, toasts: &mut ToastManager) {
    ui.label(RichText::new("Subjects you can tutor").strong());
    ui.label(
        RichText::new("Only registered subjects can be attached to availability slots.")
            .small()
            .weak(),
    );
    ui.add_space(8.0);

    let subjects: Vec<_> = board.subjects().to_vec();
    for subject in &subjects {
        ui.horizontal(|ui| {
            let mut registered = subject.registered;
            if ui
                .checkbox(&mut registered, format!("{} ({})", subject.name, subject.code))
                .changed()
            {
                match board.toggle_subject(&subject.id) {
                    Ok(true) => toasts.success(format!("Now tutoring {}", subject.name)),
                    Ok(false) => toasts.info(format!("Stopped tutoring {}", subject.name)),
                    Err(err) => toasts.error(err.to_string()),
                }
            }
        });
    }
}
