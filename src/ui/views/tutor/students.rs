//! The tutor's student roster with progress summaries and a per-student
//! progress dialog.

use egui::{RichText, Ui};

use crate::services::directory::Directory;
use crate::ui::views::page_heading;

pub fn render(ui: &mut Ui, directory: &Directory, detail: &mut Option<i64>) {
    page_heading(ui, "My Students", "Students you are currently tutoring");

    for student in directory.roster() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&student.name).strong());
                        ui.label(RichText::new(&student.student_id).monospace().weak());
                    });
                    ui.label(RichText::new(student.subjects.join(" · ")).weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("View Progress").clicked() {
                        *detail = Some(student.id);
                    }
                    ui.vertical(|ui| {
                        ui.label(format!(
                            "{}/{} sessions completed",
                            student.completed_sessions, student.total_sessions
                        ));
                        ui.label(
                            RichText::new(format!("Last session {}", student.last_session))
                                .small()
                                .weak(),
                        );
                    });
                });
            });
        });
        ui.add_space(4.0);
    }

    render_progress(ui, directory, detail);
}

fn render_progress(ui: &mut Ui, directory: &Directory, detail: &mut Option<i64>) {
    let Some(student_id) = *detail else {
        return;
    };
    let Some(student) = directory.roster_student(student_id) else {
        *detail = None;
        return;
    };

    let mut close = false;
    egui::Window::new(format!("Progress: {}", student.name))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(RichText::new(&student.student_id).monospace().weak());
            ui.add_space(8.0);

            let ratio = student.completion_ratio();
            ui.add(
                egui::ProgressBar::new(ratio)
                    .text(format!("{:.0}% complete", ratio * 100.0)),
            );
            ui.label(format!(
                "{} of {} sessions completed",
                student.completed_sessions, student.total_sessions
            ));
            ui.add_space(8.0);

            ui.label(RichText::new("Subjects").strong());
            for subject in &student.subjects {
                ui.label(format!("• {}", subject));
            }
            ui.add_space(8.0);
            ui.label(format!("Last session {}", student.last_session));
            ui.add_space(8.0);

            if ui.button("Close").clicked() {
                close = true;
            }
        });
    if close {
        *detail = None;
    }
}
