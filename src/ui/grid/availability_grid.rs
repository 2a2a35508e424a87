//! Rendering and input wiring for the weekly availability grid.
//!
//! The grid is an hour-by-weekday matrix of one-hour cells. A drag over a
//! column selects a contiguous range; releasing the pointer opens the
//! subject-tag dialog, and saving the dialog commits the slot to the
//! board. Every rejection surfaces as a toast, never a blocking error.

use std::collections::BTreeSet;

use egui::{Color32, Context, Rect, RichText, Sense, Stroke, Ui, Vec2};

use crate::models::slot::{SlotStatus, DAY_NAMES};
use crate::models::subject::SubjectId;
use crate::services::availability::{AvailabilityBoard, CandidateRange};
use crate::ui::app::toast::ToastManager;
use crate::ui::grid::{GridCell, Selection};

const CELL_HEIGHT: f32 = 26.0;
const HOUR_LABEL_WIDTH: f32 = 48.0;
const CELL_GAP: f32 = 2.0;

const COLOR_AVAILABLE: Color32 = Color32::from_rgb(190, 235, 195);
const COLOR_BOOKED: Color32 = Color32::from_rgb(250, 205, 160);
const COLOR_SELECTING: Color32 = Color32::from_rgb(170, 200, 250);
const COLOR_EMPTY: Color32 = Color32::from_rgb(245, 245, 245);

/// Modal for tagging a freshly selected time range with subjects.
///
/// Holds the candidate range between pointer release and save; the board
/// re-validates on commit, so a stale candidate can only fail, never
/// corrupt the store.
#[derive(Debug, Default)]
pub struct SlotSubjectDialog {
    candidate: Option<CandidateRange>,
    checked: BTreeSet<SubjectId>,
}

impl SlotSubjectDialog {
    pub fn is_open(&self) -> bool {
        self.candidate.is_some()
    }

    pub fn open(&mut self, candidate: CandidateRange) {
        self.candidate = Some(candidate);
        self.checked.clear();
    }

    fn close(&mut self) {
        self.candidate = None;
        self.checked.clear();
    }

    /// Render the dialog if open. Saving with no subject checked keeps the
    /// dialog open and raises a warning toast.
    pub fn render(
        &mut self,
        ctx: &Context,
        board: &mut AvailabilityBoard,
        toasts: &mut ToastManager,
    ) {
        let Some(candidate) = self.candidate else {
            return;
        };

        let mut save = false;
        let mut cancel = false;

        egui::Window::new("New Availability Slot")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(280.0);
                ui.label(format!(
                    "{}, {:02}:00 - {:02}:00",
                    DAY_NAMES[candidate.day as usize],
                    candidate.start_hour,
                    candidate.end_hour
                ));
                ui.add_space(8.0);
                ui.label(RichText::new("Subjects you can tutor in this slot:").strong());
                ui.add_space(4.0);

                for subject in board.registered_subjects() {
                    let mut checked = self.checked.contains(&subject.id);
                    if ui
                        .checkbox(&mut checked, format!("{} ({})", subject.name, subject.code))
                        .changed()
                    {
                        if checked {
                            self.checked.insert(subject.id.clone());
                        } else {
                            self.checked.remove(&subject.id);
                        }
                    }
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Save").clicked() {
                            save = true;
                        }
                        if ui.button("Cancel").clicked() {
                            cancel = true;
                        }
                    });
                });
            });

        if cancel {
            self.close();
            return;
        }
        if save {
            match board.commit_slot(&candidate, &self.checked) {
                Ok(_) => {
                    toasts.success("Availability slot added");
                    self.close();
                }
                Err(err) => {
                    // Keeps the dialog open so the tutor can fix the
                    // selection instead of redoing the drag.
                    toasts.warning(err.to_string());
                }
            }
        }
    }
}

/// Draw the grid, run the gesture, and render the slot list below it.
pub fn availability_grid(
    ui: &mut Ui,
    board: &mut AvailabilityBoard,
    selection: &mut Selection,
    dialog: &mut SlotSubjectDialog,
    toasts: &mut ToastManager,
) {
    let cell_width =
        ((ui.available_width() - HOUR_LABEL_WIDTH) / DAY_NAMES.len() as f32 - CELL_GAP).max(40.0);

    header_row(ui, cell_width);

    let mut released = false;
    for hour in board.hours() {
        ui.horizontal(|ui| {
            ui.add_sized(
                Vec2::new(HOUR_LABEL_WIDTH, CELL_HEIGHT),
                egui::Label::new(RichText::new(format!("{:02}:00", hour)).weak()),
            );

            for day in 0..DAY_NAMES.len() as u8 {
                let cell = GridCell::new(day, hour);
                let (rect, response) = ui.allocate_exact_size(
                    Vec2::new(cell_width, CELL_HEIGHT),
                    Sense::click_and_drag(),
                );

                paint_cell(ui, rect, board, selection, cell);

                if dialog.is_open() {
                    continue;
                }
                if response.drag_started() {
                    match board.check_selection_start(day, hour) {
                        Ok(()) => selection.begin(cell),
                        Err(err) => toasts.error(err.to_string()),
                    }
                } else if selection.is_selecting() && response.contains_pointer() {
                    // hovered() is suppressed while a drag is active, so
                    // the cell-under-pointer test uses contains_pointer.
                    selection.extend(cell);
                }
            }
        });
        ui.add_space(CELL_GAP);
    }

    // Release anywhere ends the gesture, including outside the grid, so a
    // drag that leaves the window can never get stuck mid-selection.
    if selection.is_selecting() && ui.input(|i| i.pointer.any_released()) {
        released = true;
    }
    if released {
        if let Some(candidate) = selection.resolve() {
            match board.check_candidate(&candidate) {
                Ok(()) => dialog.open(candidate),
                Err(err) => toasts.error(err.to_string()),
            }
        }
    }

    ui.add_space(8.0);
    legend(ui);
    ui.add_space(12.0);
    slot_list(ui, board, toasts);

    dialog.render(ui.ctx(), board, toasts);
}

fn header_row(ui: &mut Ui, cell_width: f32) {
    ui.horizontal(|ui| {
        ui.add_sized(
            Vec2::new(HOUR_LABEL_WIDTH, CELL_HEIGHT),
            egui::Label::new(""),
        );
        for name in DAY_NAMES {
            ui.add_sized(
                Vec2::new(cell_width, CELL_HEIGHT),
                egui::Label::new(RichText::new(&name[..3]).strong()),
            );
        }
    });
    ui.add_space(CELL_GAP);
}

fn paint_cell(
    ui: &Ui,
    rect: Rect,
    board: &AvailabilityBoard,
    selection: &Selection,
    cell: GridCell,
) {
    let fill = if selection.covers(cell) {
        COLOR_SELECTING
    } else {
        match board.slot_at(cell.day, cell.hour).map(|s| &s.status) {
            Some(SlotStatus::Booked { .. }) => COLOR_BOOKED,
            Some(SlotStatus::Available) => COLOR_AVAILABLE,
            None => COLOR_EMPTY,
        }
    };

    let painter = ui.painter();
    painter.rect_filled(rect.shrink(1.0), 3.0, fill);
    painter.rect_stroke(
        rect.shrink(1.0),
        3.0,
        Stroke::new(0.5, Color32::from_gray(200)),
    );
}

fn legend(ui: &mut Ui) {
    ui.horizontal(|ui| {
        for (color, label) in [
            (COLOR_AVAILABLE, "Available"),
            (COLOR_BOOKED, "Booked"),
            (COLOR_SELECTING, "Selecting"),
        ] {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color);
            ui.label(RichText::new(label).small());
            ui.add_space(8.0);
        }
    });
}

/// Per-day slot cards with a delete control on available slots. Booked
/// slots show the student instead; they cannot be deleted.
fn slot_list(ui: &mut Ui, board: &mut AvailabilityBoard, toasts: &mut ToastManager) {
    ui.label(RichText::new("Your slots").strong());
    ui.add_space(4.0);

    let mut delete_request = None;
    for day in 0..DAY_NAMES.len() as u8 {
        let slots = board.slots_for_day(day);
        if slots.is_empty() {
            continue;
        }
        ui.label(RichText::new(DAY_NAMES[day as usize]).underline());
        for slot in slots {
            ui.horizontal(|ui| {
                ui.label(slot.time_range());

                let subjects = slot
                    .subjects
                    .iter()
                    .filter_map(|id| board.subject_name(id))
                    .collect::<Vec<_>>()
                    .join(", ");
                ui.label(RichText::new(subjects).weak());

                match &slot.status {
                    SlotStatus::Booked { occupant } => {
                        ui.label(
                            RichText::new(format!("Booked by {}", occupant))
                                .color(Color32::from_rgb(180, 100, 20)),
                        );
                    }
                    SlotStatus::Available => {
                        if ui.small_button("🗑").on_hover_text("Delete slot").clicked() {
                            delete_request = Some(slot.id);
                        }
                    }
                }
            });
        }
        ui.add_space(6.0);
    }

    if let Some(id) = delete_request {
        match board.delete_slot(id) {
            Ok(()) => toasts.info("Availability slot removed"),
            Err(err) => toasts.error(err.to_string()),
        }
    }
}
