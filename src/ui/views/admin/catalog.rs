//! Admin catalog: course and soft-skill management.

use egui::{RichText, Ui};

use crate::services::catalog::Catalog;
use crate::ui::app::state::{CatalogFormState, CatalogTab};
use crate::ui::app::toast::ToastManager;
use crate::ui::views::page_heading;

pub fn render(
    ui: &mut Ui,
    catalog: &mut Catalog,
    state: &mut CatalogFormState,
    toasts: &mut ToastManager,
) {
    page_heading(ui, "Catalog", "Courses and soft skills offered for tutoring");

    ui.horizontal(|ui| {
        for (tab, label) in [(CatalogTab::Courses, "Courses"), (CatalogTab::Skills, "Soft Skills")]
        {
            if ui.selectable_label(state.tab == tab, label).clicked() {
                state.tab = tab;
            }
        }
    });
    ui.separator();
    ui.add_space(8.0);

    match state.tab {
        CatalogTab::Courses => courses_tab(ui, catalog, state, toasts),
        CatalogTab::Skills => skills_tab(ui, catalog, state, toasts),
    }
}

fn courses_tab(
    ui: &mut Ui,
    catalog: &mut Catalog,
    state: &mut CatalogFormState,
    toasts: &mut ToastManager,
) {
    for course in catalog.courses() {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&course.code).monospace());
            ui.label(&course.name);
            ui.label(
                RichText::new(format!("{} · {} credits", course.faculty, course.credits))
                    .small()
                    .weak(),
            );
        });
    }

    ui.add_space(12.0);
    ui.label(RichText::new("Add a course").strong());
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.course_code)
                .hint_text("Code")
                .desired_width(70.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut state.course_name)
                .hint_text("Name")
                .desired_width(160.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut state.course_faculty)
                .hint_text("Faculty")
                .desired_width(160.0),
        );
        ui.add(egui::DragValue::new(&mut state.course_credits).range(1..=10));
        if ui.button("Add").clicked() {
            match catalog.add_course(
                &state.course_code,
                &state.course_name,
                &state.course_faculty,
                state.course_credits,
            ) {
                Ok(_) => {
                    toasts.success(format!("Added course {}", state.course_name));
                    state.course_code.clear();
                    state.course_name.clear();
                    state.course_faculty.clear();
                }
                Err(err) => toasts.error(err.to_string()),
            }
        }
    });
}

fn skills_tab(
    ui: &mut Ui,
    catalog: &mut Catalog,
    state: &mut CatalogFormState,
    toasts: &mut ToastManager,
) {
    for skill in catalog.skills() {
        ui.horizontal(|ui| {
            ui.label(&skill.name);
            ui.label(RichText::new(&skill.category).small().weak());
        });
    }

    ui.add_space(12.0);
    ui.label(RichText::new("Add a skill").strong());
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.skill_name)
                .hint_text("Skill name")
                .desired_width(180.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut state.skill_category)
                .hint_text("Category")
                .desired_width(140.0),
        );
        if ui.button("Add").clicked() {
            match catalog.add_skill(&state.skill_name, &state.skill_category) {
                Ok(_) => {
                    toasts.success(format!("Added skill {}", state.skill_name));
                    state.skill_name.clear();
                    state.skill_category.clear();
                }
                Err(err) => toasts.error(err.to_string()),
            }
        }
    });
}
