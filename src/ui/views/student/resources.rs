//! Shared learning materials, filterable by subject.

use egui::{RichText, Ui};

use crate::models::resource::ResourceKind;
use crate::services::resources::ResourceShelf;
use crate::ui::views::page_heading;

fn kind_icon(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Pdf => "📄",
        ResourceKind::Link => "🔗",
        ResourceKind::Video => "🎬",
    }
}

pub fn render(ui: &mut Ui, shelf: &ResourceShelf, filter: &mut Option<String>) {
    page_heading(ui, "Resources", "Materials shared by your tutors");

    ui.horizontal(|ui| {
        ui.label("Subject:");
        egui::ComboBox::from_id_source("resource_subject_filter")
            .selected_text(filter.as_deref().unwrap_or("All subjects"))
            .show_ui(ui, |ui| {
                ui.selectable_value(filter, None, "All subjects");
                for subject in shelf.subjects() {
                    ui.selectable_value(filter, Some(subject.clone()), subject);
                }
            });
    });
    ui.add_space(8.0);

    for resource in shelf.by_subject(filter.as_deref()) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(kind_icon(resource.kind));
                ui.vertical(|ui| {
                    ui.hyperlink_to(&resource.title, &resource.url);
                    let mut detail = format!(
                        "{} · {} · {}",
                        resource.subject, resource.tutor, resource.uploaded
                    );
                    if let Some(size) = &resource.size {
                        detail.push_str(" · ");
                        detail.push_str(size);
                    }
                    ui.label(RichText::new(detail).small().weak());
                });
            });
        });
        ui.add_space(4.0);
    }
}
