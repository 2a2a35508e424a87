//! Admin reports: simple aggregates over the session and feedback data.

use egui::{Color32, RichText, Ui};

use crate::models::session::SessionStatus;
use crate::ui::app::context::AppContext;
use crate::ui::views::{page_heading, stat_card};

pub fn render(ui: &mut Ui, context: &AppContext) {
    page_heading(ui, "Reports", "Usage and quality metrics");

    let all = context.sessions.sessions();
    let count = |status| all.iter().filter(|s| s.status == status).count();
    let completed = count(SessionStatus::Completed);
    let cancelled = count(SessionStatus::Cancelled);

    ui.horizontal(|ui| {
        stat_card(ui, "Total sessions", &all.len().to_string());
        stat_card(ui, "Completed", &completed.to_string());
        stat_card(ui, "Cancelled", &cancelled.to_string());
        let avg = context
            .feedback
            .average_rating()
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        stat_card(ui, "Avg rating", &avg);
    });

    ui.add_space(16.0);
    ui.label(RichText::new("Sessions per subject").strong());
    ui.add_space(4.0);

    let mut per_subject: Vec<(String, usize)> = Vec::new();
    for session in all {
        match per_subject.iter_mut().find(|(s, _)| *s == session.subject) {
            Some((_, n)) => *n += 1,
            None => per_subject.push((session.subject.clone(), 1)),
        }
    }
    per_subject.sort_by(|a, b| b.1.cmp(&a.1));

    let max = per_subject.first().map(|(_, n)| *n).unwrap_or(1);
    for (subject, n) in &per_subject {
        ui.horizontal(|ui| {
            ui.add_sized([160.0, 18.0], egui::Label::new(subject));
            let width = 220.0 * (*n as f32 / max as f32);
            let (rect, _) =
                ui.allocate_exact_size(egui::Vec2::new(width.max(4.0), 14.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 3.0, Color32::from_rgb(100, 140, 220));
            ui.label(n.to_string());
        });
    }
}
