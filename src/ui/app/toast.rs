//! Toast notifications for brief, non-blocking feedback.
//!
//! Every rejected grid interaction and every successful mutation reports
//! through a toast; nothing in the app raises a blocking error dialog.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }

    fn background_color(&self) -> Color32 {
        match self {
            ToastLevel::Success => Color32::from_rgb(220, 255, 220),
            ToastLevel::Info => Color32::from_rgb(220, 235, 255),
            ToastLevel::Warning => Color32::from_rgb(255, 245, 200),
            ToastLevel::Error => Color32::from_rgb(255, 220, 220),
        }
    }

    fn text_color(&self) -> Color32 {
        match self {
            ToastLevel::Success => Color32::from_rgb(30, 120, 50),
            ToastLevel::Info => Color32::from_rgb(30, 80, 150),
            ToastLevel::Warning => Color32::from_rgb(150, 100, 0),
            ToastLevel::Error => Color32::from_rgb(180, 40, 40),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Opacity based on remaining time, for the fade out
    fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        let fade_start = self.duration.saturating_sub(Duration::from_millis(500));

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            ((self.duration - elapsed).as_secs_f32() / 0.5).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Manager owning the active toasts
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Success));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Info));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Warning));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Error));
    }

    /// Render all active toasts bottom-right, stacking upward
    pub fn render(&mut self, ctx: &Context) {
        self.toasts.retain(|t| !t.is_expired());
        if self.toasts.is_empty() {
            return;
        }

        // Repaint while toasts animate
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let toast_width = 300.0;
        let toast_height = 40.0;
        let margin = 10.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = (i as f32) * (toast_height + 5.0);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - y_offset,
            );

            let bg = toast.level.background_color();
            let fg = toast.level.text_color();
            let bg = Color32::from_rgba_unmultiplied(bg.r(), bg.g(), bg.b(), (230.0 * opacity) as u8);
            let fg = Color32::from_rgba_unmultiplied(fg.r(), fg.g(), fg.b(), (255.0 * opacity) as u8);

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, fg.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(fg).strong());
                                ui.label(RichText::new(&toast.message).color(fg));
                            });
                        });
                });
        }
    }
}
