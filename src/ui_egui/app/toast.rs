//! Toast notification system for brief feedback messages.
//!
//! Toasts appear in the bottom-right corner and fade away. They report the
//! outcome of register clicks and settings that were ignored at startup.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

const FADE_OUT: Duration = Duration::from_millis(500);

/// Types of toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Info => "ℹ",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }

    pub fn background_color(&self, is_dark_theme: bool) -> Color32 {
        if is_dark_theme {
            match self {
                ToastLevel::Info => Color32::from_rgb(30, 50, 80),
                ToastLevel::Warning => Color32::from_rgb(80, 60, 20),
                ToastLevel::Error => Color32::from_rgb(80, 30, 30),
            }
        } else {
            match self {
                ToastLevel::Info => Color32::from_rgb(220, 235, 255),
                ToastLevel::Warning => Color32::from_rgb(255, 245, 200),
                ToastLevel::Error => Color32::from_rgb(255, 220, 220),
            }
        }
    }

    pub fn text_color(&self, is_dark_theme: bool) -> Color32 {
        if is_dark_theme {
            match self {
                ToastLevel::Info => Color32::from_rgb(100, 180, 255),
                ToastLevel::Warning => Color32::from_rgb(255, 200, 80),
                ToastLevel::Error => Color32::from_rgb(255, 120, 120),
            }
        } else {
            match self {
                ToastLevel::Info => Color32::from_rgb(30, 80, 150),
                ToastLevel::Warning => Color32::from_rgb(150, 100, 0),
                ToastLevel::Error => Color32::from_rgb(180, 40, 40),
            }
        }
    }
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        let duration = match level {
            ToastLevel::Info => Duration::from_secs(3),
            // Problems stay up long enough to read a URL.
            ToastLevel::Warning | ToastLevel::Error => Duration::from_secs(6),
        };

        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Opacity for the fade out at the end of the toast's life
    pub fn opacity_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.created_at);
        let fade_start = self.duration.saturating_sub(FADE_OUT);

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            ((self.duration - elapsed).as_secs_f32() / FADE_OUT.as_secs_f32()).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Manager for toast notifications
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Info));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Warning));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Error));
    }

    pub fn cleanup(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired_at(now));
    }

    /// Render all active toasts
    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        let now = Instant::now();
        self.cleanup(now);

        if self.toasts.is_empty() {
            return;
        }

        // Request repaint for the fade
        ctx.request_repaint();

        // Render toasts from bottom-right, stacking upward
        let screen_rect = ctx.screen_rect();
        let toast_width = 340.0;
        let toast_height = 40.0;
        let margin = 10.0;
        let spacing = 5.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity_at(now);
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = (i as f32) * (toast_height + spacing);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - y_offset,
            );

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    let bg_color = toast.level.background_color(is_dark_theme);
                    let text_color = toast.level.text_color(is_dark_theme);

                    let bg_color = Color32::from_rgba_unmultiplied(
                        bg_color.r(),
                        bg_color.g(),
                        bg_color.b(),
                        (230.0 * opacity) as u8,
                    );
                    let text_color = Color32::from_rgba_unmultiplied(
                        text_color.r(),
                        text_color.g(),
                        text_color.b(),
                        (255.0 * opacity) as u8,
                    );

                    egui::Frame::none()
                        .fill(bg_color)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, text_color.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(text_color).strong());
                                ui.label(RichText::new(&toast.message).color(text_color));
                            });
                        });
                });
        }
    }
}
