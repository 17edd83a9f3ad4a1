//! Rendering logic for the countdown timer cards on the timeline.

use chrono_tz::Tz;
use egui::{RichText, Stroke};
use egui_extras::{Size, StripBuilder};

use crate::services::countdown::{CountdownSnapshot, MilestoneCountdown, RemainingDuration};
use crate::ui_egui::theme::SummitTheme;
use crate::utils::date::{format_target, format_target_short};

// Card rendering constants
const CARD_ROUNDING: f32 = 16.0;
const CARD_HEIGHT: f32 = 170.0;
const CARD_MIN_WIDTH: f32 = 240.0;
const CARD_SPACING: f32 = 12.0;
const VALUE_FONT_SIZE: f32 = 26.0;

/// The four boxes shown on a card, in display order.
pub fn value_boxes(remaining: &RemainingDuration) -> [(u64, &'static str); 4] {
    [
        (remaining.days, "Days"),
        (u64::from(remaining.hours), "Hours"),
        (u64::from(remaining.minutes), "Mins"),
        (u64::from(remaining.seconds), "Secs"),
    ]
}

/// Hover text for a card: target instant in the event zone and time left.
pub fn format_card_tooltip(entry: &MilestoneCountdown, tz: Tz) -> String {
    let mut lines = vec![format!("🎯 Target: {}", format_target_short(entry.target, tz))];

    if entry.remaining.is_zero() {
        lines.push("⏱ Target reached".to_string());
    } else {
        lines.push(format!("⏱ {} remaining", entry.remaining));
    }

    lines.join("\n")
}

/// Lay the cards out side by side, or stacked when the window is too narrow.
pub fn render_timer_cards(ui: &mut egui::Ui, snapshot: &CountdownSnapshot, theme: &SummitTheme, tz: Tz) {
    let count = snapshot.entries.len();
    if count == 0 {
        return;
    }

    let needed = count as f32 * CARD_MIN_WIDTH + (count - 1) as f32 * CARD_SPACING;
    if ui.available_width() < needed {
        for entry in &snapshot.entries {
            render_timer_card(ui, entry, theme, tz);
            ui.add_space(CARD_SPACING);
        }
        return;
    }

    let width = ui.available_width();
    ui.allocate_ui(egui::vec2(width, CARD_HEIGHT), |ui| {
        StripBuilder::new(ui)
            .sizes(Size::remainder(), count)
            .horizontal(|mut strip| {
                for entry in &snapshot.entries {
                    strip.cell(|ui| render_timer_card(ui, entry, theme, tz));
                }
            });
    });
}

fn render_timer_card(ui: &mut egui::Ui, entry: &MilestoneCountdown, theme: &SummitTheme, tz: Tz) {
    let (border, stroke_width) = if entry.accent {
        (theme.accent, 2.0)
    } else {
        (theme.card_border, 1.0)
    };

    let response = egui::Frame::none()
        .fill(theme.card_background)
        .rounding(CARD_ROUNDING)
        .stroke(Stroke::new(stroke_width, border))
        .inner_margin(egui::Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&entry.label)
                        .strong()
                        .size(18.0)
                        .color(theme.text_primary),
                );
                ui.label(
                    RichText::new(format_target(entry.target, tz))
                        .size(12.0)
                        .color(theme.text_secondary),
                );
            });
            ui.add_space(10.0);

            ui.columns(4, |columns| {
                for (column, (value, unit)) in columns.iter_mut().zip(value_boxes(&entry.remaining)) {
                    render_value_box(column, value, unit, theme);
                }
            });
        })
        .response;

    response.on_hover_text(format_card_tooltip(entry, tz));
}

fn render_value_box(ui: &mut egui::Ui, value: u64, unit: &str, theme: &SummitTheme) {
    egui::Frame::none()
        .fill(theme.value_box)
        .rounding(10.0)
        .stroke(Stroke::new(1.0, theme.card_border))
        .inner_margin(egui::Margin::symmetric(4.0, 8.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(value.to_string())
                        .size(VALUE_FONT_SIZE)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.label(
                    RichText::new(unit)
                        .size(11.0)
                        .color(theme.text_secondary),
                );
            });
        });
}
