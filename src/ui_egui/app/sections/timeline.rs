use chrono_tz::Tz;
use egui::RichText;

use super::super::countdown::card_rendering::render_timer_cards;
use super::{card_frame, section_heading};
use crate::models::summit::SummitPage;
use crate::services::countdown::CountdownSnapshot;
use crate::ui_egui::theme::SummitTheme;

/// Live countdown cards followed by the printed schedule.
pub fn render(
    ui: &mut egui::Ui,
    page: &SummitPage,
    snapshot: &CountdownSnapshot,
    theme: &SummitTheme,
    tz: Tz,
) {
    section_heading(ui, page.timeline_heading, theme);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(page.timeline_pitch)
                .size(18.0)
                .color(theme.text_secondary),
        );
    });
    ui.add_space(20.0);

    render_timer_cards(ui, snapshot, theme, tz);
    ui.add_space(24.0);

    ui.columns(page.schedule.len().max(1), |columns| {
        for (column, entry) in columns.iter_mut().zip(&page.schedule) {
            card_frame(theme, entry.highlight).show(column, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(entry.icon).size(26.0));
                    ui.label(
                        RichText::new(entry.title)
                            .strong()
                            .size(17.0)
                            .color(theme.text_primary),
                    );
                    ui.label(RichText::new(entry.when).color(theme.text_secondary));
                });
            });
        }
    });
}
