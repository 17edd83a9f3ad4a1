use egui::RichText;

use super::{card_frame, section_heading};
use crate::models::summit::Speaker;
use crate::ui_egui::theme::SummitTheme;

pub fn render(ui: &mut egui::Ui, speaker: &Speaker, theme: &SummitTheme) {
    section_heading(ui, speaker.tagline, theme);

    card_frame(theme, false).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        for paragraph in &speaker.bio {
            ui.label(RichText::new(*paragraph).size(16.0).color(theme.text_secondary));
            ui.add_space(8.0);
        }
    });
    ui.add_space(16.0);

    ui.columns(speaker.stats.len().max(1), |columns| {
        for (column, stat) in columns.iter_mut().zip(&speaker.stats) {
            card_frame(theme, false).show(column, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(stat.icon).size(28.0));
                    ui.label(
                        RichText::new(stat.value)
                            .size(22.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(RichText::new(stat.label).color(theme.text_secondary));
                });
            });
        }
    });
    ui.add_space(24.0);

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Key Achievements")
                .size(24.0)
                .strong()
                .color(theme.accent_secondary),
        );
    });
    ui.add_space(12.0);

    ui.columns(speaker.achievements.len().max(1), |columns| {
        for (column, achievement) in columns.iter_mut().zip(&speaker.achievements) {
            card_frame(theme, false).show(column, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(achievement.icon).size(26.0));
                    ui.label(
                        RichText::new(achievement.title)
                            .size(18.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(RichText::new(achievement.description).color(theme.text_secondary));
                });
            });
        }
    });
}
