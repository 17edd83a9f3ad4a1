use egui::RichText;

use super::{card_frame, link_button, section_heading, SectionAction};
use crate::models::summit::Venue;
use crate::ui_egui::theme::SummitTheme;

/// Venue features plus a link out to the map. The map itself is not embedded.
pub fn render(ui: &mut egui::Ui, venue: &Venue, theme: &SummitTheme) -> SectionAction {
    let mut action = SectionAction::None;

    section_heading(ui, "VENUE", theme);

    card_frame(theme, false).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(
            RichText::new(format!("{}, {}", venue.name, venue.campus))
                .size(24.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(12.0);

        for feature in &venue.features {
            ui.horizontal(|ui| {
                ui.label(RichText::new(feature.icon).size(20.0));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(feature.title)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(RichText::new(feature.description).color(theme.text_secondary));
                });
            });
            ui.add_space(8.0);
        }

        action.merge(link_button(ui, "🗺", "Open in Maps", &venue.map_url));
    });

    action
}
