use egui::RichText;

use super::{card_frame, link_button, register_button, SectionAction};
use crate::models::summit::SummitPage;
use crate::ui_egui::theme::SummitTheme;

/// Header links, event title, venue/date/time lines and the first register button.
pub fn render(ui: &mut egui::Ui, page: &SummitPage, theme: &SummitTheme) -> SectionAction {
    let mut action = SectionAction::None;

    ui.horizontal(|ui| {
        let club = &page.club_link;
        action.merge(link_button(ui, club.icon, club.label, &club.url));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let partner = &page.partner_link;
            action.merge(link_button(ui, partner.icon, partner.label, &partner.url));
        });
    });
    ui.add_space(32.0);

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(page.title)
                .size(64.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.label(
            RichText::new(page.subtitle)
                .size(36.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.label(
            RichText::new(format!("✨ {} ✨", page.tagline))
                .size(20.0)
                .color(theme.text_secondary),
        );
        ui.add_space(20.0);

        for (icon, line) in [
            ("📍", page.venue_line),
            ("📅", page.date_line),
            ("⏰", page.time_line),
        ] {
            ui.label(
                RichText::new(format!("{icon} {line}"))
                    .size(18.0)
                    .color(theme.text_secondary),
            );
        }
        ui.add_space(24.0);

        if register_button(ui, page.cta.button, theme) {
            action.merge(SectionAction::Register);
        }
        ui.add_space(16.0);

        card_frame(theme, false).show(ui, |ui| {
            ui.label(
                RichText::new(format!("👑 {} - {}", page.speaker.alias, page.speaker.name))
                    .strong()
                    .color(theme.text_primary),
            );
        });
    });

    action
}
