use egui::RichText;

use super::{card_frame, link_button, register_button, section_heading, SectionAction};
use crate::models::summit::SummitPage;
use crate::ui_egui::theme::SummitTheme;

/// Walkthrough steps, the guide video link and the closing call-to-action.
pub fn render(ui: &mut egui::Ui, page: &SummitPage, theme: &SummitTheme) -> SectionAction {
    let mut action = SectionAction::None;

    section_heading(ui, page.registration_heading, theme);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(page.registration_pitch)
                .size(18.0)
                .color(theme.text_secondary),
        );
    });
    ui.add_space(20.0);

    card_frame(theme, false).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(
            RichText::new("🌐 Registration Instructions")
                .size(22.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(12.0);

        for (index, step) in page.registration_steps.iter().enumerate() {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(format!("{}.", index + 1))
                        .strong()
                        .color(theme.accent),
                );
                ui.label(RichText::new(step.text).color(theme.text_secondary));
                if let Some(link) = &step.link {
                    action.merge(link_button(ui, link.icon, link.label, &link.url));
                }
            });
            ui.add_space(6.0);
        }

        if let Some(video) = &page.guide_video {
            ui.add_space(8.0);
            action.merge(link_button(ui, video.icon, video.label, &video.url));
        }
    });

    super::section_gap(ui);

    card_frame(theme, true).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(page.cta.heading)
                    .size(34.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.label(RichText::new(page.cta.pitch).size(18.0).color(theme.text_secondary));
            ui.add_space(12.0);
            ui.label(
                RichText::new(page.cta.badge)
                    .strong()
                    .color(theme.accent_secondary),
            );
            ui.add_space(12.0);
            if register_button(ui, page.cta.button, theme) {
                action.merge(SectionAction::Register);
            }
            ui.add_space(8.0);
            ui.label(RichText::new(page.cta.footnote).italics().color(theme.text_secondary));
        });
    });

    action
}
