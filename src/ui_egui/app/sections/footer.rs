use egui::RichText;

use super::{link_button, SectionAction};
use crate::models::summit::{Coordinator, Footer};
use crate::ui_egui::theme::SummitTheme;

pub fn render(ui: &mut egui::Ui, footer: &Footer, theme: &SummitTheme) -> SectionAction {
    let mut action = SectionAction::None;

    ui.separator();
    ui.add_space(16.0);

    ui.columns(2, |columns| {
        let (left, right) = columns.split_at_mut(1);
        let left = &mut left[0];
        let right = &mut right[0];

        left.label(
            RichText::new(footer.club)
                .size(28.0)
                .strong()
                .color(theme.text_primary),
        );
        left.label(RichText::new(footer.club_tagline).color(theme.text_secondary));
        left.add_space(8.0);
        left.horizontal(|ui| {
            for social in &footer.socials {
                action.merge(link_button(ui, social.icon, social.label, &social.url));
            }
        });

        right.label(
            RichText::new("Contact Us")
                .size(20.0)
                .strong()
                .color(theme.text_primary),
        );
        right.add_space(6.0);
        action.merge(render_coordinators(
            right,
            "👥 Student Coordinators",
            &footer.student_coordinators,
            theme,
        ));
        right.add_space(6.0);
        action.merge(render_coordinators(
            right,
            "🏅 Faculty Coordinators",
            &footer.faculty_coordinators,
            theme,
        ));
    });

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(footer.copyright).small().color(theme.text_secondary));
        ui.label(RichText::new(footer.office).small().color(theme.text_secondary));
    });

    action
}

fn render_coordinators(
    ui: &mut egui::Ui,
    heading: &str,
    coordinators: &[Coordinator],
    theme: &SummitTheme,
) -> SectionAction {
    let mut action = SectionAction::None;

    ui.label(RichText::new(heading).strong().color(theme.accent));
    for coordinator in coordinators {
        ui.horizontal(|ui| {
            ui.label(RichText::new(coordinator.name).color(theme.text_primary));
            if let (Some(number), Some(link)) = (coordinator.phone, coordinator.phone_link()) {
                action.merge(link_button(ui, "📞", number, &link));
            }
        });
    }

    action
}
