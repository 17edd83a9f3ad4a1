//! Page sections, rendered top to bottom inside the main scroll area.
//!
//! Section renderers never act on clicks themselves; they return a
//! [`SectionAction`] and the app performs it after the frame is laid out.

pub(super) mod footer;
pub(super) mod hero;
pub(super) mod registration;
pub(super) mod speaker;
pub(super) mod timeline;
pub(super) mod venue;

use egui::{RichText, Stroke};

use crate::ui_egui::theme::SummitTheme;

const SECTION_GAP: f32 = 48.0;
const HEADING_SIZE: f32 = 34.0;

/// Action from a click inside a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionAction {
    None,
    Register,
    OpenLink(String),
}

impl SectionAction {
    /// Keep the first non-empty action of a frame.
    pub fn merge(&mut self, other: SectionAction) {
        if *self == SectionAction::None {
            *self = other;
        }
    }
}

pub(super) fn section_gap(ui: &mut egui::Ui) {
    ui.add_space(SECTION_GAP);
}

pub(super) fn section_heading(ui: &mut egui::Ui, text: &str, theme: &SummitTheme) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(text)
                .size(HEADING_SIZE)
                .strong()
                .color(theme.accent),
        );
    });
    ui.add_space(16.0);
}

pub(super) fn card_frame(theme: &SummitTheme, accent: bool) -> egui::Frame {
    let border = if accent { theme.accent } else { theme.card_border };
    egui::Frame::none()
        .fill(theme.card_background)
        .rounding(14.0)
        .stroke(Stroke::new(if accent { 2.0 } else { 1.0 }, border))
        .inner_margin(egui::Margin::same(16.0))
}

/// Big call-to-action button. Returns true when clicked.
pub(super) fn register_button(ui: &mut egui::Ui, label: &str, theme: &SummitTheme) -> bool {
    let button = egui::Button::new(
        RichText::new(format!("🚀 {label}"))
            .size(20.0)
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(theme.button_fill)
    .rounding(12.0)
    .min_size(egui::vec2(240.0, 48.0));

    ui.add(button)
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}

/// Icon plus underlined label. Returns the URL to open when clicked.
pub(super) fn link_button(ui: &mut egui::Ui, icon: &str, label: &str, url: &str) -> SectionAction {
    let response = ui.link(format!("{icon} {label}")).on_hover_text(url);
    if response.clicked() {
        SectionAction::OpenLink(url.to_string())
    } else {
        SectionAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_action_of_a_frame_wins() {
        let mut action = SectionAction::None;
        action.merge(SectionAction::None);
        assert_eq!(action, SectionAction::None);

        action.merge(SectionAction::Register);
        action.merge(SectionAction::OpenLink("https://example.com".into()));
        assert_eq!(action, SectionAction::Register);
    }
}
