//! Theme module for the summit page
//!
//! Defines the SummitTheme palette and resolves which one to use from the
//! settings and, for `system`, the desktop's dark/light mode.

use egui::Color32;

use crate::models::settings::ThemePreference;

/// Colors used by the page sections
#[derive(Debug, Clone, PartialEq)]
pub struct SummitTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Page background
    pub page_background: Color32,

    /// Card and panel fill
    pub card_background: Color32,

    /// Card border for regular cards
    pub card_border: Color32,

    /// Border and glow for accent cards (registration deadline, entry time)
    pub accent: Color32,

    /// Secondary accent used for headings
    pub accent_secondary: Color32,

    /// Fill of the individual days/hours/mins/secs boxes
    pub value_box: Color32,

    pub text_primary: Color32,
    pub text_secondary: Color32,

    /// Register button fill
    pub button_fill: Color32,
}

impl SummitTheme {
    /// Near-black background with cyan and purple accents
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            page_background: Color32::from_rgb(10, 10, 14),
            card_background: Color32::from_rgb(28, 30, 36),
            card_border: Color32::from_rgb(70, 72, 80),
            accent: Color32::from_rgb(34, 211, 238),
            accent_secondary: Color32::from_rgb(192, 132, 252),
            value_box: Color32::from_rgb(44, 46, 54),
            text_primary: Color32::from_rgb(245, 245, 245),
            text_secondary: Color32::from_rgb(170, 172, 180),
            button_fill: Color32::from_rgb(8, 145, 178),
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark: false,
            page_background: Color32::from_rgb(246, 247, 250),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(214, 216, 222),
            accent: Color32::from_rgb(8, 145, 178),
            accent_secondary: Color32::from_rgb(126, 34, 206),
            value_box: Color32::from_rgb(236, 238, 243),
            text_primary: Color32::from_rgb(30, 32, 38),
            text_secondary: Color32::from_rgb(96, 100, 110),
            button_fill: Color32::from_rgb(8, 145, 178),
        }
    }

    /// Pick a palette. `system_is_dark` is only consulted for [`ThemePreference::System`].
    pub fn for_preference(preference: ThemePreference, system_is_dark: Option<bool>) -> Self {
        match preference {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
            // The page was designed dark; use it when the desktop gives no answer.
            ThemePreference::System => match system_is_dark {
                Some(false) => Self::light(),
                _ => Self::dark(),
            },
        }
    }

    /// Ask the desktop whether it is in dark mode.
    pub fn detect_system_dark() -> Option<bool> {
        match dark_light::detect() {
            dark_light::Mode::Dark => Some(true),
            dark_light::Mode::Light => Some(false),
            dark_light::Mode::Default => None,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.card_background;
        visuals.panel_fill = self.page_background;

        visuals.widgets.noninteractive.bg_fill = self.card_background;
        visuals.widgets.inactive.bg_fill = self.value_box;
        visuals.widgets.hovered.bg_fill = self.accent.gamma_multiply(0.6);
        visuals.widgets.active.bg_fill = self.accent;
        visuals.hyperlink_color = self.accent;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preferences_ignore_the_desktop() {
        assert!(SummitTheme::for_preference(ThemePreference::Dark, Some(false)).is_dark);
        assert!(!SummitTheme::for_preference(ThemePreference::Light, Some(true)).is_dark);
    }

    #[test]
    fn system_preference_follows_the_desktop() {
        assert!(SummitTheme::for_preference(ThemePreference::System, Some(true)).is_dark);
        assert!(!SummitTheme::for_preference(ThemePreference::System, Some(false)).is_dark);
        assert_eq!(
            SummitTheme::for_preference(ThemePreference::System, None),
            SummitTheme::dark()
        );
    }
}
