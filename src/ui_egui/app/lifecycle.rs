use std::sync::Arc;

use anyhow::Result;

use super::context::AppContext;
use super::state::AppState;
use super::toast::ToastManager;
use super::SummitApp;
use crate::models::settings::{Settings, SettingsError};
use crate::models::summit::SummitPage;
use crate::services::countdown::CountdownService;
use crate::services::registration::RegistrationService;
use crate::ui_egui::theme::SummitTheme;

impl SummitApp {
    /// Build the app from loaded settings. Invalid settings fall back to the
    /// built-in defaults and are reported once as a toast.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        loaded: Result<Settings, SettingsError>,
    ) -> Result<Self> {
        let mut toast_manager = ToastManager::new();
        let settings = match loaded {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("Invalid settings, using built-in defaults: {err}");
                toast_manager.warning(format!("Settings ignored: {err}"));
                Settings::default()
            }
        };

        log::info!(
            "Loaded settings: {} milestone(s), zone {}, tick {:?}",
            settings.milestones.len(),
            settings.timezone.name(),
            settings.tick_interval()
        );

        let countdown_service = CountdownService::new(settings.milestones.clone());
        let registration = RegistrationService::with_system_browser(settings.registration_url.clone());
        let context = AppContext::new(countdown_service, registration)?;

        let page = SummitPage::nexus_forum(
            &settings.registration_url,
            settings.guide_video_url.as_deref(),
        );
        let snapshot = Arc::new(
            context
                .countdown_service()
                .snapshot_at(context.clock().now()),
        );

        let mut app = Self {
            context,
            settings,
            page,
            active_theme: SummitTheme::dark(),
            ticker: None,
            snapshot,
            toast_manager,
            state: AppState::default(),
        };

        app.apply_theme(&cc.egui_ctx);
        app.start_ticking(&cc.egui_ctx);
        Ok(app)
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        let system_is_dark = SummitTheme::detect_system_dark();
        let theme = SummitTheme::for_preference(self.settings.theme, system_is_dark);
        theme.apply_to_context(ctx);
        self.active_theme = theme;
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_ticker_with_visibility(ctx);
        self.refresh_countdowns();

        self.render_top_bar(ctx);
        self.render_main_panel(ctx);
        self.render_about_dialog(ctx);

        // Render toast notifications (last, so they appear on top)
        let is_dark = self.active_theme.is_dark;
        self.toast_manager.render(ctx, is_dark);
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.stop_ticking();
    }
}
