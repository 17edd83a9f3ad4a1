#[path = "app/context.rs"]
mod context;
mod countdown;
mod lifecycle;
mod menu_help;
mod sections;
mod state;
mod toast;

use std::sync::Arc;

use self::context::AppContext;
use self::sections::SectionAction;
use self::state::AppState;
use self::toast::ToastManager;
use crate::models::settings::Settings;
use crate::models::summit::SummitPage;
use crate::services::countdown::{CountdownSnapshot, TickerHandle};
use crate::ui_egui::theme::SummitTheme;

pub struct SummitApp {
    /// Running ticker; `None` while the window is minimized or after exit.
    /// Declared before `context` so it is dropped before the runtime.
    ticker: Option<TickerHandle>,
    /// Runtime, countdown service, clock and registration launcher
    context: AppContext,
    settings: Settings,
    page: SummitPage,
    /// Currently applied theme colors
    active_theme: SummitTheme,
    /// Last snapshot read from the ticker
    snapshot: Arc<CountdownSnapshot>,
    toast_manager: ToastManager,
    state: AppState,
}

impl eframe::App for SummitApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl SummitApp {
    fn handle_section_action(&mut self, action: SectionAction) {
        match action {
            SectionAction::None => {}
            SectionAction::Register => match self.context.registration().register() {
                Ok(()) => self
                    .toast_manager
                    .info("Registration portal opened in your browser"),
                Err(err) => {
                    log::error!("Registration launch failed: {err}");
                    self.toast_manager.error(format!(
                        "Could not open the browser. Visit {}",
                        self.context.registration().url()
                    ));
                }
            },
            SectionAction::OpenLink(url) => {
                if let Err(err) = self.context.registration().open_link(&url) {
                    log::warn!("Failed to open link: {err}");
                    self.toast_manager.error(format!("Could not open {url}"));
                }
            }
        }
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let theme = &self.active_theme;
                    let page = &self.page;

                    actions.push(sections::hero::render(ui, page, theme));
                    sections::section_gap(ui);
                    sections::speaker::render(ui, &page.speaker, theme);
                    sections::section_gap(ui);
                    actions.push(sections::venue::render(ui, &page.venue, theme));
                    sections::section_gap(ui);
                    sections::timeline::render(
                        ui,
                        page,
                        &self.snapshot,
                        theme,
                        self.settings.timezone,
                    );
                    sections::section_gap(ui);
                    actions.push(sections::registration::render(ui, page, theme));
                    sections::section_gap(ui);
                    actions.push(sections::footer::render(ui, &page.footer, theme));
                });
        });

        for action in actions {
            self.handle_section_action(action);
        }
    }
}
