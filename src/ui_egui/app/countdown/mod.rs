pub(super) mod card_rendering;

use super::SummitApp;
use crate::services::countdown::CountdownTicker;

impl SummitApp {
    /// Start the interval if it is not already running. Each tick asks egui
    /// for a repaint so the cards update without user input.
    pub(super) fn start_ticking(&mut self, ctx: &egui::Context) {
        if self.ticker.is_some() {
            return;
        }

        let repaint_ctx = ctx.clone();
        let handle = CountdownTicker::start(
            self.context.runtime_handle(),
            self.context.countdown_service().clone(),
            self.context.clock(),
            self.settings.tick_interval(),
            move |_| repaint_ctx.request_repaint(),
        );
        self.snapshot = handle.latest();
        self.ticker = Some(handle);
    }

    /// Release the interval. The last snapshot stays on screen.
    pub(super) fn stop_ticking(&mut self) {
        if let Some(handle) = self.ticker.take() {
            self.snapshot = handle.stop();
        }
    }

    /// Pick up the latest snapshot published by the ticker.
    pub(super) fn refresh_countdowns(&mut self) {
        if let Some(handle) = &self.ticker {
            self.snapshot = handle.latest();
        }
    }

    /// The countdown only runs while the window is visible.
    pub(super) fn sync_ticker_with_visibility(&mut self, ctx: &egui::Context) {
        let minimized = ctx
            .input(|input| input.viewport().minimized)
            .unwrap_or(false);

        if minimized == self.state.was_minimized {
            return;
        }
        self.state.was_minimized = minimized;

        if minimized {
            log::info!("Window minimized; pausing countdown");
            self.stop_ticking();
        } else {
            log::info!("Window restored; resuming countdown");
            self.start_ticking(ctx);
        }
    }
}
