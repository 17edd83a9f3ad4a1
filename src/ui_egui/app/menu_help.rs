use super::sections::SectionAction;
use super::SummitApp;
use egui::{Context, RichText};

/// Top bar and About dialog.
impl SummitApp {
    pub(super) fn render_top_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("summit_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("🚀 {}", self.page.title))
                        .strong()
                        .color(self.active_theme.accent),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!("🕒 {}", self.settings.timezone.name()))
                        .color(self.active_theme.text_secondary),
                )
                .on_hover_text("Milestone times are shown in this zone");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("ℹ About").clicked() {
                        self.state.show_about_dialog = true;
                    }
                    if self.ticker.is_none() {
                        ui.label(RichText::new("⏸ paused").color(self.active_theme.text_secondary));
                    }
                });
            });
        });
    }

    pub(super) fn render_about_dialog(&mut self, ctx: &Context) {
        if !self.state.show_about_dialog {
            return;
        }

        let mut dialog_open = true;
        let mut register_clicked = false;
        egui::Window::new("About Nexus Summit")
            .open(&mut dialog_open)
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);

                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(15.0, 10.0))
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.heading(format!("🚀 {}", self.page.title));
                            ui.add_space(5.0);

                            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                            ui.add_space(10.0);

                            ui.separator();
                            ui.add_space(10.0);

                            ui.label(env!("CARGO_PKG_DESCRIPTION"));
                            ui.add_space(10.0);

                            ui.label(format!("Author: {}", env!("CARGO_PKG_AUTHORS")));
                            ui.add_space(5.0);

                            ui.label(format!("License: {}", env!("CARGO_PKG_LICENSE")));
                            ui.add_space(10.0);

                            ui.separator();
                            ui.add_space(10.0);

                            ui.label(RichText::new("Countdown").strong());
                            ui.add_space(5.0);
                        });

                        // Grid needs to be outside vertical_centered to align properly
                        egui::Grid::new("about_countdown_info")
                            .num_columns(2)
                            .spacing([20.0, 4.0])
                            .show(ui, |ui| {
                                ui.label("Time zone:");
                                ui.label(self.settings.timezone.name());
                                ui.end_row();

                                ui.label("Milestones:");
                                ui.label(self.settings.milestones.len().to_string());
                                ui.end_row();

                                ui.label("Tick interval:");
                                ui.label(format!("{} ms", self.settings.tick_interval_ms));
                                ui.end_row();

                                ui.label("OS:");
                                ui.label(std::env::consts::OS);
                                ui.end_row();
                            });

                        ui.add_space(15.0);

                        ui.vertical_centered(|ui| {
                            register_clicked = ui
                                .link("🔗 Registration portal")
                                .on_hover_text(&self.settings.registration_url)
                                .clicked();
                        });

                        ui.add_space(5.0);
                    });
            });

        if !dialog_open {
            self.state.show_about_dialog = false;
        }
        if register_clicked {
            self.handle_section_action(SectionAction::Register);
        }
    }
}
