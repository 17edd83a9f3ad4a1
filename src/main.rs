// Nexus Summit Application
// Main entry point

use nexus_summit::services::settings::SettingsService;
use nexus_summit::ui_egui::SummitApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Nexus Summit v{}", env!("CARGO_PKG_VERSION"));

    // Errors are surfaced in the window, so loading never aborts startup
    let loaded = SettingsService::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Nexus Forum Tech Summit")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([480.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Nexus Summit",
        options,
        Box::new(|cc| Ok(Box::new(SummitApp::new(cc, loaded)?))),
    )
}
