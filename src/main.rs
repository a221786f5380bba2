// Provider Calendar Application
// Main entry point

use provider_calendar::ui_egui::ProviderCalendarApp;

fn main() -> eframe::Result {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Provider Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Provider Calendar")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size(ProviderCalendarApp::min_window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Provider Calendar",
        options,
        Box::new(|cc| Ok(Box::new(ProviderCalendarApp::new(cc)))),
    )
}
