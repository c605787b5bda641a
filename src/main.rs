use eframe::egui;
use roster_view::app::RosterViewApp;
use roster_view::config::AppConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_args(std::env::args());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Roster View",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can fetch and render headshots.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(RosterViewApp::new(&cc.egui_ctx, config)))
        }),
    )
}
