mod app;
mod color;
mod config;
mod data;
mod error;
mod sanitize;
mod state;
mod ui;

use app::RecipeDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let startup_catalog = config::startup_catalog();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Recipe Dashboard",
        options,
        Box::new(|cc| {
            // Recipe images are remote URLs; needs the http + image loaders.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(RecipeDashApp::new(&cc.egui_ctx, startup_catalog)))
        }),
    )
}
