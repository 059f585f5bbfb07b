mod app;
mod color;
mod data;
mod state;
mod ui;

use app::WayfinderApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wayfinder – Career Explorer",
        options,
        Box::new(|_cc| {
            // The May 2023 BLS tables ship inside the binary; File → Open
            // can swap in a different release at runtime.
            let catalog = data::loader::bundled()?;
            Ok(Box::new(WayfinderApp::new(catalog)))
        }),
    )
}
