#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use pixel_editor::{EditorConfig, PixelEditorApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // An explicit config file overrides the restored session.
    let config = std::env::args().nth(1).and_then(|path| match EditorConfig::load(&path) {
        Ok(config) => Some(config),
        Err(err) => {
            log::error!("Failed to load config {}: {}", path, err);
            None
        }
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 520.0])
            .with_min_inner_size([480.0, 480.0])
            .with_title("Pixel Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Pixel Editor",
        native_options,
        Box::new(
            |cc: &eframe::CreationContext<'_>| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
                Ok(Box::new(PixelEditorApp::new(cc, config)?))
            },
        ),
    )
}
