// src/main.rs
use anyhow::Result;
use eframe::egui;

mod app;
mod chart;
mod roulette;
mod state;
mod ui;

use app::RouletteApp;

fn main() -> Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_title("Roulette"),
        ..Default::default()
    };

    eframe::run_native(
        "Roulette",
        options,
        Box::new(|_cc| Box::new(RouletteApp::new())),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
