#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod colors;
mod views;

use app::PsychroApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 850.0])
            .with_title("psychroflow"),
        ..Default::default()
    };

    eframe::run_native(
        "psychroflow",
        options,
        Box::new(|cc| Ok(Box::new(PsychroApp::new(cc)))),
    )
}
