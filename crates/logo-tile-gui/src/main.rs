#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod preview;
mod ui_components;
mod views;
mod worker;

fn main() -> eframe::Result<()> {
    let logger = logger::AppLogger::new(500);
    if let Err(e) = logger.clone().init() {
        eprintln!("Logger already installed: {}", e);
    }

    // The worker and its blocking PDF jobs live on this runtime
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("logo-tile-worker")
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_drag_and_drop(true)
            .with_title("Logo Tiler"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Logo Tiler",
        options,
        Box::new(move |cc| Ok(Box::new(app::LogoTileApp::new(cc, handle, logger)))),
    );

    runtime.shutdown_background();
    result
}
