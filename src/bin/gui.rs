// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use ecourts_scrape::gui;
use eframe::egui::ViewportBuilder;

fn main() {
    ecourts_scrape::log::init_gui();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([760.0, 680.0])
            .with_min_inner_size([520.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
