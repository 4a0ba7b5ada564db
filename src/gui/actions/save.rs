// src/gui/actions/save.rs
use std::path::PathBuf;

use eframe::egui;
use tracing::{error, info};

use crate::{file, gui::app::App};

pub fn save(app: &mut App) {
    let Some(result) = &app.result else {
        app.status("Nothing to save");
        return;
    };

    let path = PathBuf::from(app.state.save_path_text.trim());
    match file::write_result(&path, result) {
        Ok(p) => {
            info!("Save: OK {}", p.display());
            app.error = None;
            app.status(format!("Saved {}", p.display()));
        }
        Err(e) => {
            error!("Save: Error {}: {e}", path.display());
            app.error = Some(format!("Could not save result: {e}"));
        }
    }
}

pub fn copy(ctx: &egui::Context, app: &mut App) {
    let Some(result) = &app.result else {
        app.status("Nothing to copy");
        return;
    };

    match file::to_json_string(result) {
        Ok(txt) => {
            ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            error!("Copy: Error: {e}");
            app.error = Some(format!("Could not serialize result: {e}"));
        }
    }
}
