// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;
use tracing::{error, info};

use crate::{
    config::state::AppState,
    core::Fetcher,
    data::ScrapeResult,
    runner::CaseReport,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "eCourts Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    pub state: AppState,

    /// Built once from `state.fetch`; `None` if the HTTP client failed to start.
    pub fetcher: Option<Fetcher>,

    /// Last successful lookup and the record written for it.
    pub report: Option<CaseReport>,
    pub result: Option<ScrapeResult>,

    /// Inline error for the last action, if any.
    pub error: Option<String>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (fetcher, error) = match Fetcher::new(state.fetch.clone()) {
            Ok(f) => (Some(f), None),
            Err(e) => {
                error!("Init: HTTP client failed: {e}");
                (None, Some(format!("HTTP client unavailable: {e}")))
            }
        };
        info!("Init: base_url={} timeout={:?}", state.fetch.base_url, state.fetch.timeout);

        Self {
            state,
            fetcher,
            report: None,
            result: None,
            error,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(format!("Status: {}", self.status_text()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::search_form::draw(ui, self);

            ui.separator();

            crate::gui::components::result_panel::draw(ui, self);
        });
    }
}
