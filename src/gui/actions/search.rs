// src/gui/actions/search.rs
use std::path::Path;

use tracing::{error, info, warn};

use crate::{
    config::consts::RESULT_FILE,
    error::ScrapeError,
    file,
    gui::{app::App, progress::GuiProgress},
    runner,
};

/// Run one lookup for the current form. Every failure ends up in `app.error`;
/// nothing propagates out of the button handler.
pub fn search(app: &mut App) {
    app.error = None;

    let Some(query) = app.state.form.to_query() else {
        app.error = Some(s!("Enter a CNR number, or a case type, number and year."));
        return;
    };
    let Some(fetcher) = app.fetcher.as_ref() else {
        app.error = Some(s!("HTTP client unavailable; restart the application."));
        return;
    };

    info!("Search: Begin {query}");
    let mut prog = GuiProgress::new(app.status.clone());

    match runner::lookup(fetcher, &query, Some(&mut prog)) {
        Ok(report) => {
            let result = report.to_result().with_timestamp(runner::timestamp_now());

            match file::write_result(Path::new(RESULT_FILE), &result) {
                Ok(p) => info!("Search: Saved {}", p.display()),
                Err(e) => warn!("Search: Could not write {RESULT_FILE}: {e}"),
            }

            app.report = Some(report);
            app.result = Some(result);
            app.status("Ready");
        }
        Err(ScrapeError::Extraction(e)) => {
            info!("Search: No details for {query}: {e}");
            app.report = None;
            app.result = None;
            app.error = Some(e.to_string());
            app.status("No case details");
        }
        Err(e) => {
            error!("Search: Error for {query}: {e}");
            app.report = None;
            app.result = None;
            app.error = Some(format!("Error fetching case details: {e}"));
            app.status("Error");
        }
    }
}
