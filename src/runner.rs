// src/runner.rs
//
// The lookup pipeline shared by both frontends:
//   fetch → extract details → classify listing → locate PDF link
// Downloads and result files are separate steps so each shell can decide
// what to do with them.

use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::{
    core::net::{DownloadOutcome, Fetcher},
    data::{CaseDetails, CaseQuery, ListingStatus, ScrapeResult},
    error::Result,
    file, listing,
    progress::Progress,
    specs,
};

/// Everything one lookup learned about a case.
#[derive(Clone, Debug)]
pub struct CaseReport {
    pub query: CaseQuery,
    pub details: CaseDetails,
    pub listing: ListingStatus,
    /// Raw href of the first `.pdf` link on the page.
    pub pdf_link: Option<String>,
}

impl CaseReport {
    pub fn to_result(&self) -> ScrapeResult {
        ScrapeResult::new(self.listing, self.details.clone())
    }
}

/// Fetch and read the case-status page.
///
/// A missing details table comes back as `ScrapeError::Extraction`; in that
/// case neither classification nor the PDF lookup runs.
pub fn lookup(
    fetcher: &Fetcher,
    query: &CaseQuery,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CaseReport> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(&query.to_string());
        p.log("Fetching case details...");
    }

    let report = read_case(fetcher, query);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}

fn read_case(fetcher: &Fetcher, query: &CaseQuery) -> Result<CaseReport> {
    let doc = fetcher.fetch_case_page(query)?;

    let details = specs::case_details::extract(&doc).inspect_err(|e| {
        info!(%query, error = %e, "no case details");
    })?;

    let listing = listing::classify(&details);
    let pdf_link = specs::pdf_link::find(&doc);

    info!(%query, fields = details.len(), %listing, pdf = pdf_link.is_some(), "lookup done");
    Ok(CaseReport { query: query.clone(), details, listing, pdf_link })
}

/// Download the case PDF into `out_dir` as `case_<identifier>.pdf`.
/// `Ok(None)` when the page had no PDF link; no request is made then.
pub fn download_case_pdf(
    fetcher: &Fetcher,
    report: &CaseReport,
    out_dir: &Path,
    identifier: &str,
) -> Result<Option<DownloadOutcome>> {
    let Some(href) = report.pdf_link.as_deref() else {
        return Ok(None);
    };
    let url = fetcher.resolve(href)?;
    let dest = file::case_pdf_path(out_dir, identifier);
    fetcher.download(&url, &dest).map(Some)
}

/// Local time, always with six fractional digits, e.g. `2025-03-14 09:26:53.589793`.
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}
