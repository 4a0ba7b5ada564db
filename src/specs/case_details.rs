// src/specs/case_details.rs
//! Reader for the case-status details table.
//!
//! Purpose:
//! - Find the first `<table class="table">` on the case-status page.
//! - Pair up two-cell rows into `label → value` entries (`CaseDetails`).
//!
//! Rules:
//! - Label: cell text trimmed, trailing colon dropped.
//! - Value: cell text trimmed.
//! - Rows with any other `<td>` count are skipped without comment.
//! - A repeated label overwrites the earlier value.
//!
//! A missing table is an *expected* outcome (wrong CNR, unknown case number),
//! so it comes back as `ExtractionError::TableNotFound` rather than a panic.

use scraper::Html;
use tracing::debug;

use crate::{
    config::consts::DETAILS_TABLE_SELECTOR,
    core::{html, sanitize::clean_label},
    data::CaseDetails,
    error::ExtractionError,
};

pub fn extract(doc: &Html) -> Result<CaseDetails, ExtractionError> {
    let table_sel = html::selector(DETAILS_TABLE_SELECTOR)?;
    let row_sel = html::selector("tr")?;
    let cell_sel = html::selector("td")?;

    let table = doc
        .select(&table_sel)
        .next()
        .ok_or(ExtractionError::TableNotFound)?;

    let mut details = CaseDetails::new();
    let mut skipped = 0usize;

    for row in table.select(&row_sel) {
        let cells: Vec<_> = row.select(&cell_sel).collect();
        let [label, value] = cells.as_slice() else {
            skipped += 1;
            continue;
        };
        details.insert(
            clean_label(&html::text_of(label)),
            html::text_of(value).trim(),
        );
    }

    debug!(entries = details.len(), skipped, "details table extracted");
    Ok(details)
}
