// src/listing.rs
//
// Hearing-date classification: is the case up today, tomorrow, or later?

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::{
    config::consts::LISTING_DATE_FORMAT,
    data::{CaseDetails, ListingStatus},
};

/// Classify against the local calendar date.
pub fn classify(details: &CaseDetails) -> ListingStatus {
    classify_on(details, Local::now().date_naive())
}

/// Scan every hearing/listing field in page order. Each value that parses as
/// `DD-MM-YYYY` replaces the candidate, so the last parseable one wins.
/// Unparseable values are skipped.
pub fn classify_on(details: &CaseDetails, today: NaiveDate) -> ListingStatus {
    let mut resolved = None;
    for (label, value) in details.listing_fields() {
        match parse_listing_date(value) {
            Some(date) => resolved = Some(date),
            None => debug!(label, value, "listing field is not a DD-MM-YYYY date"),
        }
    }

    let Some(date) = resolved else {
        return ListingStatus::Unknown;
    };

    if date == today {
        ListingStatus::ListedToday(date)
    } else if today.succ_opt() == Some(date) {
        ListingStatus::ListedTomorrow(date)
    } else {
        ListingStatus::NotImminent(date)
    }
}

/// Strict `DD-MM-YYYY`: two-digit day, two-digit month, four-digit year.
pub fn parse_listing_date(value: &str) -> Option<NaiveDate> {
    let b = value.as_bytes();
    let shape_ok = b.len() == 10
        && b[2] == b'-'
        && b[5] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(value, LISTING_DATE_FORMAT).ok()
}
