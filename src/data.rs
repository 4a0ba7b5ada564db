// src/data.rs
//
// Shapes that flow through one lookup: the query going out, the key/value
// table coming back, the listing classification, and the JSON record we write.

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::config::consts::{LISTING_DATE_LABEL, NEXT_HEARING_LABEL};

/* ---------------- Query ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseQuery {
    Cnr(String),
    CaseNumber {
        case_type: String,
        case_no: String,
        case_year: String,
    },
}

impl CaseQuery {
    /// Build a query from loose inputs. A non-empty CNR wins; otherwise all
    /// three case fields must be present. Anything else is `None`.
    pub fn from_parts(
        cnr: Option<&str>,
        case_type: Option<&str>,
        case_no: Option<&str>,
        case_year: Option<&str>,
    ) -> Option<Self> {
        let filled = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(String::from);

        if let Some(cnr) = filled(cnr) {
            return Some(CaseQuery::Cnr(cnr));
        }
        match (filled(case_type), filled(case_no), filled(case_year)) {
            (Some(case_type), Some(case_no), Some(case_year)) => {
                Some(CaseQuery::CaseNumber { case_type, case_no, case_year })
            }
            _ => None,
        }
    }

    /// Form-encoded body for the case-status POST.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            CaseQuery::Cnr(cnr) => vec![("cnrno", cnr.as_str())],
            CaseQuery::CaseNumber { case_type, case_no, case_year } => vec![
                ("case_type", case_type.as_str()),
                ("case_no", case_no.as_str()),
                ("case_year", case_year.as_str()),
            ],
        }
    }

    /// Case number when we have one, else the CNR. Used to name downloads.
    pub fn identifier(&self) -> &str {
        match self {
            CaseQuery::Cnr(cnr) => cnr,
            CaseQuery::CaseNumber { case_no, .. } => case_no,
        }
    }
}

impl fmt::Display for CaseQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseQuery::Cnr(cnr) => write!(f, "CNR {cnr}"),
            CaseQuery::CaseNumber { case_type, case_no, case_year } => {
                write!(f, "{case_type} {case_no}/{case_year}")
            }
        }
    }
}

/* ---------------- Details ---------------- */

/// Label → value pairs in page order. Labels are whatever the portal emits,
/// so there is no fixed schema; re-inserting a label replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseDetails {
    entries: Vec<(String, String)>,
}

impl CaseDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, v)) => *v = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose label names a hearing/listing date (case-sensitive substring).
    pub fn listing_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(label, _)| {
            label.contains(NEXT_HEARING_LABEL) || label.contains(LISTING_DATE_LABEL)
        })
    }

    /// Value of the first label containing "Next Hearing Date".
    pub fn next_hearing_date(&self) -> Option<&str> {
        self.iter()
            .find(|(label, _)| label.contains(NEXT_HEARING_LABEL))
            .map(|(_, v)| v)
    }

    /// Value of the first label containing "Listing Date".
    pub fn listing_date(&self) -> Option<&str> {
        self.iter()
            .find(|(label, _)| label.contains(LISTING_DATE_LABEL))
            .map(|(_, v)| v)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CaseDetails {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut details = CaseDetails::new();
        for (k, v) in iter {
            details.insert(k, v);
        }
        details
    }
}

impl Serialize for CaseDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/* ---------------- Listing ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingStatus {
    ListedToday(NaiveDate),
    ListedTomorrow(NaiveDate),
    NotImminent(NaiveDate),
    Unknown,
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingStatus::ListedToday(d) => write!(f, "Listed Today ({d})"),
            ListingStatus::ListedTomorrow(d) => write!(f, "Listed Tomorrow ({d})"),
            ListingStatus::NotImminent(d) => write!(f, "Not listed today or tomorrow (Next: {d})"),
            ListingStatus::Unknown => f.write_str("No listing date found."),
        }
    }
}

impl Serialize for ListingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/* ---------------- Result record ---------------- */

/// What ends up in `case_result.json`. The CLI fills `downloaded_pdf`,
/// the form view fills `timestamp`.
#[derive(Clone, Debug, Serialize)]
pub struct ScrapeResult {
    pub listing_status: ListingStatus,
    pub details: CaseDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloaded_pdf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ScrapeResult {
    pub fn new(listing_status: ListingStatus, details: CaseDetails) -> Self {
        Self { listing_status, details, downloaded_pdf: None, timestamp: None }
    }

    pub fn with_downloaded_pdf(mut self, found: bool) -> Self {
        self.downloaded_pdf = Some(found);
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}
