// src/config/options.rs
use std::time::Duration;
use super::consts::*;

/// Where and how patiently to talk to the portal.
/// Each shell builds its own and hands it to `core::net::Fetcher`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
        }
    }
}

impl FetchConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self { base_url: base_url.into(), timeout }
    }

    /// Endpoint suffixes are appended verbatim: the portal routes on the query string.
    pub fn case_status_url(&self) -> String {
        format!("{}{}", self.base_url, CASE_STATUS_PATH)
    }

    pub fn cause_list_url(&self) -> String {
        format!("{}{}", self.base_url, CAUSE_LIST_PATH)
    }
}
