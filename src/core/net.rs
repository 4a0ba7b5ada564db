// src/core/net.rs
//
// Blocking HTTP against the portal. One `Fetcher` per shell; the underlying
// client keeps no cookie store, so nothing carries over between lookups.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use reqwest::{StatusCode, blocking::Client};
use scraper::Html;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    config::options::FetchConfig,
    core::html,
    data::CaseQuery,
    error::Result,
};

pub struct Fetcher {
    config: FetchConfig,
    client: Client,
}

/// Result of a GET-and-save. A non-200 answer is reported, not raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved { path: PathBuf, bytes: usize },
    Failed { url: String, status: u16 },
}

impl DownloadOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, DownloadOutcome::Saved { .. })
    }
}

impl fmt::Display for DownloadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadOutcome::Saved { path, .. } => write!(f, "Downloaded: {}", path.display()),
            DownloadOutcome::Failed { url, .. } => write!(f, "Failed to download: {url}"),
        }
    }
}

/// What the connectivity check saw at the base URL.
#[derive(Clone, Debug)]
pub struct Probe {
    pub status: u16,
    pub title: Option<String>,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// POST the query to the case-status endpoint and parse the answer.
    /// Timeouts, refused connections and non-2xx statuses all surface as
    /// `ScrapeError::Network`.
    pub fn fetch_case_page(&self, query: &CaseQuery) -> Result<Html> {
        let url = self.config.case_status_url();
        debug!(%url, %query, "POST case status");

        let body = self
            .client
            .post(&url)
            .form(&query.form_fields())
            .send()?
            .error_for_status()?
            .text()?;

        debug!(bytes = body.len(), "case status page received");
        Ok(html::parse(&body))
    }

    /// Resolve a link found on the case-status page. Absolute hrefs pass through.
    pub fn resolve(&self, href: &str) -> Result<String> {
        let page = Url::parse(&self.config.case_status_url())?;
        Ok(page.join(href)?.to_string())
    }

    /// GET `url` and write the whole body to `dest` when the server answers 200.
    pub fn download(&self, url: &str, dest: &Path) -> Result<DownloadOutcome> {
        debug!(%url, dest = %dest.display(), "GET download");
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if status != StatusCode::OK {
            warn!(%url, status = status.as_u16(), "download refused");
            return Ok(DownloadOutcome::Failed { url: s!(url), status: status.as_u16() });
        }

        let bytes = resp.bytes()?;
        fs::write(dest, &bytes)?;
        info!(dest = %dest.display(), bytes = bytes.len(), "download saved");
        Ok(DownloadOutcome::Saved { path: dest.to_path_buf(), bytes: bytes.len() })
    }

    pub fn download_cause_list(&self, dest: &Path) -> Result<DownloadOutcome> {
        self.download(&self.config.cause_list_url(), dest)
    }

    /// Plain GET of the base URL. Any status is reported back as-is.
    pub fn probe(&self) -> Result<Probe> {
        let url = &self.config.base_url;
        debug!(%url, "GET probe");
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        let title = html::title(&html::parse(&body));
        Ok(Probe { status, title })
    }
}
