// src/specs/pdf_link.rs
//! First `<a href="….pdf">` on the page, if any. The href is returned raw;
//! resolving it against the page URL is the fetcher's job.

use scraper::Html;

use crate::core::html;

pub fn find(doc: &Html) -> Option<String> {
    let sel = html::selector("a[href]").ok()?;
    doc.select(&sel)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| href.ends_with(".pdf"))
        .map(String::from)
}
