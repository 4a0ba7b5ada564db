// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractionError;

pub fn parse(body: &str) -> Html {
    Html::parse_document(body)
}

/// Compile a CSS selector, turning a bad pattern into an extraction failure.
pub fn selector(css: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(css)
        .map_err(|e| ExtractionError::Malformed(format!("invalid selector {css:?}: {e}")))
}

/// All descendant text of `el`, concatenated as-is. Callers decide how to trim.
pub fn text_of(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of the document `<title>`, whitespace-normalized.
pub fn title(doc: &Html) -> Option<String> {
    let sel = selector("title").ok()?;
    let el = doc.select(&sel).next()?;
    let t = super::sanitize::normalize_ws(&text_of(&el));
    if t.is_empty() { None } else { Some(t) }
}
