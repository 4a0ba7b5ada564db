// src/specs/mod.rs
//! # Page readers
//!
//! Page-specific readers for the case-status page. Each reader knows *where the
//! data lives in the HTML* and nothing else: no networking, no files, no UI.
//!
//! ## Typical call chain
//! ```text
//! cli / gui → runner::lookup → Fetcher::fetch_case_page
//!                            ↘ specs::case_details::extract → listing::classify
//!                            ↘ specs::pdf_link::find
//! ```
//!
//! ## Testing notes
//! - Readers take an already-parsed `scraper::Html`, so they are testable offline
//!   against saved page fragments.
pub mod case_details;
pub mod pdf_link;
