// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod specs;

pub mod file;
pub mod gui;
pub mod listing;
pub mod log;
pub mod progress;
pub mod runner;

pub use data::{CaseDetails, CaseQuery, ListingStatus, ScrapeResult};
pub use error::{ExtractionError, ScrapeError};
