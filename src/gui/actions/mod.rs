// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,save,search}.

mod save;    // src/gui/actions/save.rs
mod search;  // src/gui/actions/search.rs

pub use save::{copy, save};
pub use search::search;
