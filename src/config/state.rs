// src/config/state.rs
use super::{consts::RESULT_FILE, options::FetchConfig};
use crate::data::CaseQuery;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    Cnr,
    CaseNumber,
}

/// Raw text of the search form. Validation happens in `to_query`.
#[derive(Clone, Debug)]
pub struct FormState {
    pub mode: SearchMode,
    pub cnr: String,
    pub case_type: String,
    pub case_no: String,
    pub case_year: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            mode: SearchMode::Cnr,
            cnr: s!(),
            case_type: s!(),
            case_no: s!(),
            case_year: s!(),
        }
    }
}

impl FormState {
    /// Only the fields of the active mode are considered.
    pub fn to_query(&self) -> Option<CaseQuery> {
        match self.mode {
            SearchMode::Cnr => CaseQuery::from_parts(Some(&self.cnr), None, None, None),
            SearchMode::CaseNumber => CaseQuery::from_parts(
                None,
                Some(&self.case_type),
                Some(&self.case_no),
                Some(&self.case_year),
            ),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub form: FormState,
    pub fetch: FetchConfig,
    /// Target of the Save button; the search itself always refreshes `RESULT_FILE`.
    pub save_path_text: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            fetch: FetchConfig::default(),
            save_path_text: s!(RESULT_FILE),
        }
    }
}
