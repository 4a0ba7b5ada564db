// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://services.ecourts.gov.in/ecourtindia_v6/";
pub const CASE_STATUS_PATH: &str = "?p=casestatus/case_no";
pub const CAUSE_LIST_PATH: &str = "?p=casestatus/cause_list";
pub const FETCH_TIMEOUT_SECS: u64 = 20;
pub const PROBE_TIMEOUT_SECS: u64 = 10;

// Page structure
pub const DETAILS_TABLE_SELECTOR: &str = "table.table";
pub const NEXT_HEARING_LABEL: &str = "Next Hearing Date";
pub const LISTING_DATE_LABEL: &str = "Listing Date";
pub const LISTING_DATE_FORMAT: &str = "%d-%m-%Y";

// Output
pub const RESULT_FILE: &str = "case_result.json";
pub const CAUSE_LIST_FILE: &str = "cause_list.pdf";
pub const CASE_PDF_PREFIX: &str = "case_";

// GUI log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
