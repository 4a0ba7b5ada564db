// tests/cli.rs
#![cfg(feature = "cli")]

use std::{fs, path::Path};

use ecourts_scrape::{cli::Args, ScrapeError};
use httpmock::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const CASE_PAGE: &str = r#"
<table class="table">
  <tr><td>Case Type :</td><td>CS</td></tr>
  <tr><td>Next Hearing Date</td><td>garbage</td></tr>
</table>
<a href="/files/order.pdf">Order</a>
"#;

fn args(base_url: String, out_dir: &Path) -> Args {
    Args {
        cnr: None,
        case_type: None,
        case_no: None,
        case_year: None,
        causelist: false,
        out_dir: out_dir.to_path_buf(),
        base_url,
        timeout: 5,
        verbose: false,
    }
}

#[test]
fn full_run_writes_result_pdf_and_cause_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).body_contains("cnrno=MHJK010000002023");
        then.status(200).body(CASE_PAGE);
    });
    server.mock(|when, then| {
        when.method(GET).path("/files/order.pdf");
        then.status(200).body("%PDF order");
    });
    server.mock(|when, then| {
        when.method(GET).query_param("p", "casestatus/cause_list");
        then.status(200).body("%PDF list");
    });

    let dir = TempDir::new().unwrap();
    let mut a = args(format!("{}/", server.base_url()), dir.path());
    a.cnr = Some("MHJK010000002023".into());
    a.causelist = true;

    ecourts_scrape::cli::run_with(&a).unwrap();

    let v: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("case_result.json")).unwrap())
            .unwrap();
    assert_eq!(v["listing_status"], "No listing date found.");
    assert_eq!(v["details"]["Case Type"], "CS");
    assert_eq!(v["downloaded_pdf"], true);

    assert_eq!(fs::read_to_string(dir.path().join("case_MHJK010000002023.pdf")).unwrap(), "%PDF order");
    assert_eq!(fs::read_to_string(dir.path().join("cause_list.pdf")).unwrap(), "%PDF list");
}

#[test]
fn incomplete_query_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let mut a = args("http://127.0.0.1:9/".into(), dir.path());
    a.case_type = Some("CS".into());
    a.case_no = Some("12".into());

    ecourts_scrape::cli::run_with(&a).unwrap();
    assert!(!dir.path().join("case_result.json").exists());
}

#[test]
fn missing_details_prints_and_returns_ok() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(200).body("<p>Record not found</p>");
    });

    let dir = TempDir::new().unwrap();
    let mut a = args(format!("{}/", server.base_url()), dir.path());
    a.cnr = Some("NOPE".into());

    ecourts_scrape::cli::run_with(&a).unwrap();
    assert!(!dir.path().join("case_result.json").exists());
}

#[test]
fn network_failure_propagates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(500);
    });

    let dir = TempDir::new().unwrap();
    let mut a = args(format!("{}/", server.base_url()), dir.path());
    a.cnr = Some("MHJK010000002023".into());

    let err = ecourts_scrape::cli::run_with(&a).unwrap_err();
    assert!(matches!(err, ScrapeError::Network(_)));
}

#[test]
fn cause_list_failure_does_not_abort() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(200).body(r#"<table class="table"><tr><td>A</td><td>B</td></tr></table>"#);
    });
    server.mock(|when, then| {
        when.method(GET);
        then.status(404);
    });

    let dir = TempDir::new().unwrap();
    let mut a = args(format!("{}/", server.base_url()), dir.path());
    a.cnr = Some("MHJK010000002023".into());
    a.causelist = true;

    ecourts_scrape::cli::run_with(&a).unwrap();

    let v: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("case_result.json")).unwrap())
            .unwrap();
    assert_eq!(v["downloaded_pdf"], false);
    assert!(!dir.path().join("cause_list.pdf").exists());
}

#[test]
fn case_number_names_the_pdf_even_with_cnr() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).body_contains("cnrno=MHJK01");
        then.status(200)
            .body(r#"<table class="table"><tr><td>A</td><td>B</td></tr></table><a href="/o.pdf">o</a>"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/o.pdf");
        then.status(200).body("%PDF");
    });

    let dir = TempDir::new().unwrap();
    let mut a = args(format!("{}/", server.base_url()), dir.path());
    a.cnr = Some("MHJK01".into());
    a.case_no = Some("77".into());

    ecourts_scrape::cli::run_with(&a).unwrap();

    assert!(dir.path().join("case_77.pdf").is_file());
    assert!(!dir.path().join("case_MHJK01.pdf").exists());
}
