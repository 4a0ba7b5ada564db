// tests/query.rs
use ecourts_scrape::{
    config::state::{FormState, SearchMode},
    CaseQuery,
};

#[test]
fn cnr_wins_over_case_fields() {
    let q = CaseQuery::from_parts(Some("MHJK010000002023"), Some("CS"), Some("12"), Some("2023"));
    assert_eq!(q, Some(CaseQuery::Cnr("MHJK010000002023".into())));
}

#[test]
fn case_fields_need_all_three() {
    assert_eq!(CaseQuery::from_parts(None, Some("CS"), Some("12"), None), None);
    assert_eq!(CaseQuery::from_parts(None, Some("CS"), Some(""), Some("2023")), None);
    assert_eq!(CaseQuery::from_parts(Some("  "), None, None, None), None);
    assert_eq!(
        CaseQuery::from_parts(Some(""), Some("CS"), Some("12"), Some("2023")),
        Some(CaseQuery::CaseNumber {
            case_type: "CS".into(),
            case_no: "12".into(),
            case_year: "2023".into()
        })
    );
}

#[test]
fn form_fields_per_shape() {
    let cnr = CaseQuery::Cnr("ABC".into());
    assert_eq!(cnr.form_fields(), vec![("cnrno", "ABC")]);
    assert_eq!(cnr.identifier(), "ABC");

    let num = CaseQuery::CaseNumber {
        case_type: "CR".into(),
        case_no: "45".into(),
        case_year: "2021".into(),
    };
    assert_eq!(
        num.form_fields(),
        vec![("case_type", "CR"), ("case_no", "45"), ("case_year", "2021")]
    );
    assert_eq!(num.identifier(), "45");
}

#[test]
fn form_state_uses_active_mode_only() {
    let mut form = FormState {
        mode: SearchMode::CaseNumber,
        cnr: "IGNORED".into(),
        case_type: "CS".into(),
        case_no: "7".into(),
        case_year: "2022".into(),
    };
    assert_eq!(form.to_query().map(|q| q.identifier().to_string()), Some("7".into()));

    form.mode = SearchMode::Cnr;
    assert_eq!(form.to_query(), Some(CaseQuery::Cnr("IGNORED".into())));

    form.cnr.clear();
    assert_eq!(form.to_query(), None);
}
