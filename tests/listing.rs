// tests/listing.rs
use chrono::NaiveDate;
use ecourts_scrape::{
    listing::{classify_on, parse_listing_date},
    CaseDetails, ListingStatus,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    day(2024, 3, 14)
}

#[test]
fn next_hearing_today() {
    let details: CaseDetails = [("Next Hearing Date", "14-03-2024")].into_iter().collect();
    let status = classify_on(&details, today());
    assert_eq!(status, ListingStatus::ListedToday(today()));
    assert_eq!(status.to_string(), "Listed Today (2024-03-14)");
}

#[test]
fn next_hearing_tomorrow() {
    let details: CaseDetails = [("Next Hearing Date", "15-03-2024")].into_iter().collect();
    let status = classify_on(&details, today());
    assert_eq!(status, ListingStatus::ListedTomorrow(day(2024, 3, 15)));
    assert_eq!(status.to_string(), "Listed Tomorrow (2024-03-15)");
}

#[test]
fn tomorrow_across_year_end() {
    let details: CaseDetails = [("Listing Date", "01-01-2025")].into_iter().collect();
    assert_eq!(
        classify_on(&details, day(2024, 12, 31)),
        ListingStatus::ListedTomorrow(day(2025, 1, 1))
    );
}

#[test]
fn later_date_is_not_imminent() {
    let details: CaseDetails = [("Case Listing Date", "20-04-2024")].into_iter().collect();
    let status = classify_on(&details, today());
    assert_eq!(status, ListingStatus::NotImminent(day(2024, 4, 20)));
    assert_eq!(status.to_string(), "Not listed today or tomorrow (Next: 2024-04-20)");
}

#[test]
fn wrong_format_is_ignored() {
    let details: CaseDetails = [("Next Hearing Date", "2024/01/01")].into_iter().collect();
    let status = classify_on(&details, today());
    assert_eq!(status, ListingStatus::Unknown);
    assert_eq!(status.to_string(), "No listing date found.");
}

#[test]
fn no_date_fields_at_all() {
    let details: CaseDetails = [("Case Type", "CS"), ("Filing Date", "14-03-2024")]
        .into_iter()
        .collect();
    assert_eq!(classify_on(&details, today()), ListingStatus::Unknown);
}

#[test]
fn label_match_is_case_sensitive() {
    let details: CaseDetails = [("next hearing date", "14-03-2024")].into_iter().collect();
    assert_eq!(classify_on(&details, today()), ListingStatus::Unknown);
}

#[test]
fn last_parseable_match_wins() {
    let details: CaseDetails = [
        ("Next Hearing Date", "01-01-2099"),
        ("Listing Date", "14-03-2024"),
    ]
    .into_iter()
    .collect();
    assert_eq!(classify_on(&details, today()), ListingStatus::ListedToday(today()));
}

#[test]
fn unparseable_later_match_keeps_earlier_date() {
    let details: CaseDetails = [
        ("Next Hearing Date", "15-03-2024"),
        ("Listing Date", "Not yet listed"),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        classify_on(&details, today()),
        ListingStatus::ListedTomorrow(day(2024, 3, 15))
    );
}

#[test]
fn strict_date_shape() {
    assert_eq!(parse_listing_date("14-03-2024"), Some(today()));
    assert_eq!(parse_listing_date("4-03-2024"), None);
    assert_eq!(parse_listing_date("14-3-2024"), None);
    assert_eq!(parse_listing_date("14-03-24"), None);
    assert_eq!(parse_listing_date(" 14-03-2024"), None);
    assert_eq!(parse_listing_date("31-02-2024"), None);
    assert_eq!(parse_listing_date("14/03/2024"), None);
    assert_eq!(parse_listing_date(""), None);
}

#[test]
fn typed_accessors_use_substring_search() {
    let details: CaseDetails = [
        ("Case Type", "CS"),
        ("Next Hearing Date (Tentative)", "15-03-2024"),
        ("Last Listing Date", "01-03-2024"),
    ]
    .into_iter()
    .collect();

    assert_eq!(details.next_hearing_date(), Some("15-03-2024"));
    assert_eq!(details.listing_date(), Some("01-03-2024"));
    assert_eq!(details.listing_fields().count(), 2);
}
