use super::*;

#[test]
fn from_unix_rehydrates_calendar_date() {
    let date = from_unix(1_700_000_000).expect("in range");
    assert_eq!(to_input_value(&date), "2023-11-14");
    assert_eq!(to_unix(&date), 1_700_000_000);
}

#[test]
fn from_unix_rejects_out_of_range_seconds() {
    assert!(from_unix(i64::MAX).is_none());
}

#[test]
fn to_display_uses_day_month_year() {
    let date = from_unix(1_700_000_000).expect("in range");
    assert_eq!(to_display(&date), "14/11/2023");
}

#[test]
fn parse_input_value_yields_midnight_utc() {
    let date = parse_input_value("2024-02-29").expect("valid date");
    assert_eq!(to_input_value(&date), "2024-02-29");
    assert_eq!(to_unix(&date) % 86_400, 0);
}

#[test]
fn parse_input_value_rejects_blank_and_invalid() {
    assert!(parse_input_value("").is_none());
    assert!(parse_input_value("2023-02-30").is_none());
    assert!(parse_input_value("14/11/2023").is_none());
}
