use super::*;

fn entry(amount: &str, price: &str, tax: &str) -> LineItem {
    LineItem {
        description: "Consulting".to_owned(),
        amount: amount.to_owned(),
        price: price.to_owned(),
        tax: tax.to_owned(),
    }
}

// =============================================================
// TaxRate
// =============================================================

#[test]
fn tax_rate_default_is_twenty_one() {
    assert_eq!(TaxRate::default(), TaxRate::TwentyOne);
    assert_eq!(TaxRate::default().as_str(), "21");
}

#[test]
fn tax_rate_options_are_ordered() {
    let labels: Vec<_> = TaxRate::ALL.iter().map(|rate| rate.as_str()).collect();
    assert_eq!(labels, vec!["0", "6", "12", "21"]);
}

#[test]
fn tax_rate_parse_matches_string_form() {
    assert_eq!(TaxRate::parse("12"), Some(TaxRate::Twelve));
    assert_eq!(TaxRate::parse("7"), None);
}

// =============================================================
// Line totals
// =============================================================

#[test]
fn line_total_applies_tax_and_rounds() {
    assert_eq!(line_total("2", "10.00", "21"), 24.20);
    assert_eq!(line_total("3", "1.99", "6"), 6.33);
    assert_eq!(line_total("1", "100", "0"), 100.0);
    assert_eq!(line_total("1", "0.125", "0"), 0.13);
    assert_eq!(line_total("1", "0.625", "0"), 0.63);
    assert_eq!(line_total("1", "1.125", "0"), 1.13);
    assert_eq!(line_total("1", "1.005", "0"), 1.0);
}

#[test]
fn line_total_reads_leading_number_of_each_field() {
    assert_eq!(line_total("12abc", "10", "21"), 145.2);
    assert_eq!(line_total("12abc", "10", "0"), 120.0);
    assert_eq!(line_total("1,5", "10", "21"), 12.1);
}

#[test]
fn line_total_is_nan_for_non_numbers() {
    assert!(line_total("abc", "10", "21").is_nan());
}

#[test]
fn grand_total_of_no_entries_is_zero() {
    assert_eq!(grand_total(&[]), 0.0);
}

#[test]
fn grand_total_sums_line_totals_in_any_order() {
    let a = entry("2", "10.00", "21");
    let b = entry("1", "5", "6");
    let c = entry("4", "2.5", "12");
    let forward = grand_total(&[a.clone(), b.clone(), c.clone()]);
    let backward = grand_total(&[c, b, a]);
    assert!((forward - backward).abs() < 1e-9);
    assert!((forward - (24.2 + 5.3 + 11.2)).abs() < 1e-9);
}

// =============================================================
// Entry validation
// =============================================================

#[test]
fn line_item_default_has_tax_twenty_one_and_blank_fields() {
    let item = LineItem::default();
    assert_eq!(item.tax, "21");
    assert!(item.description.is_empty());
    assert!(item.amount.is_empty());
    assert!(item.price.is_empty());
}

#[test]
fn validate_accepts_numeric_fields_and_any_description() {
    let mut item = entry("2", "10.00", "21");
    item.description = String::new();
    assert_eq!(item.validate(), Ok(()));
}

#[test]
fn validate_accepts_numbers_with_trailing_text() {
    assert_eq!(entry("12abc", "10", "21").validate(), Ok(()));
    assert_eq!(entry("1,5", "10", "21").validate(), Ok(()));
}

#[test]
fn validate_reports_first_non_numeric_field() {
    assert_eq!(
        entry("abc", "10", "21").validate(),
        Err(EntryError::NotANumber(EntryField::Amount))
    );
    assert_eq!(
        entry("1", "", "21").validate(),
        Err(EntryError::NotANumber(EntryField::Price))
    );
}

// =============================================================
// Header completeness
// =============================================================

#[test]
fn header_record_new_is_incomplete() {
    let headers = HeaderRecord::new(Utc::now());
    assert!(!headers.is_complete());
}

#[test]
fn header_record_complete_when_all_text_fields_filled() {
    let mut headers = HeaderRecord::new(Utc::now());
    for field in HeaderField::ALL {
        *headers.field_mut(field) = "x".to_owned();
    }
    assert!(headers.is_complete());
    headers.vat_number.clear();
    assert!(!headers.is_complete());
}
