use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_draft() -> InvoiceDraft {
    let date = dates::from_unix(1_700_000_000).expect("in range");
    InvoiceDraft {
        headers: HeaderRecord {
            company: "Acme".to_owned(),
            street: "Main 1".to_owned(),
            town: "Gent".to_owned(),
            vat_number: "BE0123".to_owned(),
            invoice_number: "2023-001".to_owned(),
            invoice_date: date,
            expire_date: date + chrono::Duration::days(30),
        },
        entries: vec![LineItem {
            description: "Consulting".to_owned(),
            amount: "2".to_owned(),
            price: "10.00".to_owned(),
            tax: "21".to_owned(),
        }],
    }
}

// =============================================================
// Serialization shape
// =============================================================

#[test]
fn invoice_body_serializes_persisted_field_names() {
    let body = InvoiceBody::from(&make_draft());
    let value = serde_json::to_value(&body).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "entries": [
                { "description": "Consulting", "amount": "2", "price": "10.00", "tax": "21" }
            ],
            "headers": {
                "company": "Acme",
                "street": "Main 1",
                "town": "Gent",
                "btw": "BE0123",
                "invoiceNumber": "2023-001",
                "invoiceDate": 1_700_000_000,
                "expireDate": 1_702_592_000
            }
        })
    );
}

#[test]
fn invoice_response_deserializes_data_envelope() {
    let raw = serde_json::json!({
        "data": {
            "entries": [],
            "headers": {
                "company": "Acme",
                "street": "Main 1",
                "town": "Gent",
                "btw": "BE0123",
                "invoiceNumber": "7",
                "invoiceDate": 1_700_000_000,
                "expireDate": 1_700_000_000
            }
        }
    });
    let response: InvoiceResponse = serde_json::from_value(raw).expect("deserialize");
    assert!(response.data.entries.is_empty());
    assert_eq!(response.data.headers.vat_number, "BE0123");
    assert_eq!(response.data.headers.invoice_date, 1_700_000_000);
}

#[test]
fn wire_entry_accepts_numeric_json_values() {
    let raw = serde_json::json!({ "description": "x", "amount": 2, "price": 10.5, "tax": "6" });
    let entry: WireEntry = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(entry.amount, "2");
    assert_eq!(entry.price, "10.5");
    assert_eq!(entry.tax, "6");
}

#[test]
fn wire_headers_accept_float_timestamps() {
    let raw = serde_json::json!({
        "company": "a", "street": "b", "town": "c", "btw": "d", "invoiceNumber": "e",
        "invoiceDate": 1_700_000_000.0, "expireDate": 5
    });
    let headers: WireHeaders = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(headers.invoice_date, 1_700_000_000);
    assert_eq!(headers.expire_date, 5);
}

#[test]
fn wire_headers_reject_string_timestamps() {
    let raw = serde_json::json!({ "invoiceDate": "yesterday", "expireDate": 5 });
    assert!(serde_json::from_value::<WireHeaders>(raw).is_err());
}

// =============================================================
// Model conversion
// =============================================================

#[test]
fn draft_survives_wire_round_trip() {
    let draft = make_draft();
    let back = InvoiceDraft::try_from(InvoiceBody::from(&draft)).expect("convert");
    assert_eq!(back, draft);
}

#[test]
fn out_of_range_dates_are_rejected() {
    let mut body = InvoiceBody::from(&make_draft());
    body.headers.expire_date = i64::MAX;
    assert_eq!(InvoiceDraft::try_from(body), Err(DateOutOfRange(i64::MAX)));
}
