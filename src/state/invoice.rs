//! Invoice draft model: headers, line items, tax rates, and totals.
//!
//! DESIGN
//! ======
//! Entry fields are kept as the raw strings the user typed so the inputs
//! round-trip exactly; numbers are only parsed when validating or totalling.
//! Header dates are real timestamps; conversion to unix seconds happens at
//! the wire boundary in `net::types`.

#[cfg(test)]
#[path = "invoice_test.rs"]
mod invoice_test;

use chrono::{DateTime, Utc};

use crate::util::money::{parse_number, parse_or_nan, round2};

// =============================================================================
// TAX RATE
// =============================================================================

/// Tax percentages offered by the entry dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaxRate {
    Zero,
    Six,
    Twelve,
    #[default]
    TwentyOne,
}

impl TaxRate {
    /// Dropdown order.
    pub const ALL: [TaxRate; 4] = [TaxRate::Zero, TaxRate::Six, TaxRate::Twelve, TaxRate::TwentyOne];

    /// String form stored in `LineItem::tax` and sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            TaxRate::Zero => "0",
            TaxRate::Six => "6",
            TaxRate::Twelve => "12",
            TaxRate::TwentyOne => "21",
        }
    }

    /// Look up a rate by its string form.
    pub fn parse(raw: &str) -> Option<TaxRate> {
        Self::ALL.into_iter().find(|rate| rate.as_str() == raw.trim())
    }
}

// =============================================================================
// HEADERS
// =============================================================================

/// Invoice-level metadata: seller identity, invoice number, and dates.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderRecord {
    /// Seller company name.
    pub company: String,
    /// Street line of the seller address.
    pub street: String,
    /// Postal code and town of the seller.
    pub town: String,
    /// Seller VAT registration number (`btw` on the wire).
    pub vat_number: String,
    /// Free-form invoice number chosen by the user.
    pub invoice_number: String,
    /// Date the invoice was issued.
    pub invoice_date: DateTime<Utc>,
    /// Payment due date.
    pub expire_date: DateTime<Utc>,
}

impl HeaderRecord {
    /// Blank headers with both dates set to `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            company: String::new(),
            street: String::new(),
            town: String::new(),
            vat_number: String::new(),
            invoice_number: String::new(),
            invoice_date: now,
            expire_date: now,
        }
    }

    /// Mutable access to a text field.
    pub fn field_mut(&mut self, field: HeaderField) -> &mut String {
        match field {
            HeaderField::Company => &mut self.company,
            HeaderField::Street => &mut self.street,
            HeaderField::Town => &mut self.town,
            HeaderField::VatNumber => &mut self.vat_number,
            HeaderField::InvoiceNumber => &mut self.invoice_number,
        }
    }

    /// Read a text field.
    pub fn field(&self, field: HeaderField) -> &str {
        match field {
            HeaderField::Company => &self.company,
            HeaderField::Street => &self.street,
            HeaderField::Town => &self.town,
            HeaderField::VatNumber => &self.vat_number,
            HeaderField::InvoiceNumber => &self.invoice_number,
        }
    }

    /// Every header value must be present. Dates are always present, so
    /// only the text fields can fail.
    pub fn is_complete(&self) -> bool {
        HeaderField::ALL.iter().all(|field| !self.field(*field).is_empty())
    }
}

/// Text fields of the header form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderField {
    Company,
    Street,
    Town,
    VatNumber,
    InvoiceNumber,
}

impl HeaderField {
    pub const ALL: [HeaderField; 5] = [
        HeaderField::Company,
        HeaderField::Street,
        HeaderField::Town,
        HeaderField::VatNumber,
        HeaderField::InvoiceNumber,
    ];

    /// Input label.
    pub fn label(self) -> &'static str {
        match self {
            HeaderField::Company => "Company",
            HeaderField::Street => "Street",
            HeaderField::Town => "Town",
            HeaderField::VatNumber => "VAT number",
            HeaderField::InvoiceNumber => "Invoice number",
        }
    }
}

// =============================================================================
// LINE ITEMS
// =============================================================================

/// One billable row. Numeric fields hold the raw input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    pub description: String,
    /// Quantity, as typed.
    pub amount: String,
    /// Unit price excluding tax, as typed.
    pub price: String,
    /// Tax percentage, one of `TaxRate::ALL` when picked from the dropdown.
    pub tax: String,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            price: String::new(),
            tax: TaxRate::default().as_str().to_owned(),
        }
    }
}

impl LineItem {
    pub fn field_mut(&mut self, field: EntryField) -> &mut String {
        match field {
            EntryField::Description => &mut self.description,
            EntryField::Amount => &mut self.amount,
            EntryField::Price => &mut self.price,
            EntryField::Tax => &mut self.tax,
        }
    }

    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Description => &self.description,
            EntryField::Amount => &self.amount,
            EntryField::Price => &self.price,
            EntryField::Tax => &self.tax,
        }
    }

    /// Check that every numeric field parses as a finite number.
    ///
    /// # Errors
    ///
    /// Returns the first field that does not.
    pub fn validate(&self) -> Result<(), EntryError> {
        match EntryField::NUMERIC.into_iter().find(|field| parse_number(self.field(*field)).is_none()) {
            Some(field) => Err(EntryError::NotANumber(field)),
            None => Ok(()),
        }
    }

    /// Line total including tax, rounded to cents. `NaN` if any numeric
    /// field is not a number.
    pub fn total(&self) -> f64 {
        line_total(&self.amount, &self.price, &self.tax)
    }
}

/// Fields of the pending-entry footer row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryField {
    Description,
    Amount,
    Price,
    Tax,
}

impl EntryField {
    /// Fields that must hold numbers before an entry is accepted.
    pub const NUMERIC: [EntryField; 3] = [EntryField::Amount, EntryField::Price, EntryField::Tax];
}

/// Why a pending entry was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("{0:?} is not a number")]
    NotANumber(EntryField),
}

// =============================================================================
// DRAFT + TOTALS
// =============================================================================

/// Headers plus committed entries; the unit that gets saved.
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceDraft {
    pub headers: HeaderRecord,
    pub entries: Vec<LineItem>,
}

/// `round2(amount * price * (1 + tax / 100))`.
pub fn line_total(amount: &str, price: &str, tax: &str) -> f64 {
    let amount = parse_or_nan(amount);
    let price = parse_or_nan(price);
    let tax = parse_or_nan(tax);
    round2(amount * price * (1.0 + tax / 100.0))
}

/// Sum of line totals, folded left from zero.
pub fn grand_total(entries: &[LineItem]) -> f64 {
    entries.iter().fold(0.0, |acc, entry| acc + entry.total())
}
