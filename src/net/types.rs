//! Wire DTOs for the invoice endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the persisted record (`btw`, `invoiceNumber`, unix
//! second dates) so bodies round-trip without a translation table on the
//! server. Entry numbers are accepted as strings or JSON numbers and always
//! held as strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::invoice::{HeaderRecord, InvoiceDraft, LineItem};
use crate::util::dates;

/// `{ headers, entries }` body sent on create/update and returned on fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvoiceBody {
    pub entries: Vec<WireEntry>,
    pub headers: WireHeaders,
}

/// `GET /invoices/{id}` response envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InvoiceResponse {
    pub data: InvoiceBody,
}

/// Header record as exchanged with the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireHeaders {
    /// Seller company name.
    #[serde(default)]
    pub company: String,
    /// Street line of the seller address.
    #[serde(default)]
    pub street: String,
    /// Postal code and town of the seller.
    #[serde(default)]
    pub town: String,
    /// Seller VAT number, serialized as `btw`.
    #[serde(rename = "btw", default)]
    pub vat_number: String,
    /// Serialized as `invoiceNumber`.
    #[serde(default)]
    pub invoice_number: String,
    /// Issue date in unix seconds, serialized as `invoiceDate`. Float
    /// timestamps are truncated on read.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub invoice_date: i64,
    /// Due date in unix seconds, serialized as `expireDate`.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub expire_date: i64,
}

/// Line item as exchanged with the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEntry {
    #[serde(default)]
    pub description: String,
    /// Quantity. Read from a string or a JSON number, written as a string.
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub amount: String,
    /// Unit price excluding tax. Same encoding as `amount`.
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub price: String,
    /// Tax percentage (`"0"`, `"6"`, `"12"`, `"21"`). Same encoding as `amount`.
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub tax: String,
}

/// A wire body whose dates cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("date out of range: {0}")]
pub struct DateOutOfRange(pub i64);

impl From<&InvoiceDraft> for InvoiceBody {
    fn from(draft: &InvoiceDraft) -> Self {
        Self {
            entries: draft.entries.iter().map(WireEntry::from).collect(),
            headers: WireHeaders::from(&draft.headers),
        }
    }
}

impl TryFrom<InvoiceBody> for InvoiceDraft {
    type Error = DateOutOfRange;

    fn try_from(body: InvoiceBody) -> Result<Self, Self::Error> {
        Ok(Self {
            headers: HeaderRecord::try_from(body.headers)?,
            entries: body.entries.into_iter().map(LineItem::from).collect(),
        })
    }
}

impl From<&HeaderRecord> for WireHeaders {
    fn from(headers: &HeaderRecord) -> Self {
        Self {
            company: headers.company.clone(),
            street: headers.street.clone(),
            town: headers.town.clone(),
            vat_number: headers.vat_number.clone(),
            invoice_number: headers.invoice_number.clone(),
            invoice_date: dates::to_unix(&headers.invoice_date),
            expire_date: dates::to_unix(&headers.expire_date),
        }
    }
}

impl TryFrom<WireHeaders> for HeaderRecord {
    type Error = DateOutOfRange;

    fn try_from(wire: WireHeaders) -> Result<Self, Self::Error> {
        let invoice_date = dates::from_unix(wire.invoice_date).ok_or(DateOutOfRange(wire.invoice_date))?;
        let expire_date = dates::from_unix(wire.expire_date).ok_or(DateOutOfRange(wire.expire_date))?;
        Ok(Self {
            company: wire.company,
            street: wire.street,
            town: wire.town,
            vat_number: wire.vat_number,
            invoice_number: wire.invoice_number,
            invoice_date,
            expire_date,
        })
    }
}

impl From<&LineItem> for WireEntry {
    fn from(item: &LineItem) -> Self {
        Self {
            description: item.description.clone(),
            amount: item.amount.clone(),
            price: item.price.clone(),
            tax: item.tax.clone(),
        }
    }
}

impl From<WireEntry> for LineItem {
    fn from(wire: WireEntry) -> Self {
        Self {
            description: wire.description,
            amount: wire.amount,
            price: wire.price,
            tax: wire.tax,
        }
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float.trunc() as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
