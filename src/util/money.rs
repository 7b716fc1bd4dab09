//! Number parsing, rounding, and display helpers for invoice amounts.
//!
//! DESIGN
//! ======
//! Entry fields stay raw strings until a total is needed, so every numeric
//! read goes through `parse_number`, which reads the longest numeric prefix
//! (`"12abc"` is 12, `"1,5"` is 1). `round2` decides ties on the exact binary
//! value and rounds them away from zero: `0.125` becomes `0.13`, while `1.005`
//! (stored just below the midpoint) becomes `1.00`.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use rust_decimal::{Decimal, RoundingStrategy};

/// Byte length of the numeric prefix of `text`: optional sign, digits with
/// an optional fraction, and an optional exponent. Zero if there is none.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut at: usize| {
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            at += 1;
        }
        at
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

/// Read the leading number of `raw`, ignoring leading whitespace and any
/// trailing text. `Infinity` is accepted the way a browser's `parseFloat`
/// accepts it.
fn leading_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.starts_with("Infinity") {
        return Some(if text.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY });
    }
    let len = numeric_prefix_len(text);
    if len == 0 {
        return None;
    }
    text[..len].parse().ok()
}

/// Parse a user-entered number. Returns `None` for input without a leading
/// number and for non-finite values.
pub fn parse_number(raw: &str) -> Option<f64> {
    leading_number(raw).filter(|value| value.is_finite())
}

/// Parse a number, yielding `NaN` when the input has no leading number.
/// Totals over an invalid entry are therefore `NaN`.
pub fn parse_or_nan(raw: &str) -> f64 {
    leading_number(raw).unwrap_or(f64::NAN)
}

/// Round to two decimal places, ties away from zero.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_string().parse().ok())
        .unwrap_or(value)
}

/// Format an amount with exactly two decimals for display.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round2(value))
}
