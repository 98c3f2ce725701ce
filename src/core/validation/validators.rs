//! Reusable field validators
//!
//! Each validator takes the raw optional string a form field arrived as and
//! either produces the typed value or the message to show next to the field.

use crate::core::invoice::InvoiceStatus;

/// Validator: a selection was made (present and non-empty).
///
/// Select inputs submit an empty string when nothing is chosen, so empty
/// counts as missing.
pub fn selected(message: &'static str) -> impl Fn(Option<&str>) -> Result<String, String> {
    move |value| match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(message.to_string()),
    }
}

/// Validator: value coerces to a decimal number greater than zero.
///
/// Unparsable input (including absent fields and `NaN`) fails with the same
/// message as a non-positive amount.
pub fn positive_amount(message: &'static str) -> impl Fn(Option<&str>) -> Result<f64, String> {
    move |value| {
        value
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|n| *n > 0.0)
            .ok_or_else(|| message.to_string())
    }
}

/// Validator: value is one of the two invoice statuses.
pub fn invoice_status(
    message: &'static str,
) -> impl Fn(Option<&str>) -> Result<InvoiceStatus, String> {
    move |value| {
        value
            .and_then(InvoiceStatus::parse)
            .ok_or_else(|| message.to_string())
    }
}
