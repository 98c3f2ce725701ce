//! Invoice domain model
//!
//! An invoice moves through exactly one request: raw form fields
//! ([`InvoiceForm`]) are validated into typed fields, combined into either a
//! [`NewInvoice`] (create) or [`InvoiceChanges`] (update), written once, and
//! discarded. The stored row is [`Invoice`].
//!
//! Identifiers (`id`, `customer_id`) are opaque strings: this crate never
//! parses or interprets them, only passes them through to the store.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment status of an invoice. The only two states the dashboard knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Parse the wire form (`"pending"` / `"paid"`). Anything else is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw invoice form submission, before validation.
///
/// Form-boundary semantics: every value arrives as a string
/// (url-encoded/multipart submission), and absent fields are `None`.
/// Field names mirror the form inputs, so `customerId` keeps its camelCase
/// wire name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceForm {
    #[serde(default, rename = "customerId")]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl InvoiceForm {
    /// Convenience constructor for a fully populated form.
    pub fn filled(customer_id: &str, amount: &str, status: &str) -> Self {
        Self {
            customer_id: Some(customer_id.to_string()),
            amount: Some(amount.to_string()),
            status: Some(status.to_string()),
        }
    }
}

/// Typed, constrained fields produced by a successful validation pass.
///
/// Invariants: `customer_id` is non-empty, `amount_in_cents >= 1`
/// (derived as `round(amount * 100)`), `status` is one of the two enum
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields {
    pub customer_id: String,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
}

/// A validated invoice ready for insertion.
///
/// `date` is stamped with the current UTC calendar day at construction,
/// regardless of anything the form supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

impl NewInvoice {
    pub fn from_fields(fields: ValidatedFields) -> Self {
        Self {
            customer_id: fields.customer_id,
            amount_in_cents: fields.amount_in_cents,
            status: fields.status,
            date: Utc::now().date_naive(),
        }
    }
}

/// A validated set of changes for an existing invoice.
///
/// Updates never touch the stored date; the row keeps the day it was
/// created on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceChanges {
    pub customer_id: String,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
}

impl From<ValidatedFields> for InvoiceChanges {
    fn from(fields: ValidatedFields) -> Self {
        Self {
            customer_id: fields.customer_id,
            amount_in_cents: fields.amount_in_cents,
            status: fields.status,
        }
    }
}

/// A stored invoice row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_round_trip() {
        assert_eq!(InvoiceStatus::parse("pending"), Some(InvoiceStatus::Pending));
        assert_eq!(InvoiceStatus::parse("paid"), Some(InvoiceStatus::Paid));
        assert_eq!(InvoiceStatus::parse("overdue"), None);
        assert_eq!(InvoiceStatus::parse("Paid"), None);
        assert_eq!(InvoiceStatus::Pending.as_str(), "pending");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Paid).unwrap(),
            "\"paid\""
        );
    }

    #[test]
    fn test_new_invoice_stamps_today() {
        let fields = ValidatedFields {
            customer_id: "c1".to_string(),
            amount_in_cents: 4250,
            status: InvoiceStatus::Pending,
        };
        let invoice = NewInvoice::from_fields(fields);
        assert_eq!(invoice.date, Utc::now().date_naive());
        assert_eq!(invoice.amount_in_cents, 4250);
    }

    #[test]
    fn test_date_serializes_iso_8601() {
        let invoice = NewInvoice {
            customer_id: "c1".to_string(),
            amount_in_cents: 100,
            status: InvoiceStatus::Paid,
            date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
        };
        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["date"], "2026-08-07");
    }

    #[test]
    fn test_form_deserializes_from_urlencoded_names() {
        let form: InvoiceForm =
            serde_json::from_value(serde_json::json!({"customerId": "c1", "amount": "42.50"}))
                .unwrap();
        assert_eq!(form.customer_id.as_deref(), Some("c1"));
        assert_eq!(form.amount.as_deref(), Some("42.50"));
        assert_eq!(form.status, None);
    }
}
