//! The invoice form schema
//!
//! Applies the per-field rules to a raw [`InvoiceForm`] in a single pass.
//! All fields are checked even after the first failure, so the caller gets
//! the complete error map in one round trip.

use super::{FieldErrors, validators};
use crate::core::invoice::{InvoiceForm, ValidatedFields};

const CUSTOMER_ERROR: &str = "Please select a customer.";
const AMOUNT_ERROR: &str = "Please enter an amount greater than 0.";
const STATUS_ERROR: &str = "Please select an invoice status.";

/// Validate a raw form against the invoice schema.
///
/// Returns the typed field set, with the amount already scaled to cents
/// (`round(amount * 100)`), or the accumulated per-field errors keyed by
/// the form's field names (`customerId`, `amount`, `status`).
pub fn parse_invoice_form(form: &InvoiceForm) -> Result<ValidatedFields, FieldErrors> {
    let customer_id = validators::selected(CUSTOMER_ERROR)(form.customer_id.as_deref());
    let amount = validators::positive_amount(AMOUNT_ERROR)(form.amount.as_deref())
        .map(to_cents)
        .and_then(|cents| {
            // A positive amount below half a cent would round to zero.
            if cents >= 1 {
                Ok(cents)
            } else {
                Err(AMOUNT_ERROR.to_string())
            }
        });
    let status = validators::invoice_status(STATUS_ERROR)(form.status.as_deref());

    let mut errors = FieldErrors::new();
    collect(&mut errors, "customerId", &customer_id);
    collect(&mut errors, "amount", &amount);
    collect(&mut errors, "status", &status);

    match (customer_id, amount, status) {
        (Ok(customer_id), Ok(amount_in_cents), Ok(status)) => Ok(ValidatedFields {
            customer_id,
            amount_in_cents,
            status,
        }),
        _ => Err(errors),
    }
}

/// Scale a decimal currency amount to integer cents.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

fn collect<T>(errors: &mut FieldErrors, field: &str, result: &Result<T, String>) {
    if let Err(message) = result {
        errors
            .entry(field.to_string())
            .or_default()
            .push(message.clone());
    }
}
