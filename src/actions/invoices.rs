//! Invoice form actions
//!
//! Three actions back the dashboard's invoice forms: create, update and
//! delete. Each one runs the same straight-line workflow — validate the
//! submitted fields, issue a single write through the injected
//! [`InvoiceService`], then mark the invoices view stale — with no retries
//! and no branching back.
//!
//! Failure surfaces differ by operation, on purpose:
//!
//! - create/update fold any persistence failure into the returned
//!   [`FormState`]; the underlying cause never reaches the client.
//! - delete logs the failure and propagates it, so it surfaces through the
//!   generic error boundary instead of inline form feedback.

use crate::core::form::{ActionOutcome, FormState};
use crate::core::invoice::{InvoiceForm, NewInvoice};
use crate::core::revalidate::RevalidationBus;
use crate::core::service::InvoiceService;
use crate::core::validation::{FieldErrors, parse_invoice_form};
use anyhow::Result;
use std::sync::Arc;

/// The invoices view path that successful mutations revalidate and
/// create/update redirect to.
pub const INVOICES_VIEW: &str = "/dashboard/invoices";

/// Collaborators shared by the invoice actions.
///
/// The store is an explicit dependency rather than process-wide state, so
/// tests can swap in a fake.
#[derive(Clone)]
pub struct ActionContext {
    pub store: Arc<dyn InvoiceService>,
    pub views: RevalidationBus,
    /// View path to revalidate and redirect to. Defaults to
    /// [`INVOICES_VIEW`].
    pub invoices_path: String,
}

impl ActionContext {
    pub fn new(store: Arc<dyn InvoiceService>, views: RevalidationBus) -> Self {
        Self {
            store,
            views,
            invoices_path: INVOICES_VIEW.to_string(),
        }
    }

    pub fn with_invoices_path(mut self, path: impl Into<String>) -> Self {
        self.invoices_path = path.into();
        self
    }
}

/// Create an invoice from a form submission.
///
/// Validates the form, inserts a new row stamped with today's date, then
/// revalidates the invoices view and redirects to it. Validation failures
/// and write failures both come back as form feedback; no side effect is
/// performed on the validation path.
pub async fn create_invoice(ctx: &ActionContext, form: &InvoiceForm) -> ActionOutcome {
    let fields = match parse_invoice_form(form) {
        Ok(fields) => fields,
        Err(errors) => {
            return ActionOutcome::Form(FormState::invalid(
                errors,
                "Missing fields.  Failed to create invoice.",
            ));
        }
    };

    if ctx.store.create(NewInvoice::from_fields(fields)).await.is_err() {
        return ActionOutcome::Form(FormState::failed(
            "Database Error. Failed to create invoice.",
        ));
    }

    ctx.views.revalidate(&ctx.invoices_path);
    ActionOutcome::Redirect(ctx.invoices_path.clone())
}

/// Update the invoice matching `id` from a form submission.
///
/// The id comes from the route, not the form body, and is passed through
/// opaquely. An id matching no row is not an error: the update writes zero
/// rows and still redirects.
pub async fn update_invoice(ctx: &ActionContext, id: &str, form: &InvoiceForm) -> ActionOutcome {
    let fields = match parse_invoice_form(form) {
        Ok(fields) => fields,
        Err(errors) => {
            return ActionOutcome::Form(FormState::invalid(
                errors,
                "Missing fields.  Failed to update invoice.",
            ));
        }
    };

    if ctx.store.update(id, fields.into()).await.is_err() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "message".to_string(),
            vec!["Database Error updating invoice".to_string()],
        );
        return ActionOutcome::Form(FormState::invalid(errors, "Error updating invoice"));
    }

    ctx.views.revalidate(&ctx.invoices_path);
    ActionOutcome::Redirect(ctx.invoices_path.clone())
}

/// Delete the invoice matching `id`.
///
/// Invoked from within the rendered list, so success revalidates the view
/// without redirecting. This is the one operation that propagates a write
/// failure to its caller.
pub async fn delete_invoice(ctx: &ActionContext, id: &str) -> Result<()> {
    if let Err(error) = ctx.store.delete(id).await {
        tracing::error!("Error deleting invoice: {}", error);
        return Err(error);
    }

    ctx.views.revalidate(&ctx.invoices_path);
    Ok(())
}
