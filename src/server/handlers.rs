//! HTTP handlers for the dashboard's invoice forms
//!
//! The form boundary: bodies arrive url-encoded, `amount` as a string, and
//! the update/delete id comes from the path. Action outcomes map onto the
//! wire as follows:
//!
//! - `ActionOutcome::Redirect` → 303 See Other to the invoices view.
//! - `ActionOutcome::Form` → 200 OK with the `FormState` as JSON; the
//!   client re-renders the form with it inline (validation feedback and
//!   swallowed write failures look the same at this layer).
//! - a propagated delete failure → the generic JSON error boundary (500).

use super::AppState;
use crate::actions;
use crate::core::error::{AppError, AppResult, StorageError};
use crate::core::form::ActionOutcome;
use crate::core::invoice::{Invoice, InvoiceForm};
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde_json::{Value, json};

pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Response {
    respond(actions::create_invoice(&state.ctx, &form).await)
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<InvoiceForm>,
) -> Response {
    respond(actions::update_invoice(&state.ctx, &id, &form).await)
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    actions::delete_invoice(&state.ctx, &id)
        .await
        .map_err(|e| {
            AppError::Storage(StorageError::WriteFailed {
                operation: "delete invoice".to_string(),
                message: e.to_string(),
            })
        })?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_invoices(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let invoices = state.ctx.store.list().await?;
    Ok(Json(json!({
        "invoices": invoices,
        "count": invoices.len()
    })))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, StatusCode> {
    state
        .ctx
        .store
        .get(&id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Express a form action outcome on the wire.
fn respond(outcome: ActionOutcome) -> Response {
    match outcome {
        ActionOutcome::Redirect(path) => Redirect::to(&path).into_response(),
        ActionOutcome::Form(form_state) => Json(form_state).into_response(),
    }
}
