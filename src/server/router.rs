//! Router builder for the dashboard's invoice routes

use super::AppState;
use super::handlers::{create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice};
use axum::{Router, routing::get, routing::post};

/// Build the invoice routes:
/// - GET  /dashboard/invoices - List all invoices
/// - POST /dashboard/invoices - Create an invoice from a form submission
/// - GET  /dashboard/invoices/{id} - Get a specific invoice
/// - POST /dashboard/invoices/{id} - Update an invoice from a form submission
/// - POST /dashboard/invoices/{id}/delete - Delete an invoice (list-row button)
pub fn build_invoice_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/dashboard/invoices",
            get(list_invoices).post(create_invoice),
        )
        .route(
            "/dashboard/invoices/{id}",
            get(get_invoice).post(update_invoice),
        )
        .route("/dashboard/invoices/{id}/delete", post(delete_invoice))
        .with_state(state)
}
