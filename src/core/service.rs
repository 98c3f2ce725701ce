//! Service trait for invoice persistence
//!
//! The gateway seam between form actions and the relational store. Actions
//! receive an implementation as an explicit dependency, so tests can
//! substitute a fake without touching process-wide state.

use crate::core::invoice::{Invoice, InvoiceChanges, NewInvoice};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence operations for invoices.
///
/// Each mutating call issues exactly one parameterized write statement:
/// no transactions, no batching, no retries. An `update` or `delete`
/// whose id matches no row succeeds silently; callers that care about
/// existence use [`get`](InvoiceService::get).
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// Insert a new invoice and return the stored row, including the
    /// server-generated id.
    async fn create(&self, invoice: NewInvoice) -> Result<Invoice>;

    /// Get an invoice by id.
    async fn get(&self, id: &str) -> Result<Option<Invoice>>;

    /// List all invoices, most recent date first.
    async fn list(&self) -> Result<Vec<Invoice>>;

    /// Apply changes to the invoice matching `id`. The stored date is
    /// never modified.
    async fn update(&self, id: &str, changes: InvoiceChanges) -> Result<()>;

    /// Delete the invoice matching `id`.
    async fn delete(&self, id: &str) -> Result<()>;
}
