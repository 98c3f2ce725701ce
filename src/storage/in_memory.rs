//! In-memory implementation of InvoiceService for testing and development

use crate::core::invoice::{Invoice, InvoiceChanges, NewInvoice};
use crate::core::service::InvoiceService;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory invoice service implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Ids are generated server-side as UUID strings and treated as opaque
/// from then on.
#[derive(Clone)]
pub struct InMemoryInvoiceService {
    invoices: Arc<RwLock<HashMap<String, Invoice>>>,
}

impl InMemoryInvoiceService {
    /// Create a new in-memory invoice service
    pub fn new() -> Self {
        Self {
            invoices: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryInvoiceService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvoiceService for InMemoryInvoiceService {
    async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let row = Invoice {
            id: Uuid::new_v4().to_string(),
            customer_id: invoice.customer_id,
            amount_in_cents: invoice.amount_in_cents,
            status: invoice.status,
            date: invoice.date,
        };
        invoices.insert(row.id.clone(), row.clone());

        Ok(row)
    }

    async fn get(&self, id: &str) -> Result<Option<Invoice>> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(invoices.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut rows: Vec<Invoice> = invoices.values().cloned().collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn update(&self, id: &str, changes: InvoiceChanges) -> Result<()> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // An id matching no row writes nothing and is not an error.
        if let Some(row) = invoices.get_mut(id) {
            row.customer_id = changes.customer_id;
            row.amount_in_cents = changes.amount_in_cents;
            row.status = changes.status;
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        invoices.remove(id);

        Ok(())
    }
}
