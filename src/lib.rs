//! # Billfold
//!
//! Server-side form actions for a small invoicing dashboard.
//!
//! Every invoice form submission runs the same sequential workflow:
//!
//! 1. **Validate** the raw fields into a typed record, or collect
//!    per-field error messages.
//! 2. **Persist** with a single parameterized write through an injected
//!    [`InvoiceService`](crate::core::service::InvoiceService).
//! 3. **Revalidate** the invoices view (and, for create/update, redirect
//!    to it).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billfold::prelude::*;
//!
//! let store = Arc::new(InMemoryInvoiceService::new());
//! let ctx = ActionContext::new(store, RevalidationBus::default());
//!
//! let outcome = create_invoice(
//!     &ctx,
//!     &InvoiceForm::filled("customer-1", "42.50", "pending"),
//! )
//! .await;
//!
//! assert!(outcome.is_redirect());
//! ```
//!
//! The `server` module exposes the same actions over HTTP form posts, and
//! the `postgres` feature swaps the in-memory store for a sqlx-backed one.

pub mod actions;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Actions ===
    pub use crate::actions::{
        ActionContext, create_invoice, delete_invoice, update_invoice,
    };

    // === Core ===
    pub use crate::core::{
        error::{AppError, AppResult, ConfigError, StorageError},
        form::{ActionOutcome, FormState},
        invoice::{Invoice, InvoiceChanges, InvoiceForm, InvoiceStatus, NewInvoice, ValidatedFields},
        revalidate::RevalidationBus,
        service::InvoiceService,
        validation::{FieldErrors, parse_invoice_form},
    };

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{AppState, build_app, build_invoice_routes, serve};

    // === Storage ===
    pub use crate::storage::InMemoryInvoiceService;
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PostgresInvoiceService, ensure_schema};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use std::sync::Arc;
}
