//! Core module containing the domain model and the seams between components

pub mod error;
pub mod form;
pub mod invoice;
pub mod revalidate;
pub mod service;
pub mod validation;

pub use error::{AppError, AppResult, ConfigError, StorageError};
pub use form::{ActionOutcome, FormState};
pub use invoice::{Invoice, InvoiceChanges, InvoiceForm, InvoiceStatus, NewInvoice, ValidatedFields};
pub use revalidate::RevalidationBus;
pub use service::InvoiceService;
pub use validation::{FieldErrors, parse_invoice_form};
