//! Form actions: the server-side behavior behind the dashboard's forms

pub mod invoices;

pub use invoices::{ActionContext, create_invoice, delete_invoice, update_invoice};
