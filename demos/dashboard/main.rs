//! Invoicing Dashboard Example
//!
//! Wires the full stack together: configuration, an in-memory invoice
//! store seeded with sample rows, the revalidation bus with a logging
//! subscriber standing in for the page cache, and the HTTP routes.
//!
//! Run with `cargo run --example dashboard`, then exercise the forms:
//!
//! ```text
//! curl -X POST http://127.0.0.1:3000/dashboard/invoices \
//!     -d 'customerId=customer-1&amount=42.50&status=pending'
//! curl http://127.0.0.1:3000/dashboard/invoices
//! ```

use anyhow::Result;
use billfold::prelude::*;
use chrono::Utc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::default();

    let store = Arc::new(InMemoryInvoiceService::new());
    seed_invoices(store.as_ref()).await?;

    let views = RevalidationBus::default();

    // Stand-in for the rendering layer's page cache: log every view that
    // gets marked stale.
    let mut stale = views.subscribe();
    tokio::spawn(async move {
        while let Ok(path) = stale.recv().await {
            tracing::info!("View marked stale, will re-fetch on next render: {}", path);
        }
    });

    let ctx = ActionContext::new(store, views).with_invoices_path(config.views.invoices_path);
    let state = AppState::new(ctx);

    println!("Invoicing dashboard backend on http://{}", config.server.bind_addr);
    println!();
    println!("  GET    /dashboard/invoices              - List invoices");
    println!("  POST   /dashboard/invoices              - Create (customerId, amount, status)");
    println!("  GET    /dashboard/invoices/{{id}}         - Get one invoice");
    println!("  POST   /dashboard/invoices/{{id}}         - Update (customerId, amount, status)");
    println!("  POST   /dashboard/invoices/{{id}}/delete  - Delete");

    serve(&config.server.bind_addr, state).await
}

async fn seed_invoices(store: &dyn InvoiceService) -> Result<()> {
    for (customer, cents, status) in [
        ("customer-1", 25000, InvoiceStatus::Paid),
        ("customer-2", 4250, InvoiceStatus::Pending),
        ("customer-3", 99900, InvoiceStatus::Pending),
    ] {
        store
            .create(NewInvoice {
                customer_id: customer.to_string(),
                amount_in_cents: cents,
                status,
                date: Utc::now().date_naive(),
            })
            .await?;
    }
    Ok(())
}
