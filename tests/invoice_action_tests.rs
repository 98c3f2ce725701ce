//! End-to-end action flows over the in-memory store.
//!
//! These follow whole submissions through validate → persist → revalidate
//! rather than testing the pieces in isolation.

use billfold::prelude::*;
use chrono::Utc;

fn context_with_store() -> (Arc<InMemoryInvoiceService>, ActionContext) {
    let store = Arc::new(InMemoryInvoiceService::new());
    let ctx = ActionContext::new(store.clone(), RevalidationBus::new(16));
    (store, ctx)
}

#[tokio::test]
async fn test_create_scenario_42_50_pending() {
    let (store, ctx) = context_with_store();
    let mut views = ctx.views.subscribe();

    let outcome = create_invoice(&ctx, &InvoiceForm::filled("c1", "42.50", "pending")).await;

    // One INSERT with the scaled amount and today's date, then exactly one
    // revalidation and a redirect.
    assert_eq!(
        outcome,
        ActionOutcome::Redirect("/dashboard/invoices".to_string())
    );
    let rows = store.list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount_in_cents, 4250);
    assert_eq!(rows[0].status, InvoiceStatus::Pending);
    assert_eq!(rows[0].date, Utc::now().date_naive());
    assert_eq!(views.recv().await.unwrap(), "/dashboard/invoices");
    assert!(views.try_recv().is_err());
}

#[tokio::test]
async fn test_create_scenario_zero_amount() {
    let (store, ctx) = context_with_store();

    let outcome = create_invoice(&ctx, &InvoiceForm::filled("c1", "0", "paid")).await;

    let state = outcome.form_state().expect("expected form feedback");
    assert_eq!(
        state.errors.get("amount"),
        Some(&vec!["Please enter an amount greater than 0.".to_string()])
    );
    assert_eq!(state.errors.len(), 1);
    assert_eq!(
        state.message.as_deref(),
        Some("Missing fields.  Failed to create invoice.")
    );
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_full_invoice_lifecycle() {
    let (store, ctx) = context_with_store();

    // Create
    create_invoice(&ctx, &InvoiceForm::filled("c1", "10.00", "pending")).await;
    let id = store.list().await.unwrap()[0].id.clone();

    // Update: amount and status change, date survives
    let outcome = update_invoice(&ctx, &id, &InvoiceForm::filled("c1", "12.34", "paid")).await;
    assert!(outcome.is_redirect());
    let row = store.get(&id).await.unwrap().unwrap();
    assert_eq!(row.amount_in_cents, 1234);
    assert_eq!(row.status, InvoiceStatus::Paid);

    // Delete: row gone, no redirect involved
    delete_invoice(&ctx, &id).await.unwrap();
    assert!(store.get(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_negative_and_garbage_amounts_never_write() {
    let (store, ctx) = context_with_store();

    for bad in ["-1", "-0.01", "abc", ""] {
        let outcome = create_invoice(&ctx, &InvoiceForm::filled("c1", bad, "paid")).await;
        let state = outcome.form_state().expect("expected form feedback");
        assert!(state.errors.contains_key("amount"), "amount {:?}", bad);
    }

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_customer_message() {
    let (_, ctx) = context_with_store();

    let form = InvoiceForm {
        customer_id: None,
        amount: Some("5".to_string()),
        status: Some("paid".to_string()),
    };
    let outcome = create_invoice(&ctx, &form).await;

    let state = outcome.form_state().expect("expected form feedback");
    assert_eq!(
        state.errors.get("customerId"),
        Some(&vec!["Please select a customer.".to_string()])
    );
}

#[tokio::test]
async fn test_update_validation_reports_all_fields() {
    let (_, ctx) = context_with_store();

    let outcome = update_invoice(&ctx, "some-id", &InvoiceForm::default()).await;

    let state = outcome.form_state().expect("expected form feedback");
    assert_eq!(
        state.message.as_deref(),
        Some("Missing fields.  Failed to update invoice.")
    );
    let fields: Vec<&String> = state.errors.keys().collect();
    assert_eq!(fields, ["customerId", "amount", "status"]);
}
