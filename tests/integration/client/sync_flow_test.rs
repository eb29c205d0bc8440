//! End-to-end synchronization tests
//!
//! Runs the controller through the HTTP store against a real server, so
//! every trigger crosses the wire and comes back through a fresh list.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use customer_desk::desk_app::{FormMode, HttpCustomerStore, SyncAction, SyncController};
use customer_desk::shared::{CustomerId, MemoryCustomerStore};

use crate::assert_sorted_by_name;
use crate::common::{customer, TestApp};

fn notice(controller: &SyncController<HttpCustomerStore>) -> String {
    controller
        .state()
        .notice()
        .map(|n| n.message.clone())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_create_edit_delete_flow() {
    let app = TestApp::spawn().await;
    let mut controller = SyncController::new(Arc::new(app.client()));

    controller.mount().await;
    assert!(controller.state().shows_empty_state());

    for name in ["Beta", "Acme"] {
        let form = controller.form_mut();
        form.name = name.to_string();
        form.date = "2024-01-01".to_string();
        form.member = "5".to_string();
        form.interest = "Widgets".to_string();
        controller.handle(SyncAction::Submit).await;
        assert_eq!(notice(&controller), "Customer created successfully");
    }

    let records = controller.state().records().to_vec();
    assert_eq!(records.len(), 2);
    assert_sorted_by_name!(records);
    assert_eq!(controller.state().mode(), &FormMode::Create);

    let acme = records[0].clone();
    controller.handle(SyncAction::Edit(acme.clone())).await;
    controller.form_mut().interest = "Gadgets".to_string();
    controller.handle(SyncAction::Submit).await;

    assert_eq!(notice(&controller), "Customer updated successfully");
    let updated = &controller.state().records()[0];
    assert_eq!(updated.id, acme.id);
    assert_eq!(updated.interest, "Gadgets");

    controller.handle(SyncAction::Delete(acme.id.clone())).await;
    assert_eq!(notice(&controller), "Customer deleted successfully");
    assert!(controller.state().records().iter().all(|c| c.id != acme.id));

    controller.handle(SyncAction::Delete(acme.id)).await;
    assert_eq!(notice(&controller), "Failed to delete customer: Customer not found");
}

#[tokio::test]
async fn test_update_missing_record_reports_failure() {
    let store = Arc::new(MemoryCustomerStore::with_records(vec![customer("1", "Acme")]));
    let app = TestApp::spawn_with_store(store).await;
    let mut controller = SyncController::new(Arc::new(app.client()));
    controller.mount().await;

    controller.edit(customer("1", "Acme"));
    app.store.delete_by_id(&CustomerId::new("1")).await.unwrap();
    controller.submit().await;

    assert_eq!(notice(&controller), "Failed to update customer: Customer not found");
    assert!(controller.state().mode().is_update());
}
