//! Customer API integration tests
//!
//! Tests for the `/customer` endpoints: list, create, update and delete,
//! plus the error body shape.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use customer_desk::backend::server::create_app_with_store;
use customer_desk::shared::{Customer, MemoryCustomerStore};

use crate::assert_sorted_by_name;
use crate::common::{acme_fields, customer, customer_fields};

fn create_test_server() -> TestServer {
    let store = Arc::new(MemoryCustomerStore::new());
    TestServer::new(create_app_with_store(store)).unwrap()
}

fn create_seeded_server(records: Vec<Customer>) -> TestServer {
    let store = Arc::new(MemoryCustomerStore::with_records(records));
    TestServer::new(create_app_with_store(store)).unwrap()
}

#[tokio::test]
async fn test_list_empty() {
    let server = create_test_server();

    let response = server.get("/customer").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Vec<Customer> = response.json();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_create_then_list() {
    let server = create_test_server();

    let response = server.post("/customer").json(&acme_fields()).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Customer = response.json();
    assert_eq!(created.name, "Acme");
    assert!(!created.id.as_str().is_empty());

    let listed: Vec<Customer> = server.get("/customer").await.json();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_list_sorted_by_name() {
    let server = create_test_server();

    for name in ["Zeta", "Acme", "Midway"] {
        server
            .post("/customer")
            .json(&customer_fields(name))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let listed: Vec<Customer> = server.get("/customer").await.json();
    assert_eq!(listed.len(), 3);
    assert_sorted_by_name!(listed);
    assert_eq!(listed[0].name, "Acme");
}

#[tokio::test]
async fn test_create_wire_format() {
    let server = create_test_server();

    let response = server
        .post("/customer")
        .json(&json!({
            "name": "Acme",
            "date": "2024-01-01",
            "member": 5,
            "interest": "Widgets",
            "id": "client-chosen"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["date"], "2024-01-01");
    assert_eq!(body["member"], 5.0);
    assert_ne!(body["id"], "client-chosen");
}

#[tokio::test]
async fn test_create_missing_field() {
    let server = create_test_server();

    let response = server
        .post("/customer")
        .json(&json!({ "name": "Acme", "date": "2024-01-01", "member": 5 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert_eq!(body["field"], "interest");
    assert_eq!(body["message"], "interest is required");

    let listed: Vec<Customer> = server.get("/customer").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_create_malformed_json() {
    let server = create_test_server();

    let response = server
        .post("/customer")
        .text("{\"name\": ")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert_eq!(body["field"], "body");
}

#[tokio::test]
async fn test_update_merges_fields() {
    let server = create_seeded_server(vec![customer("1", "Acme")]);

    let response = server
        .put("/customer/1")
        .json(&json!({ "interest": "Gadgets" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Customer = response.json();
    assert_eq!(updated.id.as_str(), "1");
    assert_eq!(updated.name, "Acme");
    assert_eq!(updated.interest, "Gadgets");

    let listed: Vec<Customer> = server.get("/customer").await.json();
    assert_eq!(listed, vec![updated]);
}

#[tokio::test]
async fn test_update_empty_body_is_noop() {
    let server = create_seeded_server(vec![customer("1", "Acme")]);

    let response = server.put("/customer/1").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Customer = response.json();
    assert_eq!(body, customer("1", "Acme"));
}

#[tokio::test]
async fn test_update_blank_name_rejected() {
    let server = create_seeded_server(vec![customer("1", "Acme")]);

    let response = server.put("/customer/1").json(&json!({ "name": "  " })).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "name");
}

#[tokio::test]
async fn test_update_unknown_id() {
    let server = create_test_server();

    let response = server
        .put("/customer/missing")
        .json(&json!({ "name": "Acme" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "Customer not found", "status": 404 }));
}

#[tokio::test]
async fn test_delete_then_list() {
    let server = create_seeded_server(vec![customer("1", "Acme"), customer("2", "Beta")]);

    let response = server.delete("/customer/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "Customer deleted" }));

    let listed: Vec<Customer> = server.get("/customer").await.json();
    assert_eq!(listed, vec![customer("2", "Beta")]);

    let again = server.delete("/customer/1").await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route() {
    let server = create_test_server();

    let response = server.get("/customers").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
