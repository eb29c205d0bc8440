//! HTTP store error mapping tests
//!
//! Drives `HttpCustomerStore` against a wiremock server to check how each
//! response shape maps onto the error taxonomy.

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use customer_desk::desk_app::{Config, HttpCustomerStore};
use customer_desk::shared::{CustomerError, CustomerId, RecordStore};

use crate::common::{acme_fields, customer};

fn store_for(server: &MockServer) -> HttpCustomerStore {
    HttpCustomerStore::new(Config::for_server(server.uri()).unwrap())
}

#[tokio::test]
async fn test_list_decodes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![customer("1", "Acme")]))
        .mount(&server)
        .await;

    let records = store_for(&server).list_all().await.unwrap();

    assert_eq!(records, vec![customer("1", "Acme")]);
}

#[tokio::test]
async fn test_create_posts_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/customer"))
        .and(body_json(json!({
            "name": "Acme",
            "date": "2024-01-01",
            "member": 5.0,
            "interest": "Widgets"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(customer("1", "Acme")))
        .expect(1)
        .mount(&server)
        .await;

    let created = store_for(&server).create(acme_fields()).await.unwrap();

    assert_eq!(created.id, CustomerId::new("1"));
}

#[tokio::test]
async fn test_server_error_maps_to_store_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customer"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "message": "Error fetching customers", "status": 500 })),
        )
        .mount(&server)
        .await;

    let err = store_for(&server).list_all().await.unwrap_err();

    assert_eq!(err, CustomerError::store("Error fetching customers"));
    assert_eq!(err.reason(), "Error fetching customers");
}

#[tokio::test]
async fn test_validation_keeps_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/customer"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "interest is required",
            "status": 400,
            "field": "interest"
        })))
        .mount(&server)
        .await;

    let err = store_for(&server).create(acme_fields()).await.unwrap_err();

    assert_eq!(err, CustomerError::validation("interest", "interest is required"));
}

#[tokio::test]
async fn test_not_found_on_update() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/customer/42"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "Customer not found", "status": 404 })),
        )
        .mount(&server)
        .await;

    let err = store_for(&server)
        .update_by_id(&CustomerId::new("42"), acme_fields())
        .await
        .unwrap_err();

    assert_matches!(err, CustomerError::NotFoundError { id } if id == "42");
}

#[tokio::test]
async fn test_error_without_body_uses_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/customer/1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = store_for(&server)
        .delete_by_id(&CustomerId::new("1"))
        .await
        .unwrap_err();

    assert_matches!(err, CustomerError::StoreError { message } if message.contains("503"));
}

#[tokio::test]
async fn test_unparsable_success_body_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = store_for(&server).list_all().await.unwrap_err();

    assert_matches!(err, CustomerError::NetworkError { .. });
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 1
    let store = HttpCustomerStore::new(Config::for_server("http://127.0.0.1:1").unwrap());

    let err = store.list_all().await.unwrap_err();

    assert_matches!(err, CustomerError::NetworkError { .. });
}
