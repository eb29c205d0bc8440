//! Customer API Client
//!
//! Record store backed by the server's `/customer` resource. Responses are
//! mapped back onto the shared error taxonomy:
//!
//! - transport failure or unparsable body → `NetworkError`
//! - 400 / 422 → `ValidationError`
//! - 404 → `NotFoundError` (for id-addressed calls)
//! - any other failure → `StoreError` with the server's message

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::desk_app::config::Config;
use crate::shared::customer::{ApiMessage, Customer, CustomerFields, CustomerId};
use crate::shared::error::{CustomerError, StoreResult};
use crate::shared::store::RecordStore;

/// HTTP implementation of the record store
#[derive(Debug, Clone)]
pub struct HttpCustomerStore {
    config: Config,
    client: Client,
}

impl HttpCustomerStore {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        self.config.api_url("/customer")
    }

    /// URL of one customer, with the id percent-encoded as a path segment
    fn record_url(&self, id: &CustomerId) -> StoreResult<Url> {
        let mut url = Url::parse(&self.collection_url())
            .map_err(|e| CustomerError::network(format!("Invalid server URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| CustomerError::network("Server URL cannot hold a path"))?
            .push(id.as_str());
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> StoreResult<Response> {
        request.send().await.map_err(|e| {
            tracing::warn!("Customer request failed before a response: {}", e);
            CustomerError::network(e.to_string())
        })
    }
}

/// Decode a success body, or turn the failure response into an error
async fn read_json<T: DeserializeOwned>(
    response: Response,
    id: Option<&CustomerId>,
) -> StoreResult<T> {
    if !response.status().is_success() {
        return Err(error_from_response(response, id).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| CustomerError::network(format!("Failed to parse response: {}", e)))
}

async fn error_from_response(response: Response, id: Option<&CustomerId>) -> CustomerError {
    let status = response.status();
    let body = response.json::<ApiMessage>().await.ok();

    let message = body
        .as_ref()
        .map(|b| b.message.clone())
        .unwrap_or_else(|| status.to_string());

    match (status, id) {
        (StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY, _) => {
            let field = body.and_then(|b| b.field).unwrap_or_else(|| "body".to_string());
            CustomerError::validation(field, message)
        }
        (StatusCode::NOT_FOUND, Some(id)) => CustomerError::not_found(id),
        _ => CustomerError::store(message),
    }
}

#[async_trait]
impl RecordStore for HttpCustomerStore {
    async fn list_all(&self) -> StoreResult<Vec<Customer>> {
        tracing::debug!("GET {}", self.collection_url());
        let response = self.send(self.client.get(self.collection_url())).await?;
        read_json(response, None).await
    }

    async fn create(&self, fields: CustomerFields) -> StoreResult<Customer> {
        tracing::debug!("POST {}", self.collection_url());
        let request = self.client.post(self.collection_url()).json(&fields);
        let response = self.send(request).await?;
        read_json(response, None).await
    }

    async fn update_by_id(&self, id: &CustomerId, fields: CustomerFields) -> StoreResult<Customer> {
        let url = self.record_url(id)?;
        tracing::debug!("PUT {}", url);
        let response = self.send(self.client.put(url).json(&fields)).await?;
        read_json(response, Some(id)).await
    }

    async fn delete_by_id(&self, id: &CustomerId) -> StoreResult<ApiMessage> {
        let url = self.record_url(id)?;
        tracing::debug!("DELETE {}", url);
        let response = self.send(self.client.delete(url)).await?;
        read_json(response, Some(id)).await
    }
}
