/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be returned directly from handlers.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "message": "Customer not found",
 *   "status": 404
 * }
 * ```
 * Validation failures additionally carry a `field` key.
 */

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let mut body = json!({
            "message": self.message(),
            "status": status.as_u16(),
        });
        if let Some(field) = self.field() {
            body["field"] = json!(field);
        }

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        // Missing content type stays a 415, every decoding failure is a 400
        if rejection.status() == StatusCode::UNSUPPORTED_MEDIA_TYPE {
            BackendError::handler(StatusCode::UNSUPPORTED_MEDIA_TYPE, rejection.body_text())
        } else {
            BackendError::bad_body(rejection.body_text())
        }
    }
}
