//! API error taxonomy.
//!
//! The taxonomy is deliberately small (spec'd behavior is read-mostly):
//! data-fetch failures surface as retryable 5xx states, lookups that miss
//! are 404s, and invalid submissions carry field-level messages. An empty
//! filtered result is never an error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid submission")]
    Validation(Vec<String>),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A directory collection could not be fetched and no cached snapshot
    /// exists. The client shows a retry state.
    #[error("data fetch failed: {0}")]
    Fetch(#[source] anyhow::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Fetch(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the client should offer a retry (transient backend states).
    fn retryable(&self) -> bool {
        matches!(
            self,
            ApiError::Database(_) | ApiError::Fetch(_) | ApiError::Upstream(_)
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server-side faults with full detail; the response body stays
        // generic for 5xx so backend internals don't leak.
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = match &self {
            ApiError::Validation(messages) => json!({
                "error": "invalid submission",
                "details": messages,
                "retryable": false,
            }),
            ApiError::NotFound(what) => json!({
                "error": format!("{what} not found"),
                "retryable": false,
            }),
            _ => json!({
                "error": status.canonical_reason().unwrap_or("error"),
                "retryable": self.retryable(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
