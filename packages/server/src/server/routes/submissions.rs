//! Lead-generation routes: listing submissions, contact messages, and the
//! donation redirect.
//!
//! Each POST validates, relays to the editorial webhook, and acknowledges.
//! Nothing is persisted here; a failed relay is a retryable 502 and the
//! user resubmits the form.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::common::ApiError;
use crate::domains::submissions::{
    ContactMessage, DaycareSubmission, EventSubmission, ProviderSubmission,
};
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct Received {
    status: &'static str,
}

const RECEIVED: Received = Received { status: "received" };

pub async fn submit_provider(
    State(state): State<AppState>,
    Json(payload): Json<ProviderSubmission>,
) -> Result<Json<Received>, ApiError> {
    payload.validate()?;
    state.forwarder.forward("provider", &payload).await?;
    Ok(Json(RECEIVED))
}

pub async fn submit_daycare(
    State(state): State<AppState>,
    Json(payload): Json<DaycareSubmission>,
) -> Result<Json<Received>, ApiError> {
    payload.validate()?;
    state.forwarder.forward("daycare", &payload).await?;
    Ok(Json(RECEIVED))
}

pub async fn submit_event(
    State(state): State<AppState>,
    Json(payload): Json<EventSubmission>,
) -> Result<Json<Received>, ApiError> {
    payload.validate()?;
    state.forwarder.forward("event", &payload).await?;
    Ok(Json(RECEIVED))
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactMessage>,
) -> Result<Json<Received>, ApiError> {
    payload.validate()?;
    state.forwarder.forward("contact", &payload).await?;
    Ok(Json(RECEIVED))
}

/// Hand the client the external checkout URL; payment itself happens
/// off-site.
pub async fn donate(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    match state.config.donate_url.as_deref() {
        Some(url) => Ok(Json(json!({ "checkout_url": url }))),
        None => Err(ApiError::NotConfigured("donations")),
    }
}
