//! Submission relay.
//!
//! Validated payloads are POSTed to an external webhook (a serverless
//! function that turns them into email). The relay owns no retry logic; a
//! failed forward surfaces as a retryable 502 and the user resubmits.

use serde::Serialize;
use serde_json::json;
use std::time::Duration;

use crate::common::ApiError;

const FORWARD_TIMEOUT: Duration = Duration::from_secs(10);

/// Relays submission payloads to the configured webhook.
pub struct SubmissionForwarder {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl SubmissionForwarder {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// Forward a payload, labeled with its form kind so the webhook can
    /// route it to the right inbox.
    pub async fn forward<T: Serialize>(&self, kind: &str, payload: &T) -> Result<(), ApiError> {
        let Some(url) = self.webhook_url.as_deref() else {
            return Err(ApiError::NotConfigured("submission relay"));
        };

        let response = self
            .client
            .post(url)
            .timeout(FORWARD_TIMEOUT)
            .json(&json!({ "kind": kind, "payload": payload }))
            .send()
            .await?;
        response.error_for_status()?;

        tracing::info!(kind, "submission forwarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_relay_reports_not_configured() {
        let forwarder = SubmissionForwarder::new(None);
        let err = forwarder.forward("contact", &json!({})).await.unwrap_err();
        assert!(matches!(err, ApiError::NotConfigured(_)));
    }
}
