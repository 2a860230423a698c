//! Webhook alert delivery with exponential-backoff retry.
//!
//! [`WebhookSink`] posts a JSON-encoded alert to an external URL. A failed
//! delivery makes up to four attempts in total: the initial send plus three
//! retries with exponential backoff (1 s, 2 s, 4 s).

use std::time::Duration;

use async_trait::async_trait;

use gridwatch_core::alert::Alert;
use gridwatch_db::models::recipient::Recipient;

use crate::sink::{DeliveryError, NotificationSink};

/// Retry delays in seconds (exponential backoff: 1s, 2s, 4s).
const RETRY_DELAYS_SECS: [u64; 3] = [1, 2, 4];

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for webhook delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// WebhookSink
// ---------------------------------------------------------------------------

/// Delivers alerts to an external webhook endpoint.
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    /// Create a new sink posting to the given URL.
    pub fn new(url: String) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, url })
    }

    /// Build a sink from the `ALERT_WEBHOOK_URL` environment variable.
    ///
    /// Returns `None` if the variable is not set, signalling that webhook
    /// delivery is not configured.
    pub fn from_env() -> Option<Result<Self, WebhookError>> {
        let url = std::env::var("ALERT_WEBHOOK_URL").ok()?;
        Some(Self::new(url))
    }

    /// Deliver an alert payload with retry.
    ///
    /// Makes up to four attempts (initial send plus three backoff retries)
    /// before giving up. Returns `Ok(())` on the first successful attempt.
    async fn deliver_with_retry(
        &self,
        recipient: &Recipient,
        alert: &Alert,
    ) -> Result<(), WebhookError> {
        let payload = serde_json::json!({
            "recipient": recipient.email,
            "metric": alert.metric,
            "observed_value": alert.observed_value,
            "threshold_value": alert.threshold_value,
            "direction": alert.direction,
            "category": alert.category,
            "triggered_at": alert.triggered_at,
        });

        let mut last_err: Option<WebhookError> = None;

        for (attempt, delay_secs) in RETRY_DELAYS_SECS.iter().enumerate() {
            match self.try_send(&payload).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        url = %self.url,
                        error = %e,
                        "Webhook delivery attempt failed, retrying"
                    );
                    last_err = Some(e);
                    tokio::time::sleep(Duration::from_secs(*delay_secs)).await;
                }
            }
        }

        // Final attempt after the last backoff.
        match self.try_send(&payload).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::error!(url = %self.url, error = %e, "Webhook delivery failed after all retries");
                Err(last_err.unwrap_or(e))
            }
        }
    }

    /// Execute a single POST request and check the response status.
    async fn try_send(&self, payload: &serde_json::Value) -> Result<(), WebhookError> {
        let response = self.client.post(&self.url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(WebhookError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn deliver(&self, recipient: &Recipient, alert: &Alert) -> Result<(), DeliveryError> {
        self.deliver_with_retry(recipient, alert).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_client() {
        let sink = WebhookSink::new("http://localhost:9/hook".to_string());
        assert!(sink.is_ok());
    }

    #[test]
    fn from_env_returns_none_without_url() {
        std::env::remove_var("ALERT_WEBHOOK_URL");
        assert!(WebhookSink::from_env().is_none());
    }

    #[test]
    fn webhook_error_display_http_status() {
        let err = WebhookError::HttpStatus(502);
        assert_eq!(err.to_string(), "Webhook returned HTTP 502");
    }
}
