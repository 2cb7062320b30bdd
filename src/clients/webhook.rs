//! Slack incoming-webhook notifier.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::error;

use crate::errors::AppError;

/// Build the webhook payload around a summary.
pub fn format_summary_payload(summary: &str) -> Value {
    json!({ "text": format!("📝 *Todo Summary:*\n{}", summary) })
}

/// Delivers a finished summary to a chat destination.
#[async_trait]
pub trait SummaryNotifier: Send + Sync {
    async fn send(&self, summary: &str) -> Result<(), AppError>;
}

pub struct SlackWebhook {
    http: Client,
    webhook_url: String,
}

impl SlackWebhook {
    pub fn new(webhook_url: String) -> Self {
        Self {
            http: Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl SummaryNotifier for SlackWebhook {
    async fn send(&self, summary: &str) -> Result<(), AppError> {
        let response = self
            .http
            .post(&self.webhook_url)
            .json(&format_summary_payload(summary))
            .send()
            .await
            .map_err(|e| AppError::Delivery(format!("webhook request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!("webhook POST failed: status={} body={}", status, body_text);
            return Err(AppError::Delivery(format!("webhook returned {}", status)));
        }

        Ok(())
    }
}
