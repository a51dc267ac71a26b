use super::{MessagingConnector, WEBHOOK_PATH};
use crate::connectors::config::TelegramConfig;
use crate::connectors::errors::ConnectorError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;
use tracing::Instrument;

/// Bot API client. Every method is `POST {base_url}/bot{token}/{method}`.
pub struct TelegramClient {
    base_url: String,
    token: String,
    webhook_url: String,
    http_client: reqwest::Client,
}

impl TelegramClient {
    pub fn new(config: TelegramConfig) -> Result<Self, ConnectorError> {
        let http_client = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|err| ConnectorError::Internal(format!("HTTP client error: {}", err)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token,
            webhook_url: config.webhook_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Public URL the platform should push updates to.
    pub fn receiver_url(&self) -> String {
        format!("{}{}", self.webhook_url, WEBHOOK_PATH)
    }
}

#[async_trait]
impl MessagingConnector for TelegramClient {
    async fn set_webhook(&self) -> Result<bool, ConnectorError> {
        let url = self.receiver_url();
        let span = tracing::info_span!("telegram_set_webhook", webhook = %url);

        async move {
            let response = self
                .http_client
                .post(self.method_url("setWebhook"))
                .json(&json!({ "url": url, "drop_pending_updates": true }))
                .send()
                .await?;
            tracing::info!(status = %response.status(), "setWebhook answered");
            Ok(response.status() == StatusCode::OK)
        }
        .instrument(span)
        .await
    }

    async fn delete_webhook(&self, drop_pending_updates: bool) -> Result<bool, ConnectorError> {
        let span = tracing::info_span!("telegram_delete_webhook", drop_pending_updates);

        async move {
            let mut request = self.http_client.post(self.method_url("deleteWebhook"));
            if drop_pending_updates {
                request = request.json(&json!({ "drop_pending_updates": true }));
            }
            let response = request.send().await?;
            tracing::info!(status = %response.status(), "deleteWebhook answered");
            Ok(response.status() == StatusCode::OK)
        }
        .instrument(span)
        .await
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), ConnectorError> {
        let span = tracing::info_span!("telegram_send_message", chat_id);

        async move {
            let chat_id = chat_id.to_string();
            let response = self
                .http_client
                .post(self.method_url("sendMessage"))
                .form(&[("chat_id", chat_id.as_str()), ("text", text)])
                .send()
                .await?;

            // The platform's verdict on the message itself is not acted upon.
            if !response.status().is_success() {
                tracing::warn!(status = %response.status(), "sendMessage was not accepted");
            }
            Ok(())
        }
        .instrument(span)
        .await
    }
}
