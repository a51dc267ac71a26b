//! Messaging platform connector
//!
//! Talks to the Telegram Bot API: webhook registration and outbound messages.
//! Whether the webhook is currently registered is never tracked locally; the
//! platform's answer to each call is the only source of truth.

use super::config::ConnectorConfig;
use super::errors::ConnectorError;
use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;

pub mod client;
#[cfg(test)]
pub mod mock;

pub use client::TelegramClient;
#[cfg(test)]
pub use mock::MockMessagingConnector;

/// Path of the webhook receiver, appended to the public base URL on registration.
pub const WEBHOOK_PATH: &str = "/telegram";

#[async_trait]
pub trait MessagingConnector: Send + Sync {
    /// Point the bot's webhook at this app's receiver, dropping pending updates.
    /// `true` when the platform acknowledged with HTTP 200.
    async fn set_webhook(&self) -> Result<bool, ConnectorError>;

    /// Remove the bot's webhook. `true` when the platform acknowledged with HTTP 200.
    async fn delete_webhook(&self, drop_pending_updates: bool) -> Result<bool, ConnectorError>;

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), ConnectorError>;
}

pub fn init(
    connector_config: &ConnectorConfig,
) -> Result<web::Data<Arc<dyn MessagingConnector>>, ConnectorError> {
    let config = connector_config.telegram.clone();
    tracing::info!(base_url = %config.base_url, "Initializing messaging connector");
    let connector: Arc<dyn MessagingConnector> = Arc::new(TelegramClient::new(config)?);
    Ok(web::Data::new(connector))
}
