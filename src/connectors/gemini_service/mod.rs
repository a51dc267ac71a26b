//! Generation API connector
//!
//! Forwards a question, wrapped in the fixed finance-only instruction, to the
//! Gemini `generateContent` endpoint and hands back the raw Markdown reply.

use super::config::ConnectorConfig;
use super::errors::ConnectorError;
use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;

pub mod client;
#[cfg(test)]
pub mod mock;

pub use client::GeminiClient;
#[cfg(test)]
pub use mock::MockAssistantConnector;

/// Prepended verbatim to every question.
pub const SYSTEM_PROMPT: &str = "You are a financial expert.  Answer ONLY questions related to \
finance, economics, investing, and financial markets. If the question is not related to finance, \
state that you cannot answer it.";

pub fn compose_prompt(question: &str) -> String {
    format!("{}\n\nUser Query: {}", SYSTEM_PROMPT, question)
}

#[async_trait]
pub trait AssistantConnector: Send + Sync {
    /// Ask a question. Returns the reply text, or an empty string when the
    /// API answered without any text.
    async fn ask(&self, question: &str) -> Result<String, ConnectorError>;
}

/// Build the process-wide generation client.
pub fn init(
    connector_config: &ConnectorConfig,
) -> Result<web::Data<Arc<dyn AssistantConnector>>, ConnectorError> {
    let config = connector_config.gemini.clone();
    tracing::info!(
        base_url = %config.base_url,
        model = %config.model,
        "Initializing generation API connector"
    );
    let connector: Arc<dyn AssistantConnector> = Arc::new(GeminiClient::new(config)?);
    Ok(web::Data::new(connector))
}
