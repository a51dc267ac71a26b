//! External Service Connectors
//!
//! Adapters for the two third-party APIs this app depends on: the text
//! generation API and the Telegram Bot API.
//!
//! ## Architecture Pattern
//!
//! 1. Define trait in `{service}/mod.rs` → allows mocking in tests
//! 2. Implement HTTP client in `{service}/client.rs`
//! 3. Configuration in `config.rs`
//! 4. Inject trait object into routes → routes never depend on HTTP implementation
//!
//! ## Usage in Routes
//!
//! ```ignore
//! pub async fn reply(
//!     assistant: web::Data<Arc<dyn AssistantConnector>>,
//! ) -> Result<impl Responder, AppError> {
//!     let answer = assistant.ask("What is an ETF?").await?;
//! }
//! ```

pub mod config;
pub mod errors;
pub mod gemini_service;
pub mod telegram_service;

pub use config::{ConnectorConfig, GeminiConfig, TelegramConfig};
pub use errors::ConnectorError;
pub use gemini_service::{AssistantConnector, GeminiClient};
pub use telegram_service::{MessagingConnector, TelegramClient};

pub use gemini_service::init as init_gemini;
pub use telegram_service::init as init_telegram;
