use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

impl ConnectorConfig {
    /// Fill secrets from the process environment.
    pub fn load_env(&mut self) {
        self.gemini.api_key = read_env("GEMINI_API_KEY");
        self.telegram.token = read_env("GEMINI_TELEGRAM_TOKEN");
        self.telegram.webhook_url = read_env("WEBHOOK_URL");
    }
}

fn read_env(key: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => {
            tracing::warn!("{} is not set; calls depending on it will fail", key);
            String::new()
        }
    }
}

/// Generation API connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL of the generation API (e.g., https://generativelanguage.googleapis.com)
    #[serde(default = "GeminiConfig::default_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request
    #[serde(default = "GeminiConfig::default_model")]
    pub model: String,
    /// API key (from env: GEMINI_API_KEY)
    #[serde(skip)]
    pub api_key: String,
}

impl GeminiConfig {
    fn default_base_url() -> String {
        "https://generativelanguage.googleapis.com".to_string()
    }

    fn default_model() -> String {
        "gemini-2.0-flash".to_string()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            model: Self::default_model(),
            api_key: String::new(),
        }
    }
}

/// Messaging platform (Telegram Bot API) connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot API base URL
    #[serde(default = "TelegramConfig::default_base_url")]
    pub base_url: String,
    /// Bot handle shown on the status page once the webhook is registered
    #[serde(default = "TelegramConfig::default_bot_handle")]
    pub bot_handle: String,
    /// Bot token (from env: GEMINI_TELEGRAM_TOKEN)
    #[serde(skip)]
    pub token: String,
    /// Externally reachable base URL of this app (from env: WEBHOOK_URL)
    #[serde(skip)]
    pub webhook_url: String,
}

impl TelegramConfig {
    fn default_base_url() -> String {
        "https://api.telegram.org".to_string()
    }

    fn default_bot_handle() -> String {
        "@gemini_tt_bot".to_string()
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            bot_handle: Self::default_bot_handle(),
            token: String::new(),
            webhook_url: String::new(),
        }
    }
}
