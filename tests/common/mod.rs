#![allow(dead_code)]

use finassist::configuration::{get_configuration, DatabaseSettings};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tempfile::TempDir;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_BOT_TOKEN: &str = "test-token";
pub const TEST_MODEL: &str = "gemini-2.0-flash";
pub const TEST_WEBHOOK_URL: &str = "https://finassist.test";

pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
    /// Stands in for the generation API.
    pub gemini_server: MockServer,
    /// Stands in for the Telegram Bot API.
    pub telegram_server: MockServer,
    _db_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        reqwest::Client::new()
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub fn gemini_path(&self) -> String {
        format!("/v1beta/models/{}:generateContent", TEST_MODEL)
    }

    pub fn bot_path(&self, method: &str) -> String {
        format!("/bot{}/{}", TEST_BOT_TOKEN, method)
    }

    /// Form fields of every sendMessage call the bot API received.
    pub async fn sent_messages(&self) -> Vec<HashMap<String, String>> {
        let send_path = self.bot_path("sendMessage");
        self.telegram_server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == send_path)
            .map(|request| decode_form(&request.body))
            .collect()
    }
}

pub fn decode_form(body: &[u8]) -> HashMap<String, String> {
    serde_urlencoded::from_bytes(body).expect("Body is not a urlencoded form")
}

pub async fn configure_database(config: &DatabaseSettings) -> SqlitePool {
    let connection_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(config.connect_options())
        .await
        .expect("Failed to open database");

    finassist::db::migrate(&connection_pool)
        .await
        .expect("Failed to migrate database");

    connection_pool
}

// we have to run server in another task
pub async fn spawn_app() -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let gemini_server = MockServer::start().await;
    let telegram_server = MockServer::start().await;

    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.connectors.gemini.base_url = gemini_server.uri();
    configuration.connectors.gemini.model = TEST_MODEL.to_string();
    configuration.connectors.gemini.api_key = TEST_API_KEY.to_string();
    configuration.connectors.telegram.base_url = telegram_server.uri();
    configuration.connectors.telegram.token = TEST_BOT_TOKEN.to_string();
    configuration.connectors.telegram.webhook_url = TEST_WEBHOOK_URL.to_string();

    let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
    configuration.database.path = db_dir.path().join("user.db").to_string_lossy().into_owned();
    let connection_pool = configure_database(&configuration.database).await;

    let server = finassist::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
        gemini_server,
        telegram_server,
        _db_dir: db_dir,
    }
}

pub fn gemini_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            {
                "content": {"parts": [{"text": text}], "role": "model"},
                "finishReason": "STOP"
            }
        ]
    })
}
