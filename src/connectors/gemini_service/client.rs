use super::{compose_prompt, AssistantConnector};
use crate::connectors::config::GeminiConfig;
use crate::connectors::errors::ConnectorError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::Instrument;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Calls `POST {base_url}/v1beta/models/{model}:generateContent`.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ConnectorError> {
        // No request timeout: a question blocks for as long as the API takes.
        let http_client = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|err| ConnectorError::Internal(format!("HTTP client error: {}", err)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            api_key: config.api_key,
            http_client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl AssistantConnector for GeminiClient {
    async fn ask(&self, question: &str) -> Result<String, ConnectorError> {
        let span = tracing::info_span!("gemini_generate_content", model = %self.model);
        let prompt = compose_prompt(question);

        async move {
            let response = self
                .http_client
                .post(self.endpoint())
                .header("x-goog-api-key", &self.api_key)
                .json(&GenerateContentRequest::new(&prompt))
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                tracing::error!(%status, body = %body, "Generation API rejected the request");
                return Err(ConnectorError::HttpError(format!(
                    "generateContent returned {}",
                    status
                )));
            }

            let payload = response
                .json::<GenerateContentResponse>()
                .await
                .map_err(|err| ConnectorError::InvalidResponse(err.to_string()))?;
            let text = payload.text();
            tracing::debug!(chars = text.len(), "Generation API replied");
            Ok(text)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let response = parse(json!({
            "candidates": [
                {"content": {"parts": [{"text": "Stocks "}, {"text": "are equity."}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }));
        assert_eq!(response.text(), "Stocks are equity.");
    }

    #[test]
    fn text_is_empty_without_candidates() {
        assert_eq!(parse(json!({})).text(), "");
        assert_eq!(parse(json!({"candidates": [{}]})).text(), "");
        assert_eq!(
            parse(json!({"candidates": [{"content": {"parts": [{"inlineData": {}}]}}]})).text(),
            ""
        );
    }

    #[test]
    fn request_body_wraps_prompt_in_single_part() {
        let body = serde_json::to_value(GenerateContentRequest::new("hello")).unwrap();
        assert_eq!(body, json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn endpoint_uses_model_and_trims_base_url() {
        let client = GeminiClient::new(GeminiConfig {
            base_url: "http://localhost:9000/".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: "key".to_string(),
        })
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
