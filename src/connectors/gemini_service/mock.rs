use super::AssistantConnector;
use crate::connectors::errors::ConnectorError;
use async_trait::async_trait;
use std::sync::Mutex;

/// Canned assistant that remembers every question it was asked.
pub struct MockAssistantConnector {
    reply: Option<String>,
    pub questions: Mutex<Vec<String>>,
}

impl MockAssistantConnector {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssistantConnector for MockAssistantConnector {
    async fn ask(&self, question: &str) -> Result<String, ConnectorError> {
        self.questions.lock().unwrap().push(question.to_string());
        self.reply
            .clone()
            .ok_or_else(|| ConnectorError::ServiceUnavailable("mock assistant down".to_string()))
    }
}
