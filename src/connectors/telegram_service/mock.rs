use super::MessagingConnector;
use crate::connectors::errors::ConnectorError;
use async_trait::async_trait;
use std::sync::Mutex;

/// Records outbound messages instead of sending them.
#[derive(Default)]
pub struct MockMessagingConnector {
    pub sent: Mutex<Vec<(i64, String)>>,
}

impl MockMessagingConnector {
    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingConnector for MockMessagingConnector {
    async fn set_webhook(&self) -> Result<bool, ConnectorError> {
        Ok(true)
    }

    async fn delete_webhook(&self, _drop_pending_updates: bool) -> Result<bool, ConnectorError> {
        Ok(true)
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), ConnectorError> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }
}
