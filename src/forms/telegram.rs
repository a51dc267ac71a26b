use serde::Deserialize;

/// Inbound webhook update. Only the fields the relay reads are modelled and
/// each of them may be missing.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: Option<i64>,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub chat: Option<Chat>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// Lenient parse; anything that is not a JSON update becomes an empty one.
    pub fn from_slice(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(update) => update,
            Err(err) => {
                tracing::warn!(error = %err, "Webhook body is not a valid update, ignoring");
                Self::default()
            }
        }
    }

    /// Chat id and text of the carried message, when both are present.
    pub fn chat_text(&self) -> Option<(i64, &str)> {
        let message = self.message.as_ref()?;
        let text = message.text.as_deref()?;
        let chat = message.chat.as_ref()?;
        Some((chat.id, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_chat_and_text() {
        let update = Update::from_slice(br#"{"message": {"chat": {"id": 42}, "text": "/start"}}"#);
        assert_eq!(update.chat_text(), Some((42, "/start")));
    }

    #[test]
    fn message_without_text_yields_nothing() {
        let update = Update::from_slice(br#"{"update_id": 7, "message": {"chat": {"id": 42}}}"#);
        assert_eq!(update.update_id, Some(7));
        assert_eq!(update.chat_text(), None);
    }

    #[test]
    fn unrelated_updates_and_garbage_yield_nothing() {
        assert_eq!(Update::from_slice(br#"{"edited_message": {}}"#).chat_text(), None);
        assert_eq!(Update::from_slice(b"not json").chat_text(), None);
        assert_eq!(Update::from_slice(b"").chat_text(), None);
    }
}
