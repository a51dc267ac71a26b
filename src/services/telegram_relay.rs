//! Chat relay: answers messages pushed by the Telegram webhook.

use crate::connectors::{AssistantConnector, ConnectorError, MessagingConnector};
use crate::forms::Update;
use crate::helpers::markdown;

pub const START_COMMAND: &str = "/start";

pub const WELCOME_TEXT: &str =
    "Welcome to the Gemini Telegram Bot! You can ask me any finance-related questions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// No message text in the update; nothing was sent.
    Ignored,
    /// The start command was answered with the welcome text.
    Welcomed { chat_id: i64 },
    /// The text was forwarded to the assistant and the answer sent back.
    Answered { chat_id: i64 },
}

pub async fn relay(
    update: &Update,
    assistant: &dyn AssistantConnector,
    messenger: &dyn MessagingConnector,
) -> Result<RelayOutcome, ConnectorError> {
    let Some((chat_id, text)) = update.chat_text() else {
        return Ok(RelayOutcome::Ignored);
    };

    if text == START_COMMAND {
        messenger.send_message(chat_id, WELCOME_TEXT).await?;
        return Ok(RelayOutcome::Welcomed { chat_id });
    }

    let answer = assistant.ask(text).await?;
    // Sent as HTML markup with no parse mode set, so chat clients show the tags.
    let html = markdown::render(&answer);
    messenger.send_message(chat_id, &html).await?;

    Ok(RelayOutcome::Answered { chat_id })
}
