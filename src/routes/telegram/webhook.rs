use crate::connectors::{AssistantConnector, MessagingConnector};
use crate::forms::Update;
use crate::services::relay;
use actix_web::{http::header::ContentType, route, web, HttpResponse};
use std::sync::Arc;

/// Receiver for updates pushed by the platform.
///
/// Always answers `200 ok`: anything else makes the platform redeliver the
/// same update. Relay failures are logged and otherwise dropped.
#[tracing::instrument(name = "Receive telegram update.", skip_all)]
#[route("/telegram", method = "GET", method = "POST")]
pub async fn webhook_handler(
    body: web::Bytes,
    assistant: web::Data<Arc<dyn AssistantConnector>>,
    messenger: web::Data<Arc<dyn MessagingConnector>>,
) -> HttpResponse {
    let update = Update::from_slice(&body);

    match relay(&update, assistant.get_ref().as_ref(), messenger.get_ref().as_ref()).await {
        Ok(outcome) => tracing::info!(?outcome, "Webhook update handled"),
        Err(err) => tracing::error!(
            error = %err,
            update_id = ?update.update_id,
            "Failed to relay webhook update"
        ),
    }

    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("ok")
}
