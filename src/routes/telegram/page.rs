use super::NOT_RUNNING;
use crate::connectors::MessagingConnector;
use crate::helpers::{AppError, Page, Views};
use actix_web::{route, web, HttpResponse};
use std::sync::Arc;
use tera::Context;

/// Opening the status page always deregisters the webhook first, dropping any
/// updates still queued on the platform.
#[tracing::instrument(name = "Show telegram page.", skip_all)]
#[route("/telegram_page", method = "GET", method = "POST")]
pub async fn page_handler(
    messenger: web::Data<Arc<dyn MessagingConnector>>,
    views: web::Data<Views>,
) -> Result<HttpResponse, AppError> {
    let acknowledged = messenger.delete_webhook(true).await?;
    tracing::debug!(acknowledged, "Webhook reset");

    let mut context = Context::new();
    context.insert("status", NOT_RUNNING);
    views.render(Page::Telegram, &context)
}
