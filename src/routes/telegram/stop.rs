use super::{STOPPED, STOP_FAILED};
use crate::connectors::MessagingConnector;
use crate::helpers::{AppError, Page, Views};
use actix_web::{route, web, HttpResponse};
use std::sync::Arc;
use tera::Context;

#[tracing::instrument(name = "Stop telegram bot.", skip_all)]
#[route("/stop_telegram", method = "GET", method = "POST")]
pub async fn stop_handler(
    messenger: web::Data<Arc<dyn MessagingConnector>>,
    views: web::Data<Views>,
) -> Result<HttpResponse, AppError> {
    let status = if messenger.delete_webhook(false).await? {
        STOPPED
    } else {
        tracing::warn!("Platform refused to remove the webhook");
        STOP_FAILED
    };

    let mut context = Context::new();
    context.insert("status", status);
    views.render(Page::Telegram, &context)
}
