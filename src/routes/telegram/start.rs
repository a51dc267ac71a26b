use super::{running, START_FAILED};
use crate::configuration::Settings;
use crate::connectors::MessagingConnector;
use crate::helpers::{AppError, Page, Views};
use actix_web::{route, web, HttpResponse};
use std::sync::Arc;
use tera::Context;

#[tracing::instrument(name = "Start telegram bot.", skip_all)]
#[route("/start_telegram", method = "GET", method = "POST")]
pub async fn start_handler(
    messenger: web::Data<Arc<dyn MessagingConnector>>,
    settings: web::Data<Settings>,
    views: web::Data<Views>,
) -> Result<HttpResponse, AppError> {
    let status = if messenger.set_webhook().await? {
        running(&settings.connectors.telegram.bot_handle)
    } else {
        tracing::warn!("Platform refused the webhook registration");
        START_FAILED.to_string()
    };

    let mut context = Context::new();
    context.insert("status", &status);
    views.render(Page::Telegram, &context)
}
