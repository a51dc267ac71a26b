use crate::connectors::AssistantConnector;
use crate::forms::{self, QuestionForm};
use crate::helpers::{markdown, AppError, Page, Views};
use actix_web::{route, web, HttpResponse};
use std::sync::Arc;
use tera::Context;

/// Asks the assistant and shows its answer rendered as HTML.
#[tracing::instrument(name = "Answer question.", skip(assistant, views))]
#[route("/gemini_reply", method = "GET", method = "POST")]
pub async fn reply_handler(
    form: Result<web::Form<QuestionForm>, actix_web::Error>,
    assistant: web::Data<Arc<dyn AssistantConnector>>,
    views: web::Data<Views>,
) -> Result<HttpResponse, AppError> {
    let form = forms::or_empty(form)?;

    let answer = assistant.ask(form.question()).await?;
    let html = markdown::render(&answer);

    let mut context = Context::new();
    context.insert("r", &html);
    views.render(Page::GeminiReply, &context)
}
