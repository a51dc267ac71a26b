use crate::forms::{self, NameForm};
use crate::helpers::{AppError, Page, Views};
use actix_web::{route, web, HttpResponse};
use tera::Context;

#[tracing::instrument(name = "Show chat entry page.", skip(views))]
#[route("/gemini", method = "GET", method = "POST")]
pub async fn page_handler(
    form: Result<web::Form<NameForm>, actix_web::Error>,
    views: web::Data<Views>,
) -> Result<HttpResponse, AppError> {
    let form = forms::or_empty(form)?;

    let mut context = Context::new();
    context.insert("name", &form.name);
    views.render(Page::Gemini, &context)
}
