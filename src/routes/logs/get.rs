use crate::db;
use crate::helpers::{AppError, Page, Views};
use actix_web::{route, web, HttpResponse};
use sqlx::SqlitePool;
use tera::Context;

#[tracing::instrument(name = "List user logs.", skip_all)]
#[route("/logs", method = "GET", method = "POST")]
pub async fn list_handler(
    pool: web::Data<SqlitePool>,
    views: web::Data<Views>,
) -> Result<HttpResponse, AppError> {
    let entries = db::user_log::list_all(pool.get_ref()).await?;
    for entry in &entries {
        tracing::info!(row = %entry.as_tuple(), "Log entry");
    }

    let mut context = Context::new();
    context.insert("r", &db::user_log::render_rows(&entries));
    views.render(Page::Logs, &context)
}
