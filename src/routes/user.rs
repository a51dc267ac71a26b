use crate::db;
use crate::forms::{self, NameForm};
use crate::helpers::{AppError, Page, Views};
use actix_web::{route, web, HttpResponse};
use chrono::Utc;
use sqlx::SqlitePool;

/// Records the visitor and opens the main menu. An empty name sends the
/// visitor back to the landing page and records nothing.
#[tracing::instrument(name = "Enter main menu.", skip(pool, views))]
#[route("/main", method = "GET", method = "POST")]
pub async fn main_handler(
    form: Result<web::Form<NameForm>, actix_web::Error>,
    pool: web::Data<SqlitePool>,
    views: web::Data<Views>,
) -> Result<HttpResponse, AppError> {
    let form = forms::or_empty(form)?;
    let name = form.name();
    if name.is_empty() {
        return views.page(Page::Index);
    }

    tracing::info!(name, "Visitor signed in");
    db::user_log::record(pool.get_ref(), name, Utc::now()).await?;

    views.page(Page::Main)
}
