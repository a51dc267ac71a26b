use crate::db;
use crate::helpers::{AppError, Page, Views};
use actix_web::{route, web, HttpResponse};
use sqlx::SqlitePool;

/// Wipes the whole log. No confirmation step.
#[tracing::instrument(name = "Delete user logs.", skip_all)]
#[route("/del_logs", method = "GET", method = "POST")]
pub async fn delete_handler(
    pool: web::Data<SqlitePool>,
    views: web::Data<Views>,
) -> Result<HttpResponse, AppError> {
    let deleted = db::user_log::clear_all(pool.get_ref()).await?;
    tracing::info!(deleted, "User logs cleared");

    views.page(Page::DeleteLogs)
}
