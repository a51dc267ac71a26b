use crate::helpers::{AppError, Page, Views};
use actix_web::{route, web, HttpResponse};

/// Landing page.
#[tracing::instrument(name = "Show landing page.", skip_all)]
#[route("/", method = "GET", method = "POST")]
pub async fn index_handler(views: web::Data<Views>) -> Result<HttpResponse, AppError> {
    views.page(Page::Index)
}

/// Leaves the menu; there is no session to close.
#[tracing::instrument(name = "Checkout.", skip_all)]
#[route("/checkout", method = "GET", method = "POST")]
pub async fn checkout_handler(views: web::Data<Views>) -> Result<HttpResponse, AppError> {
    views.page(Page::Index)
}

/// Back to the main menu without recording anything.
#[tracing::instrument(name = "Show main menu.", skip_all)]
#[route("/home", method = "GET", method = "POST")]
pub async fn home_handler(views: web::Data<Views>) -> Result<HttpResponse, AppError> {
    views.page(Page::Main)
}

#[tracing::instrument(name = "Show payment page.", skip_all)]
#[route("/paynow", method = "GET", method = "POST")]
pub async fn paynow_handler(views: web::Data<Views>) -> Result<HttpResponse, AppError> {
    views.page(Page::PayNow)
}
