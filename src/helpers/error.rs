use crate::connectors::ConnectorError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Failures a page handler can run into. None of them is recovered from:
/// a rejected form body keeps its own status, everything else is a plain 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("template error: {0:?}")]
    Template(#[from] tera::Error),
    #[error(transparent)]
    Upstream(#[from] ConnectorError),
    #[error("form body rejected: {0}")]
    Form(actix_web::Error),
}

impl From<actix_web::Error> for AppError {
    fn from(err: actix_web::Error) -> Self {
        AppError::Form(err)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Form(err) => err.as_response_error().status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Form(err) = self {
            tracing::warn!(error = %err, "Form body rejected");
            return err.error_response();
        }
        tracing::error!(error = %self, "Request failed");
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body("Internal Server Error")
    }
}
