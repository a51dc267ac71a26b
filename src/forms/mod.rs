use actix_web::error::UrlencodedError;
use actix_web::web;

pub mod chat;
pub mod telegram;
pub mod user;

pub use chat::*;
pub use telegram::*;
pub use user::*;

/// Submitted page form, or an empty one when the body is absent or not a
/// urlencoded form. Bodies that could not be read in full are still an error.
pub fn or_empty<T: Default>(
    form: Result<web::Form<T>, actix_web::Error>,
) -> Result<T, actix_web::Error> {
    match form {
        Ok(form) => Ok(form.into_inner()),
        Err(err) => match err.as_error::<UrlencodedError>() {
            Some(UrlencodedError::Overflow { .. }) | Some(UrlencodedError::Payload(_)) => Err(err),
            _ => {
                tracing::debug!(error = %err, "No usable form body, reading fields as empty");
                Ok(T::default())
            }
        },
    }
}
