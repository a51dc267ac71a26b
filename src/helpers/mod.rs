mod error;
pub mod markdown;
mod view;

pub use error::AppError;
pub use view::{Page, Views};
