pub(crate) mod gemini;
pub mod health_checks;
pub(crate) mod logs;
pub(crate) mod pages;
pub(crate) mod telegram;
pub(crate) mod user;

pub use health_checks::*;
