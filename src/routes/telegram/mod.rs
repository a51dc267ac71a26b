mod page;
mod start;
mod stop;
mod webhook;

pub use page::*;
pub use start::*;
pub use stop::*;
pub use webhook::*;

pub(crate) const NOT_RUNNING: &str =
    "The telegram bot is not running. Click the button below to start it.";
pub(crate) const START_FAILED: &str = "Failed to start the telegram bot. Please check the logs.";
pub(crate) const STOPPED: &str = "The telegram bot is stopped.";
pub(crate) const STOP_FAILED: &str = "Unable to stop telegram. Please check the logs.";

pub(crate) fn running(bot_handle: &str) -> String {
    format!(
        "The telegram bot is running. Please check with the telegram bot. {}",
        bot_handle
    )
}
