pub mod telegram_relay;

pub use telegram_relay::{relay, RelayOutcome};
