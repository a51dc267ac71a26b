mod page;
mod reply;

pub use page::*;
pub use reply::*;
