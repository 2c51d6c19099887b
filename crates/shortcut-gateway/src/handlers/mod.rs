mod health;
mod url;

pub use health::health_handler;
pub use url::{create_url_handler, lookup_url_handler};
