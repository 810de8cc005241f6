//! User configuration: locale, extra messages and column metadata

mod settings;

pub use settings::{APP_NAME, CONFIG_FILE, Settings};
