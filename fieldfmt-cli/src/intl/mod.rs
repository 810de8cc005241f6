//! Localization: message tables, message templates and locale-aware rendering
//!
//! The format service only depends on the [`Localizer`] trait; [`IntlService`]
//! is the table-backed implementation.

mod args;
mod locale;
pub mod number;
mod service;
pub mod template;

use chrono::NaiveDateTime;

pub use args::MessageArgs;
pub use locale::{BUILTIN_LOCALES, Locale, LocaleError, MessageTable};
pub use number::{NumberFormat, NumberStyle, NumberSymbols};
pub use service::IntlService;

/// Prefix marking a message key, e.g. `msg#system.memorySize.kb`
pub const MESSAGE_PREFIX: &str = "msg#";

/// Resolves messages and renders numbers and dates for one locale
pub trait Localizer: Send + Sync {
    /// Resolve `msg#` keys through the message table and format the result;
    /// any other text is formatted as a template itself
    fn format_message(&self, message: &str, args: &MessageArgs) -> String;

    /// Raw template for a `msg#` key, if defined
    fn get_message(&self, key: &str) -> Option<&str>;

    /// Format a template with arguments
    fn format_text(&self, template: &str, args: &MessageArgs) -> String;

    fn format_number(&self, value: f64) -> String;

    fn format_date(&self, value: &NaiveDateTime) -> String;

    fn format_time(&self, value: &NaiveDateTime) -> String;
}
