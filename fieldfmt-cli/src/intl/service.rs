//! Table-backed localizer

use chrono::NaiveDateTime;

use super::template::{evaluate, parse_message};
use super::{Locale, LocaleError, Localizer, MESSAGE_PREFIX, MessageArgs, MessageTable, NumberFormat};

/// Localizer backed by a [`Locale`]
#[derive(Debug, Clone)]
pub struct IntlService {
    locale: Locale,
}

impl IntlService {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Service for an embedded locale
    pub fn builtin(name: &str) -> Result<Self, LocaleError> {
        Ok(Self::new(Locale::builtin(name)?))
    }

    /// Overlay additional messages; they win over existing entries
    pub fn with_messages(mut self, messages: MessageTable) -> Self {
        self.locale.messages.merge(messages);
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl Localizer for IntlService {
    fn format_message(&self, message: &str, args: &MessageArgs) -> String {
        if message.starts_with(MESSAGE_PREFIX) {
            match self.get_message(message) {
                Some(template) => self.format_text(template, args),
                None => {
                    log::debug!(
                        "Message '{}' not found in locale '{}'",
                        message,
                        self.locale.name
                    );
                    message.to_string()
                }
            }
        } else {
            self.format_text(message, args)
        }
    }

    fn get_message(&self, key: &str) -> Option<&str> {
        key.strip_prefix(MESSAGE_PREFIX)
            .and_then(|path| self.locale.messages.get(path))
    }

    fn format_text(&self, template: &str, args: &MessageArgs) -> String {
        // Nothing to substitute or unescape
        if !template.contains(['{', '\'']) {
            return template.to_string();
        }

        let parsed = match parse_message(template) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::debug!("Template '{}' is not a valid message: {}", template, e);
                return template.to_string();
            }
        };

        match evaluate(&parsed, args, &self.locale) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("Cannot format template '{}': {}", template, e);
                template.to_string()
            }
        }
    }

    fn format_number(&self, value: f64) -> String {
        self.locale.format_number(value, &NumberFormat::default())
    }

    fn format_date(&self, value: &NaiveDateTime) -> String {
        self.locale.format_date(value)
    }

    fn format_time(&self, value: &NaiveDateTime) -> String {
        self.locale.format_time(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn en() -> IntlService {
        IntlService::builtin("en").unwrap()
    }

    #[test]
    fn test_format_message_key() {
        let intl = en();
        assert_eq!(
            intl.format_message("msg#system.memorySize.kb", &MessageArgs::new().with("value", 1.5)),
            "1.5 KB"
        );
        assert_eq!(intl.format_message("msg#language.de", &MessageArgs::new()), "German");
    }

    #[test]
    fn test_missing_key_returned_verbatim() {
        let intl = en();
        assert_eq!(intl.format_message("msg#language.xx", &MessageArgs::new()), "msg#language.xx");
        assert_eq!(intl.get_message("msg#system.number"), None);
        assert_eq!(intl.get_message("system.memorySize.kb"), None);
    }

    #[test]
    fn test_plain_text_is_a_template() {
        let intl = en();
        let args = MessageArgs::new().with("value", 3.0);
        assert_eq!(intl.format_message("{value} items", &args), "3 items");
        assert_eq!(intl.format_message("plain text", &args), "plain text");
    }

    #[test]
    fn test_invalid_templates_degrade() {
        let intl = en();
        assert_eq!(intl.format_text("a {b", &MessageArgs::new()), "a {b");
        assert_eq!(intl.format_text("{missing}", &MessageArgs::new()), "{missing}");
    }

    #[test]
    fn test_with_messages_overlay() {
        let mut overlay = MessageTable::new();
        overlay.insert("system.memorySize.kb", "{value} kilo");
        overlay.insert("system.boolean", "{value, select, true {Yes} other {No}}");
        let intl = en().with_messages(overlay);

        assert_eq!(
            intl.format_message("msg#system.memorySize.kb", &MessageArgs::new().with("value", 2.0)),
            "2 kilo"
        );
        assert!(intl.get_message("msg#system.boolean").is_some());
        assert_eq!(intl.format_message("msg#language.fr", &MessageArgs::new()), "French");
    }

    #[test]
    fn test_locale_rendering() {
        let fr = IntlService::builtin("fr").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(9, 30, 0).unwrap();
        assert_eq!(fr.format_number(1234.5), "1\u{202f}234,5");
        assert_eq!(fr.format_date(&date), "05/01/2024");
        assert_eq!(fr.format_time(&date), "09:30:00");
        assert_eq!(
            fr.format_message("msg#system.memorySize.mb", &MessageArgs::new().with("value", 1.25)),
            "1,25 Mo"
        );
    }
}
