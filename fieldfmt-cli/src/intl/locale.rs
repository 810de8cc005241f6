//! Locale data: number symbols, date patterns and message tables

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::number::{NumberFormat, NumberSymbols, format_number};

const EN: &str = include_str!("locales/en.toml");
const FR: &str = include_str!("locales/fr.toml");

/// Error when loading locale data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// No built-in locale with this name
    UnknownLocale(String),
    /// Locale or message file is not valid TOML
    Parse(String),
    /// A message entry is neither a string nor a table
    InvalidMessage { key: String },
}

impl std::fmt::Display for LocaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocaleError::UnknownLocale(name) => {
                write!(f, "unknown locale '{}' (available: {})", name, BUILTIN_LOCALES.join(", "))
            }
            LocaleError::Parse(message) => write!(f, "invalid locale data: {}", message),
            LocaleError::InvalidMessage { key } => {
                write!(f, "message '{}' must be a string or a table", key)
            }
        }
    }
}

impl std::error::Error for LocaleError {}

/// Names of the embedded locales
pub const BUILTIN_LOCALES: &[&str] = &["en", "fr"];

/// Flattened message table, keyed by dotted path (`system.memorySize.kb`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTable {
    messages: HashMap<String, String>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a nested TOML table
    pub fn from_table(table: &toml::Table) -> Result<Self, LocaleError> {
        let mut messages = MessageTable::new();
        flatten_into(table, "", &mut messages.messages)?;
        Ok(messages)
    }

    /// Parse a message file
    pub fn from_toml_str(s: &str) -> Result<Self, LocaleError> {
        let table: toml::Table = toml::from_str(s).map_err(|e| LocaleError::Parse(e.to_string()))?;
        Self::from_table(&table)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(|s| s.as_str())
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Overlay another table; its entries win
    pub fn merge(&mut self, other: MessageTable) {
        self.messages.extend(other.messages);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn flatten_into(
    table: &toml::Table,
    prefix: &str,
    out: &mut HashMap<String, String>,
) -> Result<(), LocaleError> {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            toml::Value::String(s) => {
                out.insert(path, s.clone());
            }
            toml::Value::Table(nested) => flatten_into(nested, &path, out)?,
            _ => return Err(LocaleError::InvalidMessage { key: path }),
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct LocaleFile {
    locale: LocaleHeader,
    #[serde(default)]
    messages: toml::Table,
}

#[derive(Debug, Deserialize)]
struct LocaleHeader {
    name: String,
    date_format: String,
    time_format: String,
    #[serde(default)]
    number: NumberSymbols,
}

/// Everything needed to render values for one language
#[derive(Debug, Clone)]
pub struct Locale {
    pub name: String,
    pub number: NumberSymbols,
    /// chrono pattern for dates
    pub date_format: String,
    /// chrono pattern for times of day
    pub time_format: String,
    pub messages: MessageTable,
}

impl Locale {
    /// Load an embedded locale; region subtags are ignored (`en-US` -> `en`)
    pub fn builtin(name: &str) -> Result<Self, LocaleError> {
        let language = name
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_lowercase();
        match language.as_str() {
            "en" => Self::from_toml_str(EN),
            "fr" => Self::from_toml_str(FR),
            _ => Err(LocaleError::UnknownLocale(name.to_string())),
        }
    }

    /// Parse a locale file with a `[locale]` header and a `[messages]` table
    pub fn from_toml_str(s: &str) -> Result<Self, LocaleError> {
        let file: LocaleFile = toml::from_str(s).map_err(|e| LocaleError::Parse(e.to_string()))?;
        Ok(Locale {
            name: file.locale.name,
            number: file.locale.number,
            date_format: file.locale.date_format,
            time_format: file.locale.time_format,
            messages: MessageTable::from_table(&file.messages)?,
        })
    }

    pub fn format_number(&self, value: f64, format: &NumberFormat) -> String {
        format_number(value, format, &self.number)
    }

    pub fn format_date(&self, value: &NaiveDateTime) -> String {
        value.format(&self.date_format).to_string()
    }

    pub fn format_time(&self, value: &NaiveDateTime) -> String {
        value.format(&self.time_format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_builtin_locales() {
        let en = Locale::builtin("en").unwrap();
        assert_eq!(en.name, "en");
        assert_eq!(en.messages.get("system.memorySize.kb"), Some("{value, number, ::.##} KB"));
        assert_eq!(en.messages.get("language.fr"), Some("French"));

        let fr = Locale::builtin("fr-CA").unwrap();
        assert_eq!(fr.name, "fr");
        assert_eq!(fr.number.decimal, ",");
        assert_eq!(fr.messages.get("language.fr"), Some("français"));
    }

    #[test]
    fn test_unknown_locale() {
        let err = Locale::builtin("xx").unwrap_err();
        assert_eq!(err, LocaleError::UnknownLocale("xx".to_string()));
        assert!(err.to_string().contains("en, fr"));
    }

    #[test]
    fn test_message_table_merge() {
        let mut messages = MessageTable::from_toml_str(
            r#"
            [system]
            boolean = "{value}"
            [system.memorySize]
            kb = "{value} kilobytes"
            "#,
        )
        .unwrap();
        assert_eq!(messages.len(), 2);

        let mut overlay = MessageTable::new();
        overlay.insert("system.boolean", "{value, select, true {Yes} other {No}}");
        messages.merge(overlay);

        assert_eq!(
            messages.get("system.boolean"),
            Some("{value, select, true {Yes} other {No}}")
        );
        assert_eq!(messages.get("system.memorySize.kb"), Some("{value} kilobytes"));
    }

    #[test]
    fn test_invalid_message_entry() {
        let err = MessageTable::from_toml_str("[system]\nnumber = 3").unwrap_err();
        assert_eq!(
            err,
            LocaleError::InvalidMessage {
                key: "system.number".to_string()
            }
        );
        assert!(matches!(
            MessageTable::from_toml_str("not toml ="),
            Err(LocaleError::Parse(_))
        ));
    }

    #[test]
    fn test_date_patterns() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap();
        let en = Locale::builtin("en").unwrap();
        assert_eq!(en.format_date(&date), "1/5/2024");
        assert_eq!(en.format_time(&date), "3:04:05 PM");

        let fr = Locale::builtin("fr").unwrap();
        assert_eq!(fr.format_date(&date), "05/01/2024");
        assert_eq!(fr.format_time(&date), "15:04:05");
    }
}
