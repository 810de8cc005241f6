//! Format service - formats, transforms and parses field values
//!
//! `format_field_value` is the standard entry point: it runs `format_value`
//! and then `transform_value`. Each stage can be overridden through
//! [`FormatOptions`].

use std::sync::Arc;

use chrono::NaiveDateTime;

use super::case::CaseTransform;
use super::size::{self, MemoryUnit};
use super::{ColumnMetadata, FieldValue, FormatOptions, ValueItem, dates, number_text};
use crate::intl::{Localizer, MessageArgs};

const SYSTEM_NUMBER: &str = "msg#system.number";
const SYSTEM_DATE: &str = "msg#system.date";
const SYSTEM_BOOLEAN: &str = "msg#system.boolean";

/// Placeholder for falsy entries of a multi-valued field
pub const NULL_PLACEHOLDER: &str = "<null>";

/// Locale-sensitive formatting and parsing of field values
#[derive(Clone)]
pub struct FormatService {
    intl: Arc<dyn Localizer>,
    options: FormatOptions,
}

impl FormatService {
    pub fn new(intl: Arc<dyn Localizer>) -> Self {
        Self::with_options(intl, FormatOptions::default())
    }

    pub fn with_options(intl: Arc<dyn Localizer>, options: FormatOptions) -> Self {
        Self { intl, options }
    }

    /// Display name of a language code (`en`, `fr`, ...)
    pub fn format_language(&self, value: &FieldValue) -> String {
        let key = format!("msg#language.{}", value.to_raw_string().to_lowercase());
        self.intl.format_message(&key, &MessageArgs::new())
    }

    /// Display a size in bytes using the largest fitting unit
    pub fn format_memory_size(&self, size: f64) -> String {
        let (unit, scaled) = size::memory_size_unit(size);
        self.intl
            .format_message(unit.message_key(), &MessageArgs::new().with("value", scaled))
    }

    /// Unit and scaled value `format_memory_size` would display
    pub fn memory_size_unit(&self, size: f64) -> (MemoryUnit, f64) {
        size::memory_size_unit(size)
    }

    /// Format a value for display according to its column
    ///
    /// The column formatter (`language`, `memorysize`) runs first, then the
    /// item's display text, then default formatting by value type.
    pub fn format_value(&self, item: &ValueItem, column: Option<&ColumnMetadata>) -> String {
        let value = &item.value;
        let display = item.display.as_deref().unwrap_or("");

        if let Some(ret) = self.options.format_value(value, display, column) {
            return ret;
        }

        if let Some(formatter) = column.and_then(|c| c.formatter.as_deref()) {
            log::trace!("Formatting '{}' with formatter '{}'", value, formatter);
            match formatter.to_lowercase().as_str() {
                "language" => return self.format_language(value),
                "memorysize" => {
                    if let FieldValue::Number(size) = value {
                        return self.format_memory_size(*size);
                    }
                }
                other => log::debug!("Unknown formatter '{}', using default formatting", other),
            }
        }

        if !display.is_empty() {
            let display = match dates::parse_date_str(display) {
                Some(date) => dates::to_sys_date_str(&date),
                None => display.to_string(),
            };
            return self
                .intl
                .format_message(&display, &MessageArgs::new().with("value", value.clone()));
        }

        match value {
            FieldValue::Null => String::new(),
            FieldValue::Number(n) => self.format_number(*n),
            FieldValue::Date(date) => self.format_date(date, column),
            FieldValue::Boolean(b) => self.format_boolean(*b),
            FieldValue::Sequence(items) => self.resolve_text(&join_sequence(items)),
            FieldValue::String(s) => self.resolve_text(s),
        }
    }

    fn format_number(&self, value: f64) -> String {
        match self.intl.get_message(SYSTEM_NUMBER) {
            Some(message) => self
                .intl
                .format_text(message, &MessageArgs::new().with("value", value)),
            None => self.intl.format_number(value),
        }
    }

    fn format_date(&self, date: &NaiveDateTime, column: Option<&ColumnMetadata>) -> String {
        match column {
            Some(column) if !column.is_date() => self.resolve_text(&dates::to_sys_date_str(date)),
            Some(column) if column.is_date_only() => self.intl.format_date(date),
            _ => {
                let time = dates::time_of_day_ms(date);
                if let Some(message) = self.intl.get_message(SYSTEM_DATE) {
                    let args = MessageArgs::new()
                        .with("date", *date)
                        .with("time", time as f64);
                    return self.intl.format_text(message, &args);
                }
                let mut s = self.intl.format_date(date);
                if time != 0 {
                    s.push_str(", ");
                    s.push_str(&self.intl.format_time(date));
                }
                s
            }
        }
    }

    fn format_boolean(&self, value: bool) -> String {
        match self.intl.get_message(SYSTEM_BOOLEAN) {
            Some(message) => self
                .intl
                .format_text(message, &MessageArgs::new().with("value", value)),
            None => value.to_string(),
        }
    }

    /// Empty text passes through without a localization lookup
    fn resolve_text(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.intl.format_message(text, &MessageArgs::new())
    }

    /// Apply the column's transform chain to a display value
    ///
    /// Transforms run left to right, each one receiving the previous output.
    /// Unknown names leave the value unchanged.
    pub fn transform_value(&self, value: &str, column: Option<&ColumnMetadata>) -> String {
        let Some(column) = column else {
            return value.to_string();
        };

        let mut value = value.to_string();
        for transform in column.transform_names() {
            if let Some(ret) = self.options.transform_value(transform, &value, Some(column)) {
                value = ret;
                continue;
            }
            match CaseTransform::from_name(transform) {
                Some(case) => value = case.apply(&value),
                None => log::debug!("Unknown transform '{}' on column '{}'", transform, column.name),
            }
        }
        value
    }

    /// Format then transform a value; the standard entry point
    pub fn format_field_value(&self, item: &ValueItem, column: Option<&ColumnMetadata>) -> String {
        if let Some(ret) = self.options.format_field_value(item, column) {
            return ret;
        }
        let formatted = self.format_value(item, column);
        self.transform_value(&formatted, column)
    }

    /// Parse an entered value with the named parser
    ///
    /// Only text is parsed; other values, unknown parsers and an empty parser
    /// name return the value unchanged. Parsed values are returned as text.
    pub fn parse_value(&self, value: &FieldValue, parser: &str) -> FieldValue {
        match value {
            FieldValue::String(text) if !parser.is_empty() => self
                .parse_string(text, parser)
                .map(FieldValue::String)
                .unwrap_or_else(|| value.clone()),
            _ => value.clone(),
        }
    }

    /// Text-in, text-out form of [`parse_value`](Self::parse_value)
    pub fn parse_text(&self, text: &str, parser: &str) -> String {
        if parser.is_empty() {
            return text.to_string();
        }
        self.parse_string(text, parser)
            .unwrap_or_else(|| text.to_string())
    }

    fn parse_string(&self, text: &str, parser: &str) -> Option<String> {
        if let Some(ret) = self.options.parse_value(text, parser) {
            return Some(ret);
        }
        match parser.to_lowercase().as_str() {
            "memorysize" => Some(number_text(self.parse_memory_size(text, 0.0))),
            other => {
                log::debug!("Unknown parser '{}', keeping value as entered", other);
                None
            }
        }
    }

    /// Parse a size such as `10 KB` into bytes, `default` when unparseable
    pub fn parse_memory_size(&self, text: &str, default: f64) -> f64 {
        size::parse_memory_size(text, default)
    }
}

impl std::fmt::Debug for FormatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatService")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Join a multi-valued field with `;`
///
/// Entries render as their display text, else their raw value when truthy,
/// else the null placeholder.
fn join_sequence(items: &[ValueItem]) -> String {
    let mut joined = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            joined.push(';');
        }
        match item.display.as_deref().filter(|d| !d.is_empty()) {
            Some(display) => joined.push_str(display),
            None if item.value.is_truthy() => joined.push_str(&item.value.to_raw_string()),
            None => joined.push_str(NULL_PLACEHOLDER),
        }
    }
    joined
}
