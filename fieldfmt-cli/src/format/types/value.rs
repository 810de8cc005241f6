//! Field value representation for formatting

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::format::dates;

static NUMBER_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("number shape pattern is valid")
});

/// A value extracted from a record field
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Missing value
    #[default]
    Null,
    /// Text value
    String(String),
    /// Numeric value (integers are stored as floats)
    Number(f64),
    /// Boolean value
    Boolean(bool),
    /// Date and time, without timezone
    Date(NaiveDateTime),
    /// Multi-valued field, each entry may carry its own display text
    Sequence(Vec<ValueItem>),
}

/// A field value with an optional display text that overrides standard formatting
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueItem {
    pub value: FieldValue,
    pub display: Option<String>,
}

impl ValueItem {
    /// Create an item without display text
    pub fn new(value: impl Into<FieldValue>) -> Self {
        ValueItem {
            value: value.into(),
            display: None,
        }
    }

    /// Create an item with display text
    pub fn with_display(value: impl Into<FieldValue>, display: impl Into<String>) -> Self {
        ValueItem {
            value: value.into(),
            display: Some(display.into()),
        }
    }

    /// Parse from JSON: `{"value": .., "display": ..}` objects keep their display
    pub fn from_json(json: &serde_json::Value) -> Self {
        if let serde_json::Value::Object(map) = json {
            if let Some(value) = map.get("value") {
                return ValueItem {
                    value: FieldValue::from_json(value),
                    display: map
                        .get("display")
                        .and_then(|d| d.as_str())
                        .map(|d| d.to_string()),
                };
            }
        }
        ValueItem::new(FieldValue::from_json(json))
    }
}

impl FieldValue {
    /// Build a sequence from anything convertible into items
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ValueItem>,
    {
        FieldValue::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Falsy values are null, empty text, zero, NaN and `false`
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::String(s) => !s.is_empty(),
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Boolean(b) => *b,
            FieldValue::Date(_) | FieldValue::Sequence(_) => true,
        }
    }

    /// Unformatted text of the value
    ///
    /// Dates use the system date string, sequences join their raw values with `;`.
    pub fn to_raw_string(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::String(s) => s.clone(),
            FieldValue::Number(n) => number_text(*n),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Date(d) => dates::to_sys_date_str(d),
            FieldValue::Sequence(items) => items
                .iter()
                .map(|item| item.value.to_raw_string())
                .collect::<Vec<_>>()
                .join(";"),
        }
    }

    /// Infer a typed value from user-entered text
    pub fn infer(s: &str) -> Self {
        let s = s.trim();

        if s.is_empty() {
            return FieldValue::Null;
        }

        match s.to_lowercase().as_str() {
            "true" => return FieldValue::Boolean(true),
            "false" => return FieldValue::Boolean(false),
            _ => {}
        }

        if NUMBER_SHAPE.is_match(s) {
            if let Ok(n) = s.parse::<f64>() {
                return FieldValue::Number(n);
            }
        }

        if let Some(date) = dates::parse_date_str(s) {
            return FieldValue::Date(date);
        }

        FieldValue::String(s.to_string())
    }

    /// Parse from JSON value
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Boolean(*b),
            serde_json::Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or_default(),
            serde_json::Value::String(s) => match dates::parse_date_str(s) {
                Some(date) => FieldValue::Date(date),
                None => FieldValue::String(s.clone()),
            },
            serde_json::Value::Array(items) => {
                FieldValue::Sequence(items.iter().map(ValueItem::from_json).collect())
            }
            // Objects only make sense as sequence items
            serde_json::Value::Object(_) => FieldValue::String(json.to_string()),
        }
    }
}

/// Render a number the way it is written in source data: no trailing `.0` on integers
pub fn number_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // Also covers negative zero
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_raw_string())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(d: NaiveDateTime) -> Self {
        FieldValue::Date(d)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<FieldValue> for ValueItem {
    fn from(value: FieldValue) -> Self {
        ValueItem::new(value)
    }
}

impl From<&str> for ValueItem {
    fn from(s: &str) -> Self {
        ValueItem::new(s)
    }
}

impl From<f64> for ValueItem {
    fn from(n: f64) -> Self {
        ValueItem::new(n)
    }
}

impl From<bool> for ValueItem {
    fn from(b: bool) -> Self {
        ValueItem::new(b)
    }
}

impl From<NaiveDateTime> for ValueItem {
    fn from(d: NaiveDateTime) -> Self {
        ValueItem::new(d)
    }
}

impl From<Option<&str>> for ValueItem {
    fn from(s: Option<&str>) -> Self {
        ValueItem::new(s)
    }
}
