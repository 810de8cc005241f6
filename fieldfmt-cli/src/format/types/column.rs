//! Column metadata: type and display rules of a field

use serde::Deserialize;

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    String,
    Number,
    Boolean,
    /// Date without a meaningful time of day
    Date,
    DateTime,
    Time,
    /// Multi-valued text
    Csv,
}

impl ColumnType {
    /// Get display label for listings
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::DateTime => "datetime",
            ColumnType::Time => "time",
            ColumnType::Csv => "csv",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display rules of a field
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ColumnMetadata {
    /// Column name; filled from the table key when loaded from settings
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    /// Named formatter, e.g. `language` or `memorysize`
    #[serde(default)]
    pub formatter: Option<String>,
    /// Comma-separated transform chain, e.g. `uppercase,kebabcase`
    #[serde(default)]
    pub transforms: Option<String>,
    /// Named parser for entered values, e.g. `memorysize`
    #[serde(default)]
    pub parser: Option<String>,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        ColumnMetadata {
            name: name.into(),
            column_type,
            ..Default::default()
        }
    }

    pub fn with_formatter(mut self, formatter: impl Into<String>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }

    pub fn with_transforms(mut self, transforms: impl Into<String>) -> Self {
        self.transforms = Some(transforms.into());
        self
    }

    /// Date, date-time and time columns
    pub fn is_date(&self) -> bool {
        matches!(
            self.column_type,
            ColumnType::Date | ColumnType::DateTime | ColumnType::Time
        )
    }

    pub fn is_date_only(&self) -> bool {
        self.column_type == ColumnType::Date
    }

    /// Transform names in declaration order, trimmed, empty entries dropped
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_names() {
        let column = ColumnMetadata::new("title", ColumnType::String)
            .with_transforms(" uppercase, ,kebabcase ,");
        assert_eq!(column.transform_names(), vec!["uppercase", "kebabcase"]);

        let bare = ColumnMetadata::new("title", ColumnType::String);
        assert!(bare.transform_names().is_empty());
    }

    #[test]
    fn test_date_predicates() {
        assert!(ColumnMetadata::new("modified", ColumnType::DateTime).is_date());
        assert!(!ColumnMetadata::new("modified", ColumnType::DateTime).is_date_only());
        assert!(ColumnMetadata::new("day", ColumnType::Date).is_date_only());
        assert!(!ColumnMetadata::new("size", ColumnType::Number).is_date());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let column: ColumnMetadata = toml::from_str(
            r#"
            type = "number"
            formatter = "memorysize"
            parser = "memorysize"
            "#,
        )
        .unwrap();
        assert_eq!(column.column_type, ColumnType::Number);
        assert_eq!(column.formatter.as_deref(), Some("memorysize"));
        assert_eq!(column.transforms, None);
        assert_eq!(column.name, "");
    }
}
