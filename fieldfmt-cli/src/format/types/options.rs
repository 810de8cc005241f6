//! Override hooks for each formatting stage
//!
//! Every hook returns `Some(text)` to replace the default behavior of its
//! stage, or `None` to let the default run.

use std::sync::Arc;

use super::{ColumnMetadata, FieldValue, ValueItem};

/// Hook for [`FormatService::format_value`](crate::format::FormatService::format_value):
/// receives the value, its display text (empty if none) and the column
pub type FormatValueFn =
    dyn Fn(&FieldValue, &str, Option<&ColumnMetadata>) -> Option<String> + Send + Sync;

/// Hook called once per transform name: receives the name, the current text and the column
pub type TransformValueFn =
    dyn Fn(&str, &str, Option<&ColumnMetadata>) -> Option<String> + Send + Sync;

/// Hook replacing the whole format-then-transform pipeline
pub type FormatFieldValueFn =
    dyn Fn(&ValueItem, Option<&ColumnMetadata>) -> Option<String> + Send + Sync;

/// Hook for parsers: receives the entered text and the parser name
pub type ParseValueFn = dyn Fn(&str, &str) -> Option<String> + Send + Sync;

/// Optional overrides for the format service
#[derive(Clone, Default)]
pub struct FormatOptions {
    format_value: Option<Arc<FormatValueFn>>,
    transform_value: Option<Arc<TransformValueFn>>,
    format_field_value: Option<Arc<FormatFieldValueFn>>,
    parse_value: Option<Arc<ParseValueFn>>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_format_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&FieldValue, &str, Option<&ColumnMetadata>) -> Option<String> + Send + Sync + 'static,
    {
        self.format_value = Some(Arc::new(f));
        self
    }

    pub fn on_transform_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str, Option<&ColumnMetadata>) -> Option<String> + Send + Sync + 'static,
    {
        self.transform_value = Some(Arc::new(f));
        self
    }

    pub fn on_format_field_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&ValueItem, Option<&ColumnMetadata>) -> Option<String> + Send + Sync + 'static,
    {
        self.format_field_value = Some(Arc::new(f));
        self
    }

    pub fn on_parse_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> Option<String> + Send + Sync + 'static,
    {
        self.parse_value = Some(Arc::new(f));
        self
    }

    pub(crate) fn format_value(
        &self,
        value: &FieldValue,
        display: &str,
        column: Option<&ColumnMetadata>,
    ) -> Option<String> {
        self.format_value
            .as_ref()
            .and_then(|f| f(value, display, column))
    }

    pub(crate) fn transform_value(
        &self,
        transform: &str,
        value: &str,
        column: Option<&ColumnMetadata>,
    ) -> Option<String> {
        self.transform_value
            .as_ref()
            .and_then(|f| f(transform, value, column))
    }

    pub(crate) fn format_field_value(
        &self,
        item: &ValueItem,
        column: Option<&ColumnMetadata>,
    ) -> Option<String> {
        self.format_field_value
            .as_ref()
            .and_then(|f| f(item, column))
    }

    pub(crate) fn parse_value(&self, value: &str, parser: &str) -> Option<String> {
        self.parse_value.as_ref().and_then(|f| f(value, parser))
    }
}

impl std::fmt::Debug for FormatOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatOptions")
            .field("format_value", &self.format_value.is_some())
            .field("transform_value", &self.transform_value.is_some())
            .field("format_field_value", &self.format_field_value.is_some())
            .field("parse_value", &self.parse_value.is_some())
            .finish()
    }
}
