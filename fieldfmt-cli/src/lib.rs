//! Locale-aware formatting and parsing of search result field values

pub mod cli;
pub mod config;
pub mod format;
pub mod intl;

pub use format::{ColumnMetadata, ColumnType, FieldValue, FormatOptions, FormatService, ValueItem};
pub use intl::{IntlService, Localizer};
