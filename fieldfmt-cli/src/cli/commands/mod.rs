//! Command handlers

mod columns;
mod format;
mod parse;

pub use columns::{ColumnsArgs, handle_columns_command};
pub use format::{FormatArgs, handle_format_command};
pub use parse::{ParseArgs, handle_parse_command};

use anyhow::Result;

use crate::config::Settings;
use crate::format::ColumnMetadata;

/// Look up a column named on the command line
fn resolve_column<'a>(settings: &'a Settings, name: Option<&str>) -> Result<Option<&'a ColumnMetadata>> {
    match name {
        None => Ok(None),
        Some(name) => match settings.column(name) {
            Some(column) => Ok(Some(column)),
            None => anyhow::bail!(
                "Unknown column '{}'. Use 'fieldfmt columns' to list configured columns.",
                name
            ),
        },
    }
}
