//! `fieldfmt columns`

use anyhow::Result;
use clap::Args;
use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::config::Settings;
use crate::format::ColumnMetadata;

const HEADERS: [&str; 5] = ["NAME", "TYPE", "FORMATTER", "TRANSFORMS", "PARSER"];

#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

pub fn handle_columns_command(args: ColumnsArgs, settings: &Settings) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    if settings.columns.is_empty() {
        println!("{}", "No columns configured".dimmed());
        return Ok(());
    }

    let rows: Vec<[String; 5]> = settings.columns.values().map(column_row).collect();
    let widths = column_widths(&rows);

    let header = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.trim_end().bold());

    for row in &rows {
        let line = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| pad(cell, *w))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }

    Ok(())
}

fn column_row(column: &ColumnMetadata) -> [String; 5] {
    let or_dash = |s: Option<&str>| s.filter(|s| !s.is_empty()).unwrap_or("-").to_string();
    [
        column.name.clone(),
        column.column_type.label().to_string(),
        or_dash(column.formatter.as_deref()),
        or_dash(column.transforms.as_deref()),
        or_dash(column.parser.as_deref()),
    ]
}

fn column_widths(rows: &[[String; 5]]) -> [usize; 5] {
    let mut widths = HEADERS.map(|h| h.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

/// Pad to a display width; `format!` padding counts chars, not columns
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ColumnType;

    #[test]
    fn test_handle_columns() -> Result<()> {
        let args = || ColumnsArgs { no_color: true };
        handle_columns_command(args(), &Settings::default())?;

        let settings = Settings::from_toml_str("[columns.size]\ntype = \"number\"\nformatter = \"memorysize\"\n")?;
        handle_columns_command(args(), &settings)?;
        Ok(())
    }

    #[test]
    fn test_pad_wide_chars() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("日本", 6), "日本  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_column_rows() {
        let column = ColumnMetadata::new("size", ColumnType::Number).with_formatter("memorysize");
        let row = column_row(&column);
        assert_eq!(row, ["size", "number", "memorysize", "-", "-"].map(String::from));

        let widths = column_widths(&[row]);
        assert_eq!(widths, [4, 6, 10, 10, 6]);
    }
}
