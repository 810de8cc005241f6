//! `fieldfmt format`

use anyhow::{Context, Result};
use clap::Args;

use super::resolve_column;
use crate::config::Settings;
use crate::format::{FieldValue, FormatService, ValueItem};

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Configured column whose rules apply
    #[arg(long)]
    pub column: Option<String>,

    /// Display text overriding default formatting
    #[arg(long)]
    pub display: Option<String>,

    /// Read each value as JSON instead of inferring its type from text
    #[arg(long)]
    pub json: bool,

    /// Values to format
    #[arg(required = true)]
    pub values: Vec<String>,
}

pub fn handle_format_command(
    args: FormatArgs,
    settings: &Settings,
    service: &FormatService,
) -> Result<()> {
    let column = resolve_column(settings, args.column.as_deref())?;

    for raw in &args.values {
        let mut item = read_item(raw, args.json)?;
        if let Some(display) = &args.display {
            item.display = Some(display.clone());
        }
        log::debug!("Formatting {:?}", item);
        println!("{}", service.format_field_value(&item, column));
    }

    Ok(())
}

fn read_item(raw: &str, json: bool) -> Result<ValueItem> {
    if !json {
        return Ok(ValueItem::new(FieldValue::infer(raw)));
    }
    let value: serde_json::Value =
        serde_json::from_str(raw).with_context(|| format!("Invalid JSON value: {}", raw))?;
    Ok(ValueItem::from_json(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intl::IntlService;
    use std::sync::Arc;

    #[test]
    fn test_read_item_infers_types() -> Result<()> {
        assert_eq!(read_item("1024", false)?.value, FieldValue::Number(1024.0));
        assert_eq!(read_item("true", false)?.value, FieldValue::Boolean(true));
        assert_eq!(read_item("hello", false)?.value, FieldValue::from("hello"));
        Ok(())
    }

    #[test]
    fn test_read_item_json() -> Result<()> {
        let item = read_item(r#"{"value": "fr", "display": "French"}"#, true)?;
        assert_eq!(item.value, FieldValue::from("fr"));
        assert_eq!(item.display.as_deref(), Some("French"));

        let item = read_item(r#"["a", null, "b"]"#, true)?;
        assert!(matches!(item.value, FieldValue::Sequence(ref items) if items.len() == 3));

        assert!(read_item("{not json", true).is_err());
        Ok(())
    }

    #[test]
    fn test_unknown_column_is_error() {
        let settings = Settings::default();
        let service = FormatService::new(Arc::new(IntlService::builtin("en").unwrap()));
        let args = FormatArgs {
            column: Some("size".to_string()),
            display: None,
            json: false,
            values: vec!["1024".to_string()],
        };
        let err = handle_format_command(args, &settings, &service).unwrap_err();
        assert!(err.to_string().starts_with("Unknown column 'size'"));
    }
}
