//! `fieldfmt parse`

use anyhow::Result;
use clap::Args;

use super::resolve_column;
use crate::config::Settings;
use crate::format::{FieldValue, FormatService};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Parser to run, e.g. `memorysize`
    #[arg(long, required_unless_present = "column", conflicts_with = "column")]
    pub parser: Option<String>,

    /// Use the parser configured for this column
    #[arg(long)]
    pub column: Option<String>,

    /// Entered values to parse
    #[arg(required = true)]
    pub values: Vec<String>,
}

pub fn handle_parse_command(
    args: ParseArgs,
    settings: &Settings,
    service: &FormatService,
) -> Result<()> {
    let parser = match &args.parser {
        Some(parser) => parser.clone(),
        None => {
            let column = resolve_column(settings, args.column.as_deref())?;
            match column.and_then(|c| c.parser.clone()) {
                Some(parser) => parser,
                None => anyhow::bail!(
                    "Column '{}' has no parser configured",
                    args.column.as_deref().unwrap_or_default()
                ),
            }
        }
    };

    for raw in &args.values {
        let parsed = service.parse_value(&FieldValue::from(raw.as_str()), &parser);
        println!("{}", parsed.to_raw_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intl::IntlService;
    use std::sync::Arc;

    fn setup() -> (Settings, FormatService) {
        let settings = Settings::from_toml_str(
            "[columns.size]\nparser = \"memorysize\"\n\n[columns.title]\ntransforms = \"startcase\"\n",
        )
        .unwrap();
        let service = FormatService::new(Arc::new(IntlService::builtin("en").unwrap()));
        (settings, service)
    }

    fn args(parser: Option<&str>, column: Option<&str>) -> ParseArgs {
        ParseArgs {
            parser: parser.map(String::from),
            column: column.map(String::from),
            values: vec!["10 KB".to_string()],
        }
    }

    #[test]
    fn test_parse_with_column_parser() {
        let (settings, service) = setup();
        assert!(handle_parse_command(args(None, Some("size")), &settings, &service).is_ok());
        assert!(handle_parse_command(args(Some("memorysize"), None), &settings, &service).is_ok());
    }

    #[test]
    fn test_column_without_parser_is_error() {
        let (settings, service) = setup();
        let err = handle_parse_command(args(None, Some("title")), &settings, &service).unwrap_err();
        assert_eq!(err.to_string(), "Column 'title' has no parser configured");
    }

    #[test]
    fn test_unknown_column_is_error() {
        let (settings, service) = setup();
        let err = handle_parse_command(args(None, Some("bogus")), &settings, &service).unwrap_err();
        assert!(err.to_string().starts_with("Unknown column 'bogus'"));
    }
}
