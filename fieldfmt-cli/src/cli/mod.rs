//! Command-line front end

pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::format::FormatService;
use commands::{ColumnsArgs, FormatArgs, ParseArgs};

#[derive(Parser)]
#[command(name = "fieldfmt")]
#[command(about = "Format and parse search result field values", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: <config dir>/fieldfmt/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Locale, overrides the configured one
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format values for display
    Format(FormatArgs),
    /// Parse entered values
    Parse(ParseArgs),
    /// List configured columns
    Columns(ColumnsArgs),
}

/// Load settings and run the selected command
pub fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }

    let intl = settings.build_intl()?;
    let service = FormatService::new(Arc::new(intl));

    match cli.command {
        Commands::Format(args) => commands::handle_format_command(args, &settings, &service),
        Commands::Parse(args) => commands::handle_parse_command(args, &settings, &service),
        Commands::Columns(args) => commands::handle_columns_command(args, &settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_format_command() {
        let cli = Cli::try_parse_from([
            "fieldfmt", "format", "--column", "size", "--locale", "fr", "1024", "2048",
        ])
        .unwrap();
        assert_eq!(cli.locale.as_deref(), Some("fr"));
        let Commands::Format(args) = cli.command else {
            panic!("expected format command");
        };
        assert_eq!(args.column.as_deref(), Some("size"));
        assert_eq!(args.values, vec!["1024", "2048"]);
        assert!(!args.json);
    }

    #[test]
    fn test_parse_requires_parser_or_column() {
        assert!(Cli::try_parse_from(["fieldfmt", "parse", "10 KB"]).is_err());
        assert!(Cli::try_parse_from(["fieldfmt", "parse", "--parser", "memorysize", "10 KB"]).is_ok());
        assert!(Cli::try_parse_from(["fieldfmt", "parse", "--column", "size", "10 KB"]).is_ok());
        assert!(
            Cli::try_parse_from([
                "fieldfmt", "parse", "--parser", "memorysize", "--column", "size", "10 KB"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_format_requires_values() {
        assert!(Cli::try_parse_from(["fieldfmt", "format"]).is_err());
    }
}
