use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::format::ColumnMetadata;
use crate::intl::{IntlService, MessageTable};

pub const APP_NAME: &str = "fieldfmt";
pub const CONFIG_FILE: &str = "config.toml";

/// Settings read from `config.toml`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Built-in locale the messages are layered on
    pub locale: String,
    /// Extra message tables, relative paths resolve against the config file
    pub message_files: Vec<PathBuf>,
    /// Inline messages, merged last
    pub messages: toml::Table,
    /// Column metadata keyed by column name
    pub columns: BTreeMap<String, ColumnMetadata>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            message_files: Vec::new(),
            messages: toml::Table::new(),
            columns: BTreeMap::new(),
            base_dir: None,
        }
    }
}

impl Settings {
    /// Default config file path (`~/.config/fieldfmt/config.toml` on Linux)
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Load settings from `path`, or from the default location
    ///
    /// A missing default file yields default settings; a missing explicit
    /// path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    log::debug!("No config at {}, using defaults", path.display());
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut settings = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        settings.base_dir = path.parent().map(Path::to_path_buf);
        log::debug!(
            "Loaded config from {} ({} columns)",
            path.display(),
            settings.columns.len()
        );
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut settings: Settings = toml::from_str(content)?;
        for (name, column) in settings.columns.iter_mut() {
            column.name = name.clone();
        }
        Ok(settings)
    }

    /// Metadata for a configured column
    pub fn column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.get(name)
    }

    /// Build the localizer: built-in locale, then message files, then inline messages
    pub fn build_intl(&self) -> Result<IntlService> {
        let mut intl = IntlService::builtin(&self.locale)
            .with_context(|| format!("Failed to load locale '{}'", self.locale))?;

        for file in &self.message_files {
            let path = self.resolve(file);
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read message file: {}", path.display()))?;
            let messages = MessageTable::from_toml_str(&content)
                .with_context(|| format!("Invalid message file: {}", path.display()))?;
            log::debug!("Loaded {} messages from {}", messages.len(), path.display());
            intl = intl.with_messages(messages);
        }

        if !self.messages.is_empty() {
            let messages = MessageTable::from_table(&self.messages)
                .context("Invalid inline messages in config")?;
            intl = intl.with_messages(messages);
        }

        Ok(intl)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}
