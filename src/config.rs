use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_DELIMITER, resolve::NAMESPACE_PLACEHOLDER, resolve::placeholders};

pub const CONFIG_FILE_NAME: &str = ".i18ntypesrc.json";

/// Settings read from `.i18ntypesrc.json`.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path template, e.g. `locales/{{lang}}/{{ns}}.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Output file, relative to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

impl Config {
    /// The config written by `init`.
    pub fn example() -> Self {
        Self {
            path: Some("locales/{{lang}}/{{ns}}.json".to_string()),
            output: Some("src/i18n.generated.ts".to_string()),
            lang: None,
            delimiter: Some(DEFAULT_DELIMITER.to_string()),
        }
    }

    /// Validate configuration values.
    ///
    /// Returns an error if `path` lacks a `{{ns}}` placeholder or `delimiter`
    /// is empty.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.path
            && !placeholders(path).contains(&NAMESPACE_PLACEHOLDER)
        {
            anyhow::bail!(
                "Invalid 'path' in config: \"{}\" has no {} placeholder",
                path,
                NAMESPACE_PLACEHOLDER
            );
        }

        if self.delimiter.as_deref() == Some("") {
            anyhow::bail!("Invalid 'delimiter' in config: must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::example();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config file");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
