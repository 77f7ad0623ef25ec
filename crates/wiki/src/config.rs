use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use serde::Deserialize;
use wiki::{client::DEFAULT_TIMEOUT, request::DEFAULT_BASE_URL, ClientOptions};

use crate::cli::Cli;

pub const DEFAULT_LANG: &str = "en";

/// Optional defaults stored in ~/.config/wiki/config.toml
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Settings after flags, environment, config file and defaults are layered.
#[derive(Debug, Clone)]
pub struct Settings {
    pub lang: String,
    pub url: String,
    pub client: ClientOptions,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let lang = non_empty(cli.lang.clone())
            .or_else(|| non_empty(file.lang))
            .unwrap_or_else(|| DEFAULT_LANG.to_owned());
        let url = non_empty(cli.url.clone())
            .or_else(|| non_empty(file.url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let timeout = cli
            .timeout_secs
            .or(file.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            lang,
            url,
            client: ClientOptions {
                verify_tls: !cli.no_check_certificate,
                timeout,
            },
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wiki")
        .join("config.toml")
}

pub fn load_config() -> Result<FileConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

pub fn validate_lang(lang: &str) -> bool {
    !lang.is_empty() && lang.chars().all(|ch| ch.is_ascii_alphabetic() || ch == '-')
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
