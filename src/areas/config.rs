use crate::areas::engine::EngineOptions;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".gdiff.toml";

/// Settings read from a `.gdiff.toml` file.
///
/// ```toml
/// language = "rust"
/// ignore_whitespace = true
/// ignore_patterns = ['^\s*//']
/// line_numbers = true
///
/// [token_patterns]
/// ".sql" = '[A-Za-z_]+|\s+|.'
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Option<String>,
    pub ignore_whitespace: bool,
    pub ignore_patterns: Vec<String>,
    pub token_patterns: HashMap<String, String>,
    pub max_trace_cells: Option<usize>,
    pub line_numbers: Option<bool>,
    pub pager: Option<bool>,
}

impl Settings {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid gdiff configuration")
    }

    /// Loads a configuration file the user asked for explicitly; any
    /// failure is an error.
    pub fn load_explicit(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Loads `.gdiff.toml` from `dir` if present. Unreadable or invalid
    /// files are logged and replaced by defaults.
    pub fn load_implicit(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_explicit(&config_path) {
            Ok(settings) => {
                tracing::debug!("loaded settings from {}", config_path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("ignoring {}: {:#}", config_path.display(), e);
                Self::default()
            }
        }
    }

    pub fn engine_options(&self) -> EngineOptions {
        let defaults = EngineOptions::default();

        EngineOptions {
            language_hint: self.language.clone(),
            ignore_whitespace: self.ignore_whitespace,
            ignore_patterns: self.ignore_patterns.clone(),
            token_patterns: self.token_patterns.clone(),
            max_trace_cells: self.max_trace_cells.unwrap_or(defaults.max_trace_cells),
        }
    }
}
