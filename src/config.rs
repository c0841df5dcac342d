use std::env;

use anyhow::Result;

use crate::input::DEFAULT_PLACEHOLDER;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored score card (default)
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!(
                "Unknown output format '{other}'. Expected 'text' or 'json'."
            ),
        }
    }
}

/// Front-end configuration loaded from environment variables.
///
/// Only presentation is configurable. Scoring constants (stop words,
/// reference topic, thresholds) are fixed. A .env file is loaded
/// automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt text that counts as "no input" (ESSAYMARK_PLACEHOLDER)
    pub placeholder: String,
    /// Default output format when --json is not given (ESSAYMARK_FORMAT)
    pub output_format: OutputFormat,
    /// False when NO_COLOR is set
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            output_format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = match lookup("ESSAYMARK_FORMAT") {
            Some(value) => OutputFormat::parse(&value)?,
            None => OutputFormat::Text,
        };

        let placeholder = lookup("ESSAYMARK_PLACEHOLDER")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

        // https://no-color.org: any non-empty value disables color
        let color = lookup("NO_COLOR").is_none_or(|v| v.is_empty());

        Ok(Self {
            placeholder,
            output_format,
            color,
        })
    }
}
