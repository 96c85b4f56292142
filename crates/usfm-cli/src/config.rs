use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, OutputFormat};

/// Settings for the `usfm` binary, read from an optional TOML file.
///
/// Missing keys take their default values. Command-line flags win over
/// anything set in the file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Segment delimiter accepted by `check --kind multi`.
    pub multi_delimiter: String,
    /// Default output format.
    pub format: OutputFormat,
    /// Whether to color text output.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            multi_delimiter: usfm_refs::validate::DEFAULT_MULTI_DELIMITER.to_string(),
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl CliConfig {
    /// Load the config file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Apply global command-line flags on top of the file settings.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.no_color {
            self.color = false;
        }
        self
    }
}
