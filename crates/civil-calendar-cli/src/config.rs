use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::cli::OutputFormat;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "datecalc.toml";

/// Defaults for every subcommand; CLI flags take precedence.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatecalcConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// `diff`: fail on reversed dates instead of swapping them.
    #[serde(default)]
    pub strict_order: bool,

    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
}

impl Default for DatecalcConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            strict_order: false,
            thousands_separator: default_thousands_separator(),
        }
    }
}

fn default_thousands_separator() -> String {
    ",".to_string()
}

/// Load the config file.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
/// read if present and built-in defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<DatecalcConfig> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                debug!("no {DEFAULT_CONFIG_PATH}, using built-in defaults");
                return Ok(DatecalcConfig::default());
            }
            default
        }
    };

    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: DatecalcConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config {}", path.display()))?;
    info!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
