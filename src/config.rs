// ABOUTME: Environment-based configuration for the tracker CLI
// ABOUTME: Reads output format and packages file settings, with CLI overrides layered on top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration
//!
//! | Variable                | Values          | Default          |
//! |-------------------------|-----------------|------------------|
//! | `TRACKER_OUTPUT_FORMAT` | `text`, `json`  | `text`           |
//! | `TRACKER_PACKAGES_FILE` | path to JSON    | built-in samples |

use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use tracker_core::constants::env_config;
use tracker_core::errors::AppError;
use tracker_core::formatters::OutputFormat;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Output format is not one of the supported names
    #[error("Invalid output format '{0}' (expected text or json)")]
    InvalidOutputFormat(String),

    /// Environment variable is set but not valid unicode
    #[error("Environment variable {name} error: {source}")]
    EnvVar {
        /// Variable name
        name: &'static str,
        /// Underlying lookup error
        source: env::VarError,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Runtime configuration for one tracker run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerConfig {
    /// How summaries are rendered
    pub output_format: OutputFormat,
    /// JSON file with sensor packages; `None` uses the built-in samples
    pub packages_file: Option<PathBuf>,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an unsupported value
    pub fn from_env() -> Result<Self, ConfigError> {
        let output_format = read_var(env_config::OUTPUT_FORMAT)?
            .map_or_else(|| Ok(OutputFormat::default()), |raw| parse_output_format(&raw))?;

        let packages_file = read_var(env_config::PACKAGES_FILE)?
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            output_format,
            packages_file,
        };
        debug!(?config, "Configuration loaded from environment");
        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration
    #[must_use]
    pub fn with_overrides(
        mut self,
        output_format: Option<OutputFormat>,
        packages_file: Option<PathBuf>,
    ) -> Self {
        if let Some(format) = output_format {
            self.output_format = format;
        }
        if packages_file.is_some() {
            self.packages_file = packages_file;
        }
        self
    }
}

/// Parse an output format name
///
/// # Errors
///
/// Returns `ConfigError::InvalidOutputFormat` for unknown names
pub fn parse_output_format(raw: &str) -> Result<OutputFormat, ConfigError> {
    OutputFormat::from_str_param(raw).ok_or_else(|| ConfigError::InvalidOutputFormat(raw.to_owned()))
}

fn read_var(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::EnvVar { name, source }),
    }
}
