//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PYSCAFF_<SECTION>__<KEY>`,
//!    e.g. `PYSCAFF_DEFAULTS__PRECISION=micro`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use pyscaff_core::domain::Precision;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "PYSCAFF";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults applied when a command omits an argument.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Precision for `py_vers_minimal` and `catalog` when none is given.
    pub precision: Precision,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from defaults, file, and environment.
    ///
    /// `config_file` is the path passed via `--config`. An explicit file must
    /// exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::build(Some((&path, required)), env_source())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.pyscaff.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "pyscaff", "pyscaff")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".pyscaff.toml"))
    }

    /// Look up a single value by dotted key.
    pub fn get(&self, key: &str) -> CliResult<String> {
        match key {
            "defaults.precision" => Ok(self.defaults.precision.to_string()),
            "output.no_color" => Ok(self.output.no_color.to_string()),
            "output.format" => Ok(self.output.format.as_str().to_string()),
            _ => Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            }),
        }
    }

    fn build(file: Option<(&Path, bool)>, env: Environment) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some((path, required)) = file {
            debug!(path = %path.display(), required, "Reading config file");
            builder = builder.add_source(
                File::new(&path.to_string_lossy(), FileFormat::Toml).required(required),
            );
        }

        builder
            .add_source(env)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn config_error(err: ::config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}
