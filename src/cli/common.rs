//! Shared CLI types: errors, exit codes and geometry flags.

use crate::config::Config;
use crate::models::Geometry;
use crate::parser::{find_parse_error, ParseError};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was read but is not a valid layout or blob
    ValidationError = 1,
    /// A file or stream could not be read or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process status.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Error returned by a CLI command.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message shown on stderr
    pub message: String,
}

impl CliError {
    /// An I/O failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Invalid input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Classifies an error from loading a layout file.
    ///
    /// Parse failures are validation errors; everything else is I/O.
    pub fn from_load_error(err: &anyhow::Error) -> Self {
        if find_parse_error(err).is_some() {
            Self::validation(format!("{err:#}"))
        } else {
            Self::io(format!("{err:#}"))
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Matrix geometry flags shared by all commands.
///
/// Precedence: flags, then the config file, then the controller defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct GeometryArgs {
    /// Path to config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Number of matrix rows
    #[arg(long, value_name = "N", global = true)]
    pub rows: Option<usize>,

    /// Number of matrix columns
    #[arg(long, value_name = "N", global = true)]
    pub cols: Option<usize>,

    /// Maximum number of layers
    #[arg(long, value_name = "N", global = true)]
    pub max_layers: Option<usize>,
}

impl GeometryArgs {
    /// The config file in effect: `--config`, or the platform default.
    pub fn config_path(&self) -> CliResult<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path()
                .map_err(|e| CliError::io(format!("Failed to locate configuration: {e:#}"))),
        }
    }

    /// Returns true if any of `--rows`, `--cols` or `--max-layers` was given.
    #[must_use]
    pub const fn has_overrides(&self) -> bool {
        self.rows.is_some() || self.cols.is_some() || self.max_layers.is_some()
    }

    /// Overwrites the geometry in `config` with the flags that were given.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(rows) = self.rows {
            config.geometry.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.geometry.cols = cols;
        }
        if let Some(max_layers) = self.max_layers {
            config.geometry.max_layers = max_layers;
        }
    }

    /// Resolves the effective geometry.
    pub fn resolve(&self) -> CliResult<Geometry> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        self.apply_to(&mut config);

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid geometry: {e}")))?;
        Ok(config.geometry())
    }
}

/// JSON form of a [`ParseError`].
#[derive(Debug, Clone, Serialize)]
pub struct ParseErrorJson {
    /// Machine-readable kind
    pub kind: &'static str,
    /// Human-readable description
    pub message: String,
    /// Layer number (1-based)
    pub layer: usize,
    /// Row number (1-based)
    pub row: usize,
    /// Key number within the row (1-based)
    pub key: usize,
    /// Byte offset in the source
    pub offset: u64,
}

impl From<&ParseError> for ParseErrorJson {
    fn from(err: &ParseError) -> Self {
        Self {
            kind: err.kind.name(),
            message: err.kind.to_string(),
            layer: err.layer,
            row: err.row,
            key: err.key,
            offset: err.offset,
        }
    }
}
