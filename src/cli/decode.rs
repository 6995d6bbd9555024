//! Decode command: inspect an encoded blob.

use crate::cli::common::{CliError, CliResult};
use crate::export;
use crate::firmware;
use crate::models::Geometry;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Decode a binary blob and pretty-print its key matrix
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Path to encoded blob
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self, geometry: Geometry) -> CliResult<()> {
        let data = fs::read(&self.input).map_err(|e| {
            CliError::io(format!(
                "Failed to read blob {}: {e}",
                self.input.display()
            ))
        })?;

        let layout = firmware::decode(&data, geometry)
            .map_err(|e| CliError::validation(format!("Invalid blob: {e}")))?;

        print!("{}", export::render_layout(&layout));
        Ok(())
    }
}
