//! Print command: show a parsed layout as tables.

use crate::cli::common::{CliError, CliResult};
use crate::export;
use crate::models::Geometry;
use crate::parser;
use clap::Args;
use std::path::PathBuf;

/// Pretty-print the key matrix of a layout file
#[derive(Debug, Clone, Args)]
pub struct PrintArgs {
    /// Path to layout text file
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,
}

impl PrintArgs {
    /// Execute the print command
    pub fn execute(&self, geometry: Geometry) -> CliResult<()> {
        let layout = parser::parse_layout_file(&self.layout, geometry)
            .map_err(|e| CliError::from_load_error(&e))?;

        print!("{}", export::render_layout(&layout));
        Ok(())
    }
}
