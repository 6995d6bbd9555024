//! Encode command: compile a layout file into a controller blob.

use crate::cli::common::{CliError, CliResult};
use crate::firmware::{self, FileTransport, HexDumpTransport, Transport};
use crate::models::{Geometry, Layout};
use clap::Args;
use std::io;
use std::path::PathBuf;

/// Encode a layout file into the controller's binary format
#[derive(Debug, Clone, Args)]
pub struct EncodeArgs {
    /// Path to layout text file
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Write the raw blob here (prints a hex dump to stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl EncodeArgs {
    /// Execute the encode command
    pub fn execute(&self, geometry: Geometry) -> CliResult<()> {
        match &self.output {
            Some(output) => {
                let mut transport = FileTransport::new(output);
                let layout = self.flash(geometry, &mut transport)?;
                println!(
                    "✓ Wrote {} layer(s), {} bytes to {}",
                    layout.layer_count(),
                    firmware::encoded_len(&geometry, layout.layer_count()),
                    output.display()
                );
            }
            None => {
                let mut transport = HexDumpTransport::new(io::stdout().lock());
                self.flash(geometry, &mut transport)?;
            }
        }
        Ok(())
    }

    fn flash(
        &self,
        geometry: Geometry,
        transport: &mut dyn Transport,
    ) -> CliResult<Layout> {
        firmware::flash_layout(&self.layout, geometry, transport)
            .map_err(|e| CliError::from_load_error(&e))
    }
}
