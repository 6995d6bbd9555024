//! Destinations for encoded layouts.
//!
//! A [`Transport`] takes an encoded buffer and moves it towards the
//! controller. Framing and chunking belong to the transport, never to the
//! encoder. Only file and hex-dump sinks live here.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Receives an encoded layout.
pub trait Transport {
    /// Sends `data`, which declares `layer_count` layers in its header.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot accept the data.
    fn write_layout(&mut self, data: &[u8], layer_count: u16) -> Result<()>;
}

/// Writes the raw blob to a file.
///
/// Uses temp file + rename so a failed write never leaves a truncated blob.
#[derive(Debug, Clone)]
pub struct FileTransport {
    path: PathBuf,
}

impl FileTransport {
    /// Creates a transport writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Transport for FileTransport {
    fn write_layout(&mut self, data: &[u8], layer_count: u16) -> Result<()> {
        let temp_path = self.path.with_extension("tmp");

        fs::write(&temp_path, data).context(format!(
            "Failed to write temp blob file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp blob file to: {}",
            self.path.display()
        ))?;

        info!(
            path = %self.path.display(),
            layers = layer_count,
            bytes = data.len(),
            "wrote layout blob"
        );
        Ok(())
    }
}

/// Writes a hex dump of the blob, 16 bytes per line.
pub struct HexDumpTransport<W> {
    out: W,
}

impl<W: Write> HexDumpTransport<W> {
    /// Creates a transport writing hex text to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Transport for HexDumpTransport<W> {
    fn write_layout(&mut self, data: &[u8], layer_count: u16) -> Result<()> {
        writeln!(self.out, "# {layer_count} layers, {} bytes", data.len())?;
        for (line, chunk) in data.chunks(16).enumerate() {
            let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
            writeln!(self.out, "{:08x}  {}", line * 16, hex.join(" "))?;
        }
        self.out.flush().context("Failed to flush hex dump")?;
        Ok(())
    }
}
