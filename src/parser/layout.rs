//! Layout text parsing.
//!
//! Drives the [`scanner`](super::scanner) over a [`ByteSource`] and places
//! each key code with a [`Cursor`]. The first error aborts the parse and
//! drops everything built so far.

use super::cursor::{Cursor, Placement};
use super::error::{ParseError, ParseErrorKind};
use super::scanner::{self, ScanState};
use super::source::ByteSource;
use crate::constants::APP_BINARY_NAME;
use crate::models::{Geometry, KeyGrid, Layout};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Accumulates placements into completed layers.
struct LayoutBuilder {
    layout: Layout,
    current: Option<KeyGrid>,
}

impl LayoutBuilder {
    const fn new(geometry: Geometry) -> Self {
        Self {
            layout: Layout::new(geometry),
            current: None,
        }
    }

    fn apply(&mut self, placement: Placement) -> Result<(), ParseErrorKind> {
        let geometry = self.layout.geometry;
        let grid = self.current.get_or_insert_with(|| KeyGrid::new(&geometry));
        let stored = grid.set(placement.pos, placement.value);
        debug_assert!(stored, "cursor placed a key outside the grid");

        if placement.completes_layer {
            if let Some(grid) = self.current.take() {
                self.layout
                    .push_layer(grid)
                    .map_err(|_| ParseErrorKind::TooManyLayers {
                        limit: geometry.layer_capacity(),
                    })?;
                debug!(layer = placement.layer + 1, "layer complete");
            }
        }
        Ok(())
    }
}

/// Tracks scanner and cursor state across the byte stream.
struct LayoutParser {
    state: ScanState,
    cursor: Cursor,
    builder: LayoutBuilder,
}

impl LayoutParser {
    const fn new(geometry: Geometry) -> Self {
        Self {
            state: ScanState::Whitespace,
            cursor: Cursor::new(geometry),
            builder: LayoutBuilder::new(geometry),
        }
    }

    fn error(&self, kind: ParseErrorKind, offset: u64) -> ParseError {
        ParseError {
            kind,
            layer: self.cursor.layer() + 1,
            row: self.cursor.row() + 1,
            key: self.cursor.col() + 1,
            offset,
        }
    }

    fn feed(&mut self, byte: u8) -> Result<(), ParseErrorKind> {
        loop {
            let state = std::mem::replace(&mut self.state, ScanState::Whitespace);
            let transition = scanner::step(state, byte)?;
            self.state = transition.state;

            if let Some(key) = transition.key {
                let placement = self.cursor.commit(key)?;
                self.builder.apply(placement)?;
            }

            if transition.consumed {
                return Ok(());
            }
        }
    }

    fn finish(mut self, end: u64) -> Result<Layout, ParseError> {
        let state = std::mem::replace(&mut self.state, ScanState::Whitespace);
        let flushed = scanner::finish(state).and_then(|key| match key {
            Some(key) => {
                let placement = self.cursor.commit(key)?;
                self.builder.apply(placement)
            }
            None => Ok(()),
        });
        flushed
            .and_then(|()| self.cursor.finish())
            .map_err(|kind| self.error(kind, end))?;
        Ok(self.builder.layout)
    }
}

/// Parses a layout from any reader.
///
/// # Format
///
/// ```text
/// 1,2,3,4
/// 5,6,7,8
///
/// 9,10,11,12
/// 13,14,15,16
/// ```
///
/// Each layer holds `rows * cols` comma-separated key codes. A line break
/// may end a row (but only after its last column); a row may also run on
/// into the next one with a comma, so a whole layer fits on one line.
/// Whitespace between numbers, including blank lines, is ignored. The
/// final value does not need a trailing separator.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the first offending byte. No partial
/// layout is ever returned.
pub fn parse_layout_reader<R: Read>(reader: R, geometry: Geometry) -> Result<Layout, ParseError> {
    let mut source = ByteSource::new(reader);
    let mut parser = LayoutParser::new(geometry);

    while let Some(item) = source.next() {
        let (offset, byte) = match item {
            Ok(item) => item,
            Err(e) => {
                return Err(parser.error(
                    ParseErrorKind::Read {
                        message: e.to_string(),
                    },
                    source.offset(),
                ))
            }
        };
        parser
            .feed(byte)
            .map_err(|kind| parser.error(kind, offset))?;
    }

    parser.finish(source.offset())
}

/// Parses a layout from a string.
///
/// # Errors
///
/// See [`parse_layout_reader`].
pub fn parse_layout_str(content: &str, geometry: Geometry) -> Result<Layout, ParseError> {
    parse_layout_reader(content.as_bytes(), geometry)
}

/// Parses a layout file.
///
/// The file handle is closed on every exit path. A parse failure keeps the
/// [`ParseError`] in the error chain so callers can recover its location.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or not a regular file
/// - File cannot be opened
/// - Any [`ParseError`]
pub fn parse_layout_file(path: &Path, geometry: Geometry) -> Result<Layout> {
    if !path.exists() {
        anyhow::bail!(
            "Layout file not found: {}\n\n\
             Please check the file path and try again.\n\
             To check a layout without writing it, run: {} check --layout <FILE>",
            path.display(),
            APP_BINARY_NAME
        );
    }

    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }

    let file = File::open(path)
        .with_context(|| format!("Could not open file {}", path.display()))?;

    let layout = parse_layout_reader(file, geometry)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))?;

    debug!(
        path = %path.display(),
        layers = layout.layer_count(),
        "parsed layout"
    );
    Ok(layout)
}

/// Finds the [`ParseError`] behind an error returned by [`parse_layout_file`].
#[must_use]
pub fn find_parse_error(err: &anyhow::Error) -> Option<&ParseError> {
    err.chain().find_map(|cause| cause.downcast_ref::<ParseError>())
}
