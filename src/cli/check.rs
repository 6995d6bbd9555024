//! Check command for layout files.

use crate::cli::common::{CliError, CliResult, ParseErrorJson};
use crate::models::Geometry;
use crate::parser::{self, find_parse_error, ParseErrorKind};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Parse a layout file and report whether it is valid
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Path to layout text file
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for `check --json`.
#[derive(Debug, Serialize)]
struct CheckResponse {
    valid: bool,
    layers: Option<usize>,
    rows: usize,
    cols: usize,
    checks: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ParseErrorJson>,
}

/// Outcome of the syntax (characters and numbers) and structure
/// (rows, columns and layers) checks.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct CheckStatus {
    syntax: &'static str,
    structure: &'static str,
}

impl CheckStatus {
    const fn all_passed() -> Self {
        Self {
            syntax: "passed",
            structure: "passed",
        }
    }

    /// The parser stops at the first error, so checks after it are skipped.
    const fn from_failure(kind: &ParseErrorKind) -> Self {
        if kind.is_structural() {
            Self {
                syntax: "passed",
                structure: "failed",
            }
        } else if let ParseErrorKind::Read { .. } = kind {
            Self {
                syntax: "skipped",
                structure: "skipped",
            }
        } else {
            Self {
                syntax: "failed",
                structure: "skipped",
            }
        }
    }
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, geometry: Geometry) -> CliResult<()> {
        let result = parser::parse_layout_file(&self.layout, geometry);

        let response = match &result {
            Ok(layout) => CheckResponse {
                valid: true,
                layers: Some(layout.layer_count()),
                rows: geometry.rows,
                cols: geometry.cols,
                checks: CheckStatus::all_passed(),
                error: None,
            },
            Err(e) => match find_parse_error(e) {
                Some(parse_err) => CheckResponse {
                    valid: false,
                    layers: None,
                    rows: geometry.rows,
                    cols: geometry.cols,
                    checks: CheckStatus::from_failure(&parse_err.kind),
                    error: Some(ParseErrorJson::from(parse_err)),
                },
                // Not a layout problem: the file could not be read at all
                None => return Err(CliError::from_load_error(e)),
            },
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if let Ok(layout) = &result {
            println!("✓ Layout is valid");
            println!(
                "  {} layer(s), {}x{} matrix",
                layout.layer_count(),
                geometry.rows,
                geometry.cols
            );
        } else if let Some(error) = &response.error {
            println!("✗ Layout is invalid");
            println!(
                "  [Layer {}, row {}, key {}, byte {}] {}",
                error.layer, error.row, error.key, error.offset, error.message
            );
            println!("\nChecks:");
            println!("  Syntax:    {}", response.checks.syntax);
            println!("  Structure: {}", response.checks.structure);
        }

        // The details are already on stdout
        if response.valid {
            Ok(())
        } else {
            Err(CliError::validation("Layout check failed"))
        }
    }
}
