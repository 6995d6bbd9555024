//! CLI command handlers for keymatrix.
//!
//! Each subcommand is a thin wrapper that resolves input files, calls into
//! the parser/encoder, and turns failures into exit codes.

pub mod check;
pub mod common;
pub mod config;
pub mod decode;
pub mod encode;
pub mod print;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode, GeometryArgs};
pub use config::ConfigArgs;
pub use decode::DecodeArgs;
pub use encode::EncodeArgs;
pub use print::PrintArgs;
