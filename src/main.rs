//! KeyMatrix - compile keyboard matrix layouts for the controller
//!
//! This application parses a text key matrix, validates it, and encodes it
//! into the binary blob the controller firmware loads.

use clap::{Parser, Subcommand};
use keymatrix::cli::{
    CheckArgs, CliResult, ConfigArgs, DecodeArgs, EncodeArgs, ExitCode, GeometryArgs, PrintArgs,
};
use keymatrix::models::Geometry;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// KeyMatrix - compile keyboard matrix layouts for the controller
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    geometry: GeometryArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a layout file and report whether it is valid
    Check(CheckArgs),
    /// Pretty-print the key matrix of a layout file
    Print(PrintArgs),
    /// Encode a layout file into the controller's binary format
    Encode(EncodeArgs),
    /// Decode a binary blob and pretty-print its key matrix
    Decode(DecodeArgs),
    /// Show or store the default matrix geometry
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let geometry = || -> CliResult<Geometry> {
        let geometry = cli.geometry.resolve()?;
        debug!(%geometry, "resolved geometry");
        Ok(geometry)
    };

    let result = match &cli.command {
        Command::Check(args) => geometry().and_then(|g| args.execute(g)),
        Command::Print(args) => geometry().and_then(|g| args.execute(g)),
        Command::Encode(args) => geometry().and_then(|g| args.execute(g)),
        Command::Decode(args) => geometry().and_then(|g| args.execute(g)),
        Command::Config(args) => args.execute(&cli.geometry),
    };

    match result {
        Ok(()) => std::process::ExitCode::from(ExitCode::Success.code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::ExitCode::from(e.exit_code.code())
        }
    }
}
