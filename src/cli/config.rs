//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult, GeometryArgs};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display the stored geometry
    Show(ConfigShowArgs),
    /// Store the geometry given by --rows, --cols and --max-layers
    Set,
}

/// Display the stored geometry
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    geometry: GeometryOutput,
}

#[derive(Serialize, Debug)]
struct GeometryOutput {
    rows: usize,
    cols: usize,
    max_layers: usize,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, geometry: &GeometryArgs) -> CliResult<()> {
        let path = geometry.config_path()?;
        match &self.command {
            ConfigCommand::Show(args) => args.execute(&path),
            ConfigCommand::Set => set_geometry(geometry, &path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        let config = Config::load_from(path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let output = ConfigOutput {
            path: path.to_string_lossy().to_string(),
            geometry: GeometryOutput {
                rows: config.geometry.rows,
                cols: config.geometry.cols,
                max_layers: config.geometry.max_layers,
            },
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            println!("{APP_NAME} configuration ({})", output.path);
            println!("  Rows:       {}", output.geometry.rows);
            println!("  Columns:    {}", output.geometry.cols);
            println!("  Max layers: {}", output.geometry.max_layers);
        }

        Ok(())
    }
}

fn set_geometry(args: &GeometryArgs, path: &Path) -> CliResult<()> {
    if !args.has_overrides() {
        return Err(CliError::validation(
            "At least one configuration option must be specified: --rows, --cols, or --max-layers",
        ));
    }

    let mut config = Config::load_from(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "replacing unreadable config");
        Config::default()
    });

    args.apply_to(&mut config);

    config
        .validate()
        .map_err(|e| CliError::validation(format!("Invalid geometry: {e}")))?;

    config
        .save_to(path)
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

    println!("Configuration updated successfully.");
    println!("  {} ({})", config.geometry(), path.display());

    Ok(())
}
