use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tessera: tiled terminal surfaces, replayed headlessly.
#[derive(Parser, Debug)]
#[command(name = "tessera", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the effective configuration as TOML.
    DumpConfig,
    /// Load and validate the configuration, then exit.
    CheckConfig,
    /// Run a JSON interaction script and print the resulting report.
    Replay {
        /// Path to the script.
        script: PathBuf,
        /// Print the report as a single line.
        #[arg(long)]
        compact: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
