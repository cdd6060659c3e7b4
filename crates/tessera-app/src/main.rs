mod cli;

use std::process::ExitCode;

use tessera_app::replay::{self, Script};
use tessera_common::TesseraError;
use tessera_config::TesseraConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

const DEFAULT_LOG_DIRECTIVE: &str = "tessera=info";

fn init_logging(level: Option<&str>) {
    let directive: Result<Directive, _> = level
        .unwrap_or(DEFAULT_LOG_DIRECTIVE)
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    // Logs go to stderr so reports on stdout stay machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> TesseraConfig {
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    tessera_config::load_config_from(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        TesseraConfig::default()
    })
}

fn run(args: Args) -> Result<(), TesseraError> {
    match &args.command {
        Command::DumpConfig => {
            let config = load_config(&args);
            print!("{}", tessera_config::config_to_toml(&config)?);
        }
        Command::CheckConfig => {
            // No fallback here: the point is to surface the error.
            tessera_config::load_config_from(args.config.as_deref())?;
            println!("configuration ok");
        }
        Command::Replay { script, compact } => {
            let config = load_config(&args);
            let script = Script::from_path(script)?;
            tracing::info!(steps = script.steps.len(), "replaying script");
            let report = replay::run(&script, config)?;
            let out = if *compact {
                serde_json::to_string(&report)
            } else {
                serde_json::to_string_pretty(&report)
            }
            .map_err(|e| TesseraError::Other(format!("report serialization failed: {e}")))?;
            println!("{out}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());
    tracing::debug!("Tessera v{} starting", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("tessera: {e}");
            ExitCode::FAILURE
        }
    }
}
