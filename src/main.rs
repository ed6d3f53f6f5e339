//! Fuzzy ARAS command-line entry point.
//!
//! Loads configuration from the environment, evaluates the selected judgment
//! source, prints the JSON report to stdout and a ranking summary to stderr.

use std::error::Error;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use fuzzy_aras::adapters::select_source;
use fuzzy_aras::application::{EvaluateJudgmentsHandler, EvaluateJudgmentsQuery};
use fuzzy_aras::config::{AppConfig, LoggingConfig};

type BoxError = Box<dyn Error + Send + Sync>;

fn init_tracing(logging: &LoggingConfig) -> Result<(), BoxError> {
    // RUST_LOG overrides the configured level
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().try_init()?;
    } else {
        builder.try_init()?;
    }
    Ok(())
}

fn run() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let source = select_source(&config.input, &config.engine);
    tracing::info!(source = %source.describe(), "Starting evaluation");

    let handler = EvaluateJudgmentsHandler::new(source);
    let report = handler.handle(EvaluateJudgmentsQuery {
        include_spread: config.output.include_spread,
    })?;

    let json = if config.output.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    eprint!("{}", report.result.summary(config.output.precision));

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fuzzy-aras: {err}");
            ExitCode::FAILURE
        }
    }
}
