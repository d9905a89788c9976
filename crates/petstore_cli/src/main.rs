//! Fixture setup entry point.
//!
//! # Responsibility
//! - Rebuild the fixture database and print its pets and kinds.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Environment:
//! - `PETSTORE_FIXTURE_DB`: fixture file path (default `test_pets.db`).
//! - `PETSTORE_LOG_DIR`: absolute log directory; logging stays off when unset.
//! - `PETSTORE_LOG_LEVEL`: log level (default depends on build mode).

use log::error;
use petstore_core::{
    core_version, default_log_level, init_logging, logging_status, setup_test_database,
    setup_test_database_at,
};
use std::env;
use std::process::ExitCode;

struct CliConfig {
    fixture_db: Option<String>,
    log_dir: Option<String>,
    log_level: String,
}

impl CliConfig {
    fn from_env() -> Self {
        Self {
            fixture_db: env::var("PETSTORE_FIXTURE_DB").ok(),
            log_dir: env::var("PETSTORE_LOG_DIR").ok(),
            log_level: env::var("PETSTORE_LOG_LEVEL")
                .unwrap_or_else(|_| default_log_level().to_string()),
        }
    }
}

fn main() -> ExitCode {
    let config = CliConfig::from_env();

    println!("petstore_core version={}", core_version());
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }
    if let Some((level, log_dir)) = logging_status() {
        println!("logging level={level} log_dir={}", log_dir.display());
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = match config.fixture_db.as_deref() {
        Some(path) => setup_test_database_at(path)?,
        None => setup_test_database()?,
    };
    println!("Test database setup complete.");

    let pets = store.get_pets()?;
    println!("Pets: {}", serde_json::to_string(&pets)?);

    let kinds = store.get_kinds()?;
    println!("Kinds: {}", serde_json::to_string(&kinds)?);

    println!("done.");
    Ok(())
}
