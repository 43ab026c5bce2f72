//! checkip-agent: watches the public IPv4 address and announces changes.

use std::path::Path;
use std::process::ExitCode;

use checkip_agent::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::Outcome;

/// Excluded from coverage: argument parsing and dispatch only.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let outcome = match &cli.command {
        Some(Command::Init { output }) => init(output),
        None => watch(&cli),
    };

    outcome.into()
}

fn init(output: &Path) -> Outcome {
    if let Err(e) = write_default_config(output) {
        eprintln!("Error: {e}");
        return Outcome::BadConfig;
    }

    println!("Configuration template written to: {}", output.display());
    Outcome::Success
}

/// Loads configuration, then drives the agent on a fresh runtime.
///
/// Excluded from coverage: needs a runtime and the network.
#[cfg(not(tarpaulin_include))]
fn watch(cli: &Cli) -> Outcome {
    let config = match ValidatedConfig::load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            if let Some(hint) = app::config_hint(&e) {
                eprintln!("\n{hint}");
            }
            return Outcome::BadConfig;
        }
    };

    app::init_tracing(config.verbose);
    tracing::info!("Starting: {config}");

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return Outcome::Failed;
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(()) => Outcome::Success,
        Err(e) => {
            tracing::error!("{e}");
            Outcome::Failed
        }
    }
}
