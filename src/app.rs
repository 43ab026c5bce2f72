//! Process-level concerns of the binary: exit status, logging, and what to
//! tell the user when configuration fails.

use std::process::ExitCode;

use checkip_agent::config::{ConfigError, field};
use checkip_agent::resolver::BuildError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// How the process ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit 0.
    Success,
    /// Exit 1: unusable flags or config file; nothing was checked.
    BadConfig,
    /// Exit 2: startup failed, or the single `--once` check failed.
    Failed,
}

impl Outcome {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::BadConfig => 1,
            Self::Failed => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        Self::from(outcome.code())
    }
}

/// A follow-up line for configuration errors the user can act on.
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::Missing {
            field: field::WEBHOOK_URL,
            ..
        } => Some(
            "Run 'checkip-agent init' to generate a configuration template, \
             or pass --dry-run to watch for changes without a webhook.",
        ),
        ConfigError::Read { .. } => {
            Some("Run 'checkip-agent init' to generate a configuration template.")
        }
        ConfigError::Resolver(BuildError::InvalidPattern { .. }) => {
            Some("Patterns may name groups `ip` or `ip1`..`ip4` to select the address.")
        }
        _ => None,
    }
}

/// INFO by default, DEBUG with `--verbose`; `RUST_LOG` overrides both.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();
}
