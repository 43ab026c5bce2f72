//! Configuration for the agent binary.
//!
//! A value is taken from the first of: explicit flag, TOML file, built-in
//! default. Headers merge instead, a flag header replacing a file header of
//! the same name. `--once` is set if either source sets it; `--dry-run` and
//! `--verbose` exist only as flags.
//!
//! A webhook URL is required unless `--dry-run` is given, in which case any
//! configured webhook is ignored.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template, write_default_config};
pub use validated::{SinkConfig, ValidatedConfig, WebhookConfig};
