use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::BuildError;

/// Why no runnable configuration could be assembled.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `--config` file could not be read.
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `init` could not write the template.
    #[error("cannot write config file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file: {0}")]
    Syntax(#[from] toml::de::Error),

    /// A setting without a default was given neither as a flag nor in the file.
    #[error("{field} is not set. {hint}")]
    Missing {
        field: &'static str,
        hint: &'static str,
    },

    /// A setting was given but cannot be used.
    #[error("invalid {field} `{value}`: {reason}")]
    Invalid {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The check URL or extraction pattern was refused by the resolver.
    #[error(transparent)]
    Resolver(#[from] BuildError),
}

impl ConfigError {
    pub(crate) fn invalid(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Display,
    ) -> Self {
        Self::Invalid {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Setting names as they appear in [`ConfigError`], spelled as TOML keys.
pub mod field {
    pub const WEBHOOK_URL: &str = "webhook.url";
    pub const METHOD: &str = "webhook.method";
    pub const HEADER: &str = "webhook header";
    pub const BODY_TEMPLATE: &str = "webhook.body_template";
    pub const TIMEOUT: &str = "resolver.timeout";
    pub const POLL_INTERVAL: &str = "monitor.poll_interval";
}
