//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Address discovery configuration
    #[serde(default)]
    pub resolver: ResolverSection,

    /// Webhook configuration section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Monitoring configuration
    #[serde(default)]
    pub monitor: MonitorSection,
}

/// Address discovery section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverSection {
    /// Endpoint returning the address-bearing document
    pub url: Option<String>,

    /// Extraction regex
    pub pattern: Option<String>,

    /// HTTP request timeout in seconds
    pub timeout: Option<u64>,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook URL
    pub url: Option<String>,

    /// HTTP method (default: POST)
    pub method: Option<String>,

    /// HTTP headers as key-value pairs
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Bearer token for Authorization header
    pub bearer: Option<String>,

    /// Handlebars body template
    pub body_template: Option<String>,
}

/// Monitoring configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    /// Polling interval in seconds
    pub poll_interval: Option<u64>,

    /// Check once and exit
    #[serde(default)]
    pub once: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Writes [`default_config_template`] to `path` for the `init` command.
///
/// # Errors
///
/// [`ConfigError::Write`] if the file cannot be created.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# checkip-agent Configuration File

[resolver]
# Endpoint returning a document that contains the public IPv4 address
# url = "https://checkip.amazonaws.com"

# Regex used to extract the address. Supported shapes:
#   - named groups ip1..ip4, joined with "."
#   - a single named group ip
#   - no named groups: the whole first match
# pattern = '(?:\d{1,3}\.){3}\d{1,3}'

# HTTP request timeout in seconds (default: 10)
# timeout = 10

[webhook]
# Webhook URL (required unless --dry-run)
# url = "https://api.example.com/ddns"

# HTTP method (default: POST)
# method = "POST"

# Bearer token for Authorization header
# bearer = "your-token-here"

# Handlebars body template
# Available variables: {{new_ip}}, {{old_ip}}, {{first}}
# body_template = '{"ip": "{{new_ip}}", "previous": "{{old_ip}}"}'

# HTTP headers
# [webhook.headers]
# X-Custom-Header = "value"

[monitor]
# Polling interval in seconds (default: 300)
poll_interval = 300

# Check once and exit
# once = false
"#
    .to_string()
}
