//! The configuration the agent runs with: flags layered over the file,
//! the file over [`super::defaults`], every value checked once here.

use std::fmt;
use std::time::Duration;

use handlebars::Handlebars;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use url::Url;

use crate::resolver::ResolverOptions;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Where and how a change is announced.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub url: Url,
    pub method: Method,
    /// Flag headers, file headers and the bearer token, merged.
    pub headers: HeaderMap,
    /// Syntax-checked Handlebars template; `None` sends no body.
    pub body_template: Option<String>,
}

/// The sink changes are handed to.
#[derive(Debug, Clone)]
pub enum SinkConfig {
    Webhook(WebhookConfig),
    /// `--dry-run`: changes are accepted and logged, nothing is sent.
    DryRun,
}

impl SinkConfig {
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun)
    }
}

#[derive(Debug)]
pub struct ValidatedConfig {
    pub resolver: ResolverOptions,
    /// Bounds every request, discovery and webhook alike.
    pub timeout: Duration,
    pub sink: SinkConfig,
    pub poll_interval: Duration,
    pub once: bool,
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    /// One line for the startup log. Headers are left out; they may carry tokens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "check_url={} pattern={} timeout={}s poll_interval={}s once={} sink=",
            self.resolver.url(),
            self.resolver.extractor().pattern(),
            self.timeout.as_secs(),
            self.poll_interval.as_secs(),
            self.once,
        )?;
        match &self.sink {
            SinkConfig::Webhook(hook) => write!(f, "{} {}", hook.method, hook.url),
            SinkConfig::DryRun => f.write_str("dry-run"),
        }
    }
}

impl ValidatedConfig {
    /// Reads `--config` when given, then merges it under the flags.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from reading, parsing or validating.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = cli.config.as_deref().map(TomlConfig::load).transpose()?;
        Self::from_raw(cli, file.as_ref())
    }

    /// Merges flags over an already parsed file.
    ///
    /// With `--dry-run` the webhook settings are not looked at, so a missing
    /// or broken webhook section does not fail.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Resolver`] for a bad check URL or pattern
    /// - [`ConfigError::Missing`] when no webhook URL is given outside dry-run
    /// - [`ConfigError::Invalid`] for zero durations and unusable webhook values
    pub fn from_raw(cli: &Cli, file: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let layers = Layers { cli, file };

        Ok(Self {
            resolver: layers.resolver()?,
            timeout: layers.seconds(
                field::TIMEOUT,
                cli.timeout,
                |f| f.resolver.timeout,
                defaults::TIMEOUT_SECS,
            )?,
            sink: if cli.dry_run {
                SinkConfig::DryRun
            } else {
                SinkConfig::Webhook(layers.webhook()?)
            },
            poll_interval: layers.seconds(
                field::POLL_INTERVAL,
                cli.poll_interval,
                |f| f.monitor.poll_interval,
                defaults::POLL_INTERVAL_SECS,
            )?,
            once: cli.once || file.is_some_and(|f| f.monitor.once),
            verbose: cli.verbose,
        })
    }
}

/// The two sources of a setting, flag first.
#[derive(Clone, Copy)]
struct Layers<'a> {
    cli: &'a Cli,
    file: Option<&'a TomlConfig>,
}

impl<'a> Layers<'a> {
    fn pick(
        self,
        flag: Option<&'a str>,
        in_file: impl FnOnce(&'a TomlConfig) -> Option<&'a str>,
    ) -> Option<&'a str> {
        flag.or_else(|| self.file.and_then(in_file))
    }

    fn seconds(
        self,
        name: &'static str,
        flag: Option<u64>,
        in_file: impl FnOnce(&'a TomlConfig) -> Option<u64>,
        default: u64,
    ) -> Result<Duration, ConfigError> {
        match flag.or_else(|| self.file.and_then(in_file)).unwrap_or(default) {
            0 => Err(ConfigError::invalid(name, "0", "must be greater than 0")),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    fn resolver(self) -> Result<ResolverOptions, ConfigError> {
        let mut options = ResolverOptions::default();
        if let Some(url) =
            self.pick(self.cli.check_url.as_deref(), |f| f.resolver.url.as_deref())
        {
            options = options.with_url(url)?;
        }
        if let Some(pattern) =
            self.pick(self.cli.pattern.as_deref(), |f| f.resolver.pattern.as_deref())
        {
            options = options.with_pattern(pattern)?;
        }
        Ok(options)
    }

    fn webhook(self) -> Result<WebhookConfig, ConfigError> {
        let url = self
            .pick(self.cli.url.as_deref(), |f| f.webhook.url.as_deref())
            .ok_or(ConfigError::Missing {
                field: field::WEBHOOK_URL,
                hint: "Use --url, set webhook.url in the config file, or pass --dry-run.",
            })?;
        let url = Url::parse(url).map_err(|e| ConfigError::invalid(field::WEBHOOK_URL, url, e))?;

        let method = self
            .pick(self.cli.method.as_deref(), |f| f.webhook.method.as_deref())
            .unwrap_or(defaults::METHOD);
        let method = method
            .parse::<Method>()
            .map_err(|e| ConfigError::invalid(field::METHOD, method, e))?;

        let body_template = self
            .pick(self.cli.body_template.as_deref(), |f| {
                f.webhook.body_template.as_deref()
            })
            .map(checked_template)
            .transpose()?;

        Ok(WebhookConfig {
            url,
            method,
            headers: self.headers()?,
            body_template,
        })
    }

    /// File headers, then flag headers, then the bearer token; later entries
    /// replace earlier ones of the same name.
    fn headers(self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();

        for (name, value) in self.file.into_iter().flat_map(|f| &f.webhook.headers) {
            insert_header(&mut headers, name, value)?;
        }
        for arg in &self.cli.headers {
            let (name, value) = split_header_arg(arg)?;
            insert_header(&mut headers, name, value)?;
        }
        if let Some(token) =
            self.pick(self.cli.bearer.as_deref(), |f| f.webhook.bearer.as_deref())
        {
            insert_header(&mut headers, AUTHORIZATION.as_str(), &format!("Bearer {token}"))?;
        }

        Ok(headers)
    }
}

/// Renders once against an empty context so syntax errors surface at startup.
fn checked_template(template: &str) -> Result<String, ConfigError> {
    Handlebars::new()
        .render_template(template, &serde_json::json!({}))
        .map_err(|e| ConfigError::invalid(field::BODY_TEMPLATE, template, e))?;
    Ok(template.to_string())
}

/// Splits `Key=Value`, or `Key: Value` when there is no `=`.
fn split_header_arg(arg: &str) -> Result<(&str, &str), ConfigError> {
    arg.split_once('=')
        .or_else(|| arg.split_once(':'))
        .map(|(name, value)| (name.trim(), value.trim()))
        .ok_or_else(|| {
            ConfigError::invalid(field::HEADER, arg, "expected 'Key=Value' or 'Key: Value'")
        })
}

// Errors name the header but never echo its value.
fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<(), ConfigError> {
    let key = name
        .parse::<HeaderName>()
        .map_err(|e| ConfigError::invalid(field::HEADER, name, e))?;
    let value =
        HeaderValue::from_str(value).map_err(|e| ConfigError::invalid(field::HEADER, name, e))?;
    headers.insert(key, value);
    Ok(())
}
