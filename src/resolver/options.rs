//! Validated resolver configuration.

use url::Url;

use super::{BuildError, Extractor};

/// Public IP-echo endpoint used when no URL is configured.
pub const DEFAULT_URL: &str = "https://checkip.amazonaws.com";

/// Dotted-quad pattern used when no pattern is configured.
///
/// It has no named groups, so it extracts the bare first match.
pub const DEFAULT_PATTERN: &str = r"(?:\d{1,3}\.){3}\d{1,3}";

/// Endpoint and extraction pattern for an [`HttpResolver`](super::HttpResolver).
///
/// Each field is validated when it is set, so a value of this type is
/// always usable.
///
/// # Example
///
/// ```
/// use checkip_agent::resolver::ResolverOptions;
///
/// let options = ResolverOptions::default()
///     .with_url("https://api.ipify.org")
///     .unwrap()
///     .with_pattern(r"(?P<ip>\d+\.\d+\.\d+\.\d+)")
///     .unwrap();
/// assert_eq!(options.url().as_str(), "https://api.ipify.org/");
/// ```
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    url: Url,
    extractor: Extractor,
}

impl ResolverOptions {
    /// Replaces the endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidUrl`] unless `url` is a well-formed absolute URL.
    pub fn with_url(mut self, url: &str) -> Result<Self, BuildError> {
        self.url = Url::parse(url).map_err(|source| BuildError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(self)
    }

    /// Replaces the extraction pattern.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidPattern`] if `pattern` does not compile.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, BuildError> {
        self.extractor = Extractor::new(pattern).map_err(|source| BuildError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self)
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the compiled extractor.
    #[must_use]
    pub const fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub(super) fn into_parts(self) -> (Url, Extractor) {
        (self.url, self.extractor)
    }
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_URL).expect("DEFAULT_URL is a valid absolute URL"),
            extractor: Extractor::new(DEFAULT_PATTERN).expect("DEFAULT_PATTERN compiles"),
        }
    }
}
