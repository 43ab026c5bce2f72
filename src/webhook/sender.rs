//! HTTP webhook sink.

use handlebars::Handlebars;
use serde::Serialize;

use crate::agent::{ChangeEvent, ChangeHandler};
use crate::transport::{HttpClient, HttpRequest};

use super::WebhookError;

/// Delivers each address change as one HTTP request.
///
/// # Template Support
///
/// The body can be templated using Handlebars syntax. Available variables:
/// - `new_ip`: the newly resolved address
/// - `old_ip`: the previous address (`0.0.0.0` on the first change)
/// - `first`: true when no address had been committed before
///
/// Without a template the request has no body.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use checkip_agent::transport::ReqwestClient;
/// use checkip_agent::webhook::HttpWebhook;
/// use url::Url;
///
/// let webhook = HttpWebhook::new(
///     ReqwestClient::with_timeout(Duration::from_secs(10)).unwrap(),
///     Url::parse("https://api.example.com/ddns").unwrap(),
/// )
/// .with_body_template(r#"{"ip": "{{new_ip}}"}"#);
/// assert_eq!(webhook.method(), &http::Method::POST);
/// ```
#[derive(Debug)]
pub struct HttpWebhook<H> {
    client: H,
    url: url::Url,
    method: http::Method,
    headers: http::HeaderMap,
    body_template: Option<String>,
}

impl<H> HttpWebhook<H> {
    /// Creates a new HTTP webhook with default settings.
    ///
    /// Uses POST method, no custom headers and no body template.
    #[must_use]
    pub fn new(client: H, url: url::Url) -> Self {
        Self {
            client,
            url,
            method: http::Method::POST,
            headers: http::HeaderMap::new(),
            body_template: None,
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: http::Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the HTTP headers.
    #[must_use]
    pub fn with_headers(mut self, headers: http::HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the body template (Handlebars syntax).
    #[must_use]
    pub fn with_body_template(mut self, template: impl Into<String>) -> Self {
        self.body_template = Some(template.into());
        self
    }

    /// Returns the configured URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Returns the configured HTTP method.
    #[must_use]
    pub const fn method(&self) -> &http::Method {
        &self.method
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }
}

/// Template data for rendering webhook body.
#[derive(Serialize)]
struct TemplateData {
    new_ip: String,
    old_ip: String,
    first: bool,
}

impl From<&ChangeEvent> for TemplateData {
    fn from(event: &ChangeEvent) -> Self {
        Self {
            new_ip: event.new_address().to_string(),
            old_ip: event.old_address().to_string(),
            first: event.is_first(),
        }
    }
}

impl<H: HttpClient> HttpWebhook<H> {
    fn render_body(&self, event: &ChangeEvent) -> Result<Option<Vec<u8>>, WebhookError> {
        let Some(template) = &self.body_template else {
            return Ok(None);
        };

        let handlebars = Handlebars::new();
        let rendered = handlebars
            .render_template(template, &TemplateData::from(event))
            .map_err(|e| WebhookError::Template(e.to_string()))?;

        Ok(Some(rendered.into_bytes()))
    }

    fn build_request(&self, event: &ChangeEvent) -> Result<HttpRequest, WebhookError> {
        let request = HttpRequest::new(self.method.clone(), self.url.clone())
            .with_headers(self.headers.clone());

        Ok(match self.render_body(event)? {
            Some(body) => request.with_body(body),
            None => request,
        })
    }
}

impl<H: HttpClient> ChangeHandler for HttpWebhook<H> {
    type Error = WebhookError;

    async fn handle(&self, event: &ChangeEvent) -> Result<(), WebhookError> {
        let request = self.build_request(event)?;
        let response = self.client.request(request).await?;

        if response.is_success() {
            return Ok(());
        }

        Err(WebhookError::NonSuccessStatus {
            status: response.status,
            body: response
                .body_text()
                .filter(|b| !b.is_empty())
                .map(ToString::to_string),
        })
    }
}
