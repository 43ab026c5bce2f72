use std::future::Future;

use http::{HeaderMap, Method, StatusCode};
use url::Url;

use super::HttpError;

/// A request as handed to an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// A request with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// The bodiless GET the resolver issues.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Replaces the header map.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status and fully buffered body of a response.
///
/// Response headers are not kept; neither the resolver nor the webhook
/// looks at them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx, the webhook's notion of delivered.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Canonical reason phrase, `"Unknown"` for unregistered codes.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("Unknown")
    }

    /// The body when it is valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Sends one request and buffers the whole response.
///
/// Timeouts are a property of the implementation, not of the request. Tests
/// substitute scripted clients for [`super::ReqwestClient`].
pub trait HttpClient: Send + Sync {
    /// # Errors
    ///
    /// [`HttpError::Body`] when the head arrived but the body could not be
    /// read; any other [`HttpError`] when no head arrived.
    fn request(&self, req: HttpRequest)
    -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}
