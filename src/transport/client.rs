use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// [`HttpClient`] backed by `reqwest`.
///
/// One instance is shared by the resolver and the webhook, so a single
/// timeout bounds every request the agent makes.
///
/// ```no_run
/// use std::time::Duration;
///
/// use checkip_agent::transport::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::with_timeout(Duration::from_secs(10))?;
/// let url = Url::parse("https://checkip.amazonaws.com")?;
/// let response = client.request(HttpRequest::get(url)).await?;
/// println!("{}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Builds a client whose requests, body included, give up after `timeout`.
    ///
    /// # Errors
    ///
    /// [`HttpError::Connect`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map(|inner| Self { inner })
            .map_err(|e| HttpError::Connect(Box::new(e)))
    }
}

/// Maps a failure that happened before the response head arrived.
fn before_head(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::Request(e.to_string())
    } else {
        HttpError::Connect(Box::new(e))
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url).headers(req.headers);
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(before_head)?;
        let status = response.status();

        // Past this point every failure, timeouts included, is a body failure.
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Body(Box::new(e)))?;

        Ok(HttpResponse::new(status, body))
    }
}
