//! HTTP client with bounded, linearly backed-off retries.

mod response;
mod user_agent;

pub use response::HttpResponse;
pub use user_agent::{resolve_user_agent, UserAgentMode, IMPERSONATE_USER_AGENTS, USER_AGENT};

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Settings;

/// Default number of attempts before a fetch is abandoned.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    BadStatus { url: String, status: u16 },

    #[error("{url} returned content type {content_type}, not text/html")]
    BadContentType { url: String, content_type: String },

    #[error("giving up on {url} after {attempts} attempts")]
    Exhausted {
        url: String,
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

impl FetchError {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, FetchError::Exhausted { .. })
    }
}

/// One GET round trip. Implementations return whatever the server sent;
/// status and content-type policy lives in `HttpClient`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// `Transport` backed by a reqwest client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.to_string(), v.to_string());
            }
        }

        let body = response.bytes().await?.to_vec();
        debug!(
            url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fetched page"
        );

        Ok(HttpResponse::new(status, headers, body))
    }
}

/// HTTP client that insists on a 200 HTML response.
///
/// Failed attempts are retried with a linear backoff: after attempt `n`
/// fails the client sleeps `n * backoff` before trying again.
pub struct HttpClient<T = ReqwestTransport> {
    transport: T,
    max_attempts: u32,
    backoff: Duration,
}

impl HttpClient<ReqwestTransport> {
    /// Create a client from settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let user_agent = resolve_user_agent(settings.user_agent.as_deref());
        let transport = ReqwestTransport::new(&user_agent, settings.request_timeout())?;
        Ok(Self::with_transport(transport)
            .with_max_attempts(settings.max_attempts)
            .with_backoff(settings.retry_backoff()))
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: Duration::from_secs(1),
        }
    }

    /// Set the attempt limit. Values below one are treated as one.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch an HTML page, retrying on transport errors, non-200 status and
    /// non-HTML content types.
    pub async fn get_html(&self, url: &str) -> Result<HttpResponse, FetchError> {
        info!(url, "Fetching page");

        let mut attempt = 1;
        loop {
            let err = match self.transport.fetch(url).await {
                Ok(response) => match check_response(url, response) {
                    Ok(response) => return Ok(response),
                    Err(e) => e,
                },
                Err(e) => e,
            };

            if attempt >= self.max_attempts {
                return Err(FetchError::Exhausted {
                    url: url.to_string(),
                    attempts: attempt,
                    last: Box::new(err),
                });
            }

            let delay = self.backoff * attempt;
            warn!(
                url,
                attempt,
                max_attempts = self.max_attempts,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Fetch attempt failed, retrying"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

fn check_response(url: &str, response: HttpResponse) -> Result<HttpResponse, FetchError> {
    if !response.is_ok() {
        return Err(FetchError::BadStatus {
            url: url.to_string(),
            status: response.status.as_u16(),
        });
    }
    if !response.is_html() {
        return Err(FetchError::BadContentType {
            url: url.to_string(),
            content_type: response.content_type().unwrap_or("<none>").to_string(),
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    /// Serves queued responses in order and records every requested URL.
    struct ScriptedTransport {
        responses: Mutex<Vec<HttpResponse>>,
        requests: Mutex<Vec<String>>,
    }

    impl ScriptedTransport {
        fn new(mut responses: Vec<HttpResponse>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn fetch(&self, url: &str) -> Result<HttpResponse, FetchError> {
            self.requests.lock().unwrap().push(url.to_string());
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| status(StatusCode::INTERNAL_SERVER_ERROR)))
        }
    }

    fn status(code: StatusCode) -> HttpResponse {
        let mut resp = HttpResponse::html("");
        resp.status = code;
        resp
    }

    fn json() -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        HttpResponse::new(StatusCode::OK, headers, b"{}".to_vec())
    }

    fn client(responses: Vec<HttpResponse>) -> HttpClient<ScriptedTransport> {
        HttpClient::with_transport(ScriptedTransport::new(responses)).with_backoff(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_first_attempt_success() {
        let client = client(vec![HttpResponse::html("<p>ok</p>")]);
        let resp = client.get_html("https://example.test/a").await.unwrap();
        assert_eq!(resp.body(), b"<p>ok</p>");
        assert_eq!(client.transport().request_count(), 1);
    }

    #[tokio::test]
    async fn test_succeeds_on_third_attempt() {
        let client = client(vec![
            status(StatusCode::NOT_FOUND),
            json(),
            HttpResponse::html("<p>third</p>"),
        ]);
        let resp = client.get_html("https://example.test/a").await.unwrap();
        assert_eq!(resp.body(), b"<p>third</p>");
        assert_eq!(client.transport().request_count(), 3);
    }

    #[tokio::test]
    async fn test_exhausted_after_five_attempts() {
        let client = client(vec![]);
        let err = client.get_html("https://example.test/a").await.unwrap_err();

        assert!(err.is_exhausted());
        assert_eq!(client.transport().request_count(), 5);
        match err {
            FetchError::Exhausted { attempts, last, .. } => {
                assert_eq!(attempts, 5);
                assert!(matches!(*last, FetchError::BadStatus { status: 500, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_bad_content_type_is_retried() {
        let client = client(vec![json(), json()]).with_max_attempts(2);
        let err = client.get_html("https://example.test/a").await.unwrap_err();

        match err {
            FetchError::Exhausted { attempts, last, .. } => {
                assert_eq!(attempts, 2);
                assert!(matches!(*last, FetchError::BadContentType { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_zero_attempts_still_tries_once() {
        let client = client(vec![HttpResponse::html("x")]).with_max_attempts(0);
        assert_eq!(client.max_attempts(), 1);
        assert!(client.get_html("https://example.test/a").await.is_ok());
    }

    #[test]
    fn test_check_response_accepts_html_200() {
        assert!(check_response("u", HttpResponse::html("x")).is_ok());
        assert!(matches!(
            check_response("u", status(StatusCode::MOVED_PERMANENTLY)),
            Err(FetchError::BadStatus { status: 301, .. })
        ));
    }
}
