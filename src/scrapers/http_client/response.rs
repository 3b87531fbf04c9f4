//! HTTP response wrapper.

use std::collections::HashMap;

use reqwest::StatusCode;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    /// Header names are lowercase.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Build a 200 `text/html` response, mostly for tests and fixtures.
    pub fn html(body: impl Into<Vec<u8>>) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            "text/html; charset=UTF-8".to_string(),
        );
        Self::new(StatusCode::OK, headers, body.into())
    }

    /// Check if the response is 200 OK.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(|s| s.as_str())
    }

    /// Check that the Content-Type header names an HTML media type.
    pub fn is_html(&self) -> bool {
        self.content_type()
            .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("text/html"))
            .unwrap_or(false)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
