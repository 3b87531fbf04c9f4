//! Shared helpers for integration tests: HTML page builders and an
//! in-memory transport.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use futurama::catalog::SeasonEntry;
use futurama::scrapers::{FetchError, HttpResponse, Transport};
use reqwest::StatusCode;

pub const QUOTES_BASE: &str = "https://quotes.test/wiki";
pub const PLOT_BASE: &str = "https://plots.test/wiki";

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e))
}

fn quote_block(speaker: &str, line: &str) -> String {
    format!("<dl><dd><b>{}</b>: {}</dd></dl>\n", speaker, line)
}

/// Season listing page in the quote wiki layout: table of contents, one
/// heading per episode with two quotes each, then External links.
pub fn season_page(entry: &SeasonEntry) -> String {
    let mut html = String::from("<html><head><title>Futurama</title></head><body>\n");
    html.push_str("<div id=\"toc\"><ul>");
    for episode in entry.episodes {
        html.push_str(&format!("<li>{}</li>", episode));
    }
    html.push_str("</ul></div>\n");

    for episode in entry.episodes {
        html.push_str(&format!(
            "<h2 id=\"{}\">{}</h2>\n",
            episode.replace(' ', "_"),
            episode
        ));
        html.push_str(&quote_block("Fry", &format!("Here's a line from {}.", episode)));
        html.push_str("<hr>\n");
        html.push_str(&quote_block("Leela", "Fry, shut up."));
    }

    html.push_str("<h2 id=\"External_links\">External links</h2>\n");
    html.push_str("<ul><li>Wikipedia</li></ul>\n</body></html>\n");
    html
}

/// Single-episode page with a Dialogue section.
pub fn episode_page(episode: &str) -> String {
    let mut html = String::from("<html><body>\n");
    html.push_str(&format!("<p>{} is an episode of Futurama.</p>\n", episode));
    html.push_str("<h2 id=\"Dialogue\">Dialogue</h2>\n");
    html.push_str(&quote_block("Bender", &format!("I'm in {}!", episode)));
    html.push_str("<hr>\n");
    html.push_str(&quote_block("Professor Farnsworth", "Good news, everyone!"));
    html.push_str("<h2 id=\"Cast\">Cast</h2>\n<ul><li>Billy West</li></ul>\n</body></html>\n");
    html
}

/// Serves pages by exact URL. The first `failures` requests fail with a 503.
pub struct MockTransport {
    pages: HashMap<String, String>,
    failures: Mutex<u32>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            failures: Mutex::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    pub fn with_failures(self, failures: u32) -> Self {
        *self.failures.lock().unwrap() = failures;
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        let mut failures = self.failures.lock().unwrap();
        if *failures > 0 {
            *failures -= 1;
            let mut resp = HttpResponse::html("");
            resp.status = StatusCode::SERVICE_UNAVAILABLE;
            return Ok(resp);
        }

        Ok(match self.pages.get(url) {
            Some(html) => HttpResponse::html(html.clone()),
            None => {
                let mut resp = HttpResponse::html("");
                resp.status = StatusCode::NOT_FOUND;
                resp
            }
        })
    }
}
