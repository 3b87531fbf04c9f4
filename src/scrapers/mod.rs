//! Scrapers for the quote wiki and the encyclopedia wiki.
//!
//! A scrape is strictly sequential: one page is fetched (with retries), the
//! body is tokenized, and the token stream is walked to completion by one of
//! the extraction state machines.

pub mod extract;
pub mod http_client;
pub mod tokens;
pub mod urls;

pub use http_client::{FetchError, HttpClient, HttpResponse, ReqwestTransport, Transport};
pub use tokens::{HtmlTokens, ScanError, Tag, Token, TokenSource};
pub use urls::{encode_title, WikiUrls};

use thiserror::Error;
use tracing::info;

use crate::catalog::PER_EPISODE_SEASON;
use crate::config::Settings;
use crate::models::{Plot, Season};

/// Errors from a complete fetch-and-extract run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Fetches wiki pages and runs the matching extractor over them.
pub struct WikiScraper<T = ReqwestTransport> {
    client: HttpClient<T>,
    urls: WikiUrls,
}

impl WikiScraper<ReqwestTransport> {
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        Ok(Self::new(
            HttpClient::from_settings(settings)?,
            WikiUrls::from_settings(settings),
        ))
    }
}

impl<T: Transport> WikiScraper<T> {
    pub fn new(client: HttpClient<T>, urls: WikiUrls) -> Self {
        Self { client, urls }
    }

    pub fn client(&self) -> &HttpClient<T> {
        &self.client
    }

    pub fn urls(&self) -> &WikiUrls {
        &self.urls
    }

    /// Scrape the quotes needed to answer a request for `episode` in
    /// `season`.
    ///
    /// Most seasons have one page listing every episode. Season 5 has one
    /// page per episode, so only `episode` is scraped and the result is a
    /// one-episode season.
    pub async fn season_quotes(&self, season: u8, episode: &str) -> Result<Season, ScrapeError> {
        let season_name = format!("Season {}", season);

        let result = if season == PER_EPISODE_SEASON {
            let url = self.urls.episode_quotes(episode);
            let response = self.client.get_html(&url).await?;
            let mut tokens = HtmlTokens::from_bytes(response.body())?;
            extract::extract_episode_quotes(&mut tokens, &season_name, episode)?
        } else {
            let url = self.urls.season_quotes(season);
            let response = self.client.get_html(&url).await?;
            let mut tokens = HtmlTokens::from_bytes(response.body())?;
            extract::extract_season_quotes(&mut tokens, &season_name)?
        };

        info!(
            season = %result.name,
            episodes = result.episodes.len(),
            quotes = result.quote_count(),
            "Extracted quotes"
        );
        Ok(result)
    }

    /// Scrape the plot section of an episode's encyclopedia article.
    pub async fn episode_plot(&self, episode: &str) -> Result<Plot, ScrapeError> {
        let url = self.urls.plot(episode);
        let response = self.client.get_html(&url).await?;
        let mut tokens = HtmlTokens::from_bytes(response.body())?;
        let plot = extract::extract_plot(&mut tokens)?;

        info!(episode, paragraphs = plot.paragraphs.len(), "Extracted plot");
        Ok(plot)
    }
}
