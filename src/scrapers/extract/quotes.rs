//! Quote extraction for season listing pages and single-episode pages.

use std::mem;

use tracing::debug;

use super::Step;
use crate::catalog::normalize_name;
use crate::models::{Episode, Quote, Season};
use crate::scrapers::tokens::{ScanError, Tag, Token, TokenSource};

/// Marker on the closing section of a season page.
const EXTERNAL_LINKS_MARKER: &str = "External_links";
const EXTERNAL_LINKS_TITLE: &str = "External links";

/// Marker on the dialogue section of a single-episode page.
const DIALOGUE_MARKER: &str = "Dialogue";

/// Where the quote machine is on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteState {
    /// Discarding events until the episode table of contents closes.
    SeekEpisodeListEnd,
    /// Looking for the next episode heading.
    SeekHeading,
    /// Inside a heading, waiting for the episode title text.
    ReadEpisodeName,
    /// Looking for the dialogue section of a single-episode page.
    SeekDialogue,
    /// Inside an episode, looking for a quote line, separator or heading.
    SeekQuoteLine,
    /// Accumulating one dialogue line.
    InQuoteLine,
    Done,
}

fn is_heading(tag: &Tag) -> bool {
    matches!(tag.name.as_str(), "h2" | "h3")
}

fn opens_quote_line(tag: &Tag) -> bool {
    matches!(tag.name.as_str(), "dl" | "dd")
}

/// Explicit state machine for quote pages.
///
/// Entering an episode pushes the state to resume once that episode's
/// heading-delimited region ends: `SeekHeading` on season pages, `Done` on
/// single-episode pages.
#[derive(Debug)]
pub struct QuoteMachine {
    state: QuoteState,
    returns: Vec<QuoteState>,
    season: Season,
    episode: Option<Episode>,
    /// Title of the only episode on a single-episode page.
    fixed_episode: Option<String>,
    quote: Quote,
    line: String,
    speaker_pending: bool,
}

impl QuoteMachine {
    /// Machine for a page listing every episode of a season.
    pub fn season_page(season_name: &str) -> Self {
        Self::with_state(season_name, QuoteState::SeekEpisodeListEnd, None)
    }

    /// Machine for a page holding the quotes of exactly one episode.
    pub fn episode_page(season_name: &str, episode_name: &str) -> Self {
        Self::with_state(
            season_name,
            QuoteState::SeekDialogue,
            Some(episode_name.to_string()),
        )
    }

    fn with_state(season_name: &str, state: QuoteState, fixed_episode: Option<String>) -> Self {
        Self {
            state,
            returns: Vec::new(),
            season: Season::new(season_name),
            episode: None,
            fixed_episode,
            quote: Quote::default(),
            line: String::new(),
            speaker_pending: false,
        }
    }

    pub fn state(&self) -> QuoteState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == QuoteState::Done
    }

    /// Feed one token, re-dispatching it while states hand it on.
    pub fn feed(&mut self, token: &Token) {
        while self.step(token) == Step::Reprocess {}
    }

    fn step(&mut self, token: &Token) -> Step {
        match self.state {
            QuoteState::SeekEpisodeListEnd => {
                if matches!(token, Token::End(name) if name == "ul") {
                    self.state = QuoteState::SeekHeading;
                }
                Step::Consumed
            }
            QuoteState::SeekHeading => {
                if let Token::Start(tag) = token {
                    if is_heading(tag) {
                        if tag.has_attr_value(EXTERNAL_LINKS_MARKER) {
                            self.finish_page();
                        } else {
                            self.state = QuoteState::ReadEpisodeName;
                        }
                    }
                }
                Step::Consumed
            }
            QuoteState::ReadEpisodeName => {
                match token {
                    Token::Start(tag) if tag.has_attr_value(EXTERNAL_LINKS_MARKER) => {
                        self.finish_page();
                    }
                    Token::Text(text) if !text.trim().is_empty() => {
                        let name = text.trim();
                        if name == EXTERNAL_LINKS_TITLE {
                            self.finish_page();
                        } else {
                            debug!(episode = name, "Found episode heading");
                            self.enter_episode(Episode::new(name), QuoteState::SeekHeading);
                        }
                    }
                    _ => {}
                }
                Step::Consumed
            }
            QuoteState::SeekDialogue => {
                if let Token::Start(tag) = token {
                    if tag.has_attr_value(DIALOGUE_MARKER) {
                        let name = self.fixed_episode.clone().unwrap_or_default();
                        debug!(episode = %name, "Found dialogue section");
                        self.enter_episode(Episode::new(name), QuoteState::Done);
                    }
                }
                Step::Consumed
            }
            QuoteState::SeekQuoteLine => match token {
                Token::Start(tag) if opens_quote_line(tag) => {
                    self.line.clear();
                    self.speaker_pending = false;
                    self.state = QuoteState::InQuoteLine;
                    Step::Consumed
                }
                Token::SelfClosing(tag) | Token::Start(tag) if tag.is("hr") => {
                    self.close_quote();
                    Step::Consumed
                }
                Token::Start(tag) if is_heading(tag) => {
                    self.close_quote();
                    self.close_episode();
                    self.state = self.returns.pop().unwrap_or(QuoteState::Done);
                    if self.state == QuoteState::Done {
                        Step::Consumed
                    } else {
                        Step::Reprocess
                    }
                }
                _ => Step::Consumed,
            },
            QuoteState::InQuoteLine => {
                match token {
                    Token::Start(tag) if tag.is("b") => self.speaker_pending = true,
                    Token::Text(text) => {
                        self.line.push_str(text);
                        if self.speaker_pending {
                            self.quote.characters.insert(normalize_name(text));
                            self.speaker_pending = false;
                        }
                    }
                    Token::End(name) if name == "dd" => {
                        self.quote.lines.push(mem::take(&mut self.line));
                        self.state = QuoteState::SeekQuoteLine;
                    }
                    _ => {}
                }
                Step::Consumed
            }
            QuoteState::Done => Step::Consumed,
        }
    }

    fn enter_episode(&mut self, episode: Episode, resume: QuoteState) {
        self.episode = Some(episode);
        self.quote = Quote::default();
        self.returns.push(resume);
        self.state = QuoteState::SeekQuoteLine;
    }

    /// Close the current quote. Blocks without any finished line are dropped.
    fn close_quote(&mut self) {
        let quote = mem::take(&mut self.quote);
        if quote.is_empty() {
            return;
        }
        if let Some(episode) = self.episode.as_mut() {
            episode.quotes.push(quote);
        }
    }

    fn close_episode(&mut self) {
        if let Some(episode) = self.episode.take() {
            debug!(
                episode = %episode.name,
                quotes = episode.quotes.len(),
                "Finished episode"
            );
            self.season.episodes.push(episode);
        }
    }

    fn finish_page(&mut self) {
        debug!("Reached end of quote section");
        self.state = QuoteState::Done;
    }

    /// Close whatever is still open and return the season.
    ///
    /// A line still being accumulated is dropped; finished lines of the
    /// current quote are kept. A single-episode page always yields exactly
    /// one episode, even when its dialogue section was never found.
    pub fn finish(mut self) -> Season {
        self.close_quote();
        self.close_episode();
        if let Some(name) = self.fixed_episode.take() {
            if self.season.episodes.is_empty() {
                self.season.episodes.push(Episode::new(name));
            }
        }
        self.season
    }
}

fn drive<S: TokenSource + ?Sized>(
    mut machine: QuoteMachine,
    source: &mut S,
) -> Result<Season, ScanError> {
    while let Some(token) = source.next_token()? {
        machine.feed(&token);
        if machine.is_done() {
            break;
        }
    }
    Ok(machine.finish())
}

/// Extract every episode's quotes from a season listing page.
pub fn extract_season_quotes<S: TokenSource + ?Sized>(
    source: &mut S,
    season_name: &str,
) -> Result<Season, ScanError> {
    drive(QuoteMachine::season_page(season_name), source)
}

/// Extract the quotes of one episode from its own page.
pub fn extract_episode_quotes<S: TokenSource + ?Sized>(
    source: &mut S,
    season_name: &str,
    episode_name: &str,
) -> Result<Season, ScanError> {
    drive(QuoteMachine::episode_page(season_name, episode_name), source)
}
