//! Plot extraction from an encyclopedia episode article.

use std::mem;

use tracing::debug;

use super::Step;
use crate::models::Plot;
use crate::scrapers::tokens::{ScanError, Token, TokenSource};

/// Section-edit link text left behind in headings and paragraphs.
pub const EDIT_ARTIFACT: &str = "[edit]";

const PLOT_MARKER: &str = "Plot";

/// Where the plot machine is on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotState {
    /// Looking for the start of the Plot section.
    SeekPlot,
    /// Inside the Plot section, between paragraphs.
    SeekParagraph,
    /// Accumulating text until the named element closes.
    InParagraph(String),
    Done,
}

/// Explicit state machine for plot sections.
#[derive(Debug)]
pub struct PlotMachine {
    state: PlotState,
    paragraphs: Vec<String>,
    buffer: String,
}

impl Default for PlotMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotMachine {
    pub fn new() -> Self {
        Self {
            state: PlotState::SeekPlot,
            paragraphs: Vec::new(),
            buffer: String::new(),
        }
    }

    pub fn state(&self) -> &PlotState {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == PlotState::Done
    }

    pub fn feed(&mut self, token: &Token) {
        while self.step(token) == Step::Reprocess {}
    }

    fn step(&mut self, token: &Token) -> Step {
        match &self.state {
            PlotState::SeekPlot => {
                if let Token::Start(tag) = token {
                    if tag.has_attr_value(PLOT_MARKER) {
                        debug!("Found plot section");
                        self.state = PlotState::SeekParagraph;
                    }
                }
            }
            PlotState::SeekParagraph => {
                if let Token::Start(tag) = token {
                    match tag.name.as_str() {
                        "p" | "h3" => {
                            self.buffer.clear();
                            self.state = PlotState::InParagraph(tag.name.clone());
                        }
                        "h2" => {
                            debug!(paragraphs = self.paragraphs.len(), "Reached end of plot section");
                            self.state = PlotState::Done;
                        }
                        _ => {}
                    }
                }
            }
            PlotState::InParagraph(open) => match token {
                Token::Text(text) => self.buffer.push_str(text),
                Token::End(name) if name == open => {
                    self.paragraphs.push(mem::take(&mut self.buffer));
                    self.state = PlotState::SeekParagraph;
                }
                _ => {}
            },
            PlotState::Done => {}
        }
        Step::Consumed
    }

    /// Return the finished paragraphs with edit-link artifacts removed.
    ///
    /// A paragraph still open at end of input is dropped, as are paragraphs
    /// left blank once the artifact is stripped.
    pub fn finish(self) -> Plot {
        let paragraphs = self
            .paragraphs
            .into_iter()
            .map(|p| p.replace(EDIT_ARTIFACT, ""))
            .filter(|p| !p.trim().is_empty())
            .collect();
        Plot { paragraphs }
    }
}

/// Extract the Plot section of an episode article.
pub fn extract_plot<S: TokenSource + ?Sized>(source: &mut S) -> Result<Plot, ScanError> {
    let mut machine = PlotMachine::new();
    while let Some(token) = source.next_token()? {
        machine.feed(&token);
        if machine.is_done() {
            break;
        }
    }
    Ok(machine.finish())
}
