//! Markup events for the extraction state machines.
//!
//! `HtmlTokens` parses a page with `scraper` and replays the document in
//! order as start/end/text events, so the extractors only ever see a flat
//! token stream. Anything implementing `TokenSource` can drive them, which
//! is how the tests feed hand-built sequences.

use std::collections::VecDeque;

use scraper::{ElementRef, Html};
use thiserror::Error;

/// Elements that never have content and are reported as `SelfClosing`.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Errors reported by a token source. End of input is not an error; sources
/// signal it by returning `Ok(None)`.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("response body is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("error tokenizing HTML: {0}")]
    Tokenizer(String),
}

/// A start or self-closing tag with its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether any attribute carries exactly this value.
    pub fn has_attr_value(&self, value: &str) -> bool {
        self.attrs.iter().any(|(_, v)| v == value)
    }
}

/// One markup event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Start(Tag),
    End(String),
    SelfClosing(Tag),
    Text(String),
}

impl Token {
    pub fn start(name: &str) -> Self {
        Token::Start(Tag::new(name))
    }

    pub fn end(name: &str) -> Self {
        Token::End(name.to_string())
    }

    pub fn text(text: &str) -> Self {
        Token::Text(text.to_string())
    }
}

/// Pull-based source of markup events.
pub trait TokenSource {
    /// Next event, `Ok(None)` at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, ScanError>;
}

impl<I> TokenSource for I
where
    I: Iterator<Item = Result<Token, ScanError>>,
{
    fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        self.next().transpose()
    }
}

/// Token stream over a parsed HTML document.
#[derive(Debug, Default)]
pub struct HtmlTokens {
    queue: VecDeque<Token>,
}

impl HtmlTokens {
    /// Tokenize a raw response body.
    pub fn from_bytes(body: &[u8]) -> Result<Self, ScanError> {
        let html = std::str::from_utf8(body)?;
        Ok(Self::parse(html))
    }

    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut queue = VecDeque::new();
        walk(document.root_element(), &mut queue);
        Self { queue }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Iterator for HtmlTokens {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().map(Ok)
    }
}

fn walk(element: ElementRef<'_>, out: &mut VecDeque<Token>) {
    let el = element.value();
    let tag = Tag {
        name: el.name().to_string(),
        attrs: el
            .attrs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    };

    if VOID_ELEMENTS.contains(&el.name()) {
        out.push_back(Token::SelfClosing(tag));
        return;
    }

    out.push_back(Token::Start(tag));
    for child in element.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            walk(child_el, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_back(Token::Text(String::from(&**text)));
        }
    }
    out.push_back(Token::End(el.name().to_string()));
}
