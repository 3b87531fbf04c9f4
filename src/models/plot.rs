//! Episode plot description scraped from the encyclopedia page.

/// Plot paragraphs in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plot {
    pub paragraphs: Vec<String>,
}

impl Plot {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
