//! Data models for scraped show content.

mod plot;
mod quote;

pub use plot::Plot;
pub use quote::{Episode, Quote, Season};
