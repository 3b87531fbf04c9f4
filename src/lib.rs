//! Futurama quotes and episode plots.
//!
//! Scrapes WikiQuote season pages for quotes and Wikipedia articles for
//! plot synopses, driven by a static season/episode/character catalog.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod scrapers;
pub mod selection;
