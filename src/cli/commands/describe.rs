//! `describe episode` command.

use std::io::{self, Write};

use crate::catalog::{self, EpisodeLocation};
use crate::config::Settings;
use crate::models::Plot;
use crate::scrapers::WikiScraper;
use crate::selection::ValidationError;

use super::helpers::report_invalid_input;

const SECTION_RULE: &str = "----";

/// Print the catalog position, plot synopsis and reference links of an episode.
pub async fn cmd_describe_episode(settings: &Settings, name: &str) -> anyhow::Result<()> {
    let location = match catalog::locate_episode(name) {
        Some(location) => location,
        None => {
            let err = ValidationError::InvalidEpisode(name.to_string());
            report_invalid_input(&err, &["describe", "episode"])?;
            return Ok(());
        }
    };

    let scraper = WikiScraper::from_settings(settings)?;
    let plot = scraper.episode_plot(name).await?;
    let links = scraper.urls().reference_links(name);

    let mut out = io::stdout().lock();
    render_description(&mut out, name, location, &plot, &links)?;
    Ok(())
}

pub fn render_description<W: Write>(
    out: &mut W,
    title: &str,
    location: EpisodeLocation,
    plot: &Plot,
    links: &[String],
) -> io::Result<()> {
    writeln!(out)?;
    write_section(out, "INFO")?;
    writeln!(out, "Season: {}", location.season)?;
    writeln!(out, "Episode: {}", location.episode)?;
    writeln!(out, "Title: {}", title)?;
    writeln!(out)?;

    write_section(out, "PLOT")?;
    for paragraph in &plot.paragraphs {
        writeln!(out, "{}", paragraph.trim())?;
        writeln!(out)?;
    }

    write_section(out, "LINKS")?;
    for link in links {
        writeln!(out, "{}", link)?;
    }
    Ok(())
}

fn write_section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", SECTION_RULE)
}
