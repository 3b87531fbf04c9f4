//! `get episodes` command.

use std::io::{self, Write};

use crate::catalog::{self, SeasonEntry, SERIES};
use crate::selection::ValidationError;

use super::helpers::report_invalid_input;

/// List episode titles for one season, or for the whole series.
pub fn cmd_episodes(season: Option<u32>) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match render_episodes(&mut out, season)? {
        Ok(()) => Ok(()),
        Err(e) => {
            drop(out);
            report_invalid_input(&e, &["get", "episodes"])?;
            Ok(())
        }
    }
}

/// Write the listing. The inner result carries an out-of-range season.
pub fn render_episodes<W: Write>(
    out: &mut W,
    season: Option<u32>,
) -> io::Result<Result<(), ValidationError>> {
    match season {
        None => {
            for entry in &SERIES {
                write_season(out, entry)?;
                writeln!(out)?;
            }
        }
        Some(n) => {
            let entry = u8::try_from(n).ok().and_then(catalog::season);
            match entry {
                Some(entry) => write_season(out, entry)?,
                None => return Ok(Err(ValidationError::InvalidSeason(n))),
            }
        }
    }
    Ok(Ok(()))
}

fn write_season<W: Write>(out: &mut W, entry: &SeasonEntry) -> io::Result<()> {
    writeln!(out, "#### {} ####", entry.name)?;
    for episode in entry.episodes {
        writeln!(out, "{}", episode)?;
    }
    Ok(())
}
