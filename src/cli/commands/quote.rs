//! `get quote` command.

use std::io::{self, Write};

use rand::Rng;
use tracing::debug;

use crate::config::Settings;
use crate::models::{Quote, Season};
use crate::scrapers::WikiScraper;
use crate::selection::{self, QuoteMode, QuotePlan, QuoteRequest};

use super::helpers::report_invalid_input;

/// Separator printed after each quote in `--all` mode.
const QUOTE_DELIMITER: &str = "----";

/// Print a quote (or every quote of an episode) per the request flags.
pub async fn cmd_quote(settings: &Settings, request: &QuoteRequest) -> anyhow::Result<()> {
    let validated = match request.validate() {
        Ok(v) => v,
        Err(e) => {
            report_invalid_input(&e, &["get", "quote"])?;
            return Ok(());
        }
    };

    let plan = validated.plan(&mut rand::rng());
    debug!(season = plan.season, episode = %plan.episode, mode = ?plan.mode, "Planned quote lookup");

    let scraper = WikiScraper::from_settings(settings)?;
    let season = scraper.season_quotes(plan.season, &plan.episode).await?;

    let mut out = io::stdout().lock();
    render_quote(&mut out, &plan, &season, &mut rand::rng())?;
    Ok(())
}

/// Select from the scraped season according to `plan` and write the result.
pub fn render_quote<W: Write, R: Rng>(
    out: &mut W,
    plan: &QuotePlan,
    season: &Season,
    rng: &mut R,
) -> anyhow::Result<()> {
    match &plan.mode {
        QuoteMode::Random => {
            let episode = selection::find_episode(season, &plan.episode)?;
            let quote = selection::pick_random_quote(episode, rng)?;
            write_header(out, plan.season, &episode.name)?;
            write_lines(out, quote)?;
        }
        QuoteMode::AllQuotes => {
            let episode = selection::find_episode(season, &plan.episode)?;
            write_header(out, plan.season, &episode.name)?;
            for quote in &episode.quotes {
                write_lines(out, quote)?;
                writeln!(out, "{}", QUOTE_DELIMITER)?;
            }
        }
        QuoteMode::ByCharacter(character) => {
            let (episode, quote) = selection::pick_character_quote(season, character, rng)?;
            write_header(out, plan.season, &episode.name)?;
            write_lines(out, quote)?;
        }
    }
    Ok(())
}

fn write_header<W: Write>(out: &mut W, season: u8, episode: &str) -> io::Result<()> {
    writeln!(out, "Season: {}", season)?;
    writeln!(out, "Episode: {}", episode)?;
    writeln!(out)
}

fn write_lines<W: Write>(out: &mut W, quote: &Quote) -> io::Result<()> {
    for line in &quote.lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Episode;
    use crate::selection::SelectError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quote(lines: &[&str], characters: &[&str]) -> Quote {
        Quote {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            characters: characters.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn season() -> Season {
        let mut season = Season::new("Season 1");
        season.episodes.push(Episode {
            name: "Space Pilot 3000".to_string(),
            quotes: vec![
                quote(&["Fry: Space. It seems to go on and on forever."], &["Fry"]),
                quote(
                    &["Bender: Bite my shiny metal ass!", "Fry: Wow."],
                    &["Bender", "Fry"],
                ),
            ],
        });
        season.episodes.push(Episode {
            name: "The Series Has Landed".to_string(),
            quotes: vec![quote(&["Leela: Hey, are you guys okay?"], &["Leela"])],
        });
        season
    }

    fn plan(episode: &str, mode: QuoteMode) -> QuotePlan {
        QuotePlan {
            season: 1,
            episode: episode.to_string(),
            mode,
        }
    }

    fn render(plan: &QuotePlan) -> anyhow::Result<String> {
        let mut out = Vec::new();
        render_quote(&mut out, plan, &season(), &mut StdRng::seed_from_u64(3000))?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_random_quote_header() {
        let text = render(&plan("The Series Has Landed", QuoteMode::Random)).unwrap();
        assert_eq!(
            text,
            "Season: 1\nEpisode: The Series Has Landed\n\nLeela: Hey, are you guys okay?\n"
        );
    }

    #[test]
    fn test_all_quotes_delimited() {
        let text = render(&plan("Space Pilot 3000", QuoteMode::AllQuotes)).unwrap();
        let expected = "Season: 1\nEpisode: Space Pilot 3000\n\n\
            Fry: Space. It seems to go on and on forever.\n----\n\
            Bender: Bite my shiny metal ass!\nFry: Wow.\n----\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_character_quote_is_theirs() {
        let text = render(&plan("", QuoteMode::ByCharacter("Bender".to_string()))).unwrap();
        assert!(text.starts_with("Season: 1\nEpisode: Space Pilot 3000\n\n"));
        assert!(text.contains("Bender: Bite my shiny metal ass!"));
    }

    #[test]
    fn test_character_absent() {
        let err = render(&plan("", QuoteMode::ByCharacter("Zoidberg".to_string()))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SelectError>(),
            Some(SelectError::CharacterNotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_episode() {
        let err = render(&plan("Fry and the Slurm Factory", QuoteMode::Random)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SelectError>(),
            Some(SelectError::EpisodeNotFound(_))
        ));
    }
}
