//! Quote request validation, randomization and selection.
//!
//! A request moves through three immutable stages: `QuoteRequest` (raw
//! flags), `ValidatedRequest` (checked against the catalog) and `QuotePlan`
//! (season and episode fixed, randomizing where the user left them open).
//! Selection then works on the scraped `Season`.

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

use crate::catalog::{self, SEASON_COUNT};
use crate::models::{Episode, Quote, Season};

/// The next season not yet on the quote wiki.
const UPCOMING_SEASON: u8 = 8;

/// User input errors. These are reported with usage help, not as failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Season {0} compatibility coming soon! Please select a value from 1-7.")]
    SeasonComingSoon(u8),

    #[error("Invalid season number. Please select a value from 1-7.")]
    InvalidSeason(u32),

    #[error("Invalid episode name. Please use the `futurama get episodes` command for assistance.")]
    InvalidEpisode(String),

    #[error("Episode \"{episode}\" is in season {actual}, not season {requested}.")]
    SeasonEpisodeMismatch {
        episode: String,
        requested: u8,
        actual: u8,
    },

    #[error("Invalid character input. Please use the 'futurama get characters' command for assistance.")]
    UnsupportedCharacter(String),

    #[error("The --all flag must be set with the --episode flag.")]
    AllRequiresEpisode,

    #[error("The --{0} and --{1} flags cannot be used together.")]
    ConflictingFlags(&'static str, &'static str),
}

/// Failures selecting from scraped data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no quotes from {character} found in {season}")]
    CharacterNotFound { character: String, season: String },

    #[error("episode \"{0}\" was not found on the quote page")]
    EpisodeNotFound(String),

    #[error("no quotes found for episode \"{0}\"")]
    NoQuotes(String),
}

/// Raw `get quote` flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRequest {
    pub season: Option<u32>,
    pub episode: Option<String>,
    pub character: Option<String>,
    pub all: bool,
}

/// How the quote should be chosen once the season is scraped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteMode {
    /// One random quote from the planned episode.
    Random,
    /// Every quote from the planned episode.
    AllQuotes,
    /// A random quote, from a random episode, spoken by this character.
    ByCharacter(String),
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    season: Option<u8>,
    episode: Option<String>,
    mode: QuoteMode,
}

/// Fully resolved target of a quote lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotePlan {
    pub season: u8,
    pub episode: String,
    pub mode: QuoteMode,
}

impl QuoteRequest {
    /// Check the request against the catalog and the flag combination rules.
    pub fn validate(&self) -> Result<ValidatedRequest, ValidationError> {
        let season = match self.season {
            None => None,
            Some(n) if n == u32::from(UPCOMING_SEASON) => {
                return Err(ValidationError::SeasonComingSoon(UPCOMING_SEASON))
            }
            Some(n) if (1..=u32::from(SEASON_COUNT)).contains(&n) => Some(n as u8),
            Some(n) => return Err(ValidationError::InvalidSeason(n)),
        };

        if season.is_some() && self.all {
            return Err(ValidationError::ConflictingFlags("season", "all"));
        }
        if season.is_some() && self.character.is_some() {
            return Err(ValidationError::ConflictingFlags("season", "character"));
        }
        if self.character.is_some() && self.all {
            return Err(ValidationError::ConflictingFlags("character", "all"));
        }
        if self.character.is_some() && self.episode.is_some() {
            return Err(ValidationError::ConflictingFlags("character", "episode"));
        }

        let mut season = season;
        if let Some(name) = &self.episode {
            let location = catalog::locate_episode(name)
                .ok_or_else(|| ValidationError::InvalidEpisode(name.clone()))?;
            if let Some(requested) = season {
                if requested != location.season {
                    return Err(ValidationError::SeasonEpisodeMismatch {
                        episode: name.clone(),
                        requested,
                        actual: location.season,
                    });
                }
            }
            season = Some(location.season);
        }

        let character = match &self.character {
            Some(input) => Some(
                catalog::supported_character(input)
                    .ok_or_else(|| ValidationError::UnsupportedCharacter(input.clone()))?,
            ),
            None => None,
        };

        if self.all && self.episode.is_none() {
            return Err(ValidationError::AllRequiresEpisode);
        }

        let mode = match (character, self.all) {
            (Some(c), _) => QuoteMode::ByCharacter(c.to_string()),
            (None, true) => QuoteMode::AllQuotes,
            (None, false) => QuoteMode::Random,
        };

        Ok(ValidatedRequest {
            season,
            episode: self.episode.clone(),
            mode,
        })
    }
}

impl ValidatedRequest {
    pub fn mode(&self) -> &QuoteMode {
        &self.mode
    }

    /// Fix season and episode, picking uniformly at random where unset.
    pub fn plan<R: Rng>(&self, rng: &mut R) -> QuotePlan {
        let season = self
            .season
            .unwrap_or_else(|| rng.random_range(1..=SEASON_COUNT));

        let episode = match &self.episode {
            Some(name) => name.clone(),
            None => catalog::season(season)
                .and_then(|entry| entry.episodes.choose(rng))
                .map(|name| name.to_string())
                .unwrap_or_default(),
        };

        QuotePlan {
            season,
            episode,
            mode: self.mode.clone(),
        }
    }
}

/// Sub-season holding only the quotes where `character` speaks. Episodes
/// without such quotes are left out.
pub fn filter_by_character(season: &Season, character: &str) -> Season {
    let episodes = season
        .episodes
        .iter()
        .filter_map(|ep| {
            let quotes: Vec<Quote> = ep
                .quotes
                .iter()
                .filter(|q| q.has_character(character))
                .cloned()
                .collect();
            (!quotes.is_empty()).then(|| Episode {
                name: ep.name.clone(),
                quotes,
            })
        })
        .collect();

    Season {
        name: season.name.clone(),
        episodes,
    }
}

/// Pick a random episode where `character` speaks, then a random quote of
/// theirs from it.
pub fn pick_character_quote<'a, R: Rng>(
    season: &'a Season,
    character: &str,
    rng: &mut R,
) -> Result<(&'a Episode, &'a Quote), SelectError> {
    let not_found = || SelectError::CharacterNotFound {
        character: character.to_string(),
        season: season.name.clone(),
    };

    let candidates: Vec<&Episode> = season
        .episodes
        .iter()
        .filter(|ep| ep.quotes.iter().any(|q| q.has_character(character)))
        .collect();
    let episode = *candidates.choose(rng).ok_or_else(not_found)?;

    let quotes: Vec<&Quote> = episode
        .quotes
        .iter()
        .filter(|q| q.has_character(character))
        .collect();
    let quote = *quotes.choose(rng).ok_or_else(not_found)?;

    Ok((episode, quote))
}

/// Find an episode of the scraped season by exact name.
pub fn find_episode<'a>(season: &'a Season, name: &str) -> Result<&'a Episode, SelectError> {
    season
        .episode(name)
        .ok_or_else(|| SelectError::EpisodeNotFound(name.to_string()))
}

/// Pick one quote from an episode uniformly at random.
pub fn pick_random_quote<'a, R: Rng>(
    episode: &'a Episode,
    rng: &mut R,
) -> Result<&'a Quote, SelectError> {
    episode
        .quotes
        .choose(rng)
        .ok_or_else(|| SelectError::NoQuotes(episode.name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3000)
    }

    fn quote(line: &str, characters: &[&str]) -> Quote {
        Quote {
            lines: vec![line.to_string()],
            characters: characters.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample_season() -> Season {
        Season {
            name: "Season 1".to_string(),
            episodes: vec![
                Episode {
                    name: "Space Pilot 3000".to_string(),
                    quotes: vec![
                        quote("Fry: Hi.", &["Fry"]),
                        quote("Leela: Hey.", &["Leela"]),
                        quote("Fry and Bender.", &["Fry", "Bender"]),
                    ],
                },
                Episode {
                    name: "I, Roommate".to_string(),
                    quotes: vec![quote("Bender: Ha.", &["Bender"])],
                },
                Episode::new("Mars University"),
            ],
        }
    }

    fn request() -> QuoteRequest {
        QuoteRequest::default()
    }

    #[test]
    fn test_validate_no_flags() {
        let validated = request().validate().unwrap();
        assert_eq!(validated.mode(), &QuoteMode::Random);
    }

    #[test]
    fn test_validate_season_bounds() {
        let mut req = request();
        req.season = Some(0);
        assert_eq!(req.validate().unwrap_err(), ValidationError::InvalidSeason(0));
        req.season = Some(8);
        assert_eq!(req.validate().unwrap_err(), ValidationError::SeasonComingSoon(8));
        req.season = Some(9);
        assert_eq!(req.validate().unwrap_err(), ValidationError::InvalidSeason(9));
        req.season = Some(7);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_episode_sets_season() {
        let mut req = request();
        req.episode = Some("Godfellas".to_string());
        let plan = req.validate().unwrap().plan(&mut rng());
        assert_eq!(plan.season, 3);
        assert_eq!(plan.episode, "Godfellas");
    }

    #[test]
    fn test_validate_unknown_episode() {
        let mut req = request();
        req.episode = Some("Godfellas 2".to_string());
        assert!(matches!(req.validate(), Err(ValidationError::InvalidEpisode(_))));
    }

    #[test]
    fn test_validate_season_episode_mismatch() {
        let mut req = request();
        req.season = Some(1);
        req.episode = Some("Godfellas".to_string());
        assert_eq!(
            req.validate().unwrap_err(),
            ValidationError::SeasonEpisodeMismatch {
                episode: "Godfellas".to_string(),
                requested: 1,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_validate_character_canonical_spelling() {
        let mut req = request();
        req.character = Some("zapp brannigan".to_string());
        let validated = req.validate().unwrap();
        assert_eq!(
            validated.mode(),
            &QuoteMode::ByCharacter("Zapp Brannigan".to_string())
        );
    }

    #[test]
    fn test_validate_unsupported_character() {
        let mut req = request();
        req.character = Some("Nibbler".to_string());
        assert!(matches!(
            req.validate(),
            Err(ValidationError::UnsupportedCharacter(_))
        ));
    }

    #[test]
    fn test_validate_all_requires_episode() {
        let mut req = request();
        req.all = true;
        assert_eq!(req.validate().unwrap_err(), ValidationError::AllRequiresEpisode);

        req.episode = Some("Xmas Story".to_string());
        assert_eq!(req.validate().unwrap().mode(), &QuoteMode::AllQuotes);
    }

    #[test]
    fn test_validate_conflicting_flags() {
        let mut req = request();
        req.season = Some(2);
        req.character = Some("Fry".to_string());
        assert_eq!(
            req.validate().unwrap_err(),
            ValidationError::ConflictingFlags("season", "character")
        );

        let mut req = request();
        req.character = Some("Fry".to_string());
        req.episode = Some("Xmas Story".to_string());
        assert_eq!(
            req.validate().unwrap_err(),
            ValidationError::ConflictingFlags("character", "episode")
        );
    }

    #[test]
    fn test_plan_randomizes_within_catalog() {
        let validated = request().validate().unwrap();
        let mut rng = rng();
        for _ in 0..50 {
            let plan = validated.plan(&mut rng);
            assert!((1..=7).contains(&plan.season));
            let entry = catalog::season(plan.season).unwrap();
            assert!(entry.episodes.contains(&plan.episode.as_str()));
        }
    }

    #[test]
    fn test_plan_keeps_requested_season() {
        let mut req = request();
        req.season = Some(5);
        let plan = req.validate().unwrap().plan(&mut rng());
        assert_eq!(plan.season, 5);
        assert!(catalog::season(5).unwrap().episodes.contains(&plan.episode.as_str()));
    }

    #[test]
    fn test_filter_by_character() {
        let subset = filter_by_character(&sample_season(), "Bender");
        assert_eq!(subset.name, "Season 1");
        assert_eq!(subset.episodes.len(), 2);
        assert_eq!(subset.episodes[0].quotes.len(), 1);
        assert!(subset
            .episodes
            .iter()
            .flat_map(|e| &e.quotes)
            .all(|q| q.has_character("Bender")));
    }

    #[test]
    fn test_filter_by_absent_character_is_empty() {
        let subset = filter_by_character(&sample_season(), "Zoidberg");
        assert!(subset.episodes.is_empty());
    }

    #[test]
    fn test_pick_character_quote() {
        let season = sample_season();
        let mut rng = rng();
        for _ in 0..20 {
            let (episode, quote) = pick_character_quote(&season, "Fry", &mut rng).unwrap();
            assert_eq!(episode.name, "Space Pilot 3000");
            assert!(quote.has_character("Fry"));
        }
    }

    #[test]
    fn test_pick_character_quote_not_found() {
        let err = pick_character_quote(&sample_season(), "Zoidberg", &mut rng()).unwrap_err();
        assert_eq!(
            err,
            SelectError::CharacterNotFound {
                character: "Zoidberg".to_string(),
                season: "Season 1".to_string(),
            }
        );
    }

    #[test]
    fn test_find_episode() {
        let season = sample_season();
        assert_eq!(find_episode(&season, "I, Roommate").unwrap().quotes.len(), 1);
        assert_eq!(
            find_episode(&season, "Xmas Story").unwrap_err(),
            SelectError::EpisodeNotFound("Xmas Story".to_string())
        );
    }

    #[test]
    fn test_pick_random_quote() {
        let season = sample_season();
        let episode = find_episode(&season, "Space Pilot 3000").unwrap();
        let quote = pick_random_quote(episode, &mut rng()).unwrap();
        assert!(episode.quotes.contains(quote));

        let empty = find_episode(&season, "Mars University").unwrap();
        assert_eq!(
            pick_random_quote(empty, &mut rng()).unwrap_err(),
            SelectError::NoQuotes("Mars University".to_string())
        );
    }
}
