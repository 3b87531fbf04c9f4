//! Static show metadata: the season/episode table and the character tables.
//!
//! Nothing here is scraped. The tables validate user input and canonicalize
//! speaker names found in quote markup.

mod characters;
mod series;

pub use characters::{
    normalize_name, supported_character, CharacterAliases, CHARACTER_ALIASES, SUPPORTED_CHARACTERS,
};
pub use series::{locate_episode, season, EpisodeLocation, SeasonEntry, SERIES};

/// Number of seasons covered by the catalog.
pub const SEASON_COUNT: u8 = 7;

/// Season whose quotes live on one page per episode instead of one page
/// per season.
pub const PER_EPISODE_SEASON: u8 = 5;
