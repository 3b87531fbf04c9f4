//! Page URLs for the quote and encyclopedia wikis.

use crate::config::Settings;

const INFOSPHERE_BASE: &str = "https://theinfosphere.org";
const FANDOM_BASE: &str = "https://futurama.fandom.com/wiki";

/// Two shows share this title on the encyclopedia wiki.
const DISAMBIGUATED_TITLES: &[&str] = &["A Farewell to Arms"];
const DISAMBIGUATION_SUFFIX: &str = "_(Futurama)";

/// Encode an episode title as a wiki page name: spaces become underscores,
/// everything else outside the unreserved set is percent-encoded.
pub fn encode_title(title: &str) -> String {
    urlencoding::encode(&title.replace(' ', "_")).into_owned()
}

/// URL builder for the scraped wikis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiUrls {
    quotes_base: String,
    plot_base: String,
}

impl Default for WikiUrls {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl WikiUrls {
    pub fn new(quotes_base: &str, plot_base: &str) -> Self {
        Self {
            quotes_base: quotes_base.trim_end_matches('/').to_string(),
            plot_base: plot_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.quotes_base_url, &settings.plot_base_url)
    }

    /// Quote page listing every episode of a season.
    pub fn season_quotes(&self, season: u8) -> String {
        format!("{}/Futurama/Season_{}", self.quotes_base, season)
    }

    /// Quote page of a single episode.
    pub fn episode_quotes(&self, episode: &str) -> String {
        format!("{}/Futurama:_{}", self.quotes_base, encode_title(episode))
    }

    /// Page name used for the plot article and the reference links.
    pub fn plot_page_name(&self, episode: &str) -> String {
        let mut name = encode_title(episode);
        if DISAMBIGUATED_TITLES.contains(&episode) {
            name.push_str(DISAMBIGUATION_SUFFIX);
        }
        name
    }

    pub fn plot(&self, episode: &str) -> String {
        format!("{}/{}", self.plot_base, self.plot_page_name(episode))
    }

    /// Reference links printed after a plot description.
    pub fn reference_links(&self, episode: &str) -> Vec<String> {
        let name = self.plot_page_name(episode);
        vec![
            format!("{}/{}", self.plot_base, name),
            format!("{}/{}", INFOSPHERE_BASE, name),
            format!("{}/{}", FANDOM_BASE, name),
        ]
    }
}
