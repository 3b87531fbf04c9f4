//! User-Agent selection.

use rand::seq::IndexedRandom;

pub const USER_AGENT: &str = concat!(
    "futurama-cli/",
    env!("CARGO_PKG_VERSION"),
    " (quote lookup)"
);

/// Browser strings sent when the config asks to look like a browser.
pub const IMPERSONATE_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.1 Safari/605.1.15",
];

const IMPERSONATE: &str = "impersonate";

/// How the `user_agent` setting is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAgentMode {
    /// `futurama-cli/<version>`.
    Default,
    /// One of `IMPERSONATE_USER_AGENTS`, picked per client.
    Browser,
    Custom(String),
}

impl UserAgentMode {
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Default,
            Some(v) if v.eq_ignore_ascii_case(IMPERSONATE) => Self::Browser,
            Some(v) => Self::Custom(v.to_string()),
        }
    }

    /// The header value to send.
    pub fn header_value(&self) -> String {
        match self {
            Self::Default => USER_AGENT.to_string(),
            Self::Browser => IMPERSONATE_USER_AGENTS
                .choose(&mut rand::rng())
                .copied()
                .unwrap_or(USER_AGENT)
                .to_string(),
            Self::Custom(ua) => ua.clone(),
        }
    }
}

/// Header value for a `user_agent` setting.
pub fn resolve_user_agent(setting: Option<&str>) -> String {
    UserAgentMode::from_setting(setting).header_value()
}
