//! Supported characters and speaker-name canonicalization.

/// A canonical character name and the textual variants seen in quote markup.
#[derive(Debug, Clone, Copy)]
pub struct CharacterAliases {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

/// Characters accepted by `get quote --character`.
pub const SUPPORTED_CHARACTERS: [&str; 8] = [
    "Fry",
    "Leela",
    "Bender",
    "Prof. Farnsworth",
    "Zoidberg",
    "Hermes",
    "Amy",
    "Zapp Brannigan",
];

pub const CHARACTER_ALIASES: &[CharacterAliases] = &[
    CharacterAliases {
        canonical: "Fry",
        aliases: &["Fry", "Frydo [Fry]", "Fry:", "Fry-1", "Robo Fry", "Fry as Doingg"],
    },
    CharacterAliases {
        canonical: "Prof. Farnsworth",
        aliases: &[
            "Professor Farnsworth",
            "Prof. Farnsworth",
            "Farnsworth",
            "Prof.",
            "Prof. Farnsworth-1",
            "Prof. Farnsworth-420",
            "Prof. Farnsworth-A",
            "Prof. Farnsworth XVII",
            "Professor Hubert Farnsworth",
        ],
    },
    CharacterAliases {
        canonical: "Leela",
        aliases: &[
            "Leela",
            "Turanga Leela",
            "Leela'",
            "Leela Leela",
            "Leela as Lady Buggle",
            "Leela:",
            "Leela-1",
        ],
    },
    CharacterAliases {
        canonical: "Amy",
        aliases: &["Amy", "Amy Wong", "Amy-420", "Amy-1"],
    },
    CharacterAliases {
        canonical: "Bender",
        aliases: &[
            "Bender",
            "Bender-1",
            "Bender-A",
            "Bender'",
            "Bender as Garbly",
            "Beach-master Bender",
            "Bass Bender",
        ],
    },
    CharacterAliases {
        canonical: "Hermes",
        aliases: &[
            "Hermes",
            "Hermes Conrad",
            "Hermes-A",
            "Hermes-25",
            "Hermes\u{2019} head",
            "Salmon Hermes",
            "Seal Hermes",
        ],
    },
    CharacterAliases {
        canonical: "Zoidberg",
        aliases: &[
            "Zoidberg",
            "Dr. Zoidberg",
            "Zoidberg as Feffernoose",
            "Lobster Zoidberg",
            "Booby Zoidberg",
        ],
    },
    CharacterAliases {
        canonical: "Zapp Brannigan",
        aliases: &["Zapp Brannigan", "Brannigan"],
    },
];

/// Map a raw speaker label to its canonical name.
///
/// Matching is case-sensitive and exact. Unknown labels pass through
/// unchanged so minor characters still show up in quote data.
pub fn normalize_name(raw: &str) -> String {
    CHARACTER_ALIASES
        .iter()
        .find(|entry| entry.canonical == raw || entry.aliases.contains(&raw))
        .map(|entry| entry.canonical.to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Resolve user input against the supported characters, ignoring case.
/// Returns the canonical spelling used in scraped quote data.
pub fn supported_character(input: &str) -> Option<&'static str> {
    let wanted = input.trim().to_lowercase();
    SUPPORTED_CHARACTERS
        .iter()
        .copied()
        .find(|c| c.to_lowercase() == wanted)
}
