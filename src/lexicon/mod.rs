//! @acp:module "AIDA Lexicons"
//! @acp:summary "Per-language keyword tables for the four AIDA categories"
//! @acp:domain scoring
//! @acp:layer config

use std::fmt;

use serde::{Deserialize, Serialize};

/// @acp:summary "The four stages of the AIDA persuasion model"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AidaCategory {
    Attention,
    Interest,
    Desire,
    Action,
}

impl AidaCategory {
    /// All categories, in evaluation and display order
    pub const ALL: [AidaCategory; 4] = [
        AidaCategory::Attention,
        AidaCategory::Interest,
        AidaCategory::Desire,
        AidaCategory::Action,
    ];

    /// Lowercase label used in feedback messages
    pub fn label(self) -> &'static str {
        match self {
            AidaCategory::Attention => "attention",
            AidaCategory::Interest => "interest",
            AidaCategory::Desire => "desire",
            AidaCategory::Action => "action",
        }
    }
}

impl fmt::Display for AidaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// @acp:summary "Keyword lists keyed by AIDA category for one language"
///
/// The shipped tables keep the four lists disjoint, but the engine credits a
/// word to every category that lists it, so external lexicons with overlap
/// score each category independently. All entries are lowercase; matching is
/// case-insensitive substring search over the post text.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub attention: &'static [&'static str],
    pub interest: &'static [&'static str],
    pub desire: &'static [&'static str],
    pub action: &'static [&'static str],
}

impl Lexicon {
    /// Word list for one category
    pub fn category(&self, category: AidaCategory) -> &'static [&'static str] {
        match category {
            AidaCategory::Attention => self.attention,
            AidaCategory::Interest => self.interest,
            AidaCategory::Desire => self.desire,
            AidaCategory::Action => self.action,
        }
    }

    /// Total number of entries across all four lists
    pub fn len(&self) -> usize {
        self.attention.len() + self.interest.len() + self.desire.len() + self.action.len()
    }

    /// True when no category has any entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// English keyword table
pub static EN: Lexicon = Lexicon {
    attention: &[
        "breaking",
        "introducing",
        "exclusive",
        "warning",
        "secret",
        "revealed",
        "finally",
        "announcing",
        "alert",
        "stop scrolling",
    ],
    interest: &[
        "discover",
        "learn",
        "why",
        "how to",
        "behind the scenes",
        "did you know",
        "the truth about",
        "insider",
        "story",
        "tips",
    ],
    desire: &[
        "imagine",
        "guarantee",
        "proven",
        "results",
        "benefit",
        "transform",
        "effortless",
        "save time",
        "exclusive access",
        "limited",
    ],
    action: &[
        "click",
        "buy",
        "subscribe",
        "sign up",
        "join",
        "order",
        "download",
        "register",
        "get started",
        "claim",
        "book now",
        "try it",
    ],
};

/// Dutch keyword table
pub static NL: Lexicon = Lexicon {
    attention: &[
        "nieuw",
        "eindelijk",
        "exclusief",
        "waarschuwing",
        "geheim",
        "onthuld",
        "aankondiging",
        "opgelet",
        "stop met scrollen",
    ],
    interest: &[
        "ontdek",
        "leer",
        "waarom",
        "hoe je",
        "achter de schermen",
        "wist je dat",
        "de waarheid over",
        "verhaal",
        "tips",
    ],
    desire: &[
        "stel je voor",
        "garantie",
        "bewezen",
        "resultaat",
        "voordeel",
        "bespaar",
        "moeiteloos",
        "beperkt",
        "profiteer",
    ],
    action: &[
        "klik",
        "koop",
        "abonneer",
        "schrijf je in",
        "doe mee",
        "bestel",
        "download",
        "registreer",
        "begin vandaag",
        "probeer",
        "meld je aan",
    ],
};
