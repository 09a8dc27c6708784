//! @acp:module "Language Resolver"
//! @acp:summary "Supported languages and explicit-or-detected resolution"
//! @acp:domain scoring
//! @acp:layer logic

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PostscoreError;
use crate::lexicon::{self, Lexicon};

/// @acp:summary "Languages with a shipped AIDA lexicon"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Nl,
}

/// Fallback when detection fails or yields an unsupported language
pub const DEFAULT_LANGUAGE: Language = Language::En;

impl Language {
    /// All supported languages, in display order
    pub const ALL: [Language; 2] = [Language::En, Language::Nl];

    /// ISO 639-1 tag
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Nl => "Dutch",
        }
    }

    /// Keyword table for this language
    pub fn lexicon(self) -> &'static Lexicon {
        match self {
            Language::En => &lexicon::EN,
            Language::Nl => &lexicon::NL,
        }
    }

    /// Resolve the working language for one scoring pass.
    ///
    /// An explicit caller choice is authoritative. Otherwise the text is
    /// classified with whatlang and mapped onto the supported set; detection
    /// failure, an unsupported language, or empty text all fall back to
    /// [`DEFAULT_LANGUAGE`]. Deterministic for a fixed input.
    pub fn resolve(text: &str, explicit: Option<Language>) -> Language {
        if let Some(language) = explicit {
            return language;
        }
        let detected = whatlang::detect(text)
            .and_then(|info| Language::from_detected(info.lang()))
            .unwrap_or(DEFAULT_LANGUAGE);
        debug!(language = detected.tag(), "resolved post language");
        detected
    }

    fn from_detected(lang: whatlang::Lang) -> Option<Language> {
        match lang {
            whatlang::Lang::Eng => Some(Language::En),
            whatlang::Lang::Nld => Some(Language::Nl),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = PostscoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::En),
            "nl" | "nld" | "dutch" | "nederlands" => Ok(Language::Nl),
            other => Err(PostscoreError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
