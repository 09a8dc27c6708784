//! @acp:module "Linguistic Provider"
//! @acp:summary "Pluggable linguistic features for the enhanced rule group"
//! @acp:domain scoring
//! @acp:layer service
//!
//! The enhanced rules need sentence-level features the base engine does not
//! compute: sentiment polarity, interrogative and imperative sentences,
//! superlatives, and named topics. Those come from a provider injected into
//! the analyzer; without one, the engine runs the base rule set only.

use std::collections::HashSet;

use crate::language::Language;
use crate::normalize::NormalizedText;

/// Capability consumed by the linguistic-feature rules.
///
/// Implementations must be deterministic: the core guarantees bit-identical
/// results for identical inputs, and a provider is part of that contract.
pub trait LinguisticProvider: Send + Sync {
    /// Sentiment polarity in [-1.0, 1.0]; 0.0 for neutral or empty text
    fn sentiment(&self, text: &str, language: Language) -> f64;

    /// Number of interrogative sentences
    fn question_count(&self, text: &NormalizedText) -> usize;

    /// Number of sentences opening with an imperative verb
    fn imperative_count(&self, text: &NormalizedText, language: Language) -> usize;

    /// Number of superlative word forms
    fn superlative_count(&self, text: &NormalizedText, language: Language) -> usize;

    /// Named topics: distinct capitalized tokens away from sentence starts
    fn topics(&self, text: &NormalizedText) -> Vec<String>;
}

/// Deterministic lexicon-and-pattern provider shipped with the crate.
///
/// Word-list matching, no statistics: positive and negative sentiment words
/// are counted and folded into a polarity ratio, imperatives are sentences
/// opening with a known command verb, superlatives are `-est`/`-ste` forms
/// plus the irregulars.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicProvider;

const POSITIVE_EN: &[&str] = &[
    "love", "great", "amazing", "awesome", "happy", "win", "easy", "success",
    "beautiful", "excited", "fantastic", "wonderful", "perfect", "enjoy",
    "proud", "thrilled", "brilliant", "incredible", "delighted", "good",
];
const NEGATIVE_EN: &[&str] = &[
    "hate", "bad", "terrible", "awful", "sad", "fail", "failure", "problem",
    "worst", "angry", "horrible", "disappointing", "broken", "worry", "fear",
    "pain", "crisis", "disaster", "ugly", "boring",
];
const POSITIVE_NL: &[&str] = &[
    "geweldig", "mooi", "blij", "fantastisch", "prachtig", "trots", "succes",
    "makkelijk", "winnen", "perfect", "genieten", "goed", "fijn", "super",
];
const NEGATIVE_NL: &[&str] = &[
    "slecht", "verschrikkelijk", "haat", "verdrietig", "probleem", "mislukt",
    "boos", "vreselijk", "zorgen", "pijn", "crisis", "ramp", "saai", "lelijk",
];

const IMPERATIVE_EN: &[&str] = &[
    "get", "try", "join", "click", "buy", "download", "start", "grab",
    "check", "sign", "order", "save", "share", "follow", "subscribe",
    "book", "claim", "register", "visit", "read", "watch", "reply",
];
const IMPERATIVE_NL: &[&str] = &[
    "koop", "probeer", "klik", "download", "meld", "ontdek", "deel", "volg",
    "bestel", "begin", "pak", "check", "lees", "kijk", "bezoek", "reageer",
];

const SUPERLATIVE_IRREGULAR_EN: &[&str] = &["best", "most", "least", "worst", "greatest"];
const SUPERLATIVE_IRREGULAR_NL: &[&str] = &["beste", "meeste", "minste", "slechtste", "grootste"];

impl HeuristicProvider {
    fn sentiment_lists(language: Language) -> (&'static [&'static str], &'static [&'static str]) {
        match language {
            Language::En => (POSITIVE_EN, NEGATIVE_EN),
            Language::Nl => (POSITIVE_NL, NEGATIVE_NL),
        }
    }

    fn imperative_verbs(language: Language) -> &'static [&'static str] {
        match language {
            Language::En => IMPERATIVE_EN,
            Language::Nl => IMPERATIVE_NL,
        }
    }
}

impl LinguisticProvider for HeuristicProvider {
    fn sentiment(&self, text: &str, language: Language) -> f64 {
        let (positive, negative) = Self::sentiment_lists(language);
        let mut pos = 0usize;
        let mut neg = 0usize;
        for token in tokens(text) {
            if positive.contains(&token.as_str()) {
                pos += 1;
            } else if negative.contains(&token.as_str()) {
                neg += 1;
            }
        }
        let hits = pos + neg;
        if hits == 0 {
            return 0.0;
        }
        (pos as f64 - neg as f64) / hits as f64
    }

    fn question_count(&self, text: &NormalizedText) -> usize {
        text.sentences.iter().filter(|s| s.contains('?')).count()
    }

    fn imperative_count(&self, text: &NormalizedText, language: Language) -> usize {
        let verbs = Self::imperative_verbs(language);
        text.sentences
            .iter()
            .filter(|sentence| {
                sentence
                    .split_whitespace()
                    .next()
                    .map(|first| {
                        let first = first
                            .trim_matches(|c: char| !c.is_alphanumeric())
                            .to_lowercase();
                        verbs.contains(&first.as_str())
                    })
                    .unwrap_or(false)
            })
            .count()
    }

    fn superlative_count(&self, text: &NormalizedText, language: Language) -> usize {
        let irregular = match language {
            Language::En => SUPERLATIVE_IRREGULAR_EN,
            Language::Nl => SUPERLATIVE_IRREGULAR_NL,
        };
        let suffix = match language {
            Language::En => "est",
            Language::Nl => "ste",
        };
        text.words
            .iter()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|word| {
                irregular.contains(&word.as_str())
                    || (word.chars().count() > 4 && word.ends_with(suffix))
            })
            .count()
    }

    fn topics(&self, text: &NormalizedText) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut topics = Vec::new();
        for sentence in &text.sentences {
            // Skip the sentence-initial word: its capital carries no signal
            for word in sentence.split_whitespace().skip(1) {
                let trimmed = word.trim_matches(|c: char| !c.is_alphanumeric());
                if trimmed.chars().count() < 2 || trimmed.starts_with(|c: char| !c.is_uppercase()) {
                    continue;
                }
                if seen.insert(trimmed.to_string()) {
                    topics.push(trimmed.to_string());
                }
            }
        }
        topics
    }
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
}
