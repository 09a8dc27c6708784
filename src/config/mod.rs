//! @acp:module "Scoring Configuration"
//! @acp:summary "Tunable rule deltas and thresholds with loading and defaults"
//! @acp:domain scoring
//! @acp:layer config

use serde::{Deserialize, Serialize};

use crate::lexicon::AidaCategory;

/// @acp:summary "Every tunable number in the scoring policy"
/// @acp:lock normal
///
/// Defaults carry the reference policy. The source variants of this scorer
/// disagree on a few point values; keeping them here lets a variant retune
/// without touching the rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    // Length rule
    /// Fraction of the platform limit that triggers the "close to limit" warning
    pub near_limit_ratio: f64,
    /// Engagement bonus when the length fits comfortably
    pub length_ok_bonus: u32,

    // Structure rules
    /// Word count above which a single-paragraph post draws a warning
    pub single_block_max_words: usize,
    /// Engagement bonus for posts split into multiple paragraphs
    pub multi_paragraph_bonus: u32,
    /// Average words per paragraph above which density is flagged
    pub dense_paragraph_words: usize,

    // Attention openers
    pub emoji_hook_bonus: u32,
    pub caps_hook_bonus: u32,
    pub punctuation_hook_bonus: u32,
    /// The punctuation hook only fires while attention is below this total
    pub punctuation_hook_cap: u32,

    // Lexicon keyword deltas per AIDA category
    pub keyword_attention: u32,
    pub keyword_interest: u32,
    pub keyword_desire: u32,
    pub keyword_action: u32,

    // Linguistic feature rules (active only with a provider)
    pub positive_sentiment_threshold: f64,
    pub negative_sentiment_threshold: f64,
    pub positive_sentiment_bonus: u32,
    pub negative_sentiment_bonus: u32,
    pub question_bonus: u32,
    pub imperative_bonus: u32,
    pub superlative_bonus: u32,
    pub topic_bonus: u32,
    /// Average word length above which readability is flagged
    pub avg_word_len_max: f64,
    pub readability_bonus: u32,

    // Engagement markers
    pub bracket_bonus: u32,
    pub hashtag_bonus: u32,
    pub mention_bonus: u32,
    pub url_bonus: u32,

    // Aggregation
    /// AIDA dimensions ending below this value get a weakness summary
    pub weak_dimension_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            near_limit_ratio: 0.9,
            length_ok_bonus: 10,
            single_block_max_words: 30,
            multi_paragraph_bonus: 5,
            dense_paragraph_words: 50,
            emoji_hook_bonus: 25,
            caps_hook_bonus: 20,
            punctuation_hook_bonus: 15,
            punctuation_hook_cap: 45,
            keyword_attention: 10,
            keyword_interest: 10,
            keyword_desire: 10,
            keyword_action: 15,
            positive_sentiment_threshold: 0.25,
            negative_sentiment_threshold: -0.5,
            positive_sentiment_bonus: 10,
            negative_sentiment_bonus: 5,
            question_bonus: 10,
            imperative_bonus: 10,
            superlative_bonus: 10,
            topic_bonus: 5,
            avg_word_len_max: 7.0,
            readability_bonus: 5,
            bracket_bonus: 15,
            hashtag_bonus: 10,
            mention_bonus: 10,
            url_bonus: 5,
            weak_dimension_threshold: 30,
        }
    }
}

impl ScoringConfig {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a JSON file"
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load from the given path or fall back to defaults"
    pub fn load_or_default<P: AsRef<std::path::Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Keyword delta for one AIDA category
    pub fn keyword_bonus(&self, category: AidaCategory) -> u32 {
        match category {
            AidaCategory::Attention => self.keyword_attention,
            AidaCategory::Interest => self.keyword_interest,
            AidaCategory::Desire => self.keyword_desire,
            AidaCategory::Action => self.keyword_action,
        }
    }
}
