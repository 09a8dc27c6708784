#![forbid(unsafe_code)]

//! @acp:module "Postscore Library"
//! @acp:summary "Rule-based AIDA copywriting scorer for social media posts"
//! @acp:domain scoring
//! @acp:layer api
//! @acp:stability stable
//!
//! # Postscore
//!
//! Scores social-media post text against the AIDA persuasion model
//! (Attention, Interest, Desire, Action) plus an auxiliary Engagement
//! metric, and explains every contribution with an ordered feedback list.
//!
//! ## Features
//!
//! - **Deterministic rules**: an ordered registry of independent detectors,
//!   no statistics, no network
//! - **Per-language lexicons**: keyword tables for English and Dutch with
//!   automatic language detection
//! - **Pluggable linguistics**: an optional provider adds sentiment,
//!   question, imperative, superlative, and topic detection
//! - **Pure API**: one synchronous call, bit-identical results for
//!   identical input
//!
//! ## Example
//!
//! ```rust
//! use postscore::{analyze, Platform};
//!
//! let result = analyze("NEW: try it today! #launch", Platform::Twitter, None);
//! assert!(result.aida.attention > 0);
//! assert!(result.engagement > 0);
//! ```

pub mod analyze;
pub mod commands;
pub mod config;
pub mod error;
pub mod language;
pub mod lexicon;
pub mod linguistic;
pub mod normalize;
pub mod platform;
pub mod rules;
pub mod score;

// Re-exports
pub use analyze::{analyze, Analyzer, PostInput};
pub use config::ScoringConfig;
pub use error::{PostscoreError, Result};
pub use language::{Language, DEFAULT_LANGUAGE};
pub use lexicon::{AidaCategory, Lexicon};
pub use linguistic::{HeuristicProvider, LinguisticProvider};
pub use normalize::NormalizedText;
pub use platform::Platform;
pub use score::{
    AidaScore, AnalysisResult, Dimension, FeedbackItem, FeedbackKind, MAX_SCORE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
