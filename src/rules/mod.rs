//! @acp:module "Rule Engine"
//! @acp:summary "Ordered registry of independent copywriting detectors"
//! @acp:domain scoring
//! @acp:layer logic
//!
//! Every detector is an independent predicate-to-effect pair: it inspects
//! the immutable context and either records a score delta with explaining
//! feedback, or stays silent. Rules run unconditionally in the declared
//! registry order; nothing short-circuits. The single sanctioned ordering
//! dependency is the punctuation hook reading the attention total left by
//! the two opener hooks.

pub mod attention;
pub mod keywords;
pub mod length;
pub mod linguistic;
pub mod markers;
pub mod structure;

pub use attention::{CapsHookRule, EmojiHookRule, PunctuationHookRule};
pub use keywords::KeywordRule;
pub use length::LengthRule;
pub use linguistic::{
    ImperativeRule, QuestionRule, ReadabilityRule, SentimentRule, SuperlativeRule, TopicRule,
};
pub use markers::{BracketRule, HashtagRule, MentionRule, UrlRule};
pub use structure::{ParagraphDensityRule, StructureRule};

use crate::config::ScoringConfig;
use crate::language::Language;
use crate::lexicon::Lexicon;
use crate::linguistic::LinguisticProvider;
use crate::normalize::NormalizedText;
use crate::platform::Platform;
use crate::score::Report;

/// Immutable view of one scoring pass, shared by every rule.
pub struct RuleContext<'a> {
    /// Raw post text
    pub text: &'a str,
    /// Post text lowercased once, for case-insensitive scans
    pub lower: &'a str,
    pub normalized: &'a NormalizedText,
    pub platform: Platform,
    pub language: Language,
    pub lexicon: &'static Lexicon,
    pub config: &'a ScoringConfig,
    /// Injected linguistic capability; `None` disables the enhanced group
    pub provider: Option<&'a dyn LinguisticProvider>,
}

/// One independent detector in the registry.
pub trait Rule: Send + Sync {
    /// Stable name for logging
    fn name(&self) -> &'static str;

    /// Inspect the context; record deltas and feedback on a match
    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report);
}

/// The full registry in evaluation order.
///
/// Order is part of the scoring contract: feedback items keep this order,
/// and the punctuation hook must run after the opener hooks.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(LengthRule),
        Box::new(StructureRule),
        Box::new(ParagraphDensityRule),
        Box::new(EmojiHookRule),
        Box::new(CapsHookRule),
        Box::new(PunctuationHookRule),
        Box::new(KeywordRule),
        Box::new(SentimentRule),
        Box::new(QuestionRule),
        Box::new(ImperativeRule),
        Box::new(SuperlativeRule),
        Box::new(TopicRule),
        Box::new(ReadabilityRule),
        Box::new(BracketRule),
        Box::new(HashtagRule),
        Box::new(MentionRule),
        Box::new(UrlRule),
    ]
}
