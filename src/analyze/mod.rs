//! @acp:module "Analyzer"
//! @acp:summary "One-shot scoring pipeline over the rule registry"
//! @acp:domain scoring
//! @acp:layer api
//!
//! Normalize, resolve the language, run every rule in registry order
//! against the same immutable snapshot, then clamp and summarize. Pure and
//! reentrant: identical input yields a bit-identical result, and nothing is
//! shared between calls. Debouncing rapid successive calls is the caller's
//! concern.

use tracing::{debug, trace};

use crate::config::ScoringConfig;
use crate::language::Language;
use crate::linguistic::LinguisticProvider;
use crate::normalize::NormalizedText;
use crate::platform::Platform;
use crate::rules::{default_rules, Rule, RuleContext};
use crate::score::{AnalysisResult, Report};

/// @acp:summary "One post to score"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub text: String,
    pub platform: Platform,
    /// Explicit language; `None` means detect from the text
    pub language: Option<Language>,
}

/// @acp:summary "Configured scoring engine"
///
/// Owns the scoring policy, the rule registry, and an optional linguistic
/// provider. Construction is cheap; a single instance can serve any number
/// of calls.
pub struct Analyzer {
    config: ScoringConfig,
    rules: Vec<Box<dyn Rule>>,
    provider: Option<Box<dyn LinguisticProvider>>,
}

impl Analyzer {
    /// Engine with the reference policy and no linguistic provider
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    /// Engine with a caller-supplied policy
    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            config,
            rules: default_rules(),
            provider: None,
        }
    }

    /// Attach a linguistic provider, enabling the enhanced rule group
    pub fn with_provider(mut self, provider: Box<dyn LinguisticProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Score one post.
    pub fn analyze(&self, input: &PostInput) -> AnalysisResult {
        let normalized = NormalizedText::new(&input.text);
        let language = Language::resolve(&input.text, input.language);
        let lower = input.text.to_lowercase();
        debug!(
            platform = input.platform.id(),
            language = language.tag(),
            chars = normalized.char_count,
            words = normalized.word_count,
            "scoring post"
        );

        let ctx = RuleContext {
            text: &input.text,
            lower: &lower,
            normalized: &normalized,
            platform: input.platform,
            language,
            lexicon: language.lexicon(),
            config: &self.config,
            provider: self.provider.as_deref(),
        };

        let mut report = Report::new();
        for rule in &self.rules {
            rule.evaluate(&ctx, &mut report);
            trace!(rule = rule.name(), "rule evaluated");
        }
        report.finish(&self.config)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Score one post with the reference policy.
///
/// Convenience over a default [`Analyzer`]; `language: None` detects the
/// language from the text.
pub fn analyze(text: &str, platform: Platform, language: Option<Language>) -> AnalysisResult {
    Analyzer::new().analyze(&PostInput {
        text: text.to_string(),
        platform,
        language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linguistic::HeuristicProvider;
    use crate::score::FeedbackKind;

    #[test]
    fn test_analyze_is_pure() {
        let first = analyze("NEW: try it today! #launch", Platform::Twitter, None);
        let second = analyze("NEW: try it today! #launch", Platform::Twitter, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_provider_adds_rules_without_replacing_base() {
        let input = PostInput {
            text: "Download the new guide today! It is our best one yet.".to_string(),
            platform: Platform::Twitter,
            language: Some(Language::En),
        };
        let base = Analyzer::new().analyze(&input);
        let enhanced = Analyzer::new()
            .with_provider(Box::new(HeuristicProvider))
            .analyze(&input);

        // base contributions survive, the enhanced group only adds
        assert!(enhanced.aida.action >= base.aida.action);
        assert!(enhanced.aida.desire > base.aida.desire);
    }

    #[test]
    fn test_explicit_language_switches_lexicon() {
        let result = analyze(
            "Bestel vandaag en profiteer direct.",
            Platform::Instagram,
            Some(Language::Nl),
        );
        assert!(result.aida.action > 0);
        assert!(result
            .feedback
            .iter()
            .any(|f| f.kind == FeedbackKind::Success && f.message.contains("bestel")));
    }
}
