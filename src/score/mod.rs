//! @acp:module "Scores and Feedback"
//! @acp:summary "Score dimensions, feedback items, and the aggregating report"
//! @acp:domain scoring
//! @acp:layer logic

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::lexicon::AidaCategory;

/// Upper bound for every dimension after clamping
pub const MAX_SCORE: u32 = 100;

/// @acp:summary "The four AIDA dimensions plus auxiliary engagement"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Attention,
    Interest,
    Desire,
    Action,
    Engagement,
}

impl Dimension {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        match self {
            Dimension::Attention => 0,
            Dimension::Interest => 1,
            Dimension::Desire => 2,
            Dimension::Action => 3,
            Dimension::Engagement => 4,
        }
    }

    /// Lowercase label used in feedback and rendering
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Attention => "attention",
            Dimension::Interest => "interest",
            Dimension::Desire => "desire",
            Dimension::Action => "action",
            Dimension::Engagement => "engagement",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<AidaCategory> for Dimension {
    fn from(category: AidaCategory) -> Self {
        match category {
            AidaCategory::Attention => Dimension::Attention,
            AidaCategory::Interest => Dimension::Interest,
            AidaCategory::Desire => Dimension::Desire,
            AidaCategory::Action => Dimension::Action,
        }
    }
}

/// @acp:summary "Severity tag carried by every feedback item"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
    Info,
}

/// One human-readable explanation of a rule firing (or a summary weakness).
///
/// Items are append-only and keep rule evaluation order; a rule matched by
/// several sub-conditions may appear several times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub kind: FeedbackKind,
    pub message: String,
}

impl FeedbackItem {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Info, message: message.into() }
    }
}

/// @acp:summary "Final AIDA dimension values, each clamped to 0-100"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidaScore {
    pub attention: u32,
    pub interest: u32,
    pub desire: u32,
    pub action: u32,
}

impl AidaScore {
    /// Value for one AIDA dimension; panics on `Engagement`
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Attention => self.attention,
            Dimension::Interest => self.interest,
            Dimension::Desire => self.desire,
            Dimension::Action => self.action,
            Dimension::Engagement => unreachable!("engagement is not an AIDA dimension"),
        }
    }
}

/// @acp:summary "Immutable output of one scoring pass"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub aida: AidaScore,
    pub engagement: u32,
    pub feedback: Vec<FeedbackItem>,
}

/// Accumulates score deltas and feedback while the rule registry runs.
///
/// Running totals are readable mid-pass; the punctuation attention check
/// depends on the totals left by the two opener checks, and that is the only
/// ordered dependency the engine permits.
#[derive(Debug, Default)]
pub struct Report {
    totals: [u32; Dimension::COUNT],
    feedback: Vec<FeedbackItem>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a non-negative delta to one dimension
    pub fn add(&mut self, dimension: Dimension, delta: u32) {
        self.totals[dimension.index()] = self.totals[dimension.index()].saturating_add(delta);
    }

    /// Append a feedback item
    pub fn push(&mut self, item: FeedbackItem) {
        self.feedback.push(item);
    }

    /// Add a delta and its explaining feedback in one step
    pub fn record(&mut self, dimension: Dimension, delta: u32, item: FeedbackItem) {
        self.add(dimension, delta);
        self.push(item);
    }

    /// Running (unclamped) total for one dimension
    pub fn total(&self, dimension: Dimension) -> u32 {
        self.totals[dimension.index()]
    }

    /// Clamp every dimension and append the per-dimension weakness summaries.
    ///
    /// Summaries cover the AIDA dimensions only, in the fixed order
    /// attention, interest, desire, action, after all rule-level feedback.
    pub fn finish(mut self, config: &ScoringConfig) -> AnalysisResult {
        let clamp = |total: u32| total.min(MAX_SCORE);
        let aida = AidaScore {
            attention: clamp(self.total(Dimension::Attention)),
            interest: clamp(self.total(Dimension::Interest)),
            desire: clamp(self.total(Dimension::Desire)),
            action: clamp(self.total(Dimension::Action)),
        };

        for dimension in [
            Dimension::Attention,
            Dimension::Interest,
            Dimension::Desire,
            Dimension::Action,
        ] {
            if aida.get(dimension) < config.weak_dimension_threshold {
                self.feedback.push(FeedbackItem::error(weakness_message(dimension)));
            }
        }

        AnalysisResult {
            aida,
            engagement: clamp(self.total(Dimension::Engagement)),
            feedback: self.feedback,
        }
    }
}

fn weakness_message(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Attention => "Your post needs a stronger attention-grabbing element.",
        Dimension::Interest => "Add details that build interest in what you are offering.",
        Dimension::Desire => "Make the benefit concrete to create desire.",
        Dimension::Action => "Close with a clear call to action.",
        Dimension::Engagement => unreachable!("engagement has no weakness summary"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_accumulate_additively() {
        let mut report = Report::new();
        report.add(Dimension::Attention, 25);
        report.add(Dimension::Attention, 20);
        assert_eq!(report.total(Dimension::Attention), 45);
    }

    #[test]
    fn test_finish_clamps_to_100() {
        let config = ScoringConfig::default();
        let mut report = Report::new();
        report.add(Dimension::Action, 250);
        let result = report.finish(&config);
        assert_eq!(result.aida.action, MAX_SCORE);
    }

    #[test]
    fn test_weak_dimensions_get_error_summaries_in_order() {
        let config = ScoringConfig::default();
        let mut report = Report::new();
        report.add(Dimension::Interest, 80);
        let result = report.finish(&config);

        let errors: Vec<&str> = result
            .feedback
            .iter()
            .filter(|item| item.kind == FeedbackKind::Error)
            .map(|item| item.message.as_str())
            .collect();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("attention"));
        assert!(errors[1].contains("desire"));
        assert!(errors[2].contains("call to action"));
    }

    #[test]
    fn test_engagement_has_no_summary() {
        let config = ScoringConfig::default();
        let result = Report::new().finish(&config);
        assert_eq!(result.feedback.len(), 4);
        assert_eq!(result.engagement, 0);
    }

    #[test]
    fn test_summary_follows_rule_feedback() {
        let config = ScoringConfig::default();
        let mut report = Report::new();
        report.push(FeedbackItem::success("rule-level item"));
        let result = report.finish(&config);
        assert_eq!(result.feedback[0].kind, FeedbackKind::Success);
        assert_eq!(result.feedback[1].kind, FeedbackKind::Error);
    }
}
