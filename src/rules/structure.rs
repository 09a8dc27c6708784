//! @acp:module "Structure Rules"
//! @acp:summary "Readability checks on paragraph layout"
//! @acp:domain scoring
//! @acp:layer logic

use super::{Rule, RuleContext};
use crate::score::{Dimension, FeedbackItem, Report};

/// One long unbroken block draws a warning; a post already split into
/// multiple paragraphs earns a small engagement bonus.
pub struct StructureRule;

impl Rule for StructureRule {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        let paragraphs = ctx.normalized.paragraphs.len();
        if paragraphs == 1 && ctx.normalized.word_count > ctx.config.single_block_max_words {
            report.push(FeedbackItem::warning(
                "One long block of text; break it into multiple paragraphs.",
            ));
        } else if paragraphs > 1 {
            report.record(
                Dimension::Engagement,
                ctx.config.multi_paragraph_bonus,
                FeedbackItem::success("Good structure: the post is split into paragraphs."),
            );
        }
    }
}

/// Flags paragraphs that average too many words, independent of how many
/// paragraphs there are.
pub struct ParagraphDensityRule;

impl Rule for ParagraphDensityRule {
    fn name(&self) -> &'static str {
        "paragraph-density"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        let paragraphs = ctx.normalized.paragraphs.len();
        if paragraphs == 0 {
            return;
        }
        if ctx.normalized.word_count / paragraphs > ctx.config.dense_paragraph_words {
            report.push(FeedbackItem::warning(
                "Paragraphs are dense; aim for fewer words per paragraph.",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testutil::ContextParts;
    use crate::score::FeedbackKind;

    #[test]
    fn test_single_long_block_warns() {
        let text = (0..40).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
        let parts = ContextParts::new(&text);
        let mut report = Report::new();
        StructureRule.evaluate(&parts.context(), &mut report);
        assert_eq!(report.total(Dimension::Engagement), 0);
        let feedback = report.finish(&parts.config).feedback;
        assert!(feedback
            .iter()
            .any(|f| f.kind == FeedbackKind::Warning && f.message.contains("break it")));
    }

    #[test]
    fn test_short_single_block_is_silent() {
        let parts = ContextParts::new("just a few words here");
        let mut report = Report::new();
        StructureRule.evaluate(&parts.context(), &mut report);
        assert_eq!(report.total(Dimension::Engagement), 0);
    }

    #[test]
    fn test_multiple_paragraphs_earn_bonus() {
        let parts = ContextParts::new("first paragraph\n\nsecond paragraph");
        let mut report = Report::new();
        StructureRule.evaluate(&parts.context(), &mut report);
        assert_eq!(report.total(Dimension::Engagement), 5);
    }

    #[test]
    fn test_dense_paragraphs_flagged_independently() {
        let long_paragraph = (0..60).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let text = format!("{long_paragraph}\n\n{long_paragraph}");
        let parts = ContextParts::new(&text);
        let mut report = Report::new();
        ParagraphDensityRule.evaluate(&parts.context(), &mut report);
        let feedback = report.finish(&parts.config).feedback;
        assert!(feedback
            .iter()
            .any(|f| f.kind == FeedbackKind::Warning && f.message.contains("dense")));
    }

    #[test]
    fn test_density_silent_on_empty_text() {
        let parts = ContextParts::new("");
        let mut report = Report::new();
        ParagraphDensityRule.evaluate(&parts.context(), &mut report);
        StructureRule.evaluate(&parts.context(), &mut report);
        assert!(report.finish(&parts.config).feedback.iter().all(|f| f.kind == FeedbackKind::Error));
    }
}
