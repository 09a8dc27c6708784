//! @acp:module "Length Rule"
//! @acp:summary "Grades post length against the platform limit"
//! @acp:domain scoring
//! @acp:layer logic

use super::{Rule, RuleContext};
use crate::score::{Dimension, FeedbackItem, Report};

/// Three mutually exclusive tiers: over the limit, close to it, comfortable.
/// Only the comfortable tier pays an engagement bonus. Silent on empty text.
pub struct LengthRule;

impl Rule for LengthRule {
    fn name(&self) -> &'static str {
        "length"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        let count = ctx.normalized.char_count;
        if count == 0 {
            return;
        }
        let max = ctx.platform.max_chars();

        if count > max {
            report.push(FeedbackItem::error(format!(
                "Too long for {}: {} characters over the {} limit.",
                ctx.platform,
                count - max,
                max
            )));
        } else if count as f64 > max as f64 * ctx.config.near_limit_ratio {
            report.push(FeedbackItem::warning(format!(
                "Close to the {} limit of {} characters ({} used).",
                ctx.platform, max, count
            )));
        } else {
            report.record(
                Dimension::Engagement,
                ctx.config.length_ok_bonus,
                FeedbackItem::success(format!("Length is good for {}.", ctx.platform)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testutil::ContextParts;
    use crate::score::FeedbackKind;

    fn run(text: &str) -> (u32, Vec<FeedbackItem>) {
        let parts = ContextParts::new(text);
        let mut report = Report::new();
        LengthRule.evaluate(&parts.context(), &mut report);
        let engagement = report.total(Dimension::Engagement);
        (engagement, report.finish(&parts.config).feedback)
    }

    #[test]
    fn test_over_limit_is_an_error_without_bonus() {
        let (engagement, feedback) = run(&"x".repeat(281));
        assert_eq!(engagement, 0);
        assert!(feedback
            .iter()
            .any(|f| f.kind == FeedbackKind::Error && f.message.contains("Too long")));
    }

    #[test]
    fn test_near_limit_is_a_warning() {
        let (engagement, feedback) = run(&"x".repeat(270));
        assert_eq!(engagement, 0);
        assert!(feedback
            .iter()
            .any(|f| f.kind == FeedbackKind::Warning && f.message.contains("Close to")));
    }

    #[test]
    fn test_comfortable_length_pays_engagement() {
        let (engagement, feedback) = run(&"x".repeat(100));
        assert_eq!(engagement, 10);
        assert!(feedback
            .iter()
            .any(|f| f.kind == FeedbackKind::Success && f.message.contains("Length is good")));
    }

    #[test]
    fn test_silent_on_empty_text() {
        let parts = ContextParts::new("");
        let mut report = Report::new();
        LengthRule.evaluate(&parts.context(), &mut report);
        assert_eq!(report.total(Dimension::Engagement), 0);
        let result = report.finish(&parts.config);
        // only the four weakness summaries remain
        assert!(result.feedback.iter().all(|f| f.kind == FeedbackKind::Error));
    }
}
