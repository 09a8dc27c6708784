//! @acp:module "Attention Hooks"
//! @acp:summary "Opening-hook detectors feeding the attention dimension"
//! @acp:domain scoring
//! @acp:layer logic
//!
//! Three checks in fixed order: an opening alert emoji, an opening run of
//! capitals or punctuation, and a question or exclamation mark anywhere in
//! the text. The third check reads the attention total accumulated by the
//! first two; it only fires while that total is still below the configured
//! cap. That is the single ordered dependency in the engine.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Rule, RuleContext};
use crate::score::{Dimension, FeedbackItem, Report};

/// Emoji that read as alerts when they open a post
const ALERT_EMOJI: &[&str] = &["🚨", "⚡", "🔥", "❗", "📢", "👉", "⏰", "💥"];

static CAPS_OPENER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z !?:.]{2,}").unwrap());

/// Post opens with an alert emoji.
pub struct EmojiHookRule;

impl Rule for EmojiHookRule {
    fn name(&self) -> &'static str {
        "emoji-hook"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        if ALERT_EMOJI.iter().any(|emoji| ctx.text.starts_with(emoji)) {
            report.record(
                Dimension::Attention,
                ctx.config.emoji_hook_bonus,
                FeedbackItem::success("Starts with an eye-catching emoji."),
            );
        }
    }
}

/// Post opens with a run of capitals or emphatic punctuation.
pub struct CapsHookRule;

impl Rule for CapsHookRule {
    fn name(&self) -> &'static str {
        "caps-hook"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        if CAPS_OPENER_RE.is_match(ctx.text) {
            report.record(
                Dimension::Attention,
                ctx.config.caps_hook_bonus,
                FeedbackItem::success("Strong opening in capitals."),
            );
        }
    }
}

/// A question or exclamation mark anywhere in the post, credited only while
/// the attention total is still below the configured cap.
pub struct PunctuationHookRule;

impl Rule for PunctuationHookRule {
    fn name(&self) -> &'static str {
        "punctuation-hook"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        let has_hook = ctx.text.contains('?') || ctx.text.contains('!');
        if has_hook && report.total(Dimension::Attention) < ctx.config.punctuation_hook_cap {
            report.record(
                Dimension::Attention,
                ctx.config.punctuation_hook_bonus,
                FeedbackItem::success("Questions or exclamations draw the eye."),
            );
        }
    }
}
