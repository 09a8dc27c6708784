//! @acp:module "Engagement Markers"
//! @acp:summary "Boolean detectors for brackets, hashtags, mentions, and links"
//! @acp:domain scoring
//! @acp:layer logic
//!
//! Each marker is a presence check: it fires at most once per call no
//! matter how many occurrences the text holds.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Rule, RuleContext};
use crate::score::{Dimension, FeedbackItem, Report};

static BRACKET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]+\]").unwrap());
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// Bracketed call-outs like `[THREAD]` or `[FREE]`.
pub struct BracketRule;

impl Rule for BracketRule {
    fn name(&self) -> &'static str {
        "brackets"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        if BRACKET_RE.is_match(ctx.text) {
            report.record(
                Dimension::Engagement,
                ctx.config.bracket_bonus,
                FeedbackItem::success("Bracketed call-out stands out in the feed."),
            );
        }
    }
}

pub struct HashtagRule;

impl Rule for HashtagRule {
    fn name(&self) -> &'static str {
        "hashtag"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        if ctx.text.contains('#') {
            report.record(
                Dimension::Engagement,
                ctx.config.hashtag_bonus,
                FeedbackItem::success("Hashtags help discovery."),
            );
        }
    }
}

pub struct MentionRule;

impl Rule for MentionRule {
    fn name(&self) -> &'static str {
        "mention"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        if ctx.text.contains('@') {
            report.record(
                Dimension::Engagement,
                ctx.config.mention_bonus,
                FeedbackItem::success("Mentions invite replies."),
            );
        }
    }
}

pub struct UrlRule;

impl Rule for UrlRule {
    fn name(&self) -> &'static str {
        "url"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        if URL_RE.is_match(ctx.text) {
            report.record(
                Dimension::Engagement,
                ctx.config.url_bonus,
                FeedbackItem::success("Link gives readers somewhere to go."),
            );
        }
    }
}
