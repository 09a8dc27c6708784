//! @acp:module "Linguistic Feature Rules"
//! @acp:summary "Enhanced detectors over an injected linguistic provider"
//! @acp:domain scoring
//! @acp:layer logic
//!
//! Every rule here gates on `ctx.provider`: with no provider injected the
//! whole group is silent and the base rule set stands alone. The group is
//! additive to the lexicon rules, never a replacement.

use super::{Rule, RuleContext};
use crate::score::{Dimension, FeedbackItem, Report};

/// Positive tone earns an attention bonus; a strongly negative tone earns a
/// smaller one, tagged Info rather than Success because negativity grabs
/// attention at a cost.
pub struct SentimentRule;

impl Rule for SentimentRule {
    fn name(&self) -> &'static str {
        "sentiment"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        let Some(provider) = ctx.provider else { return };
        let polarity = provider.sentiment(ctx.text, ctx.language);

        if polarity >= ctx.config.positive_sentiment_threshold {
            report.record(
                Dimension::Attention,
                ctx.config.positive_sentiment_bonus,
                FeedbackItem::success("Positive tone lifts the post."),
            );
        } else if polarity <= ctx.config.negative_sentiment_threshold {
            report.record(
                Dimension::Attention,
                ctx.config.negative_sentiment_bonus,
                FeedbackItem::info("Strongly negative tone stands out, but can put readers off."),
            );
        }
    }
}

pub struct QuestionRule;

impl Rule for QuestionRule {
    fn name(&self) -> &'static str {
        "questions"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        let Some(provider) = ctx.provider else { return };
        if provider.question_count(ctx.normalized) > 0 {
            report.record(
                Dimension::Interest,
                ctx.config.question_bonus,
                FeedbackItem::success("Asking a question pulls readers in."),
            );
        }
    }
}

pub struct ImperativeRule;

impl Rule for ImperativeRule {
    fn name(&self) -> &'static str {
        "imperatives"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        let Some(provider) = ctx.provider else { return };
        if provider.imperative_count(ctx.normalized, ctx.language) > 0 {
            report.record(
                Dimension::Action,
                ctx.config.imperative_bonus,
                FeedbackItem::success("Imperative phrasing tells readers what to do."),
            );
        }
    }
}

pub struct SuperlativeRule;

impl Rule for SuperlativeRule {
    fn name(&self) -> &'static str {
        "superlatives"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        let Some(provider) = ctx.provider else { return };
        if provider.superlative_count(ctx.normalized, ctx.language) > 0 {
            report.record(
                Dimension::Desire,
                ctx.config.superlative_bonus,
                FeedbackItem::success("Superlatives make the offer vivid."),
            );
        }
    }
}

/// Named topics feed both interest and engagement.
pub struct TopicRule;

impl Rule for TopicRule {
    fn name(&self) -> &'static str {
        "topics"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        let Some(provider) = ctx.provider else { return };
        let topics = provider.topics(ctx.normalized);
        if !topics.is_empty() {
            report.add(Dimension::Interest, ctx.config.topic_bonus);
            report.record(
                Dimension::Engagement,
                ctx.config.topic_bonus,
                FeedbackItem::success(format!(
                    "Mentions concrete topics: {}.",
                    topics.join(", ")
                )),
            );
        }
    }
}

/// Long average word length hurts readability; short words earn a small
/// engagement bonus.
pub struct ReadabilityRule;

impl Rule for ReadabilityRule {
    fn name(&self) -> &'static str {
        "readability"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        if ctx.provider.is_none() || ctx.normalized.word_count == 0 {
            return;
        }
        if ctx.normalized.avg_word_len() > ctx.config.avg_word_len_max {
            report.push(FeedbackItem::warning(
                "Long words on average; simpler words read faster.",
            ));
        } else {
            report.record(
                Dimension::Engagement,
                ctx.config.readability_bonus,
                FeedbackItem::success("Short, readable wording."),
            );
        }
    }
}
