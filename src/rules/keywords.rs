//! @acp:module "Keyword Rule"
//! @acp:summary "Scans the resolved lexicon against the post text"
//! @acp:domain scoring
//! @acp:layer logic

use super::{Rule, RuleContext};
use crate::lexicon::AidaCategory;
use crate::score::{Dimension, FeedbackItem, Report};

/// Case-insensitive substring scan of every category list in the resolved
/// language's lexicon. Each matching word adds that category's delta and one
/// Success item; a word listed in two categories credits both.
pub struct KeywordRule;

impl Rule for KeywordRule {
    fn name(&self) -> &'static str {
        "keywords"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, report: &mut Report) {
        for category in AidaCategory::ALL {
            let bonus = ctx.config.keyword_bonus(category);
            for word in ctx.lexicon.category(category) {
                if ctx.lower.contains(word) {
                    report.record(
                        Dimension::from(category),
                        bonus,
                        FeedbackItem::success(format!(
                            "Contains {} keyword '{}'.",
                            category, word
                        )),
                    );
                }
            }
        }
    }
}
