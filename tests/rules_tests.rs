//! Rule-level integration tests
//!
//! Structure and readability checks, the linguistic provider group, policy
//! overrides through ScoringConfig, and language resolution fallbacks.

use pretty_assertions::assert_eq;

use postscore::{
    analyze, Analyzer, FeedbackKind, HeuristicProvider, Language, Platform, PostInput,
    ScoringConfig,
};

fn input(text: &str) -> PostInput {
    PostInput {
        text: text.to_string(),
        platform: Platform::Twitter,
        language: Some(Language::En),
    }
}

// =============================================================================
// Structure Rules
// =============================================================================

mod structure_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_long_single_block_draws_a_warning() {
        let text = (0..35).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
        let result = analyze(&text, Platform::Facebook, Some(Language::En));
        assert!(result
            .feedback
            .iter()
            .any(|item| item.kind == FeedbackKind::Warning
                && item.message.contains("break it into multiple paragraphs")));
    }

    #[test]
    fn test_paragraph_split_earns_engagement() {
        let joined = analyze("alpha beta\n\ngamma delta", Platform::Twitter, Some(Language::En));
        let single = analyze("alpha beta gamma delta", Platform::Twitter, Some(Language::En));
        assert_eq!(joined.engagement - single.engagement, 5);
    }

    #[test]
    fn test_dense_paragraphs_warn_even_when_split() {
        let paragraph = (0..60).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let text = format!("{paragraph}\n\n{paragraph}");
        let result = analyze(&text, Platform::Facebook, Some(Language::En));
        assert!(result
            .feedback
            .iter()
            .any(|item| item.kind == FeedbackKind::Warning && item.message.contains("dense")));
        // the multi-paragraph success still fires alongside
        assert!(result
            .feedback
            .iter()
            .any(|item| item.message.contains("split into paragraphs")));
    }
}

// =============================================================================
// Linguistic Provider Group
// =============================================================================

mod linguistic_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn enhanced() -> Analyzer {
        Analyzer::new().with_provider(Box::new(HeuristicProvider))
    }

    #[test]
    fn test_question_adds_interest_over_base() {
        let post = input("Would this save your team an afternoon?");
        let base = Analyzer::new().analyze(&post);
        let rich = enhanced().analyze(&post);
        assert!(rich.aida.interest > base.aida.interest);
    }

    #[test]
    fn test_negative_sentiment_is_flagged_as_info() {
        let post = input("A terrible week and an awful, broken launch.");
        let result = enhanced().analyze(&post);
        assert!(result
            .feedback
            .iter()
            .any(|item| item.kind == FeedbackKind::Info && item.message.contains("negative")));
    }

    #[test]
    fn test_imperative_open_adds_action() {
        let post = input("Grab the free guide before midnight.");
        let base = Analyzer::new().analyze(&post);
        let rich = enhanced().analyze(&post);
        assert!(rich.aida.action > base.aida.action);
    }

    #[test]
    fn test_base_engine_never_emits_linguistic_feedback() {
        let post = input("Is this the best launch ever?");
        let result = Analyzer::new().analyze(&post);
        assert!(!result
            .feedback
            .iter()
            .any(|item| item.message.contains("Superlatives")
                || item.message.contains("Asking a question")));
    }
}

// =============================================================================
// Policy Overrides
// =============================================================================

mod config_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_custom_deltas_change_the_score() {
        let mut config = ScoringConfig::default();
        config.hashtag_bonus = 40;
        let custom = Analyzer::with_config(config).analyze(&input("launch day #go"));
        let standard = Analyzer::new().analyze(&input("launch day #go"));
        assert_eq!(custom.engagement - standard.engagement, 30);
    }

    #[test]
    fn test_config_round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoring.json");

        let mut config = ScoringConfig::default();
        config.emoji_hook_bonus = 33;
        config.save(&path).unwrap();

        let loaded = ScoringConfig::load(&path).unwrap();
        assert_eq!(loaded.emoji_hook_bonus, 33);
        assert_eq!(loaded.caps_hook_bonus, 20);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = ScoringConfig::load_or_default("/nonexistent/scoring.json");
        assert_eq!(config.emoji_hook_bonus, 25);
    }
}

// =============================================================================
// Language Resolution
// =============================================================================

mod language_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dutch_text_is_autodetected() {
        let result = analyze(
            "Wij lanceren vandaag een nieuw product en iedereen kan het meteen bestellen, \
             want de webwinkel is vanaf vanochtend gewoon open.",
            Platform::LinkedIn,
            None,
        );
        // "nieuw" (attention) and "bestel" (action) come from the Dutch lexicon
        assert!(result.aida.attention >= 10);
        assert!(result.aida.action >= 15);
    }

    #[test]
    fn test_unsupported_language_falls_back_to_english() {
        // clearly Russian text: detection succeeds but is unsupported
        let result = analyze(
            "Это сообщение написано на русском языке. click",
            Platform::Twitter,
            None,
        );
        // the English lexicon still applies after fallback
        assert!(result.aida.action >= 15);
    }
}
