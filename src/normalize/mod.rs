//! @acp:module "Input Normalizer"
//! @acp:summary "Counts and segments raw post text for the rule engine"
//! @acp:domain scoring
//! @acp:layer logic

use once_cell::sync::Lazy;
use regex::Regex;

static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

// A sentence ends at a run of terminal punctuation, optionally followed by
// closing quotes or brackets. The terminator stays with its sentence so
// later detectors can inspect it.
static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*"#).unwrap());

/// One post's text, segmented once and shared by every rule.
///
/// Empty input yields zero counts and empty sequences; rules treat that as
/// "no match" rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Length of the raw text in Unicode scalar values, whitespace included
    pub char_count: usize,
    /// Whitespace-delimited non-empty tokens
    pub words: Vec<String>,
    /// Count of `words` entries
    pub word_count: usize,
    /// Text split on blank lines, empty entries discarded
    pub paragraphs: Vec<String>,
    /// Text split at sentence-ending punctuation, terminators retained
    pub sentences: Vec<String>,
}

impl NormalizedText {
    pub fn new(text: &str) -> Self {
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        let word_count = words.len();

        let paragraphs: Vec<String> = PARAGRAPH_SPLIT_RE
            .split(text)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            char_count: text.chars().count(),
            words,
            word_count,
            paragraphs,
            sentences: split_sentences(text),
        }
    }

    /// Mean word length in characters; 0.0 for empty input
    pub fn avg_word_len(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        let total: usize = self.words.iter().map(|w| w.chars().count()).sum();
        total as f64 / self.words.len() as f64
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for terminator in SENTENCE_END_RE.find_iter(text) {
        let sentence = text[start..terminator.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = terminator.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_zero_everything() {
        let normalized = NormalizedText::new("");
        assert_eq!(normalized.char_count, 0);
        assert_eq!(normalized.word_count, 0);
        assert!(normalized.paragraphs.is_empty());
        assert!(normalized.sentences.is_empty());
    }

    #[test]
    fn test_char_count_includes_whitespace() {
        assert_eq!(NormalizedText::new("a b").char_count, 3);
    }

    #[test]
    fn test_char_count_is_scalar_values_not_bytes() {
        assert_eq!(NormalizedText::new("🚨 café").char_count, 6);
    }

    #[test]
    fn test_word_count_skips_extra_whitespace() {
        let normalized = NormalizedText::new("  one   two\tthree \n four ");
        assert_eq!(normalized.word_count, 4);
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let normalized = NormalizedText::new("first block\nstill first\n\nsecond block\n\n\nthird");
        assert_eq!(normalized.paragraphs.len(), 3);
        assert_eq!(normalized.paragraphs[0], "first block\nstill first");
    }

    #[test]
    fn test_sentences_keep_terminators() {
        let normalized = NormalizedText::new("Ready? Launch is live! Details below.");
        assert_eq!(
            normalized.sentences,
            vec!["Ready?", "Launch is live!", "Details below."]
        );
    }

    #[test]
    fn test_unterminated_text_is_one_sentence() {
        let normalized = NormalizedText::new("no punctuation here");
        assert_eq!(normalized.sentences, vec!["no punctuation here"]);
    }

    #[test]
    fn test_avg_word_len() {
        let normalized = NormalizedText::new("ab abcd");
        assert!((normalized.avg_word_len() - 3.0).abs() < f64::EPSILON);
    }
}
