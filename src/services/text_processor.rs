// Text Segmentation Service
// Shared sentence/word splitting used by every analysis engine

use regex::Regex;
use std::sync::OnceLock;

/// Minimum trimmed length for a fragment to count as a sentence.
const MIN_SENTENCE_CHARS: usize = 10;

fn sentence_boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Rust regex has no lookbehind; mark boundaries and split on the marker.
    RE.get_or_init(|| Regex::new(r"([.!?])\s+").expect("sentence boundary regex"))
}

fn alpha_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[a-z]+\b").expect("alpha word regex"))
}

/// Split text into sentences on terminal punctuation followed by whitespace.
/// Candidates are trimmed; fragments of 10 chars or fewer are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let marked = sentence_boundary_re().replace_all(text, "$1\x00");
    marked
        .split('\x00')
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Whitespace tokens, as used for density ratios.
pub fn whitespace_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lower-cased alphabetic word runs, as used for vocabulary analysis.
pub fn alphabetic_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    alpha_word_re()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Strip leading/trailing non-alphanumeric chars from a token, lower-cased.
/// `"Furthermore,"` normalizes to `"furthermore"`.
pub fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_basic() {
        let text = "This is the first sentence. This is the second one! Is this the third?";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "This is the first sentence.");
        assert_eq!(sentences[2], "Is this the third?");
    }

    #[test]
    fn test_split_sentences_drops_short_fragments() {
        let text = "Short. This sentence is long enough to keep. Ok.";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0], "This sentence is long enough to keep.");
    }

    #[test]
    fn test_split_sentences_keeps_trailing_fragment() {
        let text = "A full sentence here. And a trailing clause without punctuation";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_no_split_without_whitespace() {
        // Decimal points and unspaced punctuation are not boundaries.
        let text = "The value rose to 3.5 percent overall.";
        assert_eq!(split_sentences(text).len(), 1);
    }

    #[test]
    fn test_alphabetic_words_lowercases_and_strips() {
        let words = alphabetic_words("The Quick brown FOX, 42 times!");
        assert_eq!(words, vec!["the", "quick", "brown", "fox", "times"]);
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("Furthermore,"), "furthermore");
        assert_eq!(normalize_token("(thus)"), "thus");
        assert_eq!(normalize_token("plain"), "plain");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two  three"), 3);
        assert_eq!(word_count(""), 0);
    }
}
