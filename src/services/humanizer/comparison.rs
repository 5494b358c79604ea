// Comparison Logic
// Pairs original and humanized sentences for side-by-side display

use crate::models::{ComparisonResult, SentenceComparison};
use crate::services::text_processor::{split_sentences, word_count};

const MAX_COMPARED_SENTENCES: usize = 20;

/// Pair sentences of the original and humanized texts by index (up to 20
/// pairs) and report which changed, plus aggregate counts. Pure reporting;
/// neither text is modified.
pub fn compare(original: &str, humanized: &str) -> ComparisonResult {
    let original_sentences = split_sentences(original);
    let humanized_sentences = split_sentences(humanized);

    let pair_count = original_sentences
        .len()
        .max(humanized_sentences.len())
        .min(MAX_COMPARED_SENTENCES);

    let comparisons = (0..pair_count)
        .map(|i| {
            let orig = original_sentences.get(i).cloned().unwrap_or_default();
            let human = humanized_sentences.get(i).cloned().unwrap_or_default();
            SentenceComparison {
                index: i + 1,
                changed: orig != human,
                original: orig,
                humanized: human,
            }
        })
        .collect();

    ComparisonResult {
        comparisons,
        original_word_count: word_count(original),
        humanized_word_count: word_count(humanized),
        original_sentence_count: original_sentences.len(),
        humanized_sentence_count: humanized_sentences.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_report_no_changes() {
        let text = "The harbor was quiet this morning. Gulls circled the empty pier.";
        let result = compare(text, text);
        assert_eq!(result.comparisons.len(), 2);
        assert!(result.comparisons.iter().all(|c| !c.changed));
        assert_eq!(result.original_word_count, result.humanized_word_count);
        assert_eq!(
            result.original_sentence_count,
            result.humanized_sentence_count
        );
    }

    #[test]
    fn test_changed_pair_is_flagged() {
        let original = "The harbor was quiet this morning. Gulls circled the empty pier.";
        let humanized = "The harbor was quiet this morning. Pigeons circled the empty pier.";
        let result = compare(original, humanized);
        assert!(!result.comparisons[0].changed);
        assert!(result.comparisons[1].changed);
    }

    #[test]
    fn test_uneven_sentence_counts_pad_with_empty() {
        let original = "The harbor was quiet this morning.";
        let humanized = "The harbor was quiet this morning. Something new appeared here.";
        let result = compare(original, humanized);
        assert_eq!(result.comparisons.len(), 2);
        assert_eq!(result.comparisons[1].original, "");
        assert!(result.comparisons[1].changed);
    }

    #[test]
    fn test_pairing_caps_at_twenty() {
        let long: String = (0..25)
            .map(|i| format!("Sentence number {i} stands alone here."))
            .collect::<Vec<_>>()
            .join(" ");
        let result = compare(&long, &long);
        assert_eq!(result.comparisons.len(), 20);
        assert_eq!(result.original_sentence_count, 25);
    }
}
