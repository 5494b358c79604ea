// Sentence Suggestions
// Display-only advice per sentence. Deliberately separate from the applied
// rewrite pipeline: this path explains, the pipeline edits.

use crate::models::{SentenceSuggestion, SuggestionIssue};
use crate::services::humanizer::tables::{
    has_passive_voice, transition_alternatives, FILLER_ALTERNATIVES,
};
use crate::services::text_processor::split_sentences;
use rand::Rng;

const MAX_SUGGESTED_SENTENCES: usize = 15;

const LONG_SENTENCE_WORDS: usize = 35;
const SHORT_SENTENCE_WORDS: usize = 5;

/// Generate suggestions for the first 15 sentences of `text`. Sentences with
/// nothing to flag produce no entry.
pub fn sentence_suggestions_with_rng<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
) -> Vec<SentenceSuggestion> {
    split_sentences(text)
        .iter()
        .take(MAX_SUGGESTED_SENTENCES)
        .enumerate()
        .filter_map(|(index, sentence)| analyze_sentence(sentence, index, rng))
        .collect()
}

/// As [`sentence_suggestions_with_rng`], with a thread-local random source.
pub fn sentence_suggestions(text: &str) -> Vec<SentenceSuggestion> {
    sentence_suggestions_with_rng(text, &mut rand::rng())
}

fn analyze_sentence<R: Rng + ?Sized>(
    sentence: &str,
    index: usize,
    rng: &mut R,
) -> Option<SentenceSuggestion> {
    let mut issues = Vec::new();
    let mut improved: Option<String> = None;

    let lower = sentence.to_lowercase();
    let words: Vec<&str> = sentence.split_whitespace().collect();

    // Formal transition at sentence start.
    if let Some(first_word) = words.first() {
        let trimmed = first_word.trim_end_matches(['.', ',', ';', ':']);
        let key = trimmed.to_lowercase();
        if let Some(alternatives) = transition_alternatives(&key) {
            issues.push(SuggestionIssue {
                issue: format!("Starts with formal transition '{key}'"),
                fix: format!("Try: {}", alternatives.join(", ")),
                explanation: "Formal transitions can make writing sound robotic".to_string(),
            });
            // Keep whatever punctuation followed the transition word.
            let alt = alternatives[rng.random_range(0..alternatives.len())];
            improved = Some(format!(
                "{}{}",
                uppercase_first(alt),
                &sentence[trimmed.len()..]
            ));
        }
    }

    // Filler phrases anywhere in the sentence.
    for (filler, alternatives) in FILLER_ALTERNATIVES {
        if lower.contains(filler) {
            issues.push(SuggestionIssue {
                issue: format!("Contains filler phrase: '{filler}'"),
                fix: format!("Try: {}", alternatives.join(", ")),
                explanation: "This phrase adds words without adding meaning".to_string(),
            });
        }
    }

    // Sentence length extremes.
    if words.len() > LONG_SENTENCE_WORDS {
        issues.push(SuggestionIssue {
            issue: "Very long sentence".to_string(),
            fix: "Consider breaking into 2-3 shorter sentences".to_string(),
            explanation: "Long sentences can be hard to follow. Vary your length.".to_string(),
        });
    } else if words.len() < SHORT_SENTENCE_WORDS && index > 0 {
        issues.push(SuggestionIssue {
            issue: "Very short sentence".to_string(),
            fix: "This is fine! Short sentences add punch.".to_string(),
            explanation: "Mixing short and long sentences creates rhythm.".to_string(),
        });
    }

    if has_passive_voice(&lower) {
        issues.push(SuggestionIssue {
            issue: "Possible passive voice".to_string(),
            fix: "Try active voice: Subject + Verb + Object".to_string(),
            explanation: "Active voice is usually clearer and more engaging".to_string(),
        });
    }

    if issues.is_empty() {
        return None;
    }

    Some(SentenceSuggestion {
        index,
        original: sentence.to_string(),
        improved,
        issues,
    })
}

fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_transition_start_produces_improved_version() {
        let text = "Furthermore, the results were encouraging overall.";
        let suggestions = sentence_suggestions_with_rng(text, &mut rng());
        assert_eq!(suggestions.len(), 1);
        let suggestion = &suggestions[0];
        assert_eq!(suggestion.index, 0);
        assert!(suggestion.issues[0].issue.contains("furthermore"));
        let improved = suggestion.improved.as_ref().unwrap();
        assert!(!improved.to_lowercase().starts_with("furthermore"));
        // The comma after the transition survives the swap.
        assert!(improved.contains(", the results were encouraging overall."));
    }

    #[test]
    fn test_clean_sentence_produces_no_suggestion() {
        let text = "We walked to the harbor and watched gulls wheel overhead.";
        let suggestions = sentence_suggestions_with_rng(text, &mut rng());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_filler_phrase_flagged() {
        let text = "It is worth mentioning that attendance doubled this year.";
        let suggestions = sentence_suggestions_with_rng(text, &mut rng());
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].issues[0].issue.contains("it is worth mentioning"));
        assert!(suggestions[0].improved.is_none());
    }

    #[test]
    fn test_passive_voice_flagged() {
        let text = "The report was finished by the intern last Friday evening.";
        let suggestions = sentence_suggestions_with_rng(text, &mut rng());
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0]
            .issues
            .iter()
            .any(|i| i.issue == "Possible passive voice"));
    }

    #[test]
    fn test_short_sentence_only_after_first() {
        // A short opener is not flagged; a short follow-up is acknowledged.
        let text = "The meeting ran long into the evening again. It ended anyway.";
        let suggestions = sentence_suggestions_with_rng(text, &mut rng());
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].index, 1);
        assert_eq!(suggestions[0].issues[0].issue, "Very short sentence");
    }

    #[test]
    fn test_limit_to_first_fifteen_sentences() {
        let text = (0..20)
            .map(|i| format!("Furthermore, sentence number {i} repeats itself."))
            .collect::<Vec<_>>()
            .join(" ");
        let suggestions = sentence_suggestions_with_rng(&text, &mut rng());
        assert_eq!(suggestions.len(), 15);
    }
}
