// Rewrite Pipeline
// Applies the fixed humanization pass sequence to a full text and records
// every edit. Random choices draw from a caller-supplied source so rewrites
// are reproducible under a seeded generator.

use crate::models::{
    AnalysisResult, ChangeKind, ChangeRecord, FeatureVector, HumanizeResult, LearningPoint,
    RewriteExample, WritingTip,
};
use crate::services::humanizer::suggestions::sentence_suggestions_with_rng;
use crate::services::humanizer::tables::{
    filler_alternatives, transition_alternatives, FILLER_ALTERNATIVES, FORMAL_TO_CASUAL,
    HUMAN_STARTERS, RHETORICAL_QUESTIONS, SPLIT_CONJUNCTIONS, TRANSITION_ALTERNATIVES,
};
use crate::services::text_processor::split_sentences;
use rand::Rng;
use regex::{escape, Regex, RegexBuilder};
use std::sync::OnceLock;
use tracing::debug;

/// Sentences longer than this are candidates for splitting.
const SPLIT_WORD_THRESHOLD: usize = 40;
/// A split point must fall within this many words of the midpoint.
const SPLIT_WINDOW: usize = 10;
/// Minimum sentence count before a rhetorical question is inserted.
const QUESTION_MIN_SENTENCES: usize = 5;
/// Preferred insertion slot for the rhetorical question.
const QUESTION_INSERT_POSITION: usize = 3;

const MAX_SUGGESTED_SENTENCES: usize = 15;
const MAX_EXAMPLE_SENTENCES: usize = 3;

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("case-insensitive regex")
}

fn formal_phrase_res() -> &'static Vec<(Regex, &'static str, &'static str)> {
    static RES: OnceLock<Vec<(Regex, &'static str, &'static str)>> = OnceLock::new();
    RES.get_or_init(|| {
        FORMAL_TO_CASUAL
            .iter()
            .map(|(formal, casual)| (case_insensitive(&escape(formal)), *formal, *casual))
            .collect()
    })
}

fn transition_res() -> &'static Vec<(Regex, &'static str, &'static [&'static str])> {
    static RES: OnceLock<Vec<(Regex, &'static str, &'static [&'static str])>> = OnceLock::new();
    RES.get_or_init(|| {
        TRANSITION_ALTERNATIVES
            .iter()
            .map(|(formal, alternatives)| {
                // Match at text start or right after a sentence boundary.
                let pattern = format!(r"(^|[.!?]\s+)({})(\s|,)", escape(formal));
                (case_insensitive(&pattern), *formal, *alternatives)
            })
            .collect()
    })
}

fn filler_res() -> &'static Vec<(Regex, &'static str, &'static [&'static str])> {
    static RES: OnceLock<Vec<(Regex, &'static str, &'static [&'static str])>> = OnceLock::new();
    RES.get_or_init(|| {
        FILLER_ALTERNATIVES
            .iter()
            .map(|(filler, alternatives)| (case_insensitive(&escape(filler)), *filler, *alternatives))
            .collect()
    })
}

/// Run the full rewrite pass sequence, returning the humanized text and the
/// ordered change log.
pub fn humanize_text_with_rng<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
) -> (String, Vec<ChangeRecord>) {
    let mut changes = Vec::new();

    let mut result = replace_formal_phrases(text, &mut changes);
    result = replace_transitions(&result, rng, &mut changes);
    result = replace_fillers(&result, rng, &mut changes);

    // Remaining passes work sentence-by-sentence on the modified text.
    let sentences = split_sentences(&result);
    if sentences.is_empty() {
        // Nothing segmentable; structural passes have nothing to do.
        return (result, changes);
    }

    let sentences = add_start_variety(&sentences, rng, &mut changes);
    let mut sentences = split_long_sentences(&sentences, &mut changes);
    insert_rhetorical_question(&mut sentences, rng, &mut changes);

    let humanized = sentences.join(" ");
    debug!(changes = changes.len(), "rewrite pipeline complete");
    (humanized, changes)
}

/// Pass 1: replace every formal phrase from the table with its casual form.
/// Applying this pass to its own output yields no further changes.
pub fn replace_formal_phrases(text: &str, changes: &mut Vec<ChangeRecord>) -> String {
    let mut result = text.to_string();
    for (re, formal, casual) in formal_phrase_res() {
        if re.is_match(&result) {
            result = re.replace_all(&result, *casual).to_string();
            changes.push(ChangeRecord {
                kind: ChangeKind::PhraseReplacement,
                original: formal.to_string(),
                replacement: casual.to_string(),
                reason: "Replaced formal phrase with simpler alternative".to_string(),
            });
        }
    }
    result
}

/// Pass 2: swap formal transitions at sentence starts for casual ones.
fn replace_transitions<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
    changes: &mut Vec<ChangeRecord>,
) -> String {
    let mut result = text.to_string();
    for (re, formal, alternatives) in transition_res() {
        if re.is_match(&result) {
            let replacement = alternatives[rng.random_range(0..alternatives.len())];
            result = re
                .replace_all(&result, |caps: &regex::Captures| {
                    format!("{}{}{}", &caps[1], replacement, &caps[3])
                })
                .to_string();
            changes.push(ChangeRecord {
                kind: ChangeKind::TransitionReplacement,
                original: formal.to_string(),
                replacement: replacement.to_string(),
                reason: "Replaced formal transition with natural alternative".to_string(),
            });
        }
    }
    result
}

/// Pass 3: substitute one filler phrase. First match wins; a single call
/// never touches more than one table entry.
fn replace_fillers<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
    changes: &mut Vec<ChangeRecord>,
) -> String {
    for (re, filler, alternatives) in filler_res() {
        if re.is_match(text) {
            let replacement = alternatives[rng.random_range(0..alternatives.len())];
            let result = re.replace_all(text, replacement).to_string();
            changes.push(ChangeRecord {
                kind: ChangeKind::FillerRemoval,
                original: filler.to_string(),
                replacement: replacement.to_string(),
                reason: "Removed filler phrase that adds no meaning".to_string(),
            });
            return result;
        }
    }
    text.to_string()
}

/// Pass 4: once two or more consecutive sentences open with "the"/"this",
/// occasionally prepend a conversational starter.
fn add_start_variety<R: Rng + ?Sized>(
    sentences: &[String],
    rng: &mut R,
    changes: &mut Vec<ChangeRecord>,
) -> Vec<String> {
    let mut consecutive = 0usize;
    let mut out = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        let lower = sentence.to_lowercase();
        let mut modified = sentence.clone();

        if lower.starts_with("the ") || lower.starts_with("this ") {
            consecutive += 1;
            if consecutive >= 2 && rng.random_bool(0.5) {
                let starter = HUMAN_STARTERS[rng.random_range(0..HUMAN_STARTERS.len())];
                modified = format!("{} {}", starter, lowercase_first(sentence));
                changes.push(ChangeRecord {
                    kind: ChangeKind::VarietyAddition,
                    original: clipped(sentence, 30),
                    replacement: clipped(&modified, 40),
                    reason: "Added variety to avoid repetitive sentence starts".to_string(),
                });
                consecutive = 0;
            }
        } else {
            consecutive = 0;
        }

        out.push(modified);
    }

    out
}

/// Pass 5: split sentences beyond the word threshold at a conjunction near
/// the midpoint. Sentences with no usable split point are left alone.
fn split_long_sentences(sentences: &[String], changes: &mut Vec<ChangeRecord>) -> Vec<String> {
    let mut out = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        if words.len() <= SPLIT_WORD_THRESHOLD {
            out.push(sentence.clone());
            continue;
        }

        let mid_point = words.len() / 2;
        let split_index = SPLIT_CONJUNCTIONS.iter().find_map(|conjunction| {
            words
                .iter()
                .position(|w| w == conjunction)
                .filter(|&idx| idx + SPLIT_WINDOW > mid_point && idx < mid_point + SPLIT_WINDOW)
        });

        match split_index {
            Some(idx) => {
                let mut first_part = words[..idx].join(" ");
                if !first_part.ends_with('.') {
                    first_part.push('.');
                }
                let second_part = uppercase_first(&words[idx..].join(" "));

                changes.push(ChangeRecord {
                    kind: ChangeKind::SentenceSplit,
                    original: clipped(sentence, 40),
                    replacement: format!(
                        "{} | {}",
                        clipped(&first_part, 20),
                        clipped(&second_part, 20)
                    ),
                    reason: "Split long sentence for better readability".to_string(),
                });

                out.push(first_part);
                out.push(second_part);
            }
            None => out.push(sentence.clone()),
        }
    }

    out
}

/// Pass 6: question-free texts longer than five sentences get one rhetorical
/// question inserted near the top.
fn insert_rhetorical_question<R: Rng + ?Sized>(
    sentences: &mut Vec<String>,
    rng: &mut R,
    changes: &mut Vec<ChangeRecord>,
) {
    if sentences.len() <= QUESTION_MIN_SENTENCES || sentences.iter().any(|s| s.contains('?')) {
        return;
    }

    let insert_pos = QUESTION_INSERT_POSITION.min(sentences.len() - 1);
    let question = RHETORICAL_QUESTIONS[rng.random_range(0..RHETORICAL_QUESTIONS.len())];
    sentences.insert(insert_pos, question.to_string());
    changes.push(ChangeRecord {
        kind: ChangeKind::QuestionAddition,
        original: "(no questions)".to_string(),
        replacement: question.to_string(),
        reason: "Added rhetorical question to engage reader (human writers ask questions)"
            .to_string(),
    });
}

/// Full humanization: suggestions, tips, learning points, examples, plus the
/// rewritten text and its change log.
pub fn humanize_with_rng<R: Rng + ?Sized>(
    text: &str,
    ai_result: &AnalysisResult,
    rng: &mut R,
) -> HumanizeResult {
    if text.trim().is_empty() {
        return HumanizeResult::default();
    }

    let sentences = split_sentences(text);
    let suggestions = sentence_suggestions_with_rng(text, rng)
        .into_iter()
        .take(MAX_SUGGESTED_SENTENCES)
        .collect();
    let general_tips = generate_tips(&ai_result.features);
    let learning_points = learning_points();
    let before_after_examples = generate_examples(&sentences, rng);
    let (humanized_text, changes) = humanize_text_with_rng(text, rng);

    HumanizeResult {
        suggestions,
        general_tips,
        learning_points,
        before_after_examples,
        humanized_text,
        changes,
    }
}

/// As [`humanize_with_rng`], with a thread-local random source.
pub fn humanize(text: &str, ai_result: &AnalysisResult) -> HumanizeResult {
    humanize_with_rng(text, ai_result, &mut rand::rng())
}

/// General writing tips keyed off the AI analysis features.
fn generate_tips(features: &FeatureVector) -> Vec<WritingTip> {
    let mut tips = Vec::new();

    if features.sentence_uniformity > 70.0 {
        tips.push(WritingTip {
            title: "Vary Your Sentence Length".to_string(),
            tip: "Your sentences are similar in length. Mix it up! Use some short punchy \
                  sentences. Then follow with longer, more detailed explanations when needed."
                .to_string(),
            example: "Before: \"The data shows clear patterns. The results indicate growth. The \
                      analysis reveals trends.\"\nAfter: \"The data speaks. Clear patterns emerge \
                      - growth, trends, undeniable progress that the numbers can't hide.\""
                .to_string(),
        });
    }

    if features.burstiness < 30.0 {
        tips.push(WritingTip {
            title: "Add Complexity Variation".to_string(),
            tip: "Your writing has consistent complexity throughout. Humans naturally write \
                  with \"bursts\" - simple ideas followed by complex analysis, then back to \
                  simple."
                .to_string(),
            example: "Try: Start with a simple statement. Then dive deep into details. Then come \
                      back up for air with another simple point."
                .to_string(),
        });
    }

    if features.transition_density > 3.0 {
        tips.push(WritingTip {
            title: "Reduce Formal Transitions".to_string(),
            tip: "You're using many formal transition words (furthermore, moreover, etc.). \
                  These are fine in academic writing, but too many sounds robotic."
                .to_string(),
            example: "Instead of \"Furthermore, the study shows...\" try \"The study also \
                      shows...\" or just \"Plus, ...\""
                .to_string(),
        });
    }

    tips
}

fn learning_points() -> Vec<LearningPoint> {
    vec![
        LearningPoint {
            concept: "Sentence Rhythm".to_string(),
            explanation: "Good writing has rhythm. Read your work aloud. Does it flow \
                          naturally? Does it sound like YOU talking?"
                .to_string(),
            exercise: "Read one paragraph aloud. Mark sentences that feel awkward. Rewrite \
                       those in your own voice."
                .to_string(),
        },
        LearningPoint {
            concept: "Show Your Thinking".to_string(),
            explanation: "AI writes \"correctly\" but impersonally. Your unique perspective, \
                          uncertainties, and personal examples make writing human."
                .to_string(),
            exercise: "Add one personal example or opinion to each main point. Use \"I think\" \
                       or \"In my experience\" where appropriate."
                .to_string(),
        },
        LearningPoint {
            concept: "Imperfection is Human".to_string(),
            explanation: "Perfectly structured prose can feel artificial. Real writing has \
                          character - informal asides, questions, even occasional rule-breaking."
                .to_string(),
            exercise: "Add a rhetorical question. Use a sentence fragment for emphasis. Include \
                       a personal aside in parentheses."
                .to_string(),
        },
    ]
}

/// Before/after examples built from the first few sentences.
fn generate_examples<R: Rng + ?Sized>(sentences: &[String], rng: &mut R) -> Vec<RewriteExample> {
    sentences
        .iter()
        .take(MAX_EXAMPLE_SENTENCES)
        .filter_map(|sentence| {
            let rewrite = humanize_sentence(sentence, rng);
            (rewrite != *sentence).then(|| RewriteExample {
                explanation: explain_changes(sentence, &rewrite),
                before: sentence.clone(),
                after: rewrite,
            })
        })
        .collect()
}

/// Rewrite one sentence: swap a leading formal transition, then substitute
/// the first filler phrase present.
pub fn humanize_sentence<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> String {
    let mut result = sentence.to_string();

    if let Some(first_word) = result.split_whitespace().next() {
        let key = first_word
            .to_lowercase()
            .trim_end_matches(['.', ',', ';', ':'])
            .to_string();
        let rest_start = first_word.len();
        if let Some(alternatives) = transition_alternatives(&key) {
            let alt = alternatives[rng.random_range(0..alternatives.len())];
            let rewritten = format!("{}{}", uppercase_first(alt), &result[rest_start..]);
            result = rewritten;
        }
    }

    let lower = result.to_lowercase();
    for (filler, _) in FILLER_ALTERNATIVES {
        if lower.contains(filler) {
            let alternatives = filler_alternatives(filler).unwrap_or(&[]);
            if let Some(alt) = alternatives.first() {
                result = case_insensitive(&escape(filler))
                    .replace_all(&result, *alt)
                    .to_string();
            }
            break;
        }
    }

    result
}

fn explain_changes(original: &str, rewritten: &str) -> String {
    let orig_first = original.split_whitespace().next().map(str::to_lowercase);
    let new_first = rewritten.split_whitespace().next().map(str::to_lowercase);

    match (orig_first, new_first) {
        (Some(o), Some(n)) if o != n => format!("Changed opening from '{o}' to '{n}'"),
        _ => "Simplified phrasing for more natural flow".to_string(),
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn clipped(s: &str, max_chars: usize) -> String {
    let prefix: String = s.chars().take(max_chars).collect();
    format!("{prefix}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_formal_phrase_replacement_is_idempotent() {
        let text = "In order to succeed, we must utilize every tool due to the fact that time \
                    is short.";
        let mut changes = Vec::new();
        let once = replace_formal_phrases(text, &mut changes);
        assert!(!changes.is_empty());
        assert!(once.contains("To succeed") || once.contains("to succeed"));

        let mut second_changes = Vec::new();
        let twice = replace_formal_phrases(&once, &mut second_changes);
        assert_eq!(once, twice);
        assert!(second_changes.is_empty());
    }

    #[test]
    fn test_transition_replacement_at_sentence_start() {
        let text = "The plan worked well. Furthermore, the costs stayed low.";
        let mut changes = Vec::new();
        let result = replace_transitions(text, &mut rng(), &mut changes);
        assert!(!result.to_lowercase().contains("furthermore"));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::TransitionReplacement);
        assert_eq!(changes[0].original, "furthermore");
    }

    #[test]
    fn test_transition_not_replaced_mid_sentence() {
        let text = "The results were good and furthermore surprising to everyone.";
        let mut changes = Vec::new();
        let result = replace_transitions(text, &mut rng(), &mut changes);
        assert_eq!(result, text);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_single_filler_substitution_per_call() {
        let text = "It is important to note the budget. In other words, costs matter.";
        let mut changes = Vec::new();
        let result = replace_fillers(text, &mut rng(), &mut changes);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::FillerRemoval);
        // First table entry present wins; the second filler survives.
        assert_eq!(changes[0].original, "it is important to note");
        assert!(result.to_lowercase().contains("in other words"));
    }

    #[test]
    fn test_long_sentence_split_produces_two_sentences() {
        let words: Vec<String> = (0..22).map(|i| format!("word{i}")).collect();
        let sentence = format!("{} because {}", words[..22].join(" "), words[..22].join(" "));
        assert_eq!(sentence.split_whitespace().count(), 45);

        let mut changes = Vec::new();
        let result = split_long_sentences(&[sentence], &mut changes);
        assert_eq!(result.len(), 2);
        assert!(result[0].ends_with('.'));
        assert!(result[1].starts_with("Because"));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::SentenceSplit);
    }

    #[test]
    fn test_long_sentence_without_split_point_unchanged() {
        let sentence = (0..45).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let mut changes = Vec::new();
        let result = split_long_sentences(&[sentence.clone()], &mut changes);
        assert_eq!(result, vec![sentence]);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_question_inserted_when_text_long_and_question_free() {
        let mut sentences: Vec<String> = (0..6)
            .map(|i| format!("Sentence number {i} carries enough words."))
            .collect();
        let mut changes = Vec::new();
        insert_rhetorical_question(&mut sentences, &mut rng(), &mut changes);
        assert_eq!(sentences.len(), 7);
        assert!(sentences[3].contains('?') || sentences[3].ends_with(':'));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::QuestionAddition);
    }

    #[test]
    fn test_no_question_when_one_already_present() {
        let mut sentences: Vec<String> = (0..6)
            .map(|i| format!("Sentence number {i} carries enough words."))
            .collect();
        sentences[5] = "Why would it not?".to_string();
        let mut changes = Vec::new();
        insert_rhetorical_question(&mut sentences, &mut rng(), &mut changes);
        assert_eq!(sentences.len(), 6);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_seeded_rewrite_is_reproducible() {
        let text = "Furthermore, it is important to note that the committee will utilize the \
                    new process. The team agreed on the plan. The budget was approved quickly. \
                    The schedule is aggressive but workable. The review happens monthly. The \
                    stakeholders stay informed throughout.";
        let (first_text, first_changes) = humanize_text_with_rng(text, &mut rng());
        let (second_text, second_changes) = humanize_text_with_rng(text, &mut rng());
        assert_eq!(first_text, second_text);
        assert_eq!(first_changes.len(), second_changes.len());
    }

    #[test]
    fn test_change_log_orders_by_pass() {
        let text = "Furthermore, it is important to note that we must utilize the tool. The \
                    report was ready. The data was clean. The summary was short. The ending \
                    was abrupt. The follow-up came later.";
        let (_, changes) = humanize_text_with_rng(text, &mut rng());
        let kinds: Vec<ChangeKind> = changes.iter().map(|c| c.kind).collect();
        let phrase_pos = kinds.iter().position(|k| *k == ChangeKind::PhraseReplacement);
        let transition_pos = kinds
            .iter()
            .position(|k| *k == ChangeKind::TransitionReplacement);
        if let (Some(p), Some(t)) = (phrase_pos, transition_pos) {
            assert!(p < t, "phrase replacements must precede transition changes");
        }
    }

    #[test]
    fn test_humanize_empty_input() {
        let ai = crate::services::detection::analyze_text("");
        let result = humanize_with_rng("", &ai, &mut rng());
        assert!(result.humanized_text.is_empty());
        assert!(result.changes.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_tips_follow_features() {
        let features = FeatureVector {
            sentence_uniformity: 85.0,
            burstiness: 10.0,
            transition_density: 5.0,
            ..FeatureVector::default()
        };
        let tips = generate_tips(&features);
        assert_eq!(tips.len(), 3);
        assert_eq!(tips[0].title, "Vary Your Sentence Length");
    }

    #[test]
    fn test_humanize_sentence_swaps_leading_transition() {
        let result = humanize_sentence("Furthermore, the tests passed.", &mut rng());
        assert!(!result.to_lowercase().starts_with("furthermore"));
        assert!(result.ends_with("the tests passed."));
    }
}
