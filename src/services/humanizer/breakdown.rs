// Sentence Breakdown
// Per-sentence human/AI diagnostic. Scoring is an ordered rule table: each
// rule reports its matches and contributes weight x matches to the sentence
// score, so the full rule set can be tested uniformly.

use crate::models::{Assessment, IndicatorNote, SentenceBreakdown};
use crate::services::humanizer::tables::{
    passive_voice_res, transition_alternatives, CONTRACTIONS, FILLER_ALTERNATIVES,
    FORMAL_TO_CASUAL, INFORMAL_MARKERS, PERSONAL_PRONOUNS,
};
use crate::services::text_processor::split_sentences;

const MAX_BREAKDOWN_SENTENCES: usize = 15;

/// Assumed document-average sentence length in words.
const ASSUMED_AVERAGE_WORDS: i32 = 15;
const AVERAGE_LENGTH_TOLERANCE: i32 = 3;
const SHORT_SENTENCE_WORDS: usize = 6;

struct SentenceCtx<'a> {
    sentence: &'a str,
    lower: String,
    word_count: usize,
}

type RuleFn = fn(&SentenceCtx) -> Vec<IndicatorNote>;

struct BreakdownRule {
    weight: i32,
    detect: RuleFn,
}

/// AI-leaning rules, applied in order. Negative weights.
const AI_RULES: &[BreakdownRule] = &[
    BreakdownRule { weight: -15, detect: leading_formal_transition },
    BreakdownRule { weight: -20, detect: filler_phrases },
    BreakdownRule { weight: -10, detect: formal_vocabulary },
    BreakdownRule { weight: -10, detect: passive_voice },
    BreakdownRule { weight: -5, detect: average_length },
];

/// Human-leaning rules, applied in order. Positive weights.
const HUMAN_RULES: &[BreakdownRule] = &[
    BreakdownRule { weight: 20, detect: question_mark },
    BreakdownRule { weight: 15, detect: personal_voice },
    BreakdownRule { weight: 10, detect: contraction },
    BreakdownRule { weight: 10, detect: short_sentence },
    BreakdownRule { weight: 10, detect: informal_marker },
];

/// Diagnose what makes each of the first 15 sentences read as AI or human.
pub fn generate_breakdown(text: &str) -> Vec<SentenceBreakdown> {
    split_sentences(text)
        .iter()
        .take(MAX_BREAKDOWN_SENTENCES)
        .enumerate()
        .map(|(i, sentence)| breakdown_sentence(sentence, i + 1))
        .collect()
}

fn breakdown_sentence(sentence: &str, index: usize) -> SentenceBreakdown {
    let ctx = SentenceCtx {
        sentence,
        lower: sentence.to_lowercase(),
        word_count: sentence.split_whitespace().count(),
    };

    let mut score = 0i32;
    let mut ai_indicators = Vec::new();
    let mut human_indicators = Vec::new();

    for rule in AI_RULES {
        let notes = (rule.detect)(&ctx);
        score += rule.weight * notes.len() as i32;
        ai_indicators.extend(notes);
    }

    for rule in HUMAN_RULES {
        let notes = (rule.detect)(&ctx);
        score += rule.weight * notes.len() as i32;
        human_indicators.extend(notes);
    }

    let assessment = assess(score);

    SentenceBreakdown {
        index,
        sentence: sentence.to_string(),
        word_count: ctx.word_count,
        ai_indicators,
        human_indicators,
        score,
        assessment,
        assessment_text: assessment.description().to_string(),
    }
}

fn assess(score: i32) -> Assessment {
    if score < -20 {
        Assessment::StronglyAi
    } else if score < 0 {
        Assessment::SlightlyAi
    } else if score > 20 {
        Assessment::StronglyHuman
    } else if score > 0 {
        Assessment::SlightlyHuman
    } else {
        Assessment::Neutral
    }
}

// ============ AI rules ============

fn leading_formal_transition(ctx: &SentenceCtx) -> Vec<IndicatorNote> {
    let Some(first_word) = ctx.lower.split_whitespace().next() else {
        return vec![];
    };
    let key = first_word.trim_end_matches(['.', ',', ';', ':']);
    match transition_alternatives(key) {
        Some(alternatives) => vec![IndicatorNote {
            kind: "Formal transition".to_string(),
            detail: format!("Starts with '{first_word}' - very common in AI writing"),
            fix: Some(format!("Try: {}", alternatives.join(", "))),
        }],
        None => vec![],
    }
}

fn filler_phrases(ctx: &SentenceCtx) -> Vec<IndicatorNote> {
    FILLER_ALTERNATIVES
        .iter()
        .filter(|(filler, _)| ctx.lower.contains(filler))
        .map(|(filler, alternatives)| IndicatorNote {
            kind: "Filler phrase".to_string(),
            detail: format!("Contains '{filler}' - adds words without meaning"),
            fix: Some(format!("Replace with: {}", alternatives[0])),
        })
        .collect()
}

fn formal_vocabulary(ctx: &SentenceCtx) -> Vec<IndicatorNote> {
    FORMAL_TO_CASUAL
        .iter()
        .filter(|(formal, _)| ctx.lower.contains(formal))
        .map(|(formal, casual)| IndicatorNote {
            kind: "Overly formal".to_string(),
            detail: format!("Uses '{formal}' - unnecessarily complex"),
            fix: Some(format!("Simpler: '{casual}'")),
        })
        .collect()
}

fn passive_voice(ctx: &SentenceCtx) -> Vec<IndicatorNote> {
    // Only the simple-aux pattern counts here.
    if passive_voice_res()[0].is_match(&ctx.lower) {
        vec![IndicatorNote {
            kind: "Passive voice".to_string(),
            detail: "Passive construction detected".to_string(),
            fix: Some("Convert to active voice: [Subject] [verb] [object]".to_string()),
        }]
    } else {
        vec![]
    }
}

fn average_length(ctx: &SentenceCtx) -> Vec<IndicatorNote> {
    if (ctx.word_count as i32 - ASSUMED_AVERAGE_WORDS).abs() < AVERAGE_LENGTH_TOLERANCE {
        vec![IndicatorNote {
            kind: "Uniform length".to_string(),
            detail: format!("{} words - very average length", ctx.word_count),
            fix: Some("Vary your sentence lengths for natural rhythm".to_string()),
        }]
    } else {
        vec![]
    }
}

// ============ Human rules ============

fn question_mark(ctx: &SentenceCtx) -> Vec<IndicatorNote> {
    if ctx.sentence.contains('?') {
        vec![IndicatorNote {
            kind: "Question".to_string(),
            detail: "Contains a question - shows engagement".to_string(),
            fix: None,
        }]
    } else {
        vec![]
    }
}

fn personal_voice(ctx: &SentenceCtx) -> Vec<IndicatorNote> {
    if PERSONAL_PRONOUNS.iter().any(|p| ctx.lower.contains(p)) {
        vec![IndicatorNote {
            kind: "Personal voice".to_string(),
            detail: "Uses personal pronouns - shows individual perspective".to_string(),
            fix: None,
        }]
    } else {
        vec![]
    }
}

fn contraction(ctx: &SentenceCtx) -> Vec<IndicatorNote> {
    if CONTRACTIONS.iter().any(|c| ctx.lower.contains(c)) {
        vec![IndicatorNote {
            kind: "Contraction".to_string(),
            detail: "Uses contractions - natural speech pattern".to_string(),
            fix: None,
        }]
    } else {
        vec![]
    }
}

fn short_sentence(ctx: &SentenceCtx) -> Vec<IndicatorNote> {
    if ctx.word_count <= SHORT_SENTENCE_WORDS {
        vec![IndicatorNote {
            kind: "Short sentence".to_string(),
            detail: format!("Only {} words - creates impact", ctx.word_count),
            fix: None,
        }]
    } else {
        vec![]
    }
}

fn informal_marker(ctx: &SentenceCtx) -> Vec<IndicatorNote> {
    INFORMAL_MARKERS
        .iter()
        .find(|m| ctx.lower.contains(*m))
        .map(|marker| {
            vec![IndicatorNote {
                kind: "Conversational".to_string(),
                detail: format!("Uses '{marker}' - conversational tone"),
                fix: None,
            }]
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formal_sentence_scores_strongly_ai() {
        let text = "Furthermore, it is important to note that we must utilize the framework.";
        let breakdown = generate_breakdown(text);
        assert_eq!(breakdown.len(), 1);
        let entry = &breakdown[0];
        // transition -15, filler -20, formal vocab -10, "we" personal voice +15.
        assert_eq!(entry.score, -30);
        assert_eq!(entry.assessment, Assessment::StronglyAi);
        assert_eq!(entry.index, 1);
        assert!(entry
            .human_indicators
            .iter()
            .any(|n| n.kind == "Personal voice"));
    }

    #[test]
    fn test_conversational_sentence_scores_human() {
        let text = "Honestly, I don't think that's the whole story, do you?";
        let breakdown = generate_breakdown(text);
        let entry = &breakdown[0];
        assert!(entry.score > 20, "expected strongly human, got {}", entry.score);
        assert_eq!(entry.assessment, Assessment::StronglyHuman);
        assert!(entry
            .human_indicators
            .iter()
            .any(|n| n.kind == "Question"));
        assert!(entry
            .human_indicators
            .iter()
            .any(|n| n.kind == "Contraction"));
    }

    #[test]
    fn test_each_filler_counts_separately() {
        let text = "It is important to note that, in other words, the plan works.";
        let breakdown = generate_breakdown(text);
        let entry = &breakdown[0];
        let fillers = entry
            .ai_indicators
            .iter()
            .filter(|n| n.kind == "Filler phrase")
            .count();
        assert_eq!(fillers, 2);
    }

    #[test]
    fn test_passive_voice_penalized_once() {
        let text = "The ball was thrown and the window was shattered during practice.";
        let breakdown = generate_breakdown(text);
        let entry = &breakdown[0];
        let passives = entry
            .ai_indicators
            .iter()
            .filter(|n| n.kind == "Passive voice")
            .count();
        assert_eq!(passives, 1);
    }

    #[test]
    fn test_average_length_rule() {
        // 14 words, within 3 of the assumed average of 15.
        let text = "The system processes every request carefully and then stores all results for later use.";
        let breakdown = generate_breakdown(text);
        assert!(breakdown[0]
            .ai_indicators
            .iter()
            .any(|n| n.kind == "Uniform length"));
    }

    #[test]
    fn test_assessment_bands() {
        assert_eq!(assess(-30), Assessment::StronglyAi);
        assert_eq!(assess(-5), Assessment::SlightlyAi);
        assert_eq!(assess(0), Assessment::Neutral);
        assert_eq!(assess(10), Assessment::SlightlyHuman);
        assert_eq!(assess(25), Assessment::StronglyHuman);
    }

    #[test]
    fn test_breakdown_limited_to_fifteen_sentences() {
        let text = (0..18)
            .map(|i| format!("Sentence number {i} sits right here."))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(generate_breakdown(&text).len(), 15);
    }

    #[test]
    fn test_empty_text_yields_empty_breakdown() {
        assert!(generate_breakdown("").is_empty());
    }
}
