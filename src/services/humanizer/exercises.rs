// Exercise Generator
// Templated practice drills derived from the analyzed text. Selection is
// deterministic; only the worked examples draw from the random source.

use crate::models::{AnalysisResult, Difficulty, Exercise, ExerciseKind};
use crate::services::humanizer::tables::{
    has_passive_voice, CONTRAST_LEADS, FILLER_ALTERNATIVES, FORMAL_TO_CASUAL, PERSONAL_STARTERS,
};
use crate::services::text_processor::split_sentences;
use rand::Rng;
use regex::{escape, RegexBuilder};
use tracing::debug;

/// Filler fragments searched for when picking the fluff-cutting exercise.
const FILLER_FRAGMENTS: &[&str] = &[
    "it is important to",
    "it should be noted",
    "in order to",
    "due to the fact",
    "it is worth",
    "at this point in time",
    "for the purpose of",
    "in the event that",
];

/// Build up to six writing exercises from the text and its analysis.
pub fn generate_exercises_with_rng<R: Rng + ?Sized>(
    text: &str,
    ai_result: &AnalysisResult,
    rng: &mut R,
) -> Vec<Exercise> {
    let sentences = split_sentences(text);
    debug!(
        sentences = sentences.len(),
        ai_score = ai_result.score,
        "generating writing exercises"
    );

    let mut exercises = Vec::new();

    if let Some(first) = sentences.first() {
        exercises.push(Exercise {
            id: ExerciseKind::PersonalVoice,
            title: "Add Your Personal Voice".to_string(),
            difficulty: Difficulty::Easy,
            instruction: "Rewrite this sentence as if you're explaining it to a friend. Use \
                          \"I think\", \"I noticed\", or share a personal observation."
                .to_string(),
            original_sentence: first.clone(),
            hints: vec![
                "Start with \"I\" or \"In my view\"".to_string(),
                "Add why YOU find this interesting or important".to_string(),
                "Include a personal example if relevant".to_string(),
            ],
            example_rewrite: personal_rewrite(first, rng),
            learning_goal: "Human writing includes personal perspective. AI writes objectively \
                            but impersonally."
                .to_string(),
        });
    }

    if sentences.len() >= 3 {
        exercises.push(Exercise {
            id: ExerciseKind::SentenceVariety,
            title: "Create Rhythm with Variety".to_string(),
            difficulty: Difficulty::Medium,
            instruction: "Rewrite these 3 sentences with different lengths: one short (under 8 \
                          words), one medium (10-15 words), one longer (20+ words)."
                .to_string(),
            original_sentence: sentences[..3].join(" "),
            hints: vec![
                "Short sentences create impact: \"This matters.\"".to_string(),
                "Medium sentences explain: \"The research shows interesting patterns in the \
                 data.\""
                    .to_string(),
                "Longer sentences can explore complexity with multiple clauses".to_string(),
            ],
            example_rewrite: varied_rewrite(),
            learning_goal: "Humans naturally vary sentence length. AI tends toward uniformity."
                .to_string(),
        });
    }

    if let Some(filler_sentence) = find_sentence_with_filler(&sentences) {
        exercises.push(Exercise {
            id: ExerciseKind::RemoveFiller,
            title: "Cut the Fluff".to_string(),
            difficulty: Difficulty::Easy,
            instruction: "Rewrite this sentence removing unnecessary filler phrases. Say the \
                          same thing in fewer words."
                .to_string(),
            example_rewrite: remove_fillers(&filler_sentence),
            original_sentence: filler_sentence,
            hints: vec![
                "\"It is important to note that\" → just state it".to_string(),
                "\"In order to\" → \"to\"".to_string(),
                "\"Due to the fact that\" → \"because\"".to_string(),
            ],
            learning_goal: "Concise writing is clearer. Filler phrases are AI padding."
                .to_string(),
        });
    }

    if let Some(passive_sentence) = find_passive_sentence(&sentences) {
        exercises.push(Exercise {
            id: ExerciseKind::ActiveVoice,
            title: "Make It Active".to_string(),
            difficulty: Difficulty::Medium,
            instruction: "Convert this passive voice sentence to active voice. Identify WHO is \
                          doing the action and lead with that."
                .to_string(),
            original_sentence: passive_sentence,
            hints: vec![
                "Find the real subject (who/what is doing the action)".to_string(),
                "Structure: Subject → Verb → Object".to_string(),
                "\"The ball was thrown by John\" → \"John threw the ball\"".to_string(),
            ],
            example_rewrite: "Identify the actor and restructure: [Subject] [action verb] \
                              [object]"
                .to_string(),
            learning_goal: "Active voice is more engaging and direct. Passive voice can sound \
                            robotic."
                .to_string(),
        });
    }

    if !text.contains('?') && sentences.len() > 3 {
        let anchor = if sentences.len() > 2 {
            sentences[2].clone()
        } else {
            sentences[0].clone()
        };
        exercises.push(Exercise {
            id: ExerciseKind::AddQuestion,
            title: "Engage with Questions".to_string(),
            difficulty: Difficulty::Easy,
            instruction: "Add a rhetorical question somewhere in your text to engage the \
                          reader. Questions show you're thinking, not just stating facts."
                .to_string(),
            original_sentence: anchor,
            hints: vec![
                "Ask \"why\" something matters".to_string(),
                "Challenge an assumption: \"But is this always true?\"".to_string(),
                "Invite reflection: \"What does this mean for us?\"".to_string(),
            ],
            example_rewrite: "After stating a fact, ask: \"But why does this matter?\" or \
                              \"What does this tell us?\""
                .to_string(),
            learning_goal: "Human writers ask questions. It shows curiosity and engages readers."
                .to_string(),
        });
    }

    if sentences.len() >= 2 {
        exercises.push(Exercise {
            id: ExerciseKind::AddContrast,
            title: "Show Both Sides".to_string(),
            difficulty: Difficulty::Hard,
            instruction: "Take your main point and add a contrasting perspective or nuance. \
                          Real analysis considers multiple angles."
                .to_string(),
            original_sentence: sentences[0].clone(),
            hints: vec![
                "Use \"however\", \"on the other hand\", \"yet\"".to_string(),
                "Acknowledge limitations: \"This is true, but...\"".to_string(),
                "Show complexity: \"While X is important, Y also matters\"".to_string(),
            ],
            example_rewrite: contrast_example(&sentences[0], rng),
            learning_goal: "Nuanced thinking shows depth. AI often presents one-sided \
                            statements."
                .to_string(),
        });
    }

    exercises
}

/// As [`generate_exercises_with_rng`], with a thread-local random source.
pub fn generate_exercises(text: &str, ai_result: &AnalysisResult) -> Vec<Exercise> {
    generate_exercises_with_rng(text, ai_result, &mut rand::rng())
}

fn personal_rewrite<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> String {
    let starter = PERSONAL_STARTERS[rng.random_range(0..PERSONAL_STARTERS.len())];
    format!("{} {}", starter, lowercase_first(sentence))
}

fn varied_rewrite() -> String {
    "Short: 'This matters.' | Medium: 'The data reveals a clear pattern here.' | Long: 'When \
     we consider all the factors involved, including the historical context and current \
     trends, a more nuanced picture emerges.'"
        .to_string()
}

/// First sentence containing a filler fragment; falls back to the first
/// sentence so the exercise is available whenever the text has sentences.
fn find_sentence_with_filler(sentences: &[String]) -> Option<String> {
    sentences
        .iter()
        .find(|sentence| {
            let lower = sentence.to_lowercase();
            FILLER_FRAGMENTS.iter().any(|fragment| lower.contains(fragment))
        })
        .or_else(|| sentences.first())
        .cloned()
}

/// Strip formal vocabulary and filler phrases using the substitution tables.
fn remove_fillers(sentence: &str) -> String {
    let mut result = sentence.to_string();
    for (formal, casual) in FORMAL_TO_CASUAL {
        if result.to_lowercase().contains(formal) {
            result = case_insensitive_replace(&result, formal, casual);
        }
    }
    for (filler, alternatives) in FILLER_ALTERNATIVES {
        if result.to_lowercase().contains(filler) {
            result = case_insensitive_replace(&result, filler, alternatives[0]);
        }
    }
    result
}

fn find_passive_sentence(sentences: &[String]) -> Option<String> {
    sentences
        .iter()
        .find(|sentence| has_passive_voice(&sentence.to_lowercase()))
        .cloned()
}

fn contrast_example<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> String {
    let lead = CONTRAST_LEADS[rng.random_range(0..CONTRAST_LEADS.len())];
    format!("{sentence} {lead} [add your contrasting point here].")
}

fn case_insensitive_replace(text: &str, needle: &str, replacement: &str) -> String {
    RegexBuilder::new(&escape(needle))
        .case_insensitive(true)
        .build()
        .expect("replacement regex")
        .replace_all(text, replacement)
        .to_string()
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::detection::analyze_text;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    #[test]
    fn test_full_text_produces_all_six_exercises() {
        let text = "It is important to note that the proposal was rejected by the board. \
                    The committee reviewed every option carefully last week. \
                    The final decision arrives before the end of the quarter. \
                    The teams have already started planning for both outcomes.";
        let ai = analyze_text(text);
        let exercises = generate_exercises_with_rng(text, &ai, &mut rng());
        assert_eq!(exercises.len(), 6);
        let kinds: Vec<ExerciseKind> = exercises.iter().map(|e| e.id).collect();
        assert_eq!(
            kinds,
            vec![
                ExerciseKind::PersonalVoice,
                ExerciseKind::SentenceVariety,
                ExerciseKind::RemoveFiller,
                ExerciseKind::ActiveVoice,
                ExerciseKind::AddQuestion,
                ExerciseKind::AddContrast,
            ]
        );
    }

    #[test]
    fn test_no_exercises_for_empty_text() {
        let ai = analyze_text("");
        assert!(generate_exercises_with_rng("", &ai, &mut rng()).is_empty());
    }

    #[test]
    fn test_question_exercise_skipped_when_text_has_question() {
        let text = "Why does the proposal matter to anyone? \
                    The committee reviewed every option carefully. \
                    The final decision arrives next quarter. \
                    The teams have started planning for both outcomes.";
        let ai = analyze_text(text);
        let exercises = generate_exercises_with_rng(text, &ai, &mut rng());
        assert!(exercises.iter().all(|e| e.id != ExerciseKind::AddQuestion));
    }

    #[test]
    fn test_active_voice_exercise_requires_passive_sentence() {
        let text = "The committee reviews every option carefully. \
                    The final decision arrives next quarter. \
                    The teams start planning for both outcomes soon.";
        let ai = analyze_text(text);
        let exercises = generate_exercises_with_rng(text, &ai, &mut rng());
        assert!(exercises.iter().all(|e| e.id != ExerciseKind::ActiveVoice));
    }

    #[test]
    fn test_remove_fillers_example_applies_tables() {
        let cleaned = remove_fillers("In order to proceed, it is important to note the risks.");
        assert!(cleaned.to_lowercase().starts_with("to proceed"));
        assert!(!cleaned.to_lowercase().contains("it is important to note"));
    }

    #[test]
    fn test_single_short_text_still_offers_personal_voice() {
        let text = "The quarterly report landed on every desk.";
        let ai = analyze_text(text);
        let exercises = generate_exercises_with_rng(text, &ai, &mut rng());
        let kinds: Vec<ExerciseKind> = exercises.iter().map(|e| e.id).collect();
        assert!(kinds.contains(&ExerciseKind::PersonalVoice));
        assert!(kinds.contains(&ExerciseKind::RemoveFiller));
        assert!(!kinds.contains(&ExerciseKind::SentenceVariety));
    }
}
