// Substitution Tables
// Fixed, ordered lookup tables driving the rewrite passes, suggestion
// generator and breakdown scorer. Kept apart from the transformation logic
// so vocabulary can be tested and extended independently.

use regex::Regex;
use std::sync::OnceLock;

/// Formal transitions and their casual alternatives.
pub const TRANSITION_ALTERNATIVES: &[(&str, &[&str])] = &[
    ("furthermore", &["also", "plus", "and", "what's more"]),
    ("moreover", &["besides", "also", "and"]),
    ("additionally", &["also", "plus", "another thing is"]),
    ("consequently", &["so", "because of this", "as a result"]),
    ("nevertheless", &["still", "even so", "but"]),
    ("subsequently", &["then", "after that", "next"]),
    ("accordingly", &["so", "therefore"]),
    ("hence", &["so", "that's why"]),
    ("thus", &["so", "this means"]),
    ("therefore", &["so", "that's why", "because of this"]),
    ("likewise", &["similarly", "in the same way", "also"]),
    ("however", &["but", "still", "yet", "though"]),
];

/// Filler phrases and tighter replacements.
pub const FILLER_ALTERNATIVES: &[(&str, &[&str])] = &[
    (
        "it is important to note",
        &["Note that", "Keep in mind", "Remember", "One key point:"],
    ),
    (
        "it is worth mentioning",
        &["Also", "Interestingly", "Here's something else:"],
    ),
    ("in other words", &["Put simply", "Basically", "This means"]),
    (
        "as mentioned earlier",
        &["As I said", "Going back to", "Earlier I mentioned"],
    ),
    (
        "it goes without saying",
        &["Obviously", "Clearly", "Of course"],
    ),
    ("in this context", &["Here", "In this case", "With this"]),
];

/// Formal vocabulary and plain-language equivalents.
pub const FORMAL_TO_CASUAL: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("implement", "put in place"),
    ("facilitate", "help"),
    ("subsequent", "later"),
    ("prior to", "before"),
    ("in order to", "to"),
    ("due to the fact that", "because"),
    ("at this point in time", "now"),
    ("in the event that", "if"),
    ("for the purpose of", "to"),
    ("with regard to", "about"),
    ("in regard to", "about"),
    ("pertaining to", "about"),
    ("in light of", "because of"),
    ("on the basis of", "based on"),
    ("in spite of the fact that", "although"),
    ("a large number of", "many"),
    ("a significant amount of", "much"),
    ("the vast majority of", "most"),
    ("plays a crucial role", "is key"),
    ("plays an important role", "matters"),
    ("it is evident that", "clearly"),
    ("it is apparent that", "clearly"),
    ("there is no doubt that", "certainly"),
    ("it should be noted that", "note that"),
    ("it is interesting to note that", "interestingly"),
];

/// Conversational sentence openers used by the variety pass.
pub const HUMAN_STARTERS: &[&str] = &[
    "Here's the thing:",
    "What's interesting is",
    "The key point?",
    "Simply put,",
    "Look,",
    "Think about it:",
    "Here's what matters:",
    "The reality is",
    "Let's be clear:",
    "Consider this:",
];

/// Rhetorical questions inserted into question-free prose.
pub const RHETORICAL_QUESTIONS: &[&str] = &[
    "What does this mean in practice?",
    "Why does this matter?",
    "So what's the takeaway?",
    "But here's the real question:",
];

/// Conjunctions eligible as long-sentence split points.
pub const SPLIT_CONJUNCTIONS: &[&str] =
    &["and", "but", "which", "that", "because", "while", "although"];

/// Openers for personal-voice example rewrites.
pub const PERSONAL_STARTERS: &[&str] = &[
    "I find it interesting that",
    "What strikes me here is that",
    "In my view,",
    "I've noticed that",
];

/// Leads for contrast-addition examples.
pub const CONTRAST_LEADS: &[&str] = &[
    "However, it's worth considering that",
    "That said,",
    "On the other hand,",
    "Yet we should also note that",
];

/// Personal pronoun fragments flagged as human voice.
pub const PERSONAL_PRONOUNS: &[&str] = &["i ", "i'", "my ", "me ", "we ", "our ", "us "];

/// Contraction suffixes flagged as natural speech.
pub const CONTRACTIONS: &[&str] = &["n't", "'re", "'ve", "'ll", "'m", "'s"];

/// Informal discourse markers.
pub const INFORMAL_MARKERS: &[&str] = &["actually", "basically", "honestly", "look,", "well,", "so,"];

/// Passive-voice constructions.
pub fn passive_voice_res() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        [
            r"(is|are|was|were|been|being)\s+\w+ed\b",
            r"(has|have|had)\s+been\s+\w+ed\b",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("passive voice regex"))
        .collect()
    })
}

/// Alternatives for a formal transition word, if it is in the table.
pub fn transition_alternatives(word: &str) -> Option<&'static [&'static str]> {
    TRANSITION_ALTERNATIVES
        .iter()
        .find(|(formal, _)| *formal == word)
        .map(|(_, alternatives)| *alternatives)
}

/// Alternatives for a filler phrase, if it is in the table.
pub fn filler_alternatives(phrase: &str) -> Option<&'static [&'static str]> {
    FILLER_ALTERNATIVES
        .iter()
        .find(|(filler, _)| *filler == phrase)
        .map(|(_, alternatives)| *alternatives)
}

/// True if the sentence matches a passive-voice construction.
pub fn has_passive_voice(sentence_lower: &str) -> bool {
    passive_voice_res().iter().any(|re| re.is_match(sentence_lower))
}
