// Statistical Feature Extraction
// Frequency/length heuristics that stand in for model-based perplexity

use crate::models::FeatureVector;
use crate::services::text_processor::{
    alphabetic_words, normalize_token, split_sentences, whitespace_tokens, word_count,
};
use std::collections::{HashMap, HashSet};

/// Formal transition words over-represented in AI prose.
pub const TRANSITION_WORDS: &[&str] = &[
    "furthermore",
    "moreover",
    "additionally",
    "consequently",
    "nevertheless",
    "subsequently",
    "accordingly",
    "hence",
    "thus",
    "therefore",
    "likewise",
    "similarly",
];

/// Padding phrases, matched as case-insensitive substrings.
pub const FILLER_PHRASES: &[&str] = &[
    "it is important to note",
    "it is worth mentioning",
    "in this context",
    "in other words",
    "to put it simply",
    "as mentioned earlier",
    "as previously stated",
    "it goes without saying",
    "needless to say",
    "for the most part",
];

/// Hedging vocabulary.
pub const HEDGE_WORDS: &[&str] = &[
    "somewhat",
    "relatively",
    "generally",
    "typically",
    "usually",
    "often",
    "perhaps",
    "possibly",
    "likely",
    "essentially",
    "basically",
    "fundamentally",
];

/// Neutral value returned when a feature lacks statistical signal.
const NEUTRAL_SCORE: f64 = 50.0;
const NEUTRAL_RATIO: f64 = 0.5;

/// Minimum sentences for distribution-based features.
const MIN_SENTENCES: usize = 3;
/// Minimum words for the entropy-based predictability estimate.
const MIN_WORDS_FOR_ENTROPY: usize = 10;

/// Compute all statistical features for one text.
pub fn extract_features(text: &str) -> FeatureVector {
    let sentences = split_sentences(text);
    FeatureVector {
        transition_density: transition_density(text),
        filler_density: filler_density(text),
        hedge_density: hedge_density(text),
        sentence_uniformity: sentence_uniformity(&sentences),
        perplexity_estimate: perplexity_estimate(text),
        burstiness: burstiness(&sentences),
        vocabulary_richness: vocabulary_richness(text),
    }
}

/// Transition words per 100 words.
pub fn transition_density(text: &str) -> f64 {
    word_list_density(text, TRANSITION_WORDS)
}

/// Hedge words per 100 words.
pub fn hedge_density(text: &str) -> f64 {
    word_list_density(text, HEDGE_WORDS)
}

fn word_list_density(text: &str, list: &[&str]) -> f64 {
    let tokens = whitespace_tokens(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let count = tokens
        .iter()
        .filter(|t| list.contains(&normalize_token(t).as_str()))
        .count();
    (count as f64 / tokens.len() as f64) * 100.0
}

/// Distinct filler phrases present, per 100 words.
pub fn filler_density(text: &str) -> f64 {
    let words = word_count(text);
    if words == 0 {
        return 0.0;
    }
    let lower = text.to_lowercase();
    let count = FILLER_PHRASES.iter().filter(|p| lower.contains(**p)).count();
    (count as f64 / words as f64) * 100.0
}

/// How uniform sentence lengths are. Coefficient of variation of
/// per-sentence word counts, inverted so uniform prose scores high.
pub fn sentence_uniformity(sentences: &[String]) -> f64 {
    if sentences.len() < MIN_SENTENCES {
        return NEUTRAL_SCORE;
    }

    let lengths: Vec<f64> = sentences.iter().map(|s| word_count(s) as f64).collect();
    let mean_length = mean(&lengths);
    if mean_length == 0.0 {
        return NEUTRAL_SCORE;
    }

    let cv = (std_dev(&lengths) / mean_length) * 100.0;
    (100.0 - cv * 2.0).max(0.0)
}

/// Entropy of the word-frequency distribution, normalized by the maximum
/// entropy for the observed vocabulary and scaled to 0-100. A predictability
/// proxy, not a language-model perplexity.
pub fn perplexity_estimate(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    if words.len() < MIN_WORDS_FOR_ENTROPY {
        return NEUTRAL_SCORE;
    }

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for w in &words {
        *freq.entry(w).or_insert(0) += 1;
    }

    let total = words.len() as f64;
    let entropy = -freq
        .values()
        .map(|&c| {
            let p = c as f64 / total;
            p * p.log2()
        })
        .sum::<f64>();

    let unique = freq.len();
    let max_entropy = if unique > 1 { (unique as f64).log2() } else { 1.0 };
    if max_entropy > 0.0 {
        (entropy / max_entropy) * 100.0
    } else {
        NEUTRAL_SCORE
    }
}

/// Variation in per-sentence complexity (mean word length x log sentence
/// length). Human writing is bursty; flat complexity reads as machine prose.
pub fn burstiness(sentences: &[String]) -> f64 {
    if sentences.len() < MIN_SENTENCES {
        return NEUTRAL_SCORE;
    }

    let complexities: Vec<f64> = sentences
        .iter()
        .filter_map(|sentence| {
            let words: Vec<&str> = sentence.split_whitespace().collect();
            if words.is_empty() {
                return None;
            }
            let avg_word_len = words.iter().map(|w| w.chars().count() as f64).sum::<f64>()
                / words.len() as f64;
            Some(avg_word_len * ((words.len() as f64) + 1.0).ln())
        })
        .collect();

    if complexities.is_empty() {
        return NEUTRAL_SCORE;
    }

    let mean_complexity = mean(&complexities);
    if mean_complexity == 0.0 {
        return NEUTRAL_SCORE;
    }

    let cv = (std_dev(&complexities) / mean_complexity) * 100.0;
    (cv * 2.0).min(100.0)
}

/// Type-token ratio over lower-cased alphabetic words.
pub fn vocabulary_richness(text: &str) -> f64 {
    let words = alphabetic_words(text);
    if words.is_empty() {
        return NEUTRAL_RATIO;
    }
    let unique: HashSet<&String> = words.iter().collect();
    unique.len() as f64 / words.len() as f64
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
