// AI-Likelihood Scorer
// Normalizes features, derives indicators and emits the 0-100 score

use crate::models::{
    AnalysisResult, FeatureVector, Indicator, IndicatorThresholds, ScoringWeights, SentenceScore,
    Severity,
};
use crate::services::detection::features::{extract_features, TRANSITION_WORDS};
use crate::services::text_processor::split_sentences;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const MAX_ANALYZED_SENTENCES: usize = 20;
const SENTENCE_PREVIEW_CHARS: usize = 100;

const FORMAL_CONSTRUCTION_SCORE: i32 = 20;
const TRANSITION_START_SCORE: i32 = 15;

fn formal_construction_res() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        [
            r"it is .+ that",
            r"there (is|are) .+ that",
            r"this (suggests|indicates|demonstrates|shows) that",
            r"(one|we) (can|could|may|might) (argue|say|suggest)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("formal construction regex"))
        .collect()
    })
}

/// Analyze text for AI-generation indicators.
///
/// Never fails: empty input yields a zero score with an explanatory message,
/// and features without enough signal fall back to neutral values.
pub fn analyze_text(text: &str) -> AnalysisResult {
    if text.trim().is_empty() {
        return AnalysisResult {
            score: 0.0,
            indicators: vec![],
            sentence_analysis: vec![],
            features: FeatureVector::default(),
            explanation: vec!["Empty text provided".to_string()],
        };
    }

    let sentences = split_sentences(text);
    let features = extract_features(text);
    let indicators = derive_indicators(&features, &IndicatorThresholds::default());
    let sentence_analysis = analyze_sentences(&sentences);
    let score = combined_score(&features, &ScoringWeights::default());
    let explanation = generate_explanation(score, &features);

    debug!(
        score,
        indicators = indicators.len(),
        sentences = sentences.len(),
        "ai likelihood analysis complete"
    );

    AnalysisResult {
        score,
        indicators,
        sentence_analysis,
        features,
        explanation,
    }
}

fn derive_indicators(features: &FeatureVector, thresholds: &IndicatorThresholds) -> Vec<Indicator> {
    let mut indicators = Vec::new();

    if features.transition_density > thresholds.transition {
        indicators.push(Indicator {
            kind: "High transition word density".to_string(),
            severity: severity_above(features.transition_density, thresholds.transition_strong),
            explanation: "AI tends to use many formal transition words".to_string(),
        });
    }

    if features.filler_density > thresholds.filler {
        indicators.push(Indicator {
            kind: "Filler phrase usage".to_string(),
            severity: severity_above(features.filler_density, thresholds.filler_strong),
            explanation: "Common AI padding phrases detected".to_string(),
        });
    }

    if features.sentence_uniformity > thresholds.uniformity {
        indicators.push(Indicator {
            kind: "Uniform sentence structure".to_string(),
            severity: severity_above(features.sentence_uniformity, thresholds.uniformity_strong),
            explanation: "Sentences are too similar in length - humans vary more".to_string(),
        });
    }

    if features.burstiness < thresholds.burstiness {
        indicators.push(Indicator {
            kind: "Low burstiness".to_string(),
            severity: severity_below(features.burstiness, thresholds.burstiness_strong),
            explanation: "Human writing has more variation in complexity (burstiness)".to_string(),
        });
    }

    if features.vocabulary_richness < thresholds.vocabulary {
        indicators.push(Indicator {
            kind: "Limited vocabulary variety".to_string(),
            severity: Severity::Low,
            explanation: "AI often uses a more limited, formal vocabulary".to_string(),
        });
    }

    indicators
}

fn severity_above(value: f64, strong_boundary: f64) -> Severity {
    if value < strong_boundary {
        Severity::Medium
    } else {
        Severity::High
    }
}

fn severity_below(value: f64, strong_boundary: f64) -> Severity {
    if value > strong_boundary {
        Severity::Medium
    } else {
        Severity::High
    }
}

/// Normalize each raw feature to 0-100 and combine with fixed weights.
fn combined_score(features: &FeatureVector, weights: &ScoringWeights) -> f64 {
    let normalized_transition = (features.transition_density * 15.0).min(100.0);
    let normalized_filler = (features.filler_density * 20.0).min(100.0);
    let normalized_hedge = (features.hedge_density * 15.0).min(100.0);
    let normalized_uniformity = features.sentence_uniformity;
    // Low burstiness and low vocabulary variety point toward AI, so invert.
    let normalized_burstiness = 100.0 - features.burstiness;
    let normalized_vocabulary = (1.0 - features.vocabulary_richness) * 100.0;

    let score = normalized_transition * weights.transition
        + normalized_filler * weights.filler
        + normalized_hedge * weights.hedge
        + normalized_uniformity * weights.uniformity
        + normalized_burstiness * weights.burstiness
        + normalized_vocabulary * weights.vocabulary;

    score.clamp(0.0, 100.0)
}

fn analyze_sentences(sentences: &[String]) -> Vec<SentenceScore> {
    sentences
        .iter()
        .take(MAX_ANALYZED_SENTENCES)
        .enumerate()
        .map(|(index, sentence)| {
            let lower = sentence.to_lowercase();
            let mut score = 0;
            let mut flags = Vec::new();

            for pattern in formal_construction_res() {
                if pattern.is_match(&lower) {
                    score += FORMAL_CONSTRUCTION_SCORE;
                    flags.push("Formal construction pattern".to_string());
                }
            }

            if TRANSITION_WORDS.iter().any(|w| lower.starts_with(w)) {
                score += TRANSITION_START_SCORE;
                flags.push("Starts with transition word".to_string());
            }

            SentenceScore {
                index,
                text: preview(sentence),
                ai_score: score.min(100),
                flags,
            }
        })
        .collect()
}

fn preview(sentence: &str) -> String {
    if sentence.chars().count() > SENTENCE_PREVIEW_CHARS {
        let truncated: String = sentence.chars().take(SENTENCE_PREVIEW_CHARS).collect();
        format!("{truncated}...")
    } else {
        sentence.to_string()
    }
}

fn generate_explanation(score: f64, features: &FeatureVector) -> Vec<String> {
    let mut explanations = Vec::new();

    let band = if score < 30.0 {
        "This text shows characteristics typical of human writing."
    } else if score < 50.0 {
        "This text has some AI-like patterns but also human characteristics."
    } else if score < 70.0 {
        "This text shows several patterns common in AI-generated content."
    } else {
        "This text has strong indicators of AI-generated content."
    };
    explanations.push(band.to_string());

    if features.burstiness < 30.0 {
        explanations.push(
            "The writing has very consistent complexity throughout. Human writing typically \
             varies more - some sentences simple, some complex."
                .to_string(),
        );
    }

    if features.sentence_uniformity > 70.0 {
        explanations.push(
            "Sentences are very similar in length. Try varying your sentence structure for a \
             more natural flow."
                .to_string(),
        );
    }

    explanations
}
