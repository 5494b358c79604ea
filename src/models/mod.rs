// Veritext Data Models
// Plain data structures exchanged between the analysis engines and callers

use serde::{Deserialize, Serialize};

// ============ AI-Likelihood Analysis ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A single AI-writing pattern detected in the analyzed text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indicator {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub explanation: String,
}

/// Statistical features extracted from one text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub transition_density: f64,
    pub filler_density: f64,
    pub hedge_density: f64,
    pub sentence_uniformity: f64,
    pub perplexity_estimate: f64,
    pub burstiness: f64,
    pub vocabulary_richness: f64,
}

/// Per-sentence sub-analysis entry (first 20 sentences only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceScore {
    pub index: usize,
    /// Preview of the sentence, truncated to 100 chars.
    pub text: String,
    pub ai_score: i32,
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0-100, higher = more likely AI-generated.
    pub score: f64,
    pub indicators: Vec<Indicator>,
    pub sentence_analysis: Vec<SentenceScore>,
    pub features: FeatureVector,
    pub explanation: Vec<String>,
}

/// Weights used to combine normalized features into the final score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    #[serde(default = "default_transition_weight")]
    pub transition: f64,
    #[serde(default = "default_filler_weight")]
    pub filler: f64,
    #[serde(default = "default_hedge_weight")]
    pub hedge: f64,
    #[serde(default = "default_uniformity_weight")]
    pub uniformity: f64,
    #[serde(default = "default_burstiness_weight")]
    pub burstiness: f64,
    #[serde(default = "default_vocabulary_weight")]
    pub vocabulary: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            transition: default_transition_weight(),
            filler: default_filler_weight(),
            hedge: default_hedge_weight(),
            uniformity: default_uniformity_weight(),
            burstiness: default_burstiness_weight(),
            vocabulary: default_vocabulary_weight(),
        }
    }
}

/// Feature thresholds above/below which indicators fire.
/// The `*_strong` value marks the high-severity boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorThresholds {
    pub transition: f64,
    pub transition_strong: f64,
    pub filler: f64,
    pub filler_strong: f64,
    pub uniformity: f64,
    pub uniformity_strong: f64,
    pub burstiness: f64,
    pub burstiness_strong: f64,
    pub vocabulary: f64,
}

impl Default for IndicatorThresholds {
    fn default() -> Self {
        Self {
            transition: 3.0,
            transition_strong: 5.0,
            filler: 2.0,
            filler_strong: 4.0,
            uniformity: 70.0,
            uniformity_strong: 80.0,
            burstiness: 30.0,
            burstiness_strong: 20.0,
            vocabulary: 0.4,
        }
    }
}

// ============ Similarity Analysis ============

/// One reference document in the comparison corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub text: String,
    pub source: String,
}

/// A corpus document whose similarity to the query exceeded the flag threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusMatch {
    pub source: String,
    pub similarity: f64,
    pub match_index: usize,
}

/// A common academic boilerplate pattern found in the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseMatch {
    pub pattern: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    /// 0-100 combined similarity score.
    pub score: f64,
    /// Maximum corpus cosine similarity x 100 (0 when the corpus is empty).
    pub corpus_score: f64,
    pub corpus_matches: Vec<CorpusMatch>,
    /// Mean pairwise sentence similarity x 100.
    pub internal_similarity: f64,
    pub common_phrases: Vec<PhraseMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// ============ Humanization ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    PhraseReplacement,
    TransitionReplacement,
    FillerRemoval,
    VarietyAddition,
    SentenceSplit,
    QuestionAddition,
}

/// One applied rewrite, in pass-application order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRecord {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub original: String,
    pub replacement: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionIssue {
    pub issue: String,
    pub fix: String,
    pub explanation: String,
}

/// Display-only suggestion for one sentence (not an applied rewrite).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceSuggestion {
    pub index: usize,
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improved: Option<String>,
    pub issues: Vec<SuggestionIssue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WritingTip {
    pub title: String,
    pub tip: String,
    pub example: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPoint {
    pub concept: String,
    pub explanation: String,
    pub exercise: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteExample {
    pub before: String,
    pub after: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeResult {
    pub suggestions: Vec<SentenceSuggestion>,
    pub general_tips: Vec<WritingTip>,
    pub learning_points: Vec<LearningPoint>,
    pub before_after_examples: Vec<RewriteExample>,
    pub humanized_text: String,
    pub changes: Vec<ChangeRecord>,
}

// ============ Sentence Breakdown ============

/// One matched breakdown rule, with an optional suggested fix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorNote {
    #[serde(rename = "type")]
    pub kind: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    StronglyAi,
    SlightlyAi,
    Neutral,
    SlightlyHuman,
    StronglyHuman,
}

impl Assessment {
    pub fn description(&self) -> &'static str {
        match self {
            Assessment::StronglyAi => "This sentence has strong AI patterns",
            Assessment::SlightlyAi => "This sentence has some AI-like elements",
            Assessment::Neutral => "This sentence is neutral",
            Assessment::SlightlyHuman => "This sentence has good human elements",
            Assessment::StronglyHuman => "This sentence feels natural and human",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceBreakdown {
    /// 1-based position in the filtered sentence sequence.
    pub index: usize,
    pub sentence: String,
    pub word_count: usize,
    pub ai_indicators: Vec<IndicatorNote>,
    pub human_indicators: Vec<IndicatorNote>,
    /// Negative = AI-like, positive = human-like.
    pub score: i32,
    pub assessment: Assessment,
    pub assessment_text: String,
}

// ============ Exercises ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    PersonalVoice,
    SentenceVariety,
    RemoveFiller,
    ActiveVoice,
    AddQuestion,
    AddContrast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseKind,
    pub title: String,
    pub difficulty: Difficulty,
    pub instruction: String,
    pub original_sentence: String,
    pub hints: Vec<String>,
    pub example_rewrite: String,
    pub learning_goal: String,
}

// ============ Comparison ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceComparison {
    /// 1-based pair index.
    pub index: usize,
    pub original: String,
    pub humanized: String,
    pub changed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub comparisons: Vec<SentenceComparison>,
    pub original_word_count: usize,
    pub humanized_word_count: usize,
    pub original_sentence_count: usize,
    pub humanized_sentence_count: usize,
}

// ============ Learning Progress ============

/// Aggregate statistics over a user's analysis history.
/// Persistence of the history itself is a caller concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_analyses: usize,
    pub average_ai_score: f64,
    pub average_similarity_score: f64,
    /// Positive = AI scores trending down across analyses (improving).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement_trend: Option<f64>,
}

// ============ Default Value Functions ============

fn default_transition_weight() -> f64 { 0.15 }
fn default_filler_weight() -> f64 { 0.15 }
fn default_hedge_weight() -> f64 { 0.10 }
fn default_uniformity_weight() -> f64 { 0.25 }
fn default_burstiness_weight() -> f64 { 0.20 }
fn default_vocabulary_weight() -> f64 { 0.15 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_weights_sum_to_one() {
        let w = ScoringWeights::default();
        let total = w.transition + w.filler + w.hedge + w.uniformity + w.burstiness + w.vocabulary;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_indicator_wire_shape() {
        let indicator = Indicator {
            kind: "Low burstiness".to_string(),
            severity: Severity::High,
            explanation: "test".to_string(),
        };
        let json = serde_json::to_value(&indicator).unwrap();
        assert_eq!(json["type"], "Low burstiness");
        assert_eq!(json["severity"], "high");
    }

    #[test]
    fn test_change_record_kind_is_snake_case() {
        let change = ChangeRecord {
            kind: ChangeKind::SentenceSplit,
            original: "a".to_string(),
            replacement: "b".to_string(),
            reason: "r".to_string(),
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["type"], "sentence_split");
    }

    #[test]
    fn test_feature_vector_camel_case() {
        let json = serde_json::to_value(FeatureVector::default()).unwrap();
        assert!(json.get("transitionDensity").is_some());
        assert!(json.get("vocabularyRichness").is_some());
    }
}
