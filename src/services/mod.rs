// Veritext Core Services

pub mod detection;
pub mod humanizer;
pub mod progress;
pub mod similarity;
pub mod text_processor;

pub use text_processor::*;

// Re-export the main engine entry points
pub use detection::{analyze_text, extract_features};
pub use humanizer::{
    compare, generate_breakdown, generate_exercises, generate_exercises_with_rng, humanize,
    humanize_text_with_rng, humanize_with_rng, sentence_suggestions, sentence_suggestions_with_rng,
};
pub use progress::{improvement_trend, progress_stats};
pub use similarity::{SimilarityEngine, detect_common_phrases, preprocess_text};
