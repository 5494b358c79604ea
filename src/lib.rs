// Veritext
// Statistical AI-text detection, corpus similarity and rule-based
// humanization. Every engine consumes raw text and returns plain data
// structures; transport, storage and identity are caller concerns.

pub mod models;
pub mod services;

pub use models::*;
pub use services::{
    analyze_text, compare, extract_features, generate_breakdown, generate_exercises,
    generate_exercises_with_rng, humanize, humanize_text_with_rng, humanize_with_rng,
    improvement_trend, progress_stats, sentence_suggestions, sentence_suggestions_with_rng,
    SimilarityEngine,
};
