// Humanizer Module
// Rule-based rewriting and writing pedagogy organized into submodules:
// - tables: fixed substitution tables shared by every pass
// - pipeline: the applied multi-pass rewrite with its change log
// - suggestions: display-only per-sentence advice
// - breakdown: per-sentence human/AI rule-table diagnostic
// - exercises: templated practice drills
// - comparison: original vs humanized side-by-side pairing

pub mod breakdown;
pub mod comparison;
pub mod exercises;
pub mod pipeline;
pub mod suggestions;
pub mod tables;

// Re-export commonly used functions
pub use breakdown::generate_breakdown;
pub use comparison::compare;
pub use exercises::{generate_exercises, generate_exercises_with_rng};
pub use pipeline::{humanize, humanize_text_with_rng, humanize_with_rng};
pub use suggestions::{sentence_suggestions, sentence_suggestions_with_rng};
