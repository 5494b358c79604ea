// Detection Module
// AI-likelihood analysis organized into specialized submodules:
// - features: statistical feature extraction (densities, uniformity, entropy)
// - scorer: indicator derivation, weighting and explanation generation

pub mod features;
pub mod scorer;

// Re-export commonly used functions
pub use features::{
    burstiness, extract_features, filler_density, hedge_density, perplexity_estimate,
    sentence_uniformity, transition_density, vocabulary_richness, FILLER_PHRASES, HEDGE_WORDS,
    TRANSITION_WORDS,
};
pub use scorer::analyze_text;
