// TF-IDF Vectorizer
// Word n-gram term weighting used for corpus and self-similarity scoring

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorizeError {
    #[error("no terms survived preprocessing; vocabulary is empty")]
    EmptyVocabulary,
}

/// N-gram range over word tokens.
const NGRAM_MIN: usize = 1;
const NGRAM_MAX: usize = 3;

/// English stop words removed before n-gram construction.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most", "my",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "you", "your",
];

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Word tokens of two or more characters.
    RE.get_or_init(|| Regex::new(r"[a-z0-9_]{2,}").expect("token regex"))
}

/// Fitted TF-IDF model over a document set.
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fit vocabulary and inverse document frequencies over `documents`.
    pub fn fit(documents: &[String]) -> Result<Self, VectorizeError> {
        let n_documents = documents.len();
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let unique_terms: HashSet<String> = ngram_terms(doc).into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
                if !vocabulary.contains_key(&term) {
                    let idx = vocabulary.len();
                    vocabulary.insert(term, idx);
                }
            }
        }

        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        // Smoothed IDF: ln((N + 1) / (df + 1)) + 1
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, idx) in &vocabulary {
            let df = document_frequency.get(term).copied().unwrap_or(0);
            idf[*idx] = ((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        Ok(Self { vocabulary, idf })
    }

    /// Transform a document into an L2-normalized TF-IDF vector.
    /// Terms outside the fitted vocabulary are ignored.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for term in ngram_terms(document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                vector[idx] += 1.0;
            }
        }

        for (idx, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Cosine similarity of two L2-normalized vectors (dot product).
/// Zero vectors yield 0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Stop-word-filtered tokens joined into 1..=3-word n-gram terms.
fn ngram_terms(document: &str) -> Vec<String> {
    let lower = document.to_lowercase();
    let tokens: Vec<&str> = token_re()
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !STOP_WORDS.contains(t))
        .collect();

    let mut terms = Vec::new();
    for n in NGRAM_MIN..=NGRAM_MAX {
        if tokens.len() < n {
            break;
        }
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}
