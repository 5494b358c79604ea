// Similarity Engine
// Corpus-backed TF-IDF cosine similarity plus common-phrase and
// self-repetition checks. The corpus is owned, append-only state: adding
// references takes `&mut self` while analysis borrows immutably, so the
// single-writer discipline is enforced by the borrow checker.

pub mod vectorizer;

use crate::models::{CorpusEntry, CorpusMatch, PhraseMatch, SimilarityResult};
use crate::services::text_processor::split_sentences;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, info, warn};
use self::vectorizer::{cosine_similarity, TfIdfVectorizer};

/// Cosine similarity above which a corpus entry is flagged as a match.
const MATCH_THRESHOLD: f64 = 0.3;

/// Common academic boilerplate, matched against the lower-cased text.
fn common_phrase_res() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        [
            r"according to (the )?(research|study|findings)",
            r"it (is|has been) (widely )?(known|accepted|believed)",
            r"in (this|the) (context|regard|respect)",
            r"(plays|play) (a |an )?(important|crucial|vital|key) role",
            r"in (recent|modern) (years|times)",
            r"(has|have) (become|been) (increasingly|more)",
            r"it (is|can be) (argued|said|noted) that",
            r"(first|second|third)(ly)?[,\s]",
            r"in (conclusion|summary)",
            r"on the other hand",
            r"as (a )?result",
            r"due to (the fact|this)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("common phrase regex"))
        .collect()
    })
}

/// Lower-case, strip non-word characters, collapse whitespace.
pub fn preprocess_text(text: &str) -> String {
    static NON_WORD_RE: OnceLock<Regex> = OnceLock::new();
    static WS_RE: OnceLock<Regex> = OnceLock::new();
    let non_word = NON_WORD_RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("non-word regex"));
    let ws = WS_RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"));

    let lower = text.to_lowercase();
    let stripped = non_word.replace_all(&lower, " ");
    ws.replace_all(&stripped, " ").trim().to_string()
}

/// Scan for common academic boilerplate patterns, recording occurrence counts.
pub fn detect_common_phrases(text: &str) -> Vec<PhraseMatch> {
    let lower = text.to_lowercase();
    common_phrase_res()
        .iter()
        .filter_map(|re| {
            let count = re.find_iter(&lower).count();
            (count > 0).then(|| PhraseMatch {
                pattern: re.as_str().to_string(),
                count,
            })
        })
        .collect()
}

/// Detects reused content by comparing text against an accumulated corpus of
/// reference documents.
#[derive(Debug, Default)]
pub struct SimilarityEngine {
    corpus: Vec<CorpusEntry>,
}

impl SimilarityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reference document to the comparison corpus.
    /// Entries are never removed or mutated once added.
    pub fn add_reference(&mut self, text: &str, source: &str) {
        info!(source, chars = text.len(), "reference document added to corpus");
        self.corpus.push(CorpusEntry {
            text: text.to_string(),
            source: source.to_string(),
        });
    }

    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    /// Analyze text for similarity to the corpus and to itself.
    ///
    /// Never fails: empty input yields a zero result with a message, and a
    /// degenerate vectorization degrades the affected sub-score to 0.
    pub fn analyze(&self, text: &str) -> SimilarityResult {
        if text.trim().is_empty() {
            return SimilarityResult {
                details: Some("Empty text provided".to_string()),
                ..SimilarityResult::default()
            };
        }

        let processed = preprocess_text(text);
        let sentences = split_sentences(text);

        let (corpus_score, corpus_matches) = if self.corpus.is_empty() {
            (0.0, vec![])
        } else {
            self.check_against_corpus(&processed)
        };

        let common_phrases = detect_common_phrases(text);
        let internal_similarity = internal_similarity(&sentences);

        let pattern_count = common_phrases.len() as f64;
        let score = if self.corpus.is_empty() {
            (pattern_count * 10.0 + internal_similarity * 0.3).min(100.0)
        } else {
            (corpus_score * 0.7 + pattern_count * 5.0).min(100.0)
        };

        debug!(
            score,
            corpus_score,
            internal_similarity,
            matches = corpus_matches.len(),
            "similarity analysis complete"
        );

        SimilarityResult {
            score,
            corpus_score,
            corpus_matches,
            internal_similarity,
            common_phrases,
            details: None,
        }
    }

    /// Vectorize corpus plus query jointly and compare the query against
    /// every corpus document.
    fn check_against_corpus(&self, processed_query: &str) -> (f64, Vec<CorpusMatch>) {
        let mut all_texts: Vec<String> = self
            .corpus
            .iter()
            .map(|entry| preprocess_text(&entry.text))
            .collect();
        all_texts.push(processed_query.to_string());

        let model = match TfIdfVectorizer::fit(&all_texts) {
            Ok(model) => model,
            Err(e) => {
                warn!(error = %e, "corpus vectorization failed; degrading to zero score");
                return (0.0, vec![]);
            }
        };

        let query_vector = model.transform(processed_query);
        let mut matches = Vec::new();
        let mut max_similarity: f64 = 0.0;

        for (index, entry) in self.corpus.iter().enumerate() {
            let similarity = cosine_similarity(&query_vector, &model.transform(&all_texts[index]));
            max_similarity = max_similarity.max(similarity);
            if similarity > MATCH_THRESHOLD {
                matches.push(CorpusMatch {
                    source: entry.source.clone(),
                    similarity,
                    match_index: index,
                });
            }
        }

        (max_similarity * 100.0, matches)
    }
}

/// Mean pairwise cosine similarity over all distinct sentence pairs, x 100.
/// High internal similarity indicates repetitive content.
fn internal_similarity(sentences: &[String]) -> f64 {
    if sentences.len() < 2 {
        return 0.0;
    }

    let processed: Vec<String> = sentences.iter().map(|s| preprocess_text(s)).collect();
    let model = match TfIdfVectorizer::fit(&processed) {
        Ok(model) => model,
        Err(e) => {
            warn!(error = %e, "sentence vectorization failed; internal similarity degraded to 0");
            return 0.0;
        }
    };

    let vectors: Vec<Vec<f64>> = processed.iter().map(|s| model.transform(s)).collect();

    let mut total = 0.0;
    let mut pairs = 0usize;
    for i in 0..vectors.len() {
        for j in (i + 1)..vectors.len() {
            total += cosine_similarity(&vectors[i], &vectors[j]);
            pairs += 1;
        }
    }

    if pairs == 0 {
        return 0.0;
    }
    (total / pairs as f64) * 100.0
}
