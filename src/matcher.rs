//! Corpus matching: cosine similarity against the reference exemplars and a
//! similarity-weighted blend of their trait vectors.

use crate::corpus::{CORPUS, CorpusEntry};
use crate::traits::{TraitMap, TraitScores};
use crate::utils::math::{FrequencyVector, cosine_similarity, round1};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Read-only view of a corpus entry for result payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarProfile {
    pub category: String,
    pub description: String,
}

impl From<&CorpusEntry> for SimilarProfile {
    fn from(e: &CorpusEntry) -> Self {
        Self {
            category: e.category.to_string(),
            description: e.description.to_string(),
        }
    }
}

/// A corpus entry paired with its similarity to the input.
#[derive(Debug, Clone, Copy)]
pub struct Match {
    pub entry: &'static CorpusEntry,
    pub similarity: f64,
}

/// How the weighted estimate was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Similarity-weighted average
    Weighted,
    /// No vocabulary overlap; plain mean of the selected entries
    UnweightedMean,
}

#[derive(Debug, Clone)]
pub struct CorpusBlend {
    pub traits: TraitScores,
    pub aggregation: Aggregation,
    /// Normalized weights in match order
    pub weights: Vec<f64>,
    pub matches: Vec<Match>,
}

// Corpus vectors never change, so vectorize them once
static CORPUS_VECTORS: Lazy<Vec<FrequencyVector>> =
    Lazy::new(|| CORPUS.iter().map(|e| vectorize(e.text)).collect());

/// Lowercase, split on non-word characters, drop empties. No stopword or length filter.
pub fn vectorize(text: &str) -> FrequencyVector {
    let mut freq = FrequencyVector::new();
    for w in text
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
    {
        *freq.entry(w.to_string()).or_insert(0) += 1;
    }
    freq
}

/// Cosine similarity of the two texts' frequency vectors, in [0, 1].
pub fn similarity(a: &str, b: &str) -> f64 {
    cosine_similarity(&vectorize(a), &vectorize(b))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CorpusMatcher;

impl CorpusMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Every corpus entry scored against `text`, most similar first.
    /// Equal similarities keep corpus declaration order.
    pub fn rank(&self, text: &str) -> Vec<Match> {
        let v = vectorize(text);
        let mut matches: Vec<Match> = CORPUS
            .iter()
            .zip(CORPUS_VECTORS.iter())
            .map(|(entry, ev)| Match {
                entry,
                similarity: cosine_similarity(&v, ev),
            })
            .collect();
        // sort_by is stable
        matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        matches
    }

    /// The `k` most similar entries.
    pub fn top_k(&self, text: &str, k: usize) -> Vec<Match> {
        let mut ranked = self.rank(text);
        ranked.truncate(k);
        ranked
    }

    /// Similarity-weighted trait estimate over the `k` nearest entries,
    /// rounded to one decimal. Falls back to the unweighted mean when the
    /// input shares no vocabulary with any of them.
    pub fn weighted_traits(&self, text: &str, k: usize) -> CorpusBlend {
        let matches = self.top_k(text, k.max(1));
        let total: f64 = matches.iter().map(|m| m.similarity).sum();
        let (weights, aggregation) = if total > 0.0 {
            (
                matches.iter().map(|m| m.similarity / total).collect::<Vec<_>>(),
                Aggregation::Weighted,
            )
        } else {
            tracing::warn!(
                neighbors = matches.len(),
                "no vocabulary overlap with corpus; using unweighted mean"
            );
            let w = 1.0 / matches.len() as f64;
            (vec![w; matches.len()], Aggregation::UnweightedMean)
        };

        let traits = TraitMap::from_fn(|t| {
            let blended: f64 = matches
                .iter()
                .zip(weights.iter())
                .map(|(m, w)| m.entry.traits[t] * w)
                .sum();
            round1(blended)
        });
        tracing::debug!(
            top = matches.first().map(|m| m.entry.category),
            top_similarity = matches.first().map(|m| m.similarity),
            ?aggregation,
            "corpus blend computed"
        );

        CorpusBlend {
            traits,
            aggregation,
            weights,
            matches,
        }
    }

    /// The `k` most similar entries as category/description pairs.
    pub fn similar_profiles(&self, text: &str, k: usize) -> Vec<SimilarProfile> {
        self.top_k(text, k)
            .into_iter()
            .map(|m| SimilarProfile::from(m.entry))
            .collect()
    }
}
