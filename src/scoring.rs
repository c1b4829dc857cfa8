//! Trait-scoring strategies behind a common interface.

use crate::features::extract_features;
use crate::heuristic;
use crate::matcher::CorpusMatcher;
use crate::traits::{TraitMap, TraitScores};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

pub trait TraitScorer {
    fn name(&self) -> &'static str;
    fn score(&self, text: &str) -> TraitScores;
}

/// Which scorer the analyzer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Similarity-weighted blend of the nearest corpus exemplars
    Corpus,
    /// Keyword and structure heuristics over extracted features
    Lexicon,
    /// Weighted mix of the two
    #[default]
    Blended,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Corpus => "corpus",
            Strategy::Lexicon => "lexicon",
            Strategy::Blended => "blended",
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "corpus" => Ok(Strategy::Corpus),
            "lexicon" | "heuristic" => Ok(Strategy::Lexicon),
            "blended" | "blend" => Ok(Strategy::Blended),
            other => Err(format!(
                "unknown strategy '{other}' (expected corpus, lexicon or blended)"
            )),
        }
    }
}

pub struct CorpusScorer {
    matcher: CorpusMatcher,
    neighbors: usize,
}

impl CorpusScorer {
    pub fn new(neighbors: usize) -> Self {
        Self {
            matcher: CorpusMatcher::new(),
            neighbors,
        }
    }
}

impl TraitScorer for CorpusScorer {
    fn name(&self) -> &'static str {
        "corpus"
    }

    fn score(&self, text: &str) -> TraitScores {
        self.matcher
            .weighted_traits(text, self.neighbors)
            .traits
            .clamped()
    }
}

pub struct LexiconScorer;

impl TraitScorer for LexiconScorer {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn score(&self, text: &str) -> TraitScores {
        heuristic::score_features(&extract_features(text)).rounded()
    }
}

/// `corpus_weight × corpus + (1 − corpus_weight) × lexicon`, per trait.
pub struct BlendedScorer {
    corpus: CorpusScorer,
    lexicon: LexiconScorer,
    corpus_weight: f64,
}

impl BlendedScorer {
    pub fn new(neighbors: usize, corpus_weight: f64) -> Self {
        Self {
            corpus: CorpusScorer::new(neighbors),
            lexicon: LexiconScorer,
            corpus_weight: corpus_weight.clamp(0.0, 1.0),
        }
    }
}

impl TraitScorer for BlendedScorer {
    fn name(&self) -> &'static str {
        "blended"
    }

    fn score(&self, text: &str) -> TraitScores {
        let c = self.corpus.score(text);
        let l = self.lexicon.score(text);
        let w = self.corpus_weight;
        TraitMap::from_fn(|t| w * c[t] + (1.0 - w) * l[t])
            .clamped()
            .rounded()
    }
}

/// Build the scorer for a strategy.
pub fn scorer_for(
    strategy: Strategy,
    neighbors: usize,
    corpus_weight: f64,
) -> Arc<dyn TraitScorer + Send + Sync> {
    match strategy {
        Strategy::Corpus => Arc::new(CorpusScorer::new(neighbors)),
        Strategy::Lexicon => Arc::new(LexiconScorer),
        Strategy::Blended => Arc::new(BlendedScorer::new(neighbors, corpus_weight)),
    }
}
