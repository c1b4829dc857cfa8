//! Analysis orchestrator: text in, [`PersonalityResult`] out.
//!
//! `evaluate` is the synchronous core. `analyze` runs the same pipeline and
//! then waits out the configured latency, emulating a remote service.

use crate::config::Config;
use crate::describe::describe;
use crate::evidence::extract_quotes;
use crate::features::{TextFeatures, extract_features};
use crate::matcher::{CorpusMatcher, SimilarProfile};
use crate::narrative::{NarrativeSynthesizer, recommendations};
use crate::scoring::{Strategy, TraitScorer, scorer_for};
use crate::traits::{Trait, TraitScores};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitDescriptor {
    pub name: String,
    pub value: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityResult {
    pub summary: String,
    /// Always five entries, Openness through Neuroticism
    pub traits: Vec<TraitDescriptor>,
    pub evidence_quotes: Vec<String>,
    pub recommendations: Vec<String>,
    pub similar_profiles: Vec<SimilarProfile>,
}

impl PersonalityResult {
    /// Trait scores back out of the descriptor list.
    pub fn scores(&self) -> TraitScores {
        TraitScores::from_fn(|t| {
            self.traits
                .get(t.index())
                .map(|d| d.value)
                .unwrap_or(crate::traits::NEUTRAL_SCORE)
        })
    }
}

#[derive(Clone)]
pub struct Analyzer {
    config: Config,
    scorer: Arc<dyn TraitScorer + Send + Sync>,
    matcher: CorpusMatcher,
    narrator: NarrativeSynthesizer,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Analyzer {
    pub fn new(config: &Config) -> Self {
        let a = &config.analysis;
        Self {
            config: config.clone(),
            scorer: scorer_for(a.strategy, a.neighbors, a.corpus_weight),
            matcher: CorpusMatcher::new(),
            narrator: NarrativeSynthesizer::new(),
        }
    }

    /// Same configuration, different scoring strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.config.analysis.strategy = strategy;
        let a = &self.config.analysis;
        self.scorer = scorer_for(strategy, a.neighbors, a.corpus_weight);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn strategy_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Feature extraction only.
    pub fn features(&self, text: &str) -> TextFeatures {
        extract_features(text)
    }

    /// Trait scores only; deterministic for a given text and configuration.
    pub fn scores(&self, text: &str) -> TraitScores {
        self.scorer.score(text)
    }

    /// Full result without the simulated delay. Phrasing uses the configured
    /// seed when present, OS entropy otherwise.
    pub fn evaluate(&self, text: &str) -> PersonalityResult {
        match self.config.narrative.seed {
            Some(seed) => self.evaluate_with_rng(text, &mut StdRng::seed_from_u64(seed)),
            None => self.evaluate_with_rng(text, &mut rand::thread_rng()),
        }
    }

    /// Full result with phrasing drawn from `rng`.
    pub fn evaluate_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> PersonalityResult {
        let scores = self.scores(text);
        debug!(strategy = self.scorer.name(), ?scores, "scored text");

        let traits = Trait::ALL
            .iter()
            .map(|t| TraitDescriptor {
                name: t.label().to_string(),
                value: scores[*t],
                description: describe(*t, scores[*t]).to_string(),
            })
            .collect();

        PersonalityResult {
            summary: self.narrator.compose(&scores, rng),
            traits,
            evidence_quotes: extract_quotes(text, self.config.analysis.evidence_quotes),
            recommendations: recommendations(&scores),
            similar_profiles: self
                .matcher
                .similar_profiles(text, self.config.analysis.similar_profiles),
        }
    }

    /// Full result, returned after the configured latency. Never fails.
    pub async fn analyze(&self, text: &str) -> PersonalityResult {
        let started = Instant::now();
        let result = self.evaluate(text);
        let latency = Duration::from_millis(self.config.analysis.latency_ms);
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        info!(
            strategy = self.scorer.name(),
            chars = text.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            openness = result.traits[0].value,
            conscientiousness = result.traits[1].value,
            extraversion = result.traits[2].value,
            agreeableness = result.traits[3].value,
            neuroticism = result.traits[4].value,
            "analysis complete"
        );
        result
    }
}
