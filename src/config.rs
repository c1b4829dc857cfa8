use crate::scoring::Strategy;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "trait_scope.toml";

/// Main configuration structure loaded from trait_scope.toml and environment variables
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub narrative: NarrativeConfig,
}

/// Scoring strategy and result-shaping knobs
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub strategy: Strategy,
    /// Share of the corpus strategy in the blended score
    pub corpus_weight: f64,
    /// Neighbors used for the weighted corpus estimate
    pub neighbors: usize,
    pub similar_profiles: usize,
    pub evidence_quotes: usize,
    /// Simulated processing delay before `analyze` returns
    pub latency_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Blended,
            corpus_weight: 0.4,
            neighbors: 5,
            similar_profiles: 3,
            evidence_quotes: crate::evidence::DEFAULT_QUOTES,
            latency_ms: 1500,
        }
    }
}

impl AnalysisConfig {
    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.corpus_weight) {
            anyhow::bail!("corpus_weight must be between 0.0 and 1.0");
        }
        if !(1..=crate::corpus::CORPUS_SIZE).contains(&self.neighbors) {
            anyhow::bail!(
                "neighbors must be between 1 and {}",
                crate::corpus::CORPUS_SIZE
            );
        }
        if self.similar_profiles > crate::corpus::CORPUS_SIZE {
            anyhow::bail!(
                "similar_profiles must be at most {}",
                crate::corpus::CORPUS_SIZE
            );
        }
        Ok(())
    }
}

/// Phrasing randomness for the summary
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Fixed seed for reproducible summaries; OS entropy when unset
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses TRAIT_SCOPE_CONFIG or defaults to "trait_scope.toml".
    pub fn load() -> anyhow::Result<Self> {
        crate::load_env();

        let config_path = std::env::var("TRAIT_SCOPE_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = Self::load_from_path(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.analysis.validate()?;
        Ok(config)
    }

    /// Read a TOML file, or defaults when it does not exist.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Config file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Apply TRAIT_SCOPE_* overrides (env-first). Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup("TRAIT_SCOPE_STRATEGY") {
            match raw.parse::<Strategy>() {
                Ok(strategy) => self.analysis.strategy = strategy,
                Err(e) => tracing::warn!("Ignoring TRAIT_SCOPE_STRATEGY: {}", e),
            }
        }
        if let Some(w) = lookup("TRAIT_SCOPE_CORPUS_WEIGHT").and_then(|v| v.parse::<f64>().ok())
            && w.is_finite()
        {
            if !(0.0..=1.0).contains(&w) {
                tracing::warn!("TRAIT_SCOPE_CORPUS_WEIGHT={} clamped to [0, 1]", w);
            }
            self.analysis.corpus_weight = w.clamp(0.0, 1.0);
        }
        if let Some(k) = lookup("TRAIT_SCOPE_NEIGHBORS").and_then(|v| v.parse::<usize>().ok()) {
            let clamped = k.clamp(1, crate::corpus::CORPUS_SIZE);
            if clamped != k {
                tracing::warn!("TRAIT_SCOPE_NEIGHBORS={} clamped to {}", k, clamped);
            }
            self.analysis.neighbors = clamped;
        }
        if let Some(n) = lookup("TRAIT_SCOPE_EVIDENCE_QUOTES").and_then(|v| v.parse::<usize>().ok())
        {
            self.analysis.evidence_quotes = n;
        }
        if let Some(ms) = lookup("TRAIT_SCOPE_LATENCY_MS").and_then(|v| v.parse::<u64>().ok()) {
            self.analysis.latency_ms = ms;
        }
        if let Some(seed) = lookup("TRAIT_SCOPE_SEED").and_then(|v| v.parse::<u64>().ok()) {
            self.narrative.seed = Some(seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.analysis.strategy, Strategy::Blended);
        assert_eq!(config.analysis.evidence_quotes, 3);
        assert_eq!(config.narrative.seed, None);
        assert!(config.analysis.validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_path(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[analysis]\nstrategy = \"corpus\"\nneighbors = 3\n\n[narrative]\nseed = 99"
        )
        .unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.analysis.strategy, Strategy::Corpus);
        assert_eq!(config.analysis.neighbors, 3);
        assert_eq!(config.analysis.corpus_weight, 0.4);
        assert_eq!(config.narrative.seed, Some(99));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis\nstrategy = ").unwrap();
        assert!(Config::load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("TRAIT_SCOPE_STRATEGY", "lexicon"),
            ("TRAIT_SCOPE_CORPUS_WEIGHT", "1.7"),
            ("TRAIT_SCOPE_NEIGHBORS", "0"),
            ("TRAIT_SCOPE_LATENCY_MS", "0"),
            ("TRAIT_SCOPE_SEED", "12"),
            ("TRAIT_SCOPE_EVIDENCE_QUOTES", "not-a-number"),
        ]));
        assert_eq!(config.analysis.strategy, Strategy::Lexicon);
        assert_eq!(config.analysis.corpus_weight, 1.0);
        assert_eq!(config.analysis.neighbors, 1);
        assert_eq!(config.analysis.latency_ms, 0);
        assert_eq!(config.analysis.evidence_quotes, 3);
        assert_eq!(config.narrative.seed, Some(12));
    }

    #[test]
    fn test_bad_strategy_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[("TRAIT_SCOPE_STRATEGY", "astrology")]));
        assert_eq!(config.analysis.strategy, Strategy::Blended);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut a = AnalysisConfig {
            corpus_weight: -0.1,
            ..AnalysisConfig::default()
        };
        assert!(a.validate().is_err());
        a.corpus_weight = 0.5;
        a.neighbors = 11;
        assert!(a.validate().is_err());
        a.neighbors = 10;
        a.similar_profiles = 11;
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_load_env_is_repeatable_without_dotenv_file() {
        // a missing .env is not an error, and loading twice changes nothing
        crate::load_env();
        let before = std::env::var("TRAIT_SCOPE_CONFIG").ok();
        crate::load_env();
        assert_eq!(std::env::var("TRAIT_SCOPE_CONFIG").ok(), before);
    }
}
