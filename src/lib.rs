pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod describe;
pub mod error;
pub mod evidence;
pub mod features;
pub mod heuristic;
pub mod matcher;
pub mod narrative;
pub mod scoring;
pub mod traits;
pub mod utils;

pub use analyzer::{Analyzer, PersonalityResult, TraitDescriptor};
pub use config::Config;
pub use error::{Result, TraitScopeError};
pub use matcher::SimilarProfile;
pub use scoring::{Strategy, TraitScorer};
pub use traits::{Trait, TraitMap, TraitScores};

/// Load `.env` from the working directory or its parents, if one exists.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Analyze `text` with the default configuration, including the simulated delay.
pub async fn analyze(text: &str) -> PersonalityResult {
    Analyzer::default().analyze(text).await
}
