//! Domain-specific error types for trait-scope
//!
//! The analysis core never fails; these errors cover configuration loading
//! and reading input at the binary boundary.

use thiserror::Error;

/// Main error type for trait-scope
#[derive(Error, Debug)]
pub enum TraitScopeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Input error: {message}")]
    Input { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for TraitScopeError {
    fn from(err: anyhow::Error) -> Self {
        TraitScopeError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TraitScopeError {
    fn from(err: serde_json::Error) -> Self {
        TraitScopeError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TraitScopeError {
    fn from(err: toml::de::Error) -> Self {
        TraitScopeError::Config {
            message: format!("TOML parse error: {}", err),
        }
    }
}

impl From<std::io::Error> for TraitScopeError {
    fn from(err: std::io::Error) -> Self {
        TraitScopeError::Input {
            message: err.to_string(),
        }
    }
}

impl TraitScopeError {
    /// Process exit code used by the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            TraitScopeError::Config { .. } | TraitScopeError::Validation { .. } => 2,
            TraitScopeError::Input { .. } => 1,
            TraitScopeError::Serialization { .. } | TraitScopeError::Internal { .. } => 3,
        }
    }
}

/// Result type alias for trait-scope operations
pub type Result<T> = std::result::Result<T, TraitScopeError>;
