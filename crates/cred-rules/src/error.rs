#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rule set {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule set {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid rule set document: {source}")]
    InvalidDocument {
        #[from]
        source: serde_json::Error,
    },

    #[error("duplicate provider type in rule set: {name}")]
    DuplicateProviderType { name: String },

    #[error(
        "duplicate requirement type {requirement_type} in rule set for {provider_type}"
    )]
    DuplicateRequirement {
        provider_type: String,
        requirement_type: String,
    },
}

impl RulesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RulesError>;
