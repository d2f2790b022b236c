use std::path::PathBuf;

use thiserror::Error;

use gildedrose_core::DomainError;

pub type FixtureResult<T> = Result<T, FixtureError>;

/// Failures at the edges of the simulation: configuration, loading, rendering.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse inventory from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to render report: {0}")]
    Render(#[source] serde_json::Error),

    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

impl FixtureError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
