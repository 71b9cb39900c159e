//! Ollama embedding error types.

use thiserror::Error;

/// Errors returned by [`crate::OllamaEmbeddingClient`].
#[derive(Error, Debug)]
pub enum OllamaEmbeddingError {
    /// The service answered with a non-2xx status.
    #[error("ollama embeddings failed: {status} {body}")]
    Upstream { status: u16, body: String },

    #[error("ollama embeddings transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("ollama embeddings returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl OllamaEmbeddingError {
    /// HTTP status for upstream failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }
}
