//! Embedding configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

/// Env toggle that turns on the one-line resolved-config diagnostics.
pub const DEBUG_EMBEDDINGS_ENV: &str = "DEBUG_MEMORY_EMBEDDINGS";

/// Returns true for `1`, `true`, `yes`, `on` (trimmed, case-insensitive).
pub fn is_truthy_env_value(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => false,
    }
}

/// Embedding service configuration interface.
pub trait EmbeddingConfig: Send + Sync {
    fn provider(&self) -> &str;
    /// Base URL override for the embedding service. `None` when unset or blank.
    fn base_url(&self) -> Option<&str>;
    /// Model override. `None` when unset or blank.
    fn model(&self) -> Option<&str>;
    fn debug(&self) -> bool;
}

/// Embedding config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvEmbeddingConfig {
    pub embedding_provider: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub debug: bool,
}

impl EmbeddingConfig for EnvEmbeddingConfig {
    fn provider(&self) -> &str {
        &self.embedding_provider
    }
    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|s| !s.trim().is_empty())
    }
    fn model(&self) -> Option<&str> {
        self.model.as_deref().filter(|s| !s.trim().is_empty())
    }
    fn debug(&self) -> bool {
        self.debug
    }
}

impl EnvEmbeddingConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let embedding_provider =
            env::var("EMBEDDING_PROVIDER").unwrap_or_else(|_| "ollama".to_string());
        let base_url = env::var("EMBEDDING_BASE_URL").ok().filter(|s| !s.trim().is_empty());
        let model = env::var("EMBEDDING_MODEL").ok().filter(|s| !s.trim().is_empty());
        let debug = is_truthy_env_value(env::var(DEBUG_EMBEDDINGS_ENV).ok().as_deref());
        Ok(Self {
            embedding_provider,
            base_url,
            model,
            debug,
        })
    }

    /// Validate config (only the `ollama` provider is wired up).
    pub fn validate(&self) -> Result<()> {
        if !self.embedding_provider.eq_ignore_ascii_case("ollama") {
            anyhow::bail!(
                "EMBEDDING_PROVIDER={} is not supported; expected ollama",
                self.embedding_provider
            );
        }
        Ok(())
    }
}
