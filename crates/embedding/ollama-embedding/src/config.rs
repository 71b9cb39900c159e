//! Ollama embedding configuration: layered sources and resolution.
//!
//! Three sources feed the effective [`OllamaClientConfig`], evaluated per field:
//!
//! | Field      | 1st                | 2nd                     | 3rd                 | Fallback                 |
//! |------------|--------------------|-------------------------|---------------------|--------------------------|
//! | `base_url` | remote override    | persisted provider      | -                   | `http://localhost:11434` |
//! | `model`    | remote override    | top-level `model`       | persisted provider  | `nomic-embed-text`       |
//! | `options`  | remote override    | persisted provider      | -                   | absent                   |
//!
//! Resolution never fails.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::debug::DebugLog;

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_EMBEDDING_MODEL: &str = "nomic-embed-text";

const OLLAMA_MODEL_PREFIX: &str = "ollama/";

/// Opaque model options forwarded to the service as-is.
pub type EmbeddingOptions = serde_json::Map<String, serde_json::Value>;

/// Per-provider settings; used for both the remote override and the persisted subtree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OllamaSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<EmbeddingOptions>,
}

impl OllamaSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_options(mut self, options: EmbeddingOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Persisted application config, shaped `{ "models": { "providers": { "ollama": {..} } } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<ModelsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<ProvidersConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ollama: Option<OllamaSettings>,
}

impl PersistedConfig {
    /// Wraps an ollama provider subtree.
    pub fn with_ollama(settings: OllamaSettings) -> Self {
        Self {
            models: Some(ModelsConfig {
                providers: Some(ProvidersConfig {
                    ollama: Some(settings),
                }),
            }),
        }
    }

    pub fn ollama(&self) -> Option<&OllamaSettings> {
        self.models
            .as_ref()
            .and_then(|m| m.providers.as_ref())
            .and_then(|p| p.ollama.as_ref())
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("parse persisted embedding config")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read persisted embedding config {}", path.display()))?;
        Self::from_json_str(&raw)
    }
}

/// Inputs to [`resolve_ollama_embedding_client`].
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Caller-supplied override; wins over everything else.
    pub remote: Option<OllamaSettings>,
    pub config: Option<PersistedConfig>,
    /// Bare model name, e.g. from the memory search settings.
    pub model: Option<String>,
}

/// Effective client configuration. `base_url` has no trailing `/`; `model` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OllamaClientConfig {
    pub base_url: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EmbeddingOptions>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Strips trailing slashes; empty or all-slash input falls back to the default.
pub fn normalize_ollama_base_url(raw: Option<&str>) -> String {
    match raw.map(|s| s.trim_end_matches('/')) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_OLLAMA_BASE_URL.to_string(),
    }
}

/// Trims, strips one `ollama/` prefix, and falls back to the default when empty.
pub fn normalize_ollama_model(model: &str) -> String {
    let trimmed = model.trim();
    let stripped = trimmed.strip_prefix(OLLAMA_MODEL_PREFIX).unwrap_or(trimmed);
    if stripped.is_empty() {
        DEFAULT_OLLAMA_EMBEDDING_MODEL.to_string()
    } else {
        stripped.to_string()
    }
}

/// Merges the remote override, the top-level model and the persisted ollama subtree.
///
/// Empty strings fall through to the next source; a present options map wins even if
/// it is empty. Emits one line to `debug` when it is enabled.
pub fn resolve_ollama_embedding_client(
    options: &ResolveOptions,
    debug: &DebugLog,
) -> OllamaClientConfig {
    let remote = options.remote.as_ref();
    let remote_base_url = non_empty(remote.and_then(|r| r.base_url.as_deref()).map(str::trim));
    let remote_model = non_empty(remote.and_then(|r| r.model.as_deref()).map(str::trim));
    let remote_options = remote.and_then(|r| r.options.as_ref());

    let provider = options.config.as_ref().and_then(PersistedConfig::ollama);

    let base_url = normalize_ollama_base_url(
        remote_base_url.or_else(|| non_empty(provider.and_then(|p| p.base_url.as_deref()))),
    );

    let model = normalize_ollama_model(
        remote_model
            .or_else(|| non_empty(options.model.as_deref()))
            .or_else(|| non_empty(provider.and_then(|p| p.model.as_deref())))
            .unwrap_or(DEFAULT_OLLAMA_EMBEDDING_MODEL),
    );

    let options = remote_options
        .or_else(|| provider.and_then(|p| p.options.as_ref()))
        .cloned();

    let resolved = OllamaClientConfig {
        base_url,
        model,
        options,
    };
    debug.log("memory embeddings: ollama client", Some(&resolved));
    resolved
}
