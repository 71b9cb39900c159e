//! # Ollama Embedding Service
//!
//! This crate provides an implementation of the `EmbeddingService` trait backed by a
//! local or remote [Ollama](https://ollama.com) server.
//!
//! ## Configuration
//!
//! The effective `{base_url, model, options}` is resolved from three layers, per field:
//! a caller-supplied remote override, a bare model parameter, and the persisted
//! `models.providers.ollama` subtree. Defaults are `http://localhost:11434` and
//! `nomic-embed-text`. Model names written as `ollama/<name>` are accepted.
//!
//! ## Requests
//!
//! Every text is one `POST {base_url}/api/embeddings` with body
//! `{"model", "prompt", "options"}`. Batches fan out one request per text and keep
//! input order. Non-2xx answers fail with [`OllamaEmbeddingError::Upstream`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedding::EmbeddingService;
//! use ollama_embedding::{create_ollama_embedding_provider, DebugLog, OllamaSettings, ResolveOptions};
//!
//! async fn example() -> Result<(), anyhow::Error> {
//!     let bundle = create_ollama_embedding_provider(
//!         &ResolveOptions {
//!             remote: Some(OllamaSettings::default().with_model("ollama/all-minilm")),
//!             ..Default::default()
//!         },
//!         &DebugLog::from_env(),
//!     );
//!     let embedding = bundle.provider.embed_query("Hello world").await?;
//!     println!("Embedding dimension: {}", embedding.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod debug;
pub mod error;
pub mod provider;

pub use client::OllamaEmbeddingClient;
pub use config::{
    normalize_ollama_base_url, normalize_ollama_model, resolve_ollama_embedding_client,
    EmbeddingOptions, ModelsConfig, OllamaClientConfig, OllamaSettings, PersistedConfig,
    ProvidersConfig, ResolveOptions, DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_EMBEDDING_MODEL,
};
pub use debug::{DebugLog, DebugSink, TracingSink};
pub use error::OllamaEmbeddingError;
pub use provider::{
    create_ollama_embedding_provider, OllamaEmbedding, OllamaProviderBundle, OLLAMA_PROVIDER_ID,
};
