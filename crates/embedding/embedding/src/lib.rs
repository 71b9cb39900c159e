//! # Text Embeddings
//!
//! This crate defines the provider-neutral embedding service interface used by the
//! memory subsystem, plus the environment-driven settings shared by providers.
//!
//! ## EmbeddingService Trait
//!
//! #### `id(&self) -> &str` / `model(&self) -> &str`
//!
//! Constant provider tag (e.g. `"ollama"`) and the resolved model name.
//!
//! #### `embed_query(&self, text: &str) -> Result<Vec<f32>, anyhow::Error>`
//!
//! Generates an embedding vector for a single text string. Providers may return an
//! empty vector for blank input without contacting the backend.
//!
//! #### `embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, anyhow::Error>`
//!
//! Generates embedding vectors for multiple texts. `result[i]` always corresponds to
//! `texts[i]`; a failure for any element fails the whole call.
//!
//! ## Example Usage
//!
//! ```rust
//! use embedding::EmbeddingService;
//!
//! async fn example(service: &impl EmbeddingService) -> Result<(), anyhow::Error> {
//!     let embedding = service.embed_query("Hello world").await?;
//!     println!("{} / {}: dimension {}", service.id(), service.model(), embedding.len());
//!
//!     let texts = vec!["Hello".to_string(), "World".to_string()];
//!     let embeddings = service.embed_batch(&texts).await?;
//!     assert_eq!(embeddings.len(), texts.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

mod config;
pub use config::{is_truthy_env_value, EmbeddingConfig, EnvEmbeddingConfig, DEBUG_EMBEDDINGS_ENV};

/// Service for generating text embeddings.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Constant tag identifying the backend.
    fn id(&self) -> &str;

    /// Model name requests are sent with.
    fn model(&self) -> &str;

    /// Generates an embedding vector for a single text string.
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, anyhow::Error>;

    /// Generates embedding vectors for multiple texts, in input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, anyhow::Error>;
}
