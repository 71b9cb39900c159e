//! HTTP client for Ollama's `/api/embeddings` endpoint.

use futures::future::try_join_all;
use futures::{stream, StreamExt, TryStreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{EmbeddingOptions, OllamaClientConfig};
use crate::error::OllamaEmbeddingError;

const EMBEDDINGS_PATH: &str = "/api/embeddings";

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<&'a EmbeddingOptions>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    /// Missing or `null` both mean "no vector".
    #[serde(default)]
    embedding: Option<Vec<f32>>,
}

/// Sends one request per prompt to `{base_url}/api/embeddings`.
#[derive(Debug, Clone)]
pub struct OllamaEmbeddingClient {
    http: Client,
    endpoint: String,
    model: String,
    options: Option<EmbeddingOptions>,
    /// In-flight request cap for `embed_batch`; `None` launches every request at once.
    max_concurrency: Option<usize>,
}

impl OllamaEmbeddingClient {
    pub fn new(config: OllamaClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Reuses an existing `reqwest::Client` (and its connection pool).
    pub fn with_http_client(config: OllamaClientConfig, http: Client) -> Self {
        let endpoint = format!("{}{}", config.base_url.trim_end_matches('/'), EMBEDDINGS_PATH);
        Self {
            http,
            endpoint,
            model: config.model,
            options: config.options,
            max_concurrency: None,
        }
    }

    /// Caps concurrent requests per batch. `0` removes the cap.
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = (limit > 0).then_some(limit);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn options(&self) -> Option<&EmbeddingOptions> {
        self.options.as_ref()
    }

    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    /// Embeds one text. Blank input returns an empty vector without a request.
    pub async fn embed_query(&self, text: &str) -> Result<Vec<f32>, OllamaEmbeddingError> {
        if text.trim().is_empty() {
            debug!("ollama embed_query blank input, skipping");
            return Ok(vec![]);
        }
        self.request_embedding(text).await
    }

    /// Embeds every text with its own request; `result[i]` belongs to `texts[i]`.
    ///
    /// Blank elements are still sent. The first failure fails the whole batch.
    pub async fn embed_batch(
        &self,
        texts: &[String],
    ) -> Result<Vec<Vec<f32>>, OllamaEmbeddingError> {
        if texts.is_empty() {
            debug!("ollama embed_batch empty input, skipping");
            return Ok(vec![]);
        }

        debug!(
            model = %self.model,
            batch_size = texts.len(),
            max_concurrency = ?self.max_concurrency,
            "ollama embed_batch request"
        );

        let requests: Vec<_> = texts
            .iter()
            .map(|text| self.request_embedding(text))
            .collect();
        let embeddings: Vec<Vec<f32>> = match self.max_concurrency {
            None => try_join_all(requests).await?,
            Some(limit) => stream::iter(requests).buffered(limit).try_collect().await?,
        };

        debug!(count = embeddings.len(), "ollama embed_batch done");
        Ok(embeddings)
    }

    async fn request_embedding(&self, prompt: &str) -> Result<Vec<f32>, OllamaEmbeddingError> {
        debug!(model = %self.model, text_len = prompt.len(), "ollama embed request");

        let body = EmbeddingRequest {
            model: &self.model,
            prompt,
            options: self.options.as_ref(),
        };
        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, "ollama embed error body unreadable");
                    String::new()
                }
            };
            warn!(status = status.as_u16(), body = %body, "ollama embed request failed");
            return Err(OllamaEmbeddingError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.bytes().await?;
        let payload: EmbeddingResponse = serde_json::from_slice(&raw)?;
        let embedding = payload.embedding.unwrap_or_default();
        debug!(dimension = embedding.len(), "ollama embed done");
        Ok(embedding)
    }
}
