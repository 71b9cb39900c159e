//! `EmbeddingService` facade over [`OllamaEmbeddingClient`].

use async_trait::async_trait;
use embedding::EmbeddingService;

use crate::client::OllamaEmbeddingClient;
use crate::config::{resolve_ollama_embedding_client, OllamaClientConfig, ResolveOptions};
use crate::debug::DebugLog;

pub const OLLAMA_PROVIDER_ID: &str = "ollama";

/// Ollama embedding provider handed to the memory subsystem.
#[derive(Debug, Clone)]
pub struct OllamaEmbedding {
    client: OllamaEmbeddingClient,
}

impl OllamaEmbedding {
    pub fn new(client: OllamaEmbeddingClient) -> Self {
        Self { client }
    }

    pub fn id(&self) -> &'static str {
        OLLAMA_PROVIDER_ID
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub fn client(&self) -> &OllamaEmbeddingClient {
        &self.client
    }
}

#[async_trait]
impl EmbeddingService for OllamaEmbedding {
    fn id(&self) -> &str {
        OLLAMA_PROVIDER_ID
    }

    fn model(&self) -> &str {
        self.client.model()
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, anyhow::Error> {
        Ok(self.client.embed_query(text).await?)
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, anyhow::Error> {
        Ok(self.client.embed_batch(texts).await?)
    }
}

/// Provider plus the configuration it was built from.
#[derive(Debug, Clone)]
pub struct OllamaProviderBundle {
    pub provider: OllamaEmbedding,
    pub client: OllamaClientConfig,
}

/// Resolves the configuration once and builds the provider from it.
pub fn create_ollama_embedding_provider(
    options: &ResolveOptions,
    debug: &DebugLog,
) -> OllamaProviderBundle {
    let client = resolve_ollama_embedding_client(options, debug);
    let provider = OllamaEmbedding::new(OllamaEmbeddingClient::new(client.clone()));
    OllamaProviderBundle { provider, client }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OllamaSettings;
    use crate::debug::tests::CaptureSink;
    use std::sync::Arc;

    #[test]
    fn test_bundle_exposes_id_model_and_config() {
        let sink = Arc::new(CaptureSink::default());
        let bundle = create_ollama_embedding_provider(
            &ResolveOptions {
                remote: Some(
                    OllamaSettings::default()
                        .with_base_url("http://remote:11434/")
                        .with_model("ollama/all-minilm"),
                ),
                ..Default::default()
            },
            &DebugLog::new(true, sink.clone()),
        );

        assert_eq!(bundle.provider.id(), "ollama");
        assert_eq!(bundle.provider.model(), "all-minilm");
        assert_eq!(bundle.client.base_url, "http://remote:11434");
        assert_eq!(
            bundle.provider.client().endpoint(),
            "http://remote:11434/api/embeddings"
        );
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_trait_object_reports_id() {
        let bundle =
            create_ollama_embedding_provider(&ResolveOptions::default(), &DebugLog::disabled());
        let service: Arc<dyn EmbeddingService> = Arc::new(bundle.provider);

        assert_eq!(service.id(), OLLAMA_PROVIDER_ID);
        assert_eq!(service.model(), "nomic-embed-text");
    }
}
