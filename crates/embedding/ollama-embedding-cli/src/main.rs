//! ollama-embed CLI: embed a query or a batch through Ollama, or show the resolved config.

use anyhow::{Context, Result};
use clap::Parser;
use embedding::{EmbeddingService, EnvEmbeddingConfig};
use ollama_embedding::{
    resolve_ollama_embedding_client, OllamaClientConfig, OllamaEmbedding, OllamaEmbeddingClient,
};
use ollama_embedding_cli::{build_debug_log, build_resolve_options, Cli, Commands};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let env = EnvEmbeddingConfig::from_env()?;
    env.validate()?;

    let options = build_resolve_options(&cli, &env)
        .context("Build embedding config from flags, env and --config")?;
    let debug = build_debug_log(&cli, &env);
    let config = resolve_ollama_embedding_client(&options, &debug);

    match cli.command {
        Commands::Resolve => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Query { text } => {
            let provider = build_provider(config, cli.max_concurrency);
            let embedding = provider
                .embed_query(&text)
                .await
                .context("Embed query (is Ollama running and the model pulled?)")?;
            println!("{}", serde_json::to_string(&embedding)?);
        }
        Commands::Batch { texts } => {
            let provider = build_provider(config, cli.max_concurrency);
            let embeddings = provider
                .embed_batch(&texts)
                .await
                .context("Embed batch (is Ollama running and the model pulled?)")?;
            println!("{}", serde_json::to_string(&embeddings)?);
        }
    }

    Ok(())
}

fn build_provider(config: OllamaClientConfig, max_concurrency: usize) -> OllamaEmbedding {
    let client = OllamaEmbeddingClient::new(config).with_max_concurrency(max_concurrency);
    info!(endpoint = %client.endpoint(), model = %client.model(), "using ollama embeddings");
    OllamaEmbedding::new(client)
}
