//! CLI parser and config layering.
//!
//! Remote override = CLI flag, else env (`EMBEDDING_BASE_URL`, `EMBEDDING_MODEL`).
//! Persisted config = `--config` JSON file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use embedding::{EmbeddingConfig, EnvEmbeddingConfig};
use ollama_embedding::{DebugLog, EmbeddingOptions, OllamaSettings, PersistedConfig, ResolveOptions};

#[derive(Parser, Debug)]
#[command(name = "ollama-embed")]
#[command(about = "Embed text with an Ollama server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Persisted config JSON (`{"models":{"providers":{"ollama":{..}}}}`).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Model options as a JSON object, forwarded verbatim.
    #[arg(long, global = true)]
    pub options: Option<String>,

    /// Print the resolved client config line even if DEBUG_MEMORY_EMBEDDINGS is off.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Max in-flight requests for `batch` (0 = unbounded).
    #[arg(long, global = true, default_value = "0")]
    pub max_concurrency: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Embed one text and print the vector as JSON.
    Query { text: String },
    /// Embed several texts and print the vectors as a JSON array, in input order.
    Batch {
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Print the resolved client config without calling the service.
    Resolve,
}

/// Parses `--options`; anything but a JSON object is rejected.
pub fn parse_options_json(raw: &str) -> Result<EmbeddingOptions> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("--options must be valid JSON")?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => anyhow::bail!("--options must be a JSON object, got {}", other),
    }
}

/// Layers CLI flags over env settings and loads the persisted config file.
pub fn build_resolve_options(cli: &Cli, env: &EnvEmbeddingConfig) -> Result<ResolveOptions> {
    let options = cli.options.as_deref().map(parse_options_json).transpose()?;

    let remote = OllamaSettings {
        base_url: cli
            .base_url
            .clone()
            .or_else(|| env.base_url().map(str::to_string)),
        model: cli.model.clone().or_else(|| env.model().map(str::to_string)),
        options,
    };

    let config = cli
        .config
        .as_ref()
        .map(PersistedConfig::from_path)
        .transpose()?;

    Ok(ResolveOptions {
        remote: Some(remote),
        config,
        model: None,
    })
}

/// Debug line is on when `--debug` is passed or the env toggle is truthy.
pub fn build_debug_log(cli: &Cli, env: &EnvEmbeddingConfig) -> DebugLog {
    if cli.debug || env.debug() {
        DebugLog::new(true, std::sync::Arc::new(ollama_embedding::TracingSink))
    } else {
        DebugLog::disabled()
    }
}
