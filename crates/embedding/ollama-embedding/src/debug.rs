//! Opt-in diagnostics for embedding configuration.
//!
//! The debug flag and the sink are passed in by the caller instead of being read from
//! process-wide state, so two providers in one process can log differently.

use std::env;
use std::fmt;
use std::sync::Arc;

use embedding::{is_truthy_env_value, DEBUG_EMBEDDINGS_ENV};
use serde::Serialize;

/// Destination for raw debug lines.
pub trait DebugSink: Send + Sync {
    fn raw(&self, line: &str);
}

/// Forwards each line to `tracing` under the `memory::embeddings` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn raw(&self, line: &str) {
        tracing::info!(target: "memory::embeddings", "{}", line);
    }
}

/// Debug flag plus the sink lines go to when it is on.
#[derive(Clone)]
pub struct DebugLog {
    enabled: bool,
    sink: Arc<dyn DebugSink>,
}

impl fmt::Debug for DebugLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugLog")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::disabled()
    }
}

impl DebugLog {
    pub fn new(enabled: bool, sink: Arc<dyn DebugSink>) -> Self {
        Self { enabled, sink }
    }

    pub fn disabled() -> Self {
        Self::new(false, Arc::new(TracingSink))
    }

    /// Enabled when `DEBUG_MEMORY_EMBEDDINGS` is truthy; lines go to `tracing`.
    pub fn from_env() -> Self {
        let enabled = is_truthy_env_value(env::var(DEBUG_EMBEDDINGS_ENV).ok().as_deref());
        Self::new(enabled, Arc::new(TracingSink))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emits `message`, followed by a space and `meta` as JSON when given.
    pub fn log<T: Serialize + ?Sized>(&self, message: &str, meta: Option<&T>) {
        if !self.enabled {
            return;
        }
        let line = match meta.map(serde_json::to_string) {
            Some(Ok(json)) => format!("{message} {json}"),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "debug metadata is not serializable");
                message.to_string()
            }
            None => message.to_string(),
        };
        self.sink.raw(&line);
    }
}
