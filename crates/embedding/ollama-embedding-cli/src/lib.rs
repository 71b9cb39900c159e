//! # ollama-embedding-cli
//!
//! Argument parsing and config layering for the `ollama-embed` binary.

pub mod cli;

pub use cli::{build_debug_log, build_resolve_options, parse_options_json, Cli, Commands};
