//! Errors surfaced by the `landing` binary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum LandingError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialise manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("{count} call-to-action link(s) still inert (strict mode)")]
    InertLinks { count: usize },
}
