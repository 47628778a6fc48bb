// Mon Oct 19 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Cannot inspect binary {}: {reason}", path.display())]
    MetadataUnavailable { path: PathBuf, reason: String },
    #[error("Cannot canonicalize {} (referenced by {}): {source}", path.display(), referenced_by.display())]
    Canonicalization {
        path: PathBuf,
        referenced_by: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot canonicalize entry binary {}: {source}", path.display())]
    EntryBinary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Cannot read config file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Worker pool error: {0}")]
    WorkerPool(String),
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl ResolveError {
    pub fn metadata<P: Into<PathBuf>, S: ToString>(path: P, reason: S) -> Self {
        ResolveError::MetadataUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
