//! Flat-file persistence for the developer collection.
//!
//! A single JSON file is the source of truth. It is always read and rewritten
//! in full.

mod file_store;

pub use file_store::*;

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the durable store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {path:?} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}
