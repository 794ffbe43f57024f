//! Load error taxonomy
//!
//! Every failure mode of the load path gets its own variant so callers can
//! distinguish "no model on disk" from "mapping failed" from "the interpreter
//! library rejected the buffer". Nothing here is logged or swallowed; the
//! caller decides how to react.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while resolving, mapping, or constructing a model.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be opened or read (missing, permission denied, not a
    /// regular file).
    #[error("I/O error for {path}: {reason}")]
    Io {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying OS error text
        reason: String,
    },

    /// The model file exists but is zero bytes long. Mapping a zero-length
    /// range must not produce a usable handle, so this is refused up front.
    #[error("model file {path} is empty")]
    EmptyModel {
        /// Path of the empty file
        path: PathBuf,
    },

    /// The mmap syscall itself failed.
    #[error("failed to map {path}: {reason}")]
    MapFailed {
        /// Path that failed to map
        path: PathBuf,
        /// Underlying OS error text
        reason: String,
    },

    /// The external interpreter constructor rejected the mapped buffer.
    #[error("interpreter backend rejected model: {reason}")]
    Backend {
        /// Backend-provided rejection reason
        reason: String,
    },

    /// Asset name did not resolve to an existing file under the asset root.
    #[error("asset {name:?} not found under {root}")]
    AssetNotFound {
        /// Requested asset name
        name: String,
        /// Asset root directory
        root: PathBuf,
    },

    /// Asset name is empty, absolute, or escapes the asset root.
    #[error("invalid asset name {name:?}")]
    InvalidAssetName {
        /// Offending asset name
        name: String,
    },
}

impl LoadError {
    /// Build an [`LoadError::Io`] from a path and a `std::io::Error`.
    pub(crate) fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LoadError>;
