//! Memory-mapped model files
//!
//! [`MappedModel`] is a zero-copy, read-only view of a model file. The whole
//! byte range is mapped; nothing is copied into heap memory, so even large
//! weight files cost only address space until pages are touched.
//!
//! The mapping performs zero validation of the file contents. Interpreting
//! the bytes is entirely the interpreter backend's problem.

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, Result};

/// Facts about a model file captured at map time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Path the model was mapped from
    pub path: PathBuf,
    /// File size in bytes
    pub file_size: u64,
}

/// Read-only memory mapping of an entire model file.
///
/// Holds the open file descriptor (via the mapping) for its own lifetime.
/// Dropping the `MappedModel` unmaps the region and closes the descriptor.
///
/// # Example
///
/// ```rust,ignore
/// let model = MappedModel::from_path("assets/model.tflite")?;
/// println!("{} bytes mapped", model.len());
/// ```
pub struct MappedModel {
    mmap: Mmap,
    metadata: ModelMetadata,
}

impl MappedModel {
    /// Map a model file read-only.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Io`] if the file cannot be opened or its length read
    /// - [`LoadError::EmptyModel`] if the file is zero bytes (a zero-length
    ///   mapping must never become a usable model)
    /// - [`LoadError::MapFailed`] if the mmap syscall fails
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::io(path, &e))?;

        let file_size = file
            .metadata()
            .map_err(|e| LoadError::io(path, &e))?
            .len();
        if file_size == 0 {
            return Err(LoadError::EmptyModel {
                path: path.to_path_buf(),
            });
        }

        // SAFETY: the mapping is read-only and we never write through it.
        // Truncation of the underlying file while mapped is the usual mmap
        // caveat; bundled model assets are immutable for the process lifetime.
        let mmap = unsafe {
            Mmap::map(&file).map_err(|e| LoadError::MapFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
        };

        Ok(Self {
            mmap,
            metadata: ModelMetadata {
                path: path.to_path_buf(),
                file_size,
            },
        })
    }

    /// Raw mapped bytes, the full file.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.mmap
    }

    /// Mapped length in bytes. Never zero for a constructed `MappedModel`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    /// Always false: zero-length files are refused at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    /// Metadata captured when the file was mapped.
    #[must_use]
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

impl std::fmt::Debug for MappedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedModel")
            .field("path", &self.metadata.path)
            .field("file_size", &self.metadata.file_size)
            .finish()
    }
}
