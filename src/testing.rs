//! Test doubles for the interpreter boundary
//!
//! [`RecordingBackend`] stands in for a real inference library: it counts
//! constructions and releases and can be configured to reject every buffer,
//! which is enough to exercise the whole load/host lifecycle without linking
//! an actual interpreter.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::interpreter::InterpreterBackend;

/// Mock backend that records construction and release counts.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    created: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
    reject_with: Option<String>,
}

impl RecordingBackend {
    /// Backend that accepts every non-empty buffer.
    #[must_use]
    pub fn accepting() -> Self {
        Self {
            created: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicUsize::new(0)),
            reject_with: None,
        }
    }

    /// Backend that rejects every buffer with the given reason.
    #[must_use]
    pub fn rejecting(reason: &str) -> Self {
        Self {
            created: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicUsize::new(0)),
            reject_with: Some(reason.to_string()),
        }
    }

    /// Number of interpreters successfully constructed.
    #[must_use]
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Number of handles released (dropped).
    #[must_use]
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

/// Handle produced by [`RecordingBackend`]; bumps the release counter on drop.
#[derive(Debug)]
pub struct RecordingHandle {
    /// Length of the model buffer the handle was built from.
    pub model_len: usize,
    released: Arc<AtomicUsize>,
}

impl Drop for RecordingHandle {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl InterpreterBackend for RecordingBackend {
    type Handle = RecordingHandle;

    fn create_interpreter(&self, model_data: &[u8]) -> Result<Self::Handle, String> {
        if let Some(reason) = &self.reject_with {
            return Err(reason.clone());
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(RecordingHandle {
            model_len: model_data.len(),
            released: Arc::clone(&self.released),
        })
    }
}
