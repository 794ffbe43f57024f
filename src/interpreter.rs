//! Interpreter boundary
//!
//! The external inference library is a black box behind one trait. The only
//! outward calls the crate makes are "construct an interpreter from a mapped
//! byte buffer" and "release it", and release is just `Drop` on the backend's
//! handle type.
//!
//! [`Interpreter`] couples the backend handle to the memory mapping it was
//! built from: the handle cannot outlive the bytes it points at, on any path,
//! because the wrapper owns both and drops the handle first.

use crate::error::{LoadError, Result};
use crate::mapped::{MappedModel, ModelMetadata};

/// Constructor side of an external inference library.
///
/// Implementations wrap whatever FFI or native API actually builds an
/// interpreter (TFLite, ONNX Runtime, a test double). The buffer passed to
/// [`create_interpreter`](Self::create_interpreter) is the complete mapped
/// model file; the backend performs its own parsing and may reject it.
///
/// # Buffer lifetime contract
///
/// A returned handle may retain raw pointers into `model_data`. Callers of
/// this trait (the loader) guarantee the buffer stays mapped and unmoved for
/// the handle's entire life; implementations must not assume anything beyond
/// that.
pub trait InterpreterBackend {
    /// Opaque interpreter state owned by the external library.
    ///
    /// Release happens through `Drop`. Handles are plain owned values
    /// (typically a newtype over an FFI pointer), never borrows of the
    /// model buffer.
    type Handle: 'static;

    /// Construct an interpreter for the mapped model bytes.
    ///
    /// # Errors
    ///
    /// Returns a backend-specific reason when the library rejects the
    /// buffer (truncated file, wrong format, unsupported ops).
    fn create_interpreter(&self, model_data: &[u8]) -> std::result::Result<Self::Handle, String>;
}

/// A live interpreter plus the mapping that backs it.
///
/// Owns both the backend handle and the [`MappedModel`] it was constructed
/// from. Field order is load-bearing: `handle` is declared before `model`,
/// so on drop the interpreter is released before the bytes unmap.
///
/// `close()` is idempotent; drop after close is a no-op for the handle.
pub struct Interpreter<H> {
    handle: Option<H>,
    model: MappedModel,
}

impl<H> Interpreter<H> {
    /// Couple a freshly constructed backend handle to its backing mapping.
    pub(crate) fn new(handle: H, model: MappedModel) -> Self {
        Self {
            handle: Some(handle),
            model,
        }
    }

    /// Access the backend handle, if not yet released.
    #[must_use]
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// Mutable access to the backend handle, if not yet released.
    pub fn handle_mut(&mut self) -> Option<&mut H> {
        self.handle.as_mut()
    }

    /// True until [`close`](Self::close) is called.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    /// Metadata of the model file backing this interpreter.
    #[must_use]
    pub fn metadata(&self) -> &ModelMetadata {
        self.model.metadata()
    }

    /// Mapped model bytes backing the interpreter.
    #[must_use]
    pub fn model_data(&self) -> &[u8] {
        self.model.data()
    }

    /// Release the backend handle. Safe to call any number of times; only
    /// the first call drops the handle. The mapping stays alive until the
    /// `Interpreter` itself is dropped.
    pub fn close(&mut self) {
        self.handle = None;
    }
}

impl<H> std::fmt::Debug for Interpreter<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("live", &self.handle.is_some())
            .field("model", &self.model)
            .finish()
    }
}

/// Run the backend constructor against a mapped model and take ownership of
/// the mapping on success.
pub(crate) fn construct<B: InterpreterBackend>(
    backend: &B,
    model: MappedModel,
) -> Result<Interpreter<B::Handle>> {
    let handle = backend
        .create_interpreter(model.data())
        .map_err(|reason| LoadError::Backend { reason })?;
    Ok(Interpreter::new(handle, model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;
    use std::io::Write;

    fn mapped_fixture(bytes: &[u8]) -> (tempfile::NamedTempFile, MappedModel) {
        let mut tmp = tempfile::NamedTempFile::new().expect("tempfile");
        tmp.write_all(bytes).expect("write");
        let model = MappedModel::from_path(tmp.path()).expect("map");
        (tmp, model)
    }

    #[test]
    fn test_construct_success() {
        let backend = RecordingBackend::accepting();
        let (_tmp, model) = mapped_fixture(b"weights");
        let interp = construct(&backend, model).expect("construct");
        assert!(interp.is_live());
        assert!(interp.handle().is_some());
        assert_eq!(interp.model_data(), b"weights");
        assert_eq!(backend.created(), 1);
    }

    #[test]
    fn test_construct_rejection_maps_to_backend_error() {
        let backend = RecordingBackend::rejecting("unsupported op");
        let (_tmp, model) = mapped_fixture(b"weights");
        let err = construct(&backend, model).unwrap_err();
        match err {
            LoadError::Backend { reason } => assert_eq!(reason, "unsupported op"),
            other => panic!("expected Backend error, got {other:?}"),
        }
        assert_eq!(backend.created(), 0);
    }

    #[test]
    fn test_close_is_idempotent() {
        let backend = RecordingBackend::accepting();
        let (_tmp, model) = mapped_fixture(b"weights");
        let mut interp = construct(&backend, model).expect("construct");

        interp.close();
        assert!(!interp.is_live());
        assert_eq!(backend.released(), 1);

        interp.close();
        interp.close();
        assert_eq!(backend.released(), 1);
    }

    #[test]
    fn test_drop_after_close_releases_once() {
        let backend = RecordingBackend::accepting();
        let (_tmp, model) = mapped_fixture(b"weights");
        let mut interp = construct(&backend, model).expect("construct");
        interp.close();
        drop(interp);
        assert_eq!(backend.released(), 1);
    }

    #[test]
    fn test_drop_without_close_releases_once() {
        let backend = RecordingBackend::accepting();
        let (_tmp, model) = mapped_fixture(b"weights");
        let interp = construct(&backend, model).expect("construct");
        drop(interp);
        assert_eq!(backend.released(), 1);
    }

    #[test]
    fn test_handle_mut_accessible_while_live() {
        let backend = RecordingBackend::accepting();
        let (_tmp, model) = mapped_fixture(b"weights");
        let mut interp = construct(&backend, model).expect("construct");
        assert!(interp.handle_mut().is_some());
        interp.close();
        assert!(interp.handle_mut().is_none());
    }

    #[test]
    fn test_metadata_survives_close() {
        let backend = RecordingBackend::accepting();
        let (_tmp, model) = mapped_fixture(&[1u8; 64]);
        let mut interp = construct(&backend, model).expect("construct");
        interp.close();
        assert_eq!(interp.metadata().file_size, 64);
    }
}
