//! Model loading
//!
//! One stateless free function: open the file, map the whole byte range
//! read-only, hand the bytes to the interpreter backend, and transfer
//! ownership of the mapping into the returned handle. No format validation,
//! no retries, no process-wide state.
//!
//! Loading runs synchronously on the calling thread; large models block it
//! for the duration of the map-and-construct sequence.

use std::path::Path;

use crate::error::Result;
use crate::interpreter::{construct, Interpreter, InterpreterBackend};
use crate::mapped::MappedModel;

/// Load a model file and construct an interpreter for it.
///
/// The mapping is zero-copy: model bytes are never duplicated into heap
/// memory. On success the returned [`Interpreter`] owns the mapping, so the
/// buffer stays valid for exactly as long as the handle exists - including
/// every early-return failure path, where the mapping is dropped before
/// this function returns.
///
/// # Errors
///
/// - [`LoadError::Io`](crate::LoadError::Io) - file missing or unreadable
/// - [`LoadError::EmptyModel`](crate::LoadError::EmptyModel) - zero-length file
/// - [`LoadError::MapFailed`](crate::LoadError::MapFailed) - mmap failure
/// - [`LoadError::Backend`](crate::LoadError::Backend) - the interpreter
///   constructor rejected the buffer
///
/// # Example
///
/// ```rust,ignore
/// let backend = TfLiteBackend::new();
/// let interpreter = cargar::load("assets/model.tflite", &backend)?;
/// assert!(interpreter.is_live());
/// ```
pub fn load<B: InterpreterBackend, P: AsRef<Path>>(
    path: P,
    backend: &B,
) -> Result<Interpreter<B::Handle>> {
    let model = MappedModel::from_path(path)?;
    construct(backend, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::testing::RecordingBackend;
    use std::io::Write;

    fn model_file(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().expect("tempfile");
        tmp.write_all(bytes).expect("write");
        tmp
    }

    #[test]
    fn test_load_valid_file_returns_live_handle() {
        let tmp = model_file(b"TFL3 payload");
        let backend = RecordingBackend::accepting();
        let interp = load(tmp.path(), &backend).expect("load");
        assert!(interp.is_live());
        assert_eq!(interp.metadata().file_size, 12);
        assert_eq!(backend.created(), 1);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let backend = RecordingBackend::accepting();
        let err = load("/no/such/model.tflite", &backend).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(backend.created(), 0);
    }

    #[test]
    fn test_load_empty_file_refused_before_backend() {
        let tmp = tempfile::NamedTempFile::new().expect("tempfile");
        let backend = RecordingBackend::accepting();
        let err = load(tmp.path(), &backend).unwrap_err();
        assert!(matches!(err, LoadError::EmptyModel { .. }));
        assert_eq!(backend.created(), 0);
    }

    #[test]
    fn test_load_backend_rejection_surfaces_reason() {
        let tmp = model_file(b"not a flatbuffer");
        let backend = RecordingBackend::rejecting("magic mismatch");
        let err = load(tmp.path(), &backend).unwrap_err();
        match err {
            LoadError::Backend { reason } => assert_eq!(reason, "magic mismatch"),
            other => panic!("expected Backend, got {other:?}"),
        }
    }

    #[test]
    fn test_load_passes_full_byte_range_to_backend() {
        let payload: Vec<u8> = (0..=255u8).collect();
        let tmp = model_file(&payload);
        let backend = RecordingBackend::accepting();
        let interp = load(tmp.path(), &backend).expect("load");
        assert_eq!(interp.handle().expect("live").model_len, 256);
        assert_eq!(interp.model_data(), payload.as_slice());
    }
}
