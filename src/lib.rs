//! # Cargar
//!
//! Memory-mapped on-device model loading with a pluggable interpreter
//! boundary.
//!
//! Cargar (Spanish: "to load") does exactly one job: given a path to a
//! bundled model file, it maps the full byte range read-only (zero-copy,
//! never duplicating weights into heap memory), hands the mapped view to an
//! externally supplied interpreter constructor, and returns an owned handle
//! that keeps the mapping alive for exactly as long as the interpreter
//! exists.
//!
//! It is not a model-format parser, not an inference runtime, and not a
//! resource manager. It performs zero validation of model contents; the
//! interpreter library behind the [`InterpreterBackend`] trait decides what
//! the bytes mean.
//!
//! ## Example
//!
//! ```rust
//! use cargar::testing::RecordingBackend;
//! use cargar::{AssetDir, LifecycleState, ModelHost};
//!
//! # let dir = tempfile::tempdir().unwrap();
//! # std::fs::write(dir.path().join("model.tflite"), b"weights").unwrap();
//! let mut host = ModelHost::new(
//!     RecordingBackend::accepting(),
//!     AssetDir::new(dir.path()),
//!     "model.tflite",
//! );
//!
//! host.start();
//! assert_eq!(host.state(), LifecycleState::Loaded);
//!
//! host.stop(); // releases the interpreter exactly once
//! assert_eq!(host.state(), LifecycleState::Released);
//! ```
//!
//! ## Failure behavior
//!
//! Every failure is a typed [`LoadError`] - missing file, empty file, mmap
//! failure, and backend rejection are distinct variants. Nothing is logged
//! and swallowed, and a load failure never crashes the host: it continues
//! in a degraded state with inference disabled.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Bundled asset name resolution (AssetManager analog).
pub mod assets;
pub mod error;
/// Host lifecycle: uninitialized → loaded/degraded → released.
pub mod host;
/// The external inference library boundary and the owned interpreter handle.
pub mod interpreter;
/// The stateless load entry point.
pub mod loader;
/// Zero-copy memory mapping of model files.
pub mod mapped;
/// Recording mock backend for exercising the load path without a real
/// inference library.
pub mod testing;

pub use assets::AssetDir;
pub use error::{LoadError, Result};
pub use host::{LifecycleState, ModelHost};
pub use interpreter::{Interpreter, InterpreterBackend};
pub use loader::load;
pub use mapped::{MappedModel, ModelMetadata};
