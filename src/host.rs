//! Host lifecycle
//!
//! [`ModelHost`] is the application-side owner of a single interpreter. Its
//! lifecycle is deliberately minimal: uninitialized → loaded (or degraded) →
//! released. No retries, no reloading, no background work.
//!
//! A load failure never takes the host down. The error is retained for
//! inspection and the host keeps running with inference disabled.

use crate::assets::AssetDir;
use crate::error::LoadError;
use crate::interpreter::{Interpreter, InterpreterBackend};
use crate::loader::load;

/// Where the host is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// `start()` has not run yet.
    Uninitialized,
    /// A model was loaded and the interpreter is held.
    Loaded,
    /// `start()` ran but loading failed; inference is disabled.
    Degraded,
    /// `stop()` ran; the handle (if any) has been released.
    Released,
}

enum HostState<H> {
    Uninitialized,
    Loaded(Interpreter<H>),
    Degraded(LoadError),
    Released,
}

/// Single-owner host binding a bundled model asset to an interpreter.
///
/// At most one interpreter handle is live per host instance, and it is
/// released exactly once - either by [`stop`](Self::stop) or, failing that,
/// when the host is dropped.
pub struct ModelHost<B: InterpreterBackend> {
    backend: B,
    assets: AssetDir,
    asset_name: String,
    state: HostState<B::Handle>,
}

impl<B: InterpreterBackend> ModelHost<B> {
    /// Create an idle host. Nothing is loaded until [`start`](Self::start).
    pub fn new(backend: B, assets: AssetDir, asset_name: impl Into<String>) -> Self {
        Self {
            backend,
            assets,
            asset_name: asset_name.into(),
            state: HostState::Uninitialized,
        }
    }

    /// Resolve the asset and load the model.
    ///
    /// Runs at most once: calling `start` on an already started (or stopped)
    /// host is a no-op. On load failure the host enters the degraded state
    /// instead of propagating the error; inspect it via
    /// [`load_error`](Self::load_error).
    pub fn start(&mut self) {
        if !matches!(self.state, HostState::Uninitialized) {
            return;
        }
        let outcome = self
            .assets
            .resolve(&self.asset_name)
            .and_then(|path| load(&path, &self.backend));
        self.state = match outcome {
            Ok(interpreter) => HostState::Loaded(interpreter),
            Err(err) => HostState::Degraded(err),
        };
    }

    /// Release the interpreter handle, if one is held. Idempotent: the
    /// handle is released exactly once no matter how many times `stop`
    /// runs, and dropping the host afterwards releases nothing further.
    pub fn stop(&mut self) {
        if let HostState::Loaded(mut interpreter) =
            std::mem::replace(&mut self.state, HostState::Released)
        {
            interpreter.close();
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        match self.state {
            HostState::Uninitialized => LifecycleState::Uninitialized,
            HostState::Loaded(_) => LifecycleState::Loaded,
            HostState::Degraded(_) => LifecycleState::Degraded,
            HostState::Released => LifecycleState::Released,
        }
    }

    /// The live interpreter, or `None` while uninitialized, degraded, or
    /// released.
    #[must_use]
    pub fn interpreter(&self) -> Option<&Interpreter<B::Handle>> {
        match &self.state {
            HostState::Loaded(interpreter) => Some(interpreter),
            _ => None,
        }
    }

    /// The load failure that put the host into the degraded state, if any.
    #[must_use]
    pub fn load_error(&self) -> Option<&LoadError> {
        match &self.state {
            HostState::Degraded(err) => Some(err),
            _ => None,
        }
    }

    /// Name of the bundled asset this host loads.
    #[must_use]
    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }
}

impl<B: InterpreterBackend> std::fmt::Debug for ModelHost<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHost")
            .field("asset_name", &self.asset_name)
            .field("state", &self.state())
            .finish()
    }
}
