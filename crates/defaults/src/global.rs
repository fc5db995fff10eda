//! Process-wide Momentum registry
//!
//! The host engine calls [`init`] once during startup; afterwards [`get`]
//! hands out the shared instance without locking.

use std::sync::OnceLock;

use crate::error::Result;
use crate::momentum;
use crate::registry::ParameterDefaultsRegistry;

static REGISTRY: OnceLock<Result<ParameterDefaultsRegistry>> = OnceLock::new();

/// Build the compiled-in registry on first call and return it
///
/// Idempotent. A build failure is kept and returned on every later call.
pub fn init() -> Result<&'static ParameterDefaultsRegistry> {
    REGISTRY
        .get_or_init(momentum::registry)
        .as_ref()
        .map_err(|e| e.clone())
}

/// The registry, if [`init`] has succeeded
pub fn get() -> Option<&'static ParameterDefaultsRegistry> {
    REGISTRY.get().and_then(|result| result.as_ref().ok())
}
