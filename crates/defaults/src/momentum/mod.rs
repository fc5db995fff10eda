//! Compiled-in Momentum defaults
//!
//! - [`base`]: generic records defining every field
//! - [`timeframes`]: symbol-agnostic per-timeframe overrides
//! - [`symbols`]: per-(symbol, timeframe) overrides, including sets migrated
//!   from the legacy schema

pub mod base;
pub mod symbols;
pub mod timeframes;

use crate::builder::RegistryBuilder;
use crate::config::RegistryConfig;
use crate::error::Result;
use crate::registry::ParameterDefaultsRegistry;

/// Builder pre-loaded with every compiled-in Momentum entry
pub fn builder() -> RegistryBuilder {
    let builder = RegistryBuilder::new(
        RegistryConfig::default(),
        base::indicator(),
        base::strategy(),
    );
    let builder = timeframes::register(builder);
    symbols::register(builder)
}

/// Build the compiled-in Momentum registry
pub fn registry() -> Result<ParameterDefaultsRegistry> {
    builder().build()
}
