//! Momentum Parameter Defaults
//!
//! Compiled-in default parameters for the Momentum strategy, keyed by
//! timeframe and optionally by symbol:
//!
//! - **Registry**: read-only lookup of indicator and strategy defaults
//! - **Layering**: generic base → timeframe override → symbol override,
//!   merged field by field
//! - **Builder**: registration plus build-time validation of every literal
//! - **Legacy adapter**: migrates `Momentum_*` parameter sets
//! - **Global**: one process-wide instance, initialised explicitly
//!
//! ## Architecture
//!
//! ```text
//! momentum::base ───────┐
//! momentum::timeframes ─┼──► RegistryBuilder ──build()──► ParameterDefaultsRegistry
//! momentum::symbols ────┘          ▲                               │
//!        │                         │                               ▼
//!        └── LegacyMomentumSet ────┘                   indicator_defaults(tf, symbol)
//!                                                      strategy_defaults(tf, symbol)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use momentum_core::Timeframe;
//!
//! let registry = momentum_defaults::global::init()?;
//! let indicator = registry.indicator_defaults(Timeframe::M15, None)?;
//! let strategy = registry.strategy_defaults(Timeframe::M5, Some("EURUSD"))?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod global;
pub mod legacy;
pub mod momentum;
pub mod registry;
pub mod tiers;

// Re-export main types
pub use builder::RegistryBuilder;
pub use config::RegistryConfig;
pub use error::{Error, Result};
pub use legacy::{LegacyMomentumSet, MigratedSet};
pub use registry::{MomentumDefaults, ParameterDefaultsRegistry};
pub use tiers::{Tier, TierTable};
