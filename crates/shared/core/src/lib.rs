//! Momentum Core Domain
//!
//! Pure domain types for Momentum parameter defaults.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod params;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{ANY_SYMBOL, AppliedPrice, ParameterKey, Timeframe};
pub use error::{ParseError, ParseResult};
pub use params::{
    IndicatorOverride, IndicatorParams, ParameterSet, StrategyOverride, StrategyParams, Violation,
};
pub use values::{Level, LotSize, Symbol};
