//! Parameter sets and their partial override records
//!
//! A parameter set defines every field. An override record carries only the
//! fields one tier wants to change; overlaying it replaces exactly those
//! fields and leaves the rest untouched.

mod indicator;
mod strategy;

pub use indicator::{IndicatorOverride, IndicatorParams};
pub use strategy::{StrategyOverride, StrategyParams};

use std::fmt;

use crate::entities::Timeframe;

/// A field whose value breaks a parameter-set invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub reason: String,
}

impl Violation {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// A complete parameter set that can be layered with override records
pub trait ParameterSet: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Partial record applied on top of a complete set
    type Override: Clone + fmt::Debug + Default + PartialEq + Send + Sync + 'static;

    /// Short name for logs and errors ("indicator", "strategy")
    const KIND: &'static str;

    /// Replace every field the override sets
    fn overlay(&mut self, layer: &Self::Override);

    /// Attach the resolved timeframe, for sets that carry one
    fn bind(&mut self, _timeframe: Timeframe) {}

    /// Check the set's invariants
    fn validate(&self) -> Result<(), Violation>;
}
