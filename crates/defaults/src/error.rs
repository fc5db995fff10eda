//! Registry errors

use momentum_core::ParameterKey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported timeframe: {0}")]
    UnsupportedTimeframe(String),

    #[error("No {kind} defaults configured for {key}")]
    NoDefaultsConfigured { kind: &'static str, key: ParameterKey },

    #[error("Invalid {kind} literal for {key}: {field} {reason}")]
    InvalidLiteralValue {
        kind: &'static str,
        key: ParameterKey,
        field: &'static str,
        reason: String,
    },

    #[error("Duplicate {kind} entry for {key}")]
    DuplicateEntry { kind: &'static str, key: ParameterKey },
}

pub type Result<T> = std::result::Result<T, Error>;
