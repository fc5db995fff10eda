use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

/// Price component an indicator is computed from
///
/// Numeric codes follow the engine's enumeration (CLOSE = 1 ... WEIGHTED = 7).
/// Sets written in the legacy schema use the zero-based numbering instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppliedPrice {
    Close,
    Open,
    High,
    Low,
    /// (high + low) / 2
    Median,
    /// (high + low + close) / 3
    Typical,
    /// (high + low + 2 * close) / 4
    Weighted,
}

impl AppliedPrice {
    /// Engine code for this price component
    pub fn code(&self) -> u8 {
        match self {
            AppliedPrice::Close => 1,
            AppliedPrice::Open => 2,
            AppliedPrice::High => 3,
            AppliedPrice::Low => 4,
            AppliedPrice::Median => 5,
            AppliedPrice::Typical => 6,
            AppliedPrice::Weighted => 7,
        }
    }

    /// Decode an engine code
    pub fn from_code(code: i64) -> ParseResult<Self> {
        match code {
            1 => Ok(AppliedPrice::Close),
            2 => Ok(AppliedPrice::Open),
            3 => Ok(AppliedPrice::High),
            4 => Ok(AppliedPrice::Low),
            5 => Ok(AppliedPrice::Median),
            6 => Ok(AppliedPrice::Typical),
            7 => Ok(AppliedPrice::Weighted),
            other => Err(ParseError::InvalidAppliedPrice(other)),
        }
    }
}

impl AppliedPrice {
    /// Decode a code from the legacy schema, which numbers from zero
    /// (CLOSE = 0 ... WEIGHTED = 6)
    pub fn from_legacy_code(code: i64) -> ParseResult<Self> {
        match code {
            0..=6 => AppliedPrice::from_code(code + 1),
            other => Err(ParseError::InvalidAppliedPrice(other)),
        }
    }
}

impl TryFrom<i64> for AppliedPrice {
    type Error = ParseError;

    fn try_from(code: i64) -> ParseResult<Self> {
        AppliedPrice::from_code(code)
    }
}
