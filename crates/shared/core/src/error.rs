use thiserror::Error;

/// Errors raised while converting engine literals into domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown timeframe token: {0}")]
    UnknownTimeframe(String),

    #[error("Applied price code out of range: {0}")]
    InvalidAppliedPrice(i64),
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
