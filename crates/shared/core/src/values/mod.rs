use rust_decimal::Decimal;

/// Real-valued signal or price threshold - uses Decimal for precision
pub type Level = Decimal;

/// Order size in lots
pub type LotSize = Decimal;

/// Symbol identifier for a tradeable instrument (e.g. "EURUSD")
pub type Symbol = String;
