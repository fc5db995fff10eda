use serde::{Deserialize, Serialize};
use std::fmt;

use super::Timeframe;
use crate::values::Symbol;

/// Wildcard spelling of "any symbol"
pub const ANY_SYMBOL: &str = "*";

/// Lookup key for a parameter set: a timeframe plus an optional symbol
///
/// Symbols are stored upper-cased so `eurusd` and `EURUSD` address the same
/// entry. A missing symbol (or `"*"`) means the symbol-agnostic entry. Every
/// way of building a key, deserialization included, goes through
/// [`ParameterKey::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawKey")]
pub struct ParameterKey {
    timeframe: Timeframe,
    symbol: Option<Symbol>,
}

/// Key as written by a host, before normalization
#[derive(Deserialize)]
struct RawKey {
    timeframe: Timeframe,
    #[serde(default)]
    symbol: Option<String>,
}

impl From<RawKey> for ParameterKey {
    fn from(raw: RawKey) -> Self {
        Self::new(raw.timeframe, raw.symbol.as_deref())
    }
}

impl ParameterKey {
    /// Key for the symbol-agnostic entry of a timeframe
    pub fn any(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            symbol: None,
        }
    }

    /// Key for a symbol-specific entry
    pub fn for_symbol(symbol: &str, timeframe: Timeframe) -> Self {
        Self::new(timeframe, Some(symbol))
    }

    /// Build a key, normalizing the symbol
    pub fn new(timeframe: Timeframe, symbol: Option<&str>) -> Self {
        Self {
            timeframe,
            symbol: normalize_symbol(symbol),
        }
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Upper-cased symbol, `None` for the symbol-agnostic key
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// True for a symbol-agnostic key
    pub fn is_any(&self) -> bool {
        self.symbol.is_none()
    }

    /// The symbol-agnostic key for the same timeframe
    pub fn as_any(&self) -> Self {
        Self::any(self.timeframe)
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{}@{}", symbol, self.timeframe),
            None => write!(f, "{}@{}", ANY_SYMBOL, self.timeframe),
        }
    }
}

fn normalize_symbol(symbol: Option<&str>) -> Option<Symbol> {
    let symbol = symbol?.trim();
    if symbol.is_empty() || symbol == ANY_SYMBOL {
        None
    } else {
        Some(symbol.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_normalization() {
        let key = ParameterKey::for_symbol(" eurusd ", Timeframe::M5);
        assert_eq!(key.symbol(), Some("EURUSD"));
        assert_eq!(key.timeframe(), Timeframe::M5);
        assert_eq!(key, ParameterKey::for_symbol("EURUSD", Timeframe::M5));
    }

    #[test]
    fn test_wildcards_mean_any() {
        assert!(ParameterKey::new(Timeframe::H1, Some("*")).is_any());
        assert!(ParameterKey::new(Timeframe::H1, Some("")).is_any());
        assert!(ParameterKey::new(Timeframe::H1, None).is_any());
    }

    #[test]
    fn test_display() {
        assert_eq!(ParameterKey::any(Timeframe::H1).to_string(), "*@H1");
        assert_eq!(
            ParameterKey::for_symbol("EURUSD", Timeframe::M15).to_string(),
            "EURUSD@M15"
        );
        assert_eq!(
            ParameterKey::for_symbol("EURUSD", Timeframe::M15).as_any(),
            ParameterKey::any(Timeframe::M15)
        );
    }

    #[test]
    fn test_deserialized_keys_are_normalized() {
        let key: ParameterKey =
            serde_json::from_str(r#"{"timeframe":"M5","symbol":"gbpusd"}"#).unwrap();
        assert_eq!(key, ParameterKey::for_symbol("GBPUSD", Timeframe::M5));

        let key: ParameterKey = serde_json::from_str(r#"{"timeframe":"M5","symbol":"*"}"#).unwrap();
        assert!(key.is_any());

        let key: ParameterKey = serde_json::from_str(r#"{"timeframe":"H1"}"#).unwrap();
        assert_eq!(key, ParameterKey::any(Timeframe::H1));
    }

    #[test]
    fn test_serialized_key_reads_back() {
        let key = ParameterKey::for_symbol("eurusd", Timeframe::H4);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"{"timeframe":"H4","symbol":"EURUSD"}"#);
        assert_eq!(serde_json::from_str::<ParameterKey>(&json).unwrap(), key);
    }
}
