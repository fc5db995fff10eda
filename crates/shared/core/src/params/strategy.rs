use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ParameterSet, Violation};
use crate::values::{Level, LotSize};

/// Momentum strategy parameters consumed by the trading engine
///
/// Method fields are algorithm selectors. Negative selectors are valid and
/// mean "inverted" or "disabled" to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrategyParams {
    /// Fixed lot size (0 = engine sizes the order)
    pub lot_size: LotSize,
    pub signal_open_method: i32,
    pub signal_open_filter: i32,
    pub signal_open_level: Level,
    pub signal_open_boost: i32,
    pub signal_close_method: i32,
    pub signal_close_level: Level,
    /// Take-profit method and level
    pub price_profit_method: i32,
    pub price_profit_level: Level,
    /// Stop-loss method and level
    pub price_stop_method: i32,
    pub price_stop_level: Level,
    pub tick_filter_method: i32,
    /// Maximum spread in pips (0 = no limit)
    pub max_spread: u32,
}

impl ParameterSet for StrategyParams {
    type Override = StrategyOverride;

    const KIND: &'static str = "strategy";

    fn overlay(&mut self, layer: &StrategyOverride) {
        if let Some(lot_size) = layer.lot_size {
            self.lot_size = lot_size;
        }
        if let Some(method) = layer.signal_open_method {
            self.signal_open_method = method;
        }
        if let Some(filter) = layer.signal_open_filter {
            self.signal_open_filter = filter;
        }
        if let Some(level) = layer.signal_open_level {
            self.signal_open_level = level;
        }
        if let Some(boost) = layer.signal_open_boost {
            self.signal_open_boost = boost;
        }
        if let Some(method) = layer.signal_close_method {
            self.signal_close_method = method;
        }
        if let Some(level) = layer.signal_close_level {
            self.signal_close_level = level;
        }
        if let Some(method) = layer.price_profit_method {
            self.price_profit_method = method;
        }
        if let Some(level) = layer.price_profit_level {
            self.price_profit_level = level;
        }
        if let Some(method) = layer.price_stop_method {
            self.price_stop_method = method;
        }
        if let Some(level) = layer.price_stop_level {
            self.price_stop_level = level;
        }
        if let Some(method) = layer.tick_filter_method {
            self.tick_filter_method = method;
        }
        if let Some(max_spread) = layer.max_spread {
            self.max_spread = max_spread;
        }
    }

    fn validate(&self) -> Result<(), Violation> {
        if self.lot_size < Decimal::ZERO {
            return Err(Violation::new(
                "lot_size",
                format!("must not be negative (got {})", self.lot_size),
            ));
        }
        Ok(())
    }
}

/// Fields one tier replaces in a [`StrategyParams`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_size: Option<LotSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_open_method: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_open_filter: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_open_level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_open_boost: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_close_method: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_close_level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_profit_method: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_profit_level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_stop_method: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_stop_level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_filter_method: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_spread: Option<u32>,
}

impl StrategyOverride {
    /// True if the override changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base() -> StrategyParams {
        StrategyParams {
            lot_size: Decimal::ZERO,
            signal_open_method: 0,
            signal_open_filter: 1,
            signal_open_level: Decimal::ZERO,
            signal_open_boost: 0,
            signal_close_method: 0,
            signal_close_level: Decimal::ZERO,
            price_profit_method: 60,
            price_profit_level: dec!(6),
            price_stop_method: 60,
            price_stop_level: dec!(6),
            tick_filter_method: 1,
            max_spread: 0,
        }
    }

    #[test]
    fn test_spread_only_override_keeps_other_fields() {
        let mut params = base();
        params.overlay(&StrategyOverride {
            max_spread: Some(3),
            ..Default::default()
        });

        assert_eq!(params.max_spread, 3);
        assert_eq!(
            StrategyParams {
                max_spread: 0,
                ..params.clone()
            },
            base()
        );
    }

    #[test]
    fn test_negative_methods_are_valid() {
        let mut params = base();
        params.overlay(&StrategyOverride {
            signal_open_method: Some(-1),
            ..Default::default()
        });
        assert_eq!(params.signal_open_method, -1);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_negative_lot_size_is_rejected() {
        let mut params = base();
        params.lot_size = dec!(-0.1);
        let violation = params.validate().unwrap_err();
        assert_eq!(violation.field, "lot_size");
    }
}
