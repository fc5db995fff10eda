//! Symbol-specific overrides

use momentum_core::{AppliedPrice, IndicatorOverride, ParameterKey, StrategyOverride, Timeframe};
use rust_decimal_macros::dec;

use super::timeframes::pinned;
use crate::builder::RegistryBuilder;
use crate::legacy::LegacyMomentumSet;

pub fn register(builder: RegistryBuilder) -> RegistryBuilder {
    let builder = builder.defaults(
        ParameterKey::for_symbol("EURUSD", Timeframe::M1),
        eurusd_m1_indicator(),
        eurusd_m1(),
    );
    legacy_sets()
        .iter()
        .fold(builder, |builder, set| builder.migrate(set))
}

/// The symbol's own indicator inputs, kept even where they match the timeframe tier
fn eurusd_m1_indicator() -> IndicatorOverride {
    IndicatorOverride {
        applied_price: Some(AppliedPrice::Close),
        period: Some(4),
        shift: Some(0),
    }
}

/// Inverted open signal with a tight stop
fn eurusd_m1() -> StrategyOverride {
    StrategyOverride {
        signal_open_method: Some(-1),
        signal_open_filter: Some(1),
        signal_close_method: Some(0),
        price_stop_method: Some(0),
        price_stop_level: Some(dec!(1)),
        ..pinned()
    }
}

/// Sets still written in the legacy `Momentum_*` schema
pub fn legacy_sets() -> Vec<LegacyMomentumSet> {
    vec![
        LegacyMomentumSet {
            symbol: "EURUSD".to_string(),
            tf: Timeframe::H4,
            period: 2,
            applied_price: 3,
            shift: 0,
            trailing_stop_method: 6,
            trailing_profit_method: 11,
            signal_open_level: dec!(36),
            signal_base_method: 0,
            signal_open_method1: 1,
            signal_open_method2: 0,
            signal_close_level: dec!(36),
            signal_close_method1: 1,
            signal_close_method2: 0,
            max_spread: 10,
        },
        LegacyMomentumSet {
            symbol: "EURUSD".to_string(),
            tf: Timeframe::M5,
            period: 2,
            applied_price: 3,
            shift: 0,
            trailing_stop_method: 6,
            trailing_profit_method: 11,
            signal_open_level: dec!(36),
            signal_base_method: -61,
            signal_open_method1: 1,
            signal_open_method2: 0,
            signal_close_level: dec!(36),
            signal_close_method1: 1,
            signal_close_method2: 0,
            max_spread: 3,
        },
    ]
}
