//! Generic base records

use momentum_core::{AppliedPrice, IndicatorParams, StrategyParams};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Momentum(12) on close, current bar
pub fn indicator() -> IndicatorParams {
    IndicatorParams::unbound(AppliedPrice::Close, 12, 0)
}

pub fn strategy() -> StrategyParams {
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
