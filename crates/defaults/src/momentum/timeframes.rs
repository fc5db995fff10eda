//! Symbol-agnostic overrides, one per supported timeframe

use momentum_core::{AppliedPrice, IndicatorOverride, ParameterKey, StrategyOverride, Timeframe};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::builder::RegistryBuilder;

pub fn register(builder: RegistryBuilder) -> RegistryBuilder {
    [
        (Timeframe::M1, m1()),
        (Timeframe::M5, m5()),
        (Timeframe::M15, m15()),
        (Timeframe::M30, m30()),
        (Timeframe::H1, h1()),
        (Timeframe::H4, h4()),
        (Timeframe::H8, h8()),
    ]
    .into_iter()
    .fold(builder, |builder, (timeframe, (indicator, strategy))| {
        builder.defaults(ParameterKey::any(timeframe), indicator, strategy)
    })
}

/// Fields every per-timeframe strategy record pins
pub(super) fn pinned() -> StrategyOverride {
    StrategyOverride {
        lot_size: Some(Decimal::ZERO),
        signal_open_level: Some(Decimal::ZERO),
        signal_open_boost: Some(0),
        signal_close_level: Some(Decimal::ZERO),
        tick_filter_method: Some(1),
        max_spread: Some(0),
        ..Default::default()
    }
}

fn shift_only() -> IndicatorOverride {
    IndicatorOverride {
        shift: Some(0),
        ..Default::default()
    }
}

/// Profit and stop both at method 60, level 6
fn profit_stop_60() -> StrategyOverride {
    StrategyOverride {
        price_profit_method: Some(60),
        price_profit_level: Some(dec!(6)),
        price_stop_method: Some(60),
        price_stop_level: Some(dec!(6)),
        ..pinned()
    }
}

fn m1() -> (IndicatorOverride, StrategyOverride) {
    let indicator = IndicatorOverride {
        applied_price: Some(AppliedPrice::Close),
        period: Some(4),
        shift: Some(0),
    };
    let strategy = StrategyOverride {
        signal_open_method: Some(2),
        signal_close_method: Some(2),
        ..profit_stop_60()
    };
    (indicator, strategy)
}

fn m5() -> (IndicatorOverride, StrategyOverride) {
    let strategy = StrategyOverride {
        signal_open_method: Some(0),
        signal_open_filter: Some(1),
        signal_close_method: Some(0),
        price_stop_method: Some(0),
        price_stop_level: Some(dec!(2)),
        ..pinned()
    };
    (shift_only(), strategy)
}

fn m15() -> (IndicatorOverride, StrategyOverride) {
    let indicator = IndicatorOverride {
        applied_price: Some(AppliedPrice::Close),
        period: Some(12),
        shift: Some(0),
    };
    let strategy = StrategyOverride {
        signal_open_method: Some(2),
        signal_open_filter: Some(32),
        signal_close_method: Some(2),
        ..profit_stop_60()
    };
    (indicator, strategy)
}

/// Same record as M5
fn m30() -> (IndicatorOverride, StrategyOverride) {
    m5()
}

fn h1() -> (IndicatorOverride, StrategyOverride) {
    let strategy = StrategyOverride {
        signal_open_method: Some(2),
        signal_close_method: Some(2),
        ..profit_stop_60()
    };
    (shift_only(), strategy)
}

/// No dedicated H4 record exists; only the bar offset is pinned
fn h4() -> (IndicatorOverride, StrategyOverride) {
    (shift_only(), StrategyOverride::default())
}

/// Profit fields were recorded as `price_limit_*` for H8
fn h8() -> (IndicatorOverride, StrategyOverride) {
    let strategy = StrategyOverride {
        signal_open_method: Some(0),
        signal_open_filter: Some(1),
        signal_close_method: Some(0),
        price_profit_method: Some(0),
        price_profit_level: Some(dec!(2)),
        ..pinned()
    };
    (shift_only(), strategy)
}
