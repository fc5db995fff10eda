//! Adapter for the legacy `Momentum_*` parameter schema
//!
//! Older parameter sets carried one flat record per (symbol, timeframe) with
//! `Momentum_`-prefixed names. They are migrated into the canonical override
//! records:
//!
//! | Legacy field                    | Canonical field        |
//! |---------------------------------|------------------------|
//! | `Momentum_Period`               | `period`               |
//! | `Momentum_Applied_Price`        | `applied_price`        |
//! | `Momentum_Shift`                | `shift`                |
//! | `Momentum_SignalOpenLevel`      | `signal_open_level`    |
//! | `Momentum_SignalOpenMethod1`    | `signal_open_method`   |
//! | `Momentum_SignalCloseLevel`     | `signal_close_level`   |
//! | `Momentum_SignalCloseMethod1`   | `signal_close_method`  |
//! | `Momentum_TrailingProfitMethod` | `price_profit_method`  |
//! | `Momentum_TrailingStopMethod`   | `price_stop_method`    |
//! | `Momentum_MaxSpread`            | `max_spread`           |
//!
//! `Momentum_SignalBaseMethod` and the `*Method2` selectors have no canonical
//! counterpart and are dropped. `Momentum_Applied_Price` uses the zero-based
//! legacy numbering (CLOSE = 0).
//!
//! Levels are decimals in the legacy files (`0.5` is a valid open level), so
//! they are read straight into [`Level`].

use log::warn;
use momentum_core::{
    AppliedPrice, IndicatorOverride, Level, ParameterKey, StrategyOverride, Symbol, Timeframe,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A parameter set in the legacy schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyMomentumSet {
    pub symbol: Symbol,
    pub tf: Timeframe,
    #[serde(rename = "Momentum_Period")]
    pub period: i64,
    #[serde(rename = "Momentum_Applied_Price")]
    pub applied_price: i64,
    #[serde(rename = "Momentum_Shift")]
    pub shift: i64,
    #[serde(rename = "Momentum_TrailingStopMethod")]
    pub trailing_stop_method: i32,
    #[serde(rename = "Momentum_TrailingProfitMethod")]
    pub trailing_profit_method: i32,
    #[serde(rename = "Momentum_SignalOpenLevel")]
    pub signal_open_level: Level,
    #[serde(rename = "Momentum_SignalBaseMethod", default)]
    pub signal_base_method: i32,
    #[serde(rename = "Momentum_SignalOpenMethod1")]
    pub signal_open_method1: i32,
    #[serde(rename = "Momentum_SignalOpenMethod2", default)]
    pub signal_open_method2: i32,
    #[serde(rename = "Momentum_SignalCloseLevel")]
    pub signal_close_level: Level,
    #[serde(rename = "Momentum_SignalCloseMethod1")]
    pub signal_close_method1: i32,
    #[serde(rename = "Momentum_SignalCloseMethod2", default)]
    pub signal_close_method2: i32,
    #[serde(rename = "Momentum_MaxSpread")]
    pub max_spread: i64,
}

/// Canonical overrides produced from one legacy set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedSet {
    pub key: ParameterKey,
    pub indicator: IndicatorOverride,
    pub strategy: StrategyOverride,
}

impl LegacyMomentumSet {
    /// Key this set is registered under
    pub fn key(&self) -> ParameterKey {
        ParameterKey::new(self.tf, Some(&self.symbol))
    }

    /// Selectors set to a non-zero value that migration discards
    pub fn dropped_selectors(&self) -> Vec<(&'static str, i32)> {
        [
            ("Momentum_SignalBaseMethod", self.signal_base_method),
            ("Momentum_SignalOpenMethod2", self.signal_open_method2),
            ("Momentum_SignalCloseMethod2", self.signal_close_method2),
        ]
        .into_iter()
        .filter(|(_, value)| *value != 0)
        .collect()
    }

    /// Map the set onto canonical override records
    pub fn to_overrides(&self) -> Result<MigratedSet> {
        let key = self.key();
        let invalid = |field: &'static str, reason: String| Error::InvalidLiteralValue {
            kind: "legacy",
            key: key.clone(),
            field,
            reason,
        };

        let applied_price = AppliedPrice::from_legacy_code(self.applied_price)
            .map_err(|e| invalid("Momentum_Applied_Price", e.to_string()))?;
        let period = u32::try_from(self.period)
            .map_err(|_| invalid("Momentum_Period", format!("out of range: {}", self.period)))?;
        let shift = u32::try_from(self.shift)
            .map_err(|_| invalid("Momentum_Shift", format!("out of range: {}", self.shift)))?;
        let max_spread = u32::try_from(self.max_spread).map_err(|_| {
            invalid("Momentum_MaxSpread", format!("out of range: {}", self.max_spread))
        })?;

        for (field, value) in self.dropped_selectors() {
            warn!("[Legacy] {}: dropping {}={} (no canonical field)", key, field, value);
        }

        Ok(MigratedSet {
            indicator: IndicatorOverride {
                applied_price: Some(applied_price),
                period: Some(period),
                shift: Some(shift),
            },
            strategy: StrategyOverride {
                signal_open_method: Some(self.signal_open_method1),
                signal_open_level: Some(self.signal_open_level),
                signal_close_method: Some(self.signal_close_method1),
                signal_close_level: Some(self.signal_close_level),
                price_profit_method: Some(self.trailing_profit_method),
                price_stop_method: Some(self.trailing_stop_method),
                max_spread: Some(max_spread),
                ..Default::default()
            },
            key,
        })
    }
}
