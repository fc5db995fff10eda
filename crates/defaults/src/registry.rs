//! Parameter defaults registry
//!
//! Read-only after [`RegistryBuilder::build`](crate::RegistryBuilder::build);
//! any number of threads may query it concurrently.

use std::collections::BTreeSet;

use log::debug;
use momentum_core::{IndicatorParams, ParameterKey, ParameterSet, StrategyParams, Timeframe};
use serde::{Deserialize, Serialize};

use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::tiers::TierTable;

/// Indicator and strategy defaults resolved for one key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumDefaults {
    pub key: ParameterKey,
    pub indicator: IndicatorParams,
    pub strategy: StrategyParams,
}

/// Per-(timeframe, symbol) defaults with generic → timeframe → symbol layering
#[derive(Debug, Clone)]
pub struct ParameterDefaultsRegistry {
    config: RegistryConfig,
    supported: BTreeSet<Timeframe>,
    indicators: TierTable<IndicatorParams>,
    strategies: TierTable<StrategyParams>,
}

impl ParameterDefaultsRegistry {
    pub(crate) fn from_parts(
        config: RegistryConfig,
        supported: BTreeSet<Timeframe>,
        indicators: TierTable<IndicatorParams>,
        strategies: TierTable<StrategyParams>,
    ) -> Self {
        Self {
            config,
            supported,
            indicators,
            strategies,
        }
    }

    /// Indicator defaults for a timeframe, optionally specialised for a symbol
    pub fn indicator_defaults(
        &self,
        timeframe: Timeframe,
        symbol: Option<&str>,
    ) -> Result<IndicatorParams> {
        let key = self.key(timeframe, symbol)?;
        self.resolve(&self.indicators, &key)
    }

    /// Strategy defaults for a timeframe, optionally specialised for a symbol
    pub fn strategy_defaults(
        &self,
        timeframe: Timeframe,
        symbol: Option<&str>,
    ) -> Result<StrategyParams> {
        let key = self.key(timeframe, symbol)?;
        self.resolve(&self.strategies, &key)
    }

    /// [`indicator_defaults`](Self::indicator_defaults) from an engine token such as `"M15"`
    pub fn indicator_defaults_for(
        &self,
        token: &str,
        symbol: Option<&str>,
    ) -> Result<IndicatorParams> {
        self.indicator_defaults(parse_timeframe(token)?, symbol)
    }

    /// [`strategy_defaults`](Self::strategy_defaults) from an engine token such as `"H1"`
    pub fn strategy_defaults_for(
        &self,
        token: &str,
        symbol: Option<&str>,
    ) -> Result<StrategyParams> {
        self.strategy_defaults(parse_timeframe(token)?, symbol)
    }

    /// Both parameter sets for one key; fails if either fails
    pub fn momentum_defaults(
        &self,
        timeframe: Timeframe,
        symbol: Option<&str>,
    ) -> Result<MomentumDefaults> {
        let key = self.key(timeframe, symbol)?;
        Ok(MomentumDefaults {
            indicator: self.resolve(&self.indicators, &key)?,
            strategy: self.resolve(&self.strategies, &key)?,
            key,
        })
    }

    /// Supported timeframes, shortest first
    pub fn supported_timeframes(&self) -> impl Iterator<Item = Timeframe> + '_ {
        self.supported.iter().copied()
    }

    pub fn supports(&self, timeframe: Timeframe) -> bool {
        self.supported.contains(&timeframe)
    }

    /// Keys with an indicator override
    pub fn indicator_keys(&self) -> Vec<ParameterKey> {
        self.indicators.keys()
    }

    /// Keys with a strategy override
    pub fn strategy_keys(&self) -> Vec<ParameterKey> {
        self.strategies.keys()
    }

    /// Generic indicator base (not bound to a timeframe)
    pub fn indicator_base(&self) -> &IndicatorParams {
        self.indicators.base()
    }

    /// Generic strategy base
    pub fn strategy_base(&self) -> &StrategyParams {
        self.strategies.base()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn key(&self, timeframe: Timeframe, symbol: Option<&str>) -> Result<ParameterKey> {
        if !self.supports(timeframe) {
            return Err(Error::UnsupportedTimeframe(timeframe.to_string()));
        }
        Ok(ParameterKey::new(timeframe, symbol))
    }

    fn resolve<P: ParameterSet>(&self, table: &TierTable<P>, key: &ParameterKey) -> Result<P> {
        let (params, tier) = table.resolve(key)?;
        debug!(
            "[{}] {} defaults for {} resolved from {} tier",
            self.config.strategy_name,
            P::KIND,
            key,
            tier
        );
        Ok(params)
    }
}

fn parse_timeframe(token: &str) -> Result<Timeframe> {
    token
        .parse()
        .map_err(|_| Error::UnsupportedTimeframe(token.to_string()))
}
