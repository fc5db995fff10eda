//! Registry construction and build-time validation

use std::collections::BTreeSet;

use log::{debug, info};
use momentum_core::{
    IndicatorOverride, IndicatorParams, ParameterKey, ParameterSet, StrategyOverride,
    StrategyParams, Timeframe,
};

use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::legacy::LegacyMomentumSet;
use crate::registry::ParameterDefaultsRegistry;
use crate::tiers::TierTable;

/// Collects base records and overrides, then validates them into a registry
///
/// Entries are only checked in [`build`](Self::build), so registration can be
/// chained freely.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    config: RegistryConfig,
    indicator_base: IndicatorParams,
    strategy_base: StrategyParams,
    indicators: Vec<(ParameterKey, IndicatorOverride)>,
    strategies: Vec<(ParameterKey, StrategyOverride)>,
    errors: Vec<Error>,
}

impl RegistryBuilder {
    pub fn new(
        config: RegistryConfig,
        indicator_base: IndicatorParams,
        strategy_base: StrategyParams,
    ) -> Self {
        Self {
            config,
            indicator_base,
            strategy_base,
            indicators: Vec::new(),
            strategies: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Register an indicator override
    pub fn indicator(mut self, key: ParameterKey, layer: IndicatorOverride) -> Self {
        self.indicators.push((key, layer));
        self
    }

    /// Register a strategy override
    pub fn strategy(mut self, key: ParameterKey, layer: StrategyOverride) -> Self {
        self.strategies.push((key, layer));
        self
    }

    /// Register both overrides for one key
    pub fn defaults(
        self,
        key: ParameterKey,
        indicator: IndicatorOverride,
        strategy: StrategyOverride,
    ) -> Self {
        self.indicator(key.clone(), indicator).strategy(key, strategy)
    }

    /// Register a set written in the legacy `Momentum_*` schema
    pub fn migrate(mut self, legacy: &LegacyMomentumSet) -> Self {
        match legacy.to_overrides() {
            Ok(migrated) => self.defaults(migrated.key, migrated.indicator, migrated.strategy),
            Err(e) => {
                self.errors.push(e);
                self
            }
        }
    }

    /// Validate every entry and freeze the registry
    pub fn build(self) -> Result<ParameterDefaultsRegistry> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err);
        }

        let mut supported = BTreeSet::new();
        for timeframe in &self.config.supported_timeframes {
            if timeframe.is_current() {
                return Err(Error::UnsupportedTimeframe(timeframe.to_string()));
            }
            supported.insert(*timeframe);
        }

        let name = &self.config.strategy_name;
        let indicators = fill(name, self.indicator_base, self.indicators, &supported)?;
        let strategies = fill(name, self.strategy_base, self.strategies, &supported)?;
        validate(&indicators, &supported)?;
        validate(&strategies, &supported)?;

        info!(
            "[{}] Defaults registry built: {} indicator entries, {} strategy entries, timeframes [{}]",
            name,
            indicators.len(),
            strategies.len(),
            supported
                .iter()
                .map(Timeframe::token)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(ParameterDefaultsRegistry::from_parts(
            self.config,
            supported,
            indicators,
            strategies,
        ))
    }
}

fn fill<P: ParameterSet>(
    name: &str,
    base: P,
    entries: Vec<(ParameterKey, P::Override)>,
    supported: &BTreeSet<Timeframe>,
) -> Result<TierTable<P>> {
    let mut table = TierTable::new(base);
    for (key, layer) in entries {
        if !supported.contains(&key.timeframe()) {
            return Err(Error::UnsupportedTimeframe(key.timeframe().to_string()));
        }
        debug!("[{}] Registering {} override for {}: {:?}", name, P::KIND, key, layer);
        table.insert(key, layer)?;
    }
    Ok(table)
}

/// Resolve and check every registered key plus the bare timeframe layer of
/// each supported timeframe
fn validate<P: ParameterSet>(table: &TierTable<P>, supported: &BTreeSet<Timeframe>) -> Result<()> {
    let keys = supported
        .iter()
        .map(|tf| ParameterKey::any(*tf))
        .chain(table.keys());

    for key in keys {
        let params = match table.resolve(&key) {
            Ok((params, _)) => params,
            Err(Error::NoDefaultsConfigured { .. }) => continue,
            Err(e) => return Err(e),
        };
        if let Err(violation) = params.validate() {
            return Err(Error::InvalidLiteralValue {
                kind: P::KIND,
                key,
                field: violation.field,
                reason: violation.reason,
            });
        }
    }
    Ok(())
}
