//! Three-tier lookup table
//!
//! ```text
//!   generic base         (every field)
//!        │ overlay
//!   (ANY, timeframe)     (subset of fields)
//!        │ overlay
//!   (symbol, timeframe)  (subset of fields)
//!        ▼
//!   resolved parameter set
//! ```
//!
//! Later tiers win field by field. A key resolves only if at least one of the
//! two override tiers has an entry for it.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use momentum_core::{ParameterKey, ParameterSet, Timeframe};

use crate::error::{Error, Result};

/// Most specific tier that contributed to a resolved set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Timeframe,
    Symbol,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Timeframe => write!(f, "timeframe"),
            Tier::Symbol => write!(f, "symbol"),
        }
    }
}

/// Base set plus its timeframe and symbol override maps
#[derive(Debug, Clone)]
pub struct TierTable<P: ParameterSet> {
    base: P,
    by_timeframe: HashMap<Timeframe, P::Override>,
    by_symbol: HashMap<ParameterKey, P::Override>,
}

impl<P: ParameterSet> TierTable<P> {
    pub fn new(base: P) -> Self {
        Self {
            base,
            by_timeframe: HashMap::new(),
            by_symbol: HashMap::new(),
        }
    }

    /// Generic base record
    pub fn base(&self) -> &P {
        &self.base
    }

    /// Add an override; a key may be filled only once
    pub fn insert(&mut self, key: ParameterKey, layer: P::Override) -> Result<()> {
        let duplicate = || Error::DuplicateEntry {
            kind: P::KIND,
            key: key.clone(),
        };

        if key.is_any() {
            match self.by_timeframe.entry(key.timeframe()) {
                Entry::Occupied(_) => return Err(duplicate()),
                Entry::Vacant(slot) => {
                    slot.insert(layer);
                }
            }
        } else {
            match self.by_symbol.entry(key.clone()) {
                Entry::Occupied(_) => return Err(duplicate()),
                Entry::Vacant(slot) => {
                    slot.insert(layer);
                }
            }
        }
        Ok(())
    }

    /// Merge base, timeframe and symbol tiers for `key`
    pub fn resolve(&self, key: &ParameterKey) -> Result<(P, Tier)> {
        let timeframe_layer = self.by_timeframe.get(&key.timeframe());
        let symbol_layer = if key.is_any() {
            None
        } else {
            self.by_symbol.get(key)
        };

        let tier = match (timeframe_layer, symbol_layer) {
            (_, Some(_)) => Tier::Symbol,
            (Some(_), None) => Tier::Timeframe,
            (None, None) => {
                return Err(Error::NoDefaultsConfigured {
                    kind: P::KIND,
                    key: key.clone(),
                });
            }
        };

        let mut params = self.base.clone();
        params.bind(key.timeframe());
        for layer in [timeframe_layer, symbol_layer].into_iter().flatten() {
            params.overlay(layer);
        }
        Ok((params, tier))
    }

    /// Every key that carries an override, sorted
    pub fn keys(&self) -> Vec<ParameterKey> {
        let mut keys: Vec<ParameterKey> = self
            .by_timeframe
            .keys()
            .map(|tf| ParameterKey::any(*tf))
            .chain(self.by_symbol.keys().cloned())
            .collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.by_timeframe.len() + self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use momentum_core::{AppliedPrice, IndicatorOverride, IndicatorParams};

    fn table() -> TierTable<IndicatorParams> {
        TierTable::new(IndicatorParams::unbound(AppliedPrice::Close, 12, 0))
    }

    #[test]
    fn test_timeframe_tier_overlays_base() {
        let mut table = table();
        table
            .insert(
                ParameterKey::any(Timeframe::M1),
                IndicatorOverride {
                    period: Some(4),
                    ..Default::default()
                },
            )
            .unwrap();

        let (params, tier) = table.resolve(&ParameterKey::any(Timeframe::M1)).unwrap();
        assert_eq!(tier, Tier::Timeframe);
        assert_eq!(params.period, 4);
        assert_eq!(params.applied_price, AppliedPrice::Close);
        assert_eq!(params.timeframe, Timeframe::M1);
    }

    #[test]
    fn test_symbol_tier_applies_last_field_by_field() {
        let mut table = table();
        table
            .insert(
                ParameterKey::any(Timeframe::H4),
                IndicatorOverride {
                    period: Some(20),
                    shift: Some(1),
                    ..Default::default()
                },
            )
            .unwrap();
        table
            .insert(
                ParameterKey::for_symbol("EURUSD", Timeframe::H4),
                IndicatorOverride {
                    period: Some(2),
                    ..Default::default()
                },
            )
            .unwrap();

        let (params, tier) = table
            .resolve(&ParameterKey::for_symbol("EURUSD", Timeframe::H4))
            .unwrap();
        assert_eq!(tier, Tier::Symbol);
        assert_eq!(params.period, 2);
        // Shift survives from the timeframe tier
        assert_eq!(params.shift, 1);

        // Unknown symbols fall back to the timeframe tier
        let (params, tier) = table
            .resolve(&ParameterKey::for_symbol("GBPUSD", Timeframe::H4))
            .unwrap();
        assert_eq!(tier, Tier::Timeframe);
        assert_eq!(params.period, 20);
    }

    #[test]
    fn test_symbol_only_entry_resolves() {
        let mut table = table();
        table
            .insert(
                ParameterKey::for_symbol("EURUSD", Timeframe::D1),
                IndicatorOverride::default(),
            )
            .unwrap();

        assert!(
            table
                .resolve(&ParameterKey::for_symbol("EURUSD", Timeframe::D1))
                .is_ok()
        );
        assert_eq!(
            table.resolve(&ParameterKey::any(Timeframe::D1)).unwrap_err(),
            Error::NoDefaultsConfigured {
                kind: "indicator",
                key: ParameterKey::any(Timeframe::D1),
            }
        );
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let mut table = table();
        let key = ParameterKey::for_symbol("EURUSD", Timeframe::M5);
        table.insert(key.clone(), IndicatorOverride::default()).unwrap();

        let err = table
            .insert(ParameterKey::for_symbol("eurusd", Timeframe::M5), IndicatorOverride::default())
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateEntry {
                kind: "indicator",
                key,
            }
        );
    }

    #[test]
    fn test_keys_are_sorted() {
        let mut table = table();
        table
            .insert(ParameterKey::for_symbol("EURUSD", Timeframe::M1), IndicatorOverride::default())
            .unwrap();
        table
            .insert(ParameterKey::any(Timeframe::H1), IndicatorOverride::default())
            .unwrap();
        table
            .insert(ParameterKey::any(Timeframe::M1), IndicatorOverride::default())
            .unwrap();

        assert_eq!(
            table.keys(),
            vec![
                ParameterKey::any(Timeframe::M1),
                ParameterKey::for_symbol("EURUSD", Timeframe::M1),
                ParameterKey::any(Timeframe::H1),
            ]
        );
        assert_eq!(table.len(), 3);
    }
}
