use serde::{Deserialize, Serialize};

use super::{ParameterSet, Violation};
use crate::entities::{AppliedPrice, Timeframe};

/// Momentum indicator parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorParams {
    /// Price component the indicator reads
    pub applied_price: AppliedPrice,
    /// Number of bars in the lookback window
    pub period: u32,
    /// Bar offset (0 = current bar)
    pub shift: u32,
    /// Timeframe the set is bound to
    pub timeframe: Timeframe,
}

impl IndicatorParams {
    /// A set not yet bound to a timeframe (generic base)
    pub fn unbound(applied_price: AppliedPrice, period: u32, shift: u32) -> Self {
        Self {
            applied_price,
            period,
            shift,
            timeframe: Timeframe::Current,
        }
    }
}

impl ParameterSet for IndicatorParams {
    type Override = IndicatorOverride;

    const KIND: &'static str = "indicator";

    fn overlay(&mut self, layer: &IndicatorOverride) {
        if let Some(applied_price) = layer.applied_price {
            self.applied_price = applied_price;
        }
        if let Some(period) = layer.period {
            self.period = period;
        }
        if let Some(shift) = layer.shift {
            self.shift = shift;
        }
    }

    fn bind(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    fn validate(&self) -> Result<(), Violation> {
        if self.period == 0 {
            return Err(Violation::new("period", "must be greater than zero"));
        }
        if self.timeframe.is_current() {
            return Err(Violation::new("timeframe", "not bound to a timeframe"));
        }
        Ok(())
    }
}

/// Fields one tier replaces in an [`IndicatorParams`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_price: Option<AppliedPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<u32>,
}

impl IndicatorOverride {
    /// True if the override changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> IndicatorParams {
        IndicatorParams::unbound(AppliedPrice::Close, 12, 0)
    }

    #[test]
    fn test_overlay_replaces_only_set_fields() {
        let mut params = base();
        params.overlay(&IndicatorOverride {
            period: Some(4),
            ..Default::default()
        });

        assert_eq!(params.period, 4);
        assert_eq!(params.applied_price, AppliedPrice::Close);
        assert_eq!(params.shift, 0);
    }

    #[test]
    fn test_empty_overlay_is_identity() {
        let mut params = base();
        params.overlay(&IndicatorOverride::default());
        assert_eq!(params, base());
        assert!(IndicatorOverride::default().is_empty());
    }

    #[test]
    fn test_validation() {
        let mut params = base();
        // Unbound sets are not valid lookup results
        assert_eq!(params.validate().unwrap_err().field, "timeframe");

        params.bind(Timeframe::M15);
        assert!(params.validate().is_ok());

        params.period = 0;
        assert_eq!(params.validate().unwrap_err().field, "period");
    }

    #[test]
    fn test_override_omits_unset_fields() {
        let layer = IndicatorOverride {
            shift: Some(0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&layer).unwrap(), r#"{"shift":0}"#);
    }
}
