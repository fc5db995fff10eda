//! Registry configuration

use momentum_core::Timeframe;
use serde::{Deserialize, Serialize};

/// Configuration for a [`ParameterDefaultsRegistry`](crate::ParameterDefaultsRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Strategy the defaults belong to (used in log lines)
    pub strategy_name: String,
    /// Timeframes the host engine runs this strategy on
    pub supported_timeframes: Vec<Timeframe>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strategy_name: "Momentum".to_string(),
            supported_timeframes: vec![
                Timeframe::M1,
                Timeframe::M5,
                Timeframe::M15,
                Timeframe::M30,
                Timeframe::H1,
                Timeframe::H4,
                Timeframe::H8,
            ],
        }
    }
}
