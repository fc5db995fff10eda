use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ParseResult};

/// Legacy spelling prefix, as in `PERIOD_M15`
const PERIOD_PREFIX: &str = "PERIOD_";

/// Bar aggregation period used to key indicator and strategy defaults
///
/// Tokens match the host engine's identifiers (`M1`, `H4`, `MN1`, ...).
/// `Current` is the engine's "chart timeframe" placeholder and is only ever
/// carried by unbound base records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Timeframe {
    Current,
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    M10,
    M12,
    M15,
    M20,
    M30,
    H1,
    H2,
    H3,
    H4,
    H6,
    H8,
    H12,
    D1,
    W1,
    MN1,
}

impl Timeframe {
    /// Every timeframe the engine defines, shortest first (excluding `Current`)
    pub const ALL: [Timeframe; 21] = [
        Timeframe::M1,
        Timeframe::M2,
        Timeframe::M3,
        Timeframe::M4,
        Timeframe::M5,
        Timeframe::M6,
        Timeframe::M10,
        Timeframe::M12,
        Timeframe::M15,
        Timeframe::M20,
        Timeframe::M30,
        Timeframe::H1,
        Timeframe::H2,
        Timeframe::H3,
        Timeframe::H4,
        Timeframe::H6,
        Timeframe::H8,
        Timeframe::H12,
        Timeframe::D1,
        Timeframe::W1,
        Timeframe::MN1,
    ];

    /// Engine token, e.g. `"M15"`
    pub fn token(&self) -> &'static str {
        match self {
            Timeframe::Current => "CURRENT",
            Timeframe::M1 => "M1",
            Timeframe::M2 => "M2",
            Timeframe::M3 => "M3",
            Timeframe::M4 => "M4",
            Timeframe::M5 => "M5",
            Timeframe::M6 => "M6",
            Timeframe::M10 => "M10",
            Timeframe::M12 => "M12",
            Timeframe::M15 => "M15",
            Timeframe::M20 => "M20",
            Timeframe::M30 => "M30",
            Timeframe::H1 => "H1",
            Timeframe::H2 => "H2",
            Timeframe::H3 => "H3",
            Timeframe::H4 => "H4",
            Timeframe::H6 => "H6",
            Timeframe::H8 => "H8",
            Timeframe::H12 => "H12",
            Timeframe::D1 => "D1",
            Timeframe::W1 => "W1",
            Timeframe::MN1 => "MN1",
        }
    }

    /// Bar length in minutes (`None` for `Current`)
    ///
    /// A month is counted as 30 days, as the engine does.
    pub fn minutes(&self) -> Option<u32> {
        let minutes = match self {
            Timeframe::Current => return None,
            Timeframe::M1 => 1,
            Timeframe::M2 => 2,
            Timeframe::M3 => 3,
            Timeframe::M4 => 4,
            Timeframe::M5 => 5,
            Timeframe::M6 => 6,
            Timeframe::M10 => 10,
            Timeframe::M12 => 12,
            Timeframe::M15 => 15,
            Timeframe::M20 => 20,
            Timeframe::M30 => 30,
            Timeframe::H1 => 60,
            Timeframe::H2 => 120,
            Timeframe::H3 => 180,
            Timeframe::H4 => 240,
            Timeframe::H6 => 360,
            Timeframe::H8 => 480,
            Timeframe::H12 => 720,
            Timeframe::D1 => 1_440,
            Timeframe::W1 => 10_080,
            Timeframe::MN1 => 43_200,
        };
        Some(minutes)
    }

    /// Bar length as a duration (`None` for `Current`)
    pub fn duration(&self) -> Option<Duration> {
        self.minutes().map(|m| Duration::minutes(i64::from(m)))
    }

    /// True for the unbound placeholder
    pub fn is_current(&self) -> bool {
        matches!(self, Timeframe::Current)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Timeframe {
    type Err = ParseError;

    /// Accepts both `M15` and the legacy `PERIOD_M15` spelling
    fn from_str(s: &str) -> ParseResult<Self> {
        let trimmed = s.trim();
        let token = match trimmed.get(..PERIOD_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(PERIOD_PREFIX) => {
                &trimmed[PERIOD_PREFIX.len()..]
            }
            _ => trimmed,
        };
        if token.eq_ignore_ascii_case("CURRENT") {
            return Ok(Timeframe::Current);
        }
        Timeframe::ALL
            .iter()
            .copied()
            .find(|tf| tf.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseError::UnknownTimeframe(s.to_string()))
    }
}

impl From<Timeframe> for String {
    fn from(tf: Timeframe) -> Self {
        tf.token().to_string()
    }
}

impl TryFrom<String> for Timeframe {
    type Error = ParseError;

    fn try_from(s: String) -> ParseResult<Self> {
        s.parse()
    }
}
