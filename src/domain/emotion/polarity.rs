//! Ternary valence tag assigned to an emotion label.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Polarity of an emotion label.
///
/// Serialized as its numeric value (`+1`, `0`, `-1`) so history records match
/// the chart's fixed y-axis domain directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    /// Numeric value plotted on the chart: `+1`, `0` or `-1`.
    pub fn value(&self) -> i8 {
        match self {
            Polarity::Positive => 1,
            Polarity::Neutral => 0,
            Polarity::Negative => -1,
        }
    }

    /// Fixed axis label for this polarity. Never re-scaled.
    pub fn axis_label(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Neutral => "neutral",
            Polarity::Negative => "negative",
        }
    }
}

impl From<Polarity> for i8 {
    fn from(polarity: Polarity) -> i8 {
        polarity.value()
    }
}

/// Error for numeric values outside {-1, 0, +1}.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid polarity value {0}, expected -1, 0 or 1")]
pub struct InvalidPolarity(pub i8);

impl TryFrom<i8> for Polarity {
    type Error = InvalidPolarity;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Polarity::Positive),
            0 => Ok(Polarity::Neutral),
            -1 => Ok(Polarity::Negative),
            other => Err(InvalidPolarity(other)),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.axis_label())
    }
}
