//! Carry metrics and their percentile lookback windows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A carry metric column: the carry value itself or one of its historical
/// percentile ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarryMetric {
    /// The carry value
    Carry,
    /// Percentile rank over the last six months
    Pctl6m,
    /// Percentile rank over the last year
    Pctl1y,
    /// Percentile rank over the last two years
    Pctl2y,
    /// Percentile rank over the last five years
    Pctl5y,
    /// Percentile rank over the full history
    PctlAll,
}

impl CarryMetric {
    /// All metrics in canonical display order.
    pub const ALL: [CarryMetric; 6] = [
        CarryMetric::Carry,
        CarryMetric::Pctl6m,
        CarryMetric::Pctl1y,
        CarryMetric::Pctl2y,
        CarryMetric::Pctl5y,
        CarryMetric::PctlAll,
    ];

    /// Returns the source-column subfield key, which doubles as the display
    /// label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CarryMetric::Carry => "Carry",
            CarryMetric::Pctl6m => "Pctl 6m",
            CarryMetric::Pctl1y => "Pctl 1y",
            CarryMetric::Pctl2y => "Pctl 2y",
            CarryMetric::Pctl5y => "Pctl 5y",
            CarryMetric::PctlAll => "Pctl all",
        }
    }

    /// Returns the position of this metric in canonical order.
    #[must_use]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }
}

impl fmt::Display for CarryMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = CarryMetric::ALL.iter().map(CarryMetric::label).collect();
        assert_eq!(
            labels,
            vec!["Carry", "Pctl 6m", "Pctl 1y", "Pctl 2y", "Pctl 5y", "Pctl all"]
        );
    }
}
