//! Tenor buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed maturity bucket.
///
/// The dataset carries exactly one row per (currency pair, tenor), in this
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tenor {
    /// Six months
    M6,
    /// One year
    Y1,
    /// Two years
    Y2,
    /// Five years
    Y5,
    /// Ten years
    Y10,
}

impl Tenor {
    /// All tenors in canonical display order.
    pub const ALL: [Tenor; 5] = [Tenor::M6, Tenor::Y1, Tenor::Y2, Tenor::Y5, Tenor::Y10];

    /// Returns the display label, e.g. `"6M"`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Tenor::M6 => "6M",
            Tenor::Y1 => "1Y",
            Tenor::Y2 => "2Y",
            Tenor::Y5 => "5Y",
            Tenor::Y10 => "10Y",
        }
    }

    /// Returns the position of this tenor in canonical order.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Tenor::M6 => 0,
            Tenor::Y1 => 1,
            Tenor::Y2 => 2,
            Tenor::Y5 => 3,
            Tenor::Y10 => 4,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
