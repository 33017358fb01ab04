//! Delta points across the volatility smile.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An option-moneyness bucket.
///
/// Source columns use the short keys (`10P` .. `10C`); tables display the
/// conventional delta-put/delta-call labels (`10dp` .. `10dc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeltaPoint {
    /// 10-delta put
    P10,
    /// 25-delta put
    P25,
    /// At-the-money
    Atm,
    /// 25-delta call
    C25,
    /// 10-delta call
    C10,
}

impl DeltaPoint {
    /// All delta points in canonical display order (puts to calls).
    pub const ALL: [DeltaPoint; 5] = [
        DeltaPoint::P10,
        DeltaPoint::P25,
        DeltaPoint::Atm,
        DeltaPoint::C25,
        DeltaPoint::C10,
    ];

    /// Returns the source-column subfield key, e.g. `"10P"`.
    #[must_use]
    pub fn column_key(&self) -> &'static str {
        match self {
            DeltaPoint::P10 => "10P",
            DeltaPoint::P25 => "25P",
            DeltaPoint::Atm => "ATM",
            DeltaPoint::C25 => "25C",
            DeltaPoint::C10 => "10C",
        }
    }

    /// Returns the display label, e.g. `"10dp"`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DeltaPoint::P10 => "10dp",
            DeltaPoint::P25 => "25dp",
            DeltaPoint::Atm => "ATM",
            DeltaPoint::C25 => "25dc",
            DeltaPoint::C10 => "10dc",
        }
    }

    /// Returns the position of this delta point in canonical order.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            DeltaPoint::P10 => 0,
            DeltaPoint::P25 => 1,
            DeltaPoint::Atm => 2,
            DeltaPoint::C25 => 3,
            DeltaPoint::C10 => 4,
        }
    }
}

impl fmt::Display for DeltaPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
