//! Currency pair identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{VolGridError, VolGridResult};

/// The separator between the two legs of a pair, e.g. `EUR/USD`.
pub const PAIR_SEPARATOR: char = '/';

/// The separator substituted into filenames, where `/` is illegal.
pub const FILE_SEPARATOR: char = '|';

/// A validated currency pair.
///
/// Both legs are uppercase 3-letter codes. The pair is only *selectable*
/// once it is known to exist in a [`Dataset`](crate::dataset::Dataset);
/// parsing alone does not check that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair {
    base: String,
    quote: String,
}

impl CurrencyPair {
    /// Parses a `BASE/QUOTE` identifier, normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`VolGridError::DataLoad`] when the token is not two
    /// 3-letter alphabetic codes joined by `/`.
    pub fn parse(token: &str) -> VolGridResult<Self> {
        let token = token.trim().to_uppercase();
        let mut legs = token.split(PAIR_SEPARATOR);
        match (legs.next(), legs.next(), legs.next()) {
            (Some(base), Some(quote), None) if is_code(base) && is_code(quote) => Ok(Self {
                base: base.to_string(),
                quote: quote.to_string(),
            }),
            _ => Err(VolGridError::data_load(format!(
                "invalid currency pair: {token:?}"
            ))),
        }
    }

    /// Returns the base leg, e.g. `"EUR"` for `EUR/USD`.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the quote leg, e.g. `"USD"` for `EUR/USD`.
    #[must_use]
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Returns the filename-safe stem with the separator substituted,
    /// e.g. `"EUR|USD"`.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!("{}{}{}", self.base, FILE_SEPARATOR, self.quote)
    }

    /// Returns the pair with its legs swapped, e.g. `USD/EUR` for
    /// `EUR/USD`. Both orientations denote the same market; datasets quote
    /// only one.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
        }
    }
}

fn is_code(leg: &str) -> bool {
    leg.len() == 3 && leg.bytes().all(|b| b.is_ascii_uppercase())
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.base, PAIR_SEPARATOR, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = VolGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyPair {
    type Error = VolGridError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.to_string()
    }
}
