//! Currency request validation.
//!
//! Resolves user-supplied currency tokens against the dataset's known
//! pairs. Unknown tokens are non-fatal as long as at least one token
//! resolves; the caller decides how to surface the warning.

use tracing::warn;

use crate::dataset::Dataset;
use crate::error::{VolGridError, VolGridResult};
use crate::types::CurrencyPair;

/// The wildcard token selecting every pair in the dataset.
pub const WILDCARD: &str = "ALL";

/// The outcome of resolving a currency request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The pairs found in the dataset, preserving the caller's order.
    pub pairs: Vec<CurrencyPair>,
    /// Normalized tokens that did not match any dataset pair.
    pub unknown: Vec<String>,
}

impl Resolution {
    /// Returns true if any requested token failed to resolve.
    #[must_use]
    pub fn has_unknown(&self) -> bool {
        !self.unknown.is_empty()
    }
}

/// Resolves requested currency tokens against the dataset.
///
/// Tokens are case-insensitive, and a token quoted in the opposite leg
/// order matches the dataset's orientation (`usd/eur` resolves to
/// `EUR/USD`). A single `"ALL"` token selects every pair in the dataset.
/// Otherwise tokens are partitioned into known and unknown pairs; unknown
/// tokens are reported in [`Resolution::unknown`] and logged as a warning.
///
/// # Errors
///
/// - [`VolGridError::EmptyRequest`] when `requested` is empty.
/// - [`VolGridError::NoValidCurrencies`] when no token resolves.
pub fn resolve(requested: &[String], dataset: &Dataset) -> VolGridResult<Resolution> {
    if requested.is_empty() {
        return Err(VolGridError::EmptyRequest);
    }

    let normalized: Vec<String> = requested.iter().map(|t| t.trim().to_uppercase()).collect();

    if normalized.len() == 1 && normalized[0] == WILDCARD {
        return Ok(Resolution {
            pairs: dataset.pairs().to_vec(),
            unknown: Vec::new(),
        });
    }

    let mut pairs = Vec::new();
    let mut unknown = Vec::new();
    for token in normalized {
        match CurrencyPair::parse(&token) {
            Ok(pair) if dataset.contains(&pair) => pairs.push(pair),
            Ok(pair) if dataset.contains(&pair.flipped()) => pairs.push(pair.flipped()),
            _ => unknown.push(token),
        }
    }

    if !unknown.is_empty() {
        warn!(tokens = %unknown.join(", "), "requested currency pairs not in dataset");
    }

    if pairs.is_empty() {
        return Err(VolGridError::NoValidCurrencies { requested: unknown });
    }

    Ok(Resolution { pairs, unknown })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testdata::sample_csv;

    fn dataset(pairs: &[&str]) -> Dataset {
        Dataset::from_reader(sample_csv(pairs).as_bytes()).unwrap()
    }

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_request_fails() {
        let err = resolve(&[], &dataset(&["EUR/USD"])).unwrap_err();
        assert!(matches!(err, VolGridError::EmptyRequest));
    }

    #[test]
    fn test_wildcard_returns_all_any_case() {
        let dataset = dataset(&["EUR/USD", "GBP/JPY", "EUR/TRY"]);
        for token in ["ALL", "all", "All"] {
            let resolution = resolve(&tokens(&[token]), &dataset).unwrap();
            assert_eq!(resolution.pairs.len(), 3);
            assert!(!resolution.has_unknown());
        }
    }

    #[test]
    fn test_valid_tokens_preserve_request_order() {
        let dataset = dataset(&["EUR/USD", "GBP/JPY", "EUR/TRY"]);
        let resolution = resolve(&tokens(&["eur/try", "eur/usd"]), &dataset).unwrap();
        let names: Vec<String> = resolution.pairs.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["EUR/TRY", "EUR/USD"]);
    }

    #[test]
    fn test_unknown_tokens_reported_not_fatal() {
        let dataset = dataset(&["EUR/USD", "GBP/JPY"]);
        let resolution = resolve(&tokens(&["chf/nok", "xyz", "gbp/jpy"]), &dataset).unwrap();
        let names: Vec<String> = resolution.pairs.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["GBP/JPY"]);
        assert_eq!(resolution.unknown, vec!["CHF/NOK", "XYZ"]);
    }

    #[test]
    fn test_flipped_token_matches_dataset_orientation() {
        let dataset = dataset(&["EUR/USD", "GBP/JPY"]);
        let resolution = resolve(&tokens(&["usd/eur", "xyz"]), &dataset).unwrap();
        let names: Vec<String> = resolution.pairs.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["EUR/USD"]);
        assert_eq!(resolution.unknown, vec!["XYZ"]);
    }

    #[test]
    fn test_all_unknown_fails() {
        let dataset = dataset(&["EUR/USD"]);
        let err = resolve(&tokens(&["xyz", "abc/def"]), &dataset).unwrap_err();
        match err {
            VolGridError::NoValidCurrencies { requested } => {
                assert_eq!(requested, vec!["XYZ", "ABC/DEF"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wildcard_among_other_tokens_is_literal() {
        // "ALL" only acts as a wildcard when it is the whole request.
        let dataset = dataset(&["EUR/USD", "GBP/JPY"]);
        let resolution = resolve(&tokens(&["all", "eur/usd"]), &dataset).unwrap();
        let names: Vec<String> = resolution.pairs.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["EUR/USD"]);
        assert_eq!(resolution.unknown, vec!["ALL"]);
    }
}
