//! G10 currency filtering.

use crate::dataset::Dataset;
use crate::types::CurrencyPair;

/// The ten major reference currencies.
pub const G10_CURRENCIES: [&str; 10] = [
    "EUR", "USD", "JPY", "GBP", "AUD", "NZD", "CAD", "CHF", "NOK", "SEK",
];

/// Returns true if the code is one of the G10 currencies.
#[must_use]
pub fn is_g10_currency(code: &str) -> bool {
    G10_CURRENCIES.contains(&code)
}

/// Returns true if both legs of the pair are G10 currencies.
#[must_use]
pub fn is_g10_pair(pair: &CurrencyPair) -> bool {
    is_g10_currency(pair.base()) && is_g10_currency(pair.quote())
}

/// Returns the dataset pairs where both legs are G10 currencies, in
/// dataset order. Self-derives from dataset contents; no request needed.
#[must_use]
pub fn g10_pairs(dataset: &Dataset) -> Vec<CurrencyPair> {
    dataset
        .pairs()
        .iter()
        .filter(|pair| is_g10_pair(pair))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testdata::sample_csv;

    #[test]
    fn test_non_g10_leg_excluded() {
        let dataset =
            Dataset::from_reader(sample_csv(&["EUR/USD", "EUR/TRY", "JPY/NOK"]).as_bytes())
                .unwrap();
        let names: Vec<String> = g10_pairs(&dataset).iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["EUR/USD", "JPY/NOK"]);
    }

    #[test]
    fn test_every_result_is_g10_both_legs() {
        let dataset = Dataset::from_reader(
            sample_csv(&["USD/MXN", "GBP/CHF", "TRY/ZAR", "AUD/NZD"]).as_bytes(),
        )
        .unwrap();
        for pair in g10_pairs(&dataset) {
            assert!(is_g10_currency(pair.base()), "{pair}");
            assert!(is_g10_currency(pair.quote()), "{pair}");
        }
    }

    #[test]
    fn test_is_g10_currency() {
        assert!(is_g10_currency("SEK"));
        assert!(!is_g10_currency("DKK"));
        assert!(!is_g10_currency("usd"));
    }
}
