//! Table construction from dataset slices.

use crate::dataset::{Dataset, VolRow};
use crate::error::{VolGridError, VolGridResult};
use crate::types::{CarryMetric, CurrencyPair, DeltaPoint, Tenor};

use super::{CellStyle, GridStyle, LogicalTable, RuleScope};

/// The three volatility tables for one currency pair.
#[derive(Debug, Clone)]
pub struct VolTriplet {
    /// Implied volatility levels.
    pub vol: LogicalTable,
    /// Four-week volatility shifts.
    pub shift: LogicalTable,
    /// All-time volatility percentile ranks.
    pub pctl: LogicalTable,
}

impl VolTriplet {
    /// Returns the tables in display (stacking) order.
    #[must_use]
    pub fn tables(&self) -> [&LogicalTable; 3] {
        [&self.vol, &self.shift, &self.pctl]
    }
}

/// Builds logical tables from a dataset and a styling configuration.
pub struct TableBuilder<'a> {
    dataset: &'a Dataset,
    style: GridStyle,
}

impl<'a> TableBuilder<'a> {
    /// Creates a builder over a dataset.
    #[must_use]
    pub fn new(dataset: &'a Dataset, style: GridStyle) -> Self {
        Self { dataset, style }
    }

    /// Returns the styling configuration.
    #[must_use]
    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    /// Builds the implied-vol, 4-week-shift, and percentile tables for a
    /// pair. Rows are the five tenors, columns the five delta points, in
    /// fixed order regardless of dataset row order.
    ///
    /// # Errors
    ///
    /// [`VolGridError::EmptySlice`] when the pair has no rows;
    /// [`VolGridError::MissingTenor`] when a tenor row is absent.
    pub fn volatility_triplet(&self, pair: &CurrencyPair) -> VolGridResult<VolTriplet> {
        let rows = self.slice(pair)?;
        let caption = pair.to_string();

        let matrix = |field: fn(&VolRow, DeltaPoint) -> f64| -> Vec<Vec<f64>> {
            rows.iter()
                .map(|&row| DeltaPoint::ALL.iter().map(|&point| field(row, point)).collect())
                .collect()
        };

        let vol = LogicalTable::new(
            caption.clone(),
            tenor_labels(),
            delta_labels(),
            matrix(VolRow::vol),
        )?
        .with_precision(self.style.precision);

        let shift = LogicalTable::new(
            caption.clone(),
            tenor_labels(),
            delta_labels(),
            matrix(VolRow::shift_4w),
        )?
        .with_precision(self.style.precision)
        .with_rule(RuleScope::All, CellStyle::Bar(self.style.shift_bar.clone()));

        let pctl = LogicalTable::new(
            caption,
            tenor_labels(),
            delta_labels(),
            matrix(VolRow::vol_pctl),
        )?
        .with_precision(self.style.precision)
        .with_rule(RuleScope::All, CellStyle::Scale(self.style.pctl_scale.clone()));

        Ok(VolTriplet { vol, shift, pctl })
    }

    /// Builds the carry table for a pair: the six carry metrics as rows,
    /// the five tenors as columns (transposed from the dataset layout).
    ///
    /// The carry row gets the fixed-range color scale; the percentile rows
    /// get the diverging bar centered at 50.
    ///
    /// # Errors
    ///
    /// See [`TableBuilder::volatility_triplet`].
    pub fn carry_table(&self, pair: &CurrencyPair) -> VolGridResult<LogicalTable> {
        let rows = self.slice(pair)?;

        let cells: Vec<Vec<f64>> = CarryMetric::ALL
            .iter()
            .map(|&metric| rows.iter().map(|row| row.carry(metric)).collect())
            .collect();

        let metric_labels = CarryMetric::ALL
            .iter()
            .map(|m| m.label().to_string())
            .collect();

        Ok(LogicalTable::new(pair.to_string(), metric_labels, tenor_labels(), cells)?
            .with_precision(self.style.precision)
            .with_rule(
                RuleScope::Row(0),
                CellStyle::Scale(self.style.carry_scale.clone()),
            )
            .with_rule(
                RuleScope::RowSpan {
                    from: 1,
                    to: CarryMetric::ALL.len() - 1,
                },
                CellStyle::Bar(self.style.carry_bar.clone()),
            ))
    }

    /// Returns the pair's rows in canonical tenor order.
    fn slice(&self, pair: &CurrencyPair) -> VolGridResult<Vec<&'a VolRow>> {
        if self.dataset.rows_for(pair).is_empty() {
            return Err(VolGridError::empty_slice(pair.to_string()));
        }
        Tenor::ALL
            .iter()
            .map(|&tenor| {
                self.dataset
                    .row(pair, tenor)
                    .ok_or_else(|| VolGridError::missing_tenor(pair.to_string(), tenor))
            })
            .collect()
    }
}

fn tenor_labels() -> Vec<String> {
    Tenor::ALL.iter().map(|t| t.label().to_string()).collect()
}

fn delta_labels() -> Vec<String> {
    DeltaPoint::ALL.iter().map(|d| d.label().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testdata::{cell_value, sample_csv};

    fn builder_dataset(pairs: &[&str]) -> Dataset {
        Dataset::from_reader(sample_csv(pairs).as_bytes()).unwrap()
    }

    fn pair(token: &str) -> CurrencyPair {
        CurrencyPair::parse(token).unwrap()
    }

    #[test]
    fn test_triplet_labels_fixed_order() {
        let dataset = builder_dataset(&["GBP/JPY", "EUR/USD"]);
        let builder = TableBuilder::new(&dataset, GridStyle::default());
        let triplet = builder.volatility_triplet(&pair("EUR/USD")).unwrap();

        for table in triplet.tables() {
            assert_eq!(table.row_labels(), &["6M", "1Y", "2Y", "5Y", "10Y"]);
            assert_eq!(table.col_labels(), &["10dp", "25dp", "ATM", "25dc", "10dc"]);
            assert_eq!(table.caption(), "EUR/USD");
        }
    }

    #[test]
    fn test_triplet_cell_selection() {
        let dataset = builder_dataset(&["EUR/USD"]);
        let builder = TableBuilder::new(&dataset, GridStyle::default());
        let triplet = builder.volatility_triplet(&pair("EUR/USD")).unwrap();

        // Data columns: vol 0-4, shift 5-9, pctl 10-14.
        assert_eq!(triplet.vol.value(3, 1), cell_value(0, 3, 1));
        assert_eq!(triplet.shift.value(3, 1), cell_value(0, 3, 6));
        assert_eq!(triplet.pctl.value(3, 1), cell_value(0, 3, 11));
    }

    #[test]
    fn test_triplet_formatting_rules() {
        let dataset = builder_dataset(&["EUR/USD"]);
        let builder = TableBuilder::new(&dataset, GridStyle::default());
        let triplet = builder.volatility_triplet(&pair("EUR/USD")).unwrap();

        assert!(triplet.vol.rules().is_empty());
        assert!(matches!(
            triplet.shift.style_for_row(0),
            Some(CellStyle::Bar(bar)) if bar.align == 0.0
        ));
        assert!(matches!(triplet.pctl.style_for_row(4), Some(CellStyle::Scale(_))));
    }

    #[test]
    fn test_carry_table_is_transposed() {
        let dataset = builder_dataset(&["EUR/USD", "GBP/JPY"]);
        let builder = TableBuilder::new(&dataset, GridStyle::default());
        let table = builder.carry_table(&pair("GBP/JPY")).unwrap();

        assert_eq!(table.n_rows(), 6);
        assert_eq!(table.n_cols(), 5);
        assert_eq!(
            table.row_labels(),
            &["Carry", "Pctl 6m", "Pctl 1y", "Pctl 2y", "Pctl 5y", "Pctl all"]
        );
        assert_eq!(table.row_labels().len(), 6);
        assert_eq!(table.col_labels(), &["6M", "1Y", "2Y", "5Y", "10Y"]);

        // cells[metric][tenor] == carry column of the tenor's source row.
        // Carry data columns are 15-20.
        assert_eq!(table.value(0, 2), cell_value(1, 2, 15));
        assert_eq!(table.value(5, 4), cell_value(1, 4, 20));
    }

    #[test]
    fn test_carry_table_rules() {
        let dataset = builder_dataset(&["EUR/USD"]);
        let builder = TableBuilder::new(&dataset, GridStyle::default());
        let table = builder.carry_table(&pair("EUR/USD")).unwrap();

        assert!(matches!(table.style_for_row(0), Some(CellStyle::Scale(scale))
            if scale.vmin == -5.0 && scale.vmax == 5.0));
        for row in 1..6 {
            assert!(matches!(table.style_for_row(row), Some(CellStyle::Bar(bar))
                if bar.align == 50.0));
        }
    }

    #[test]
    fn test_unknown_pair_is_empty_slice() {
        let dataset = builder_dataset(&["EUR/USD"]);
        let builder = TableBuilder::new(&dataset, GridStyle::default());
        let err = builder.volatility_triplet(&pair("AUD/NZD")).unwrap_err();
        assert!(matches!(err, VolGridError::EmptySlice { .. }));
    }

    #[test]
    fn test_partial_slice_is_missing_tenor() {
        // Keep only the first three EUR/USD data rows.
        let full = sample_csv(&["EUR/USD"]);
        let truncated: Vec<&str> = full.lines().take(2 + 3).collect();
        let dataset = Dataset::from_reader(truncated.join("\n").as_bytes()).unwrap();

        let builder = TableBuilder::new(&dataset, GridStyle::default());
        let err = builder.carry_table(&pair("EUR/USD")).unwrap_err();
        assert!(matches!(
            err,
            VolGridError::MissingTenor { tenor: Tenor::Y5, .. }
        ));
    }
}
