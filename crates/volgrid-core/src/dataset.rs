//! Dataset accessor.
//!
//! Loads the two-level-header volatility CSV and exposes per-pair slicing.
//!
//! The source file has a category row (`Vol`, `Vol 4wk-chg`, `Vol Pctl
//! all`, `Carry`, `CCY`) above a subfield row (`10P` .. `10C`, `Carry` ..
//! `Pctl all`, or blank for singleton categories). Normalization collapses
//! the two levels into one [`ColumnKey`] per column; blank or pandas-style
//! `Unnamed: ...` subfields become the empty string.
//!
//! The file carries no tenor column: each pair's rows appear in fixed tenor
//! order, so tenors are assigned by position within the pair's run of rows.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{VolGridError, VolGridResult};
use crate::types::{CarryMetric, CurrencyPair, DeltaPoint, Tenor};

/// Category label of the currency pair column.
pub const CAT_CCY: &str = "CCY";
/// Category label of the implied volatility columns.
pub const CAT_VOL: &str = "Vol";
/// Category label of the 4-week volatility change columns.
pub const CAT_SHIFT: &str = "Vol 4wk-chg";
/// Category label of the all-time volatility percentile columns.
pub const CAT_PCTL: &str = "Vol Pctl all";
/// Category label of the carry columns.
pub const CAT_CARRY: &str = "Carry";

/// A canonical column key: `(category, subfield-or-empty)`.
///
/// Produced by the header normalization step; columns whose second-level
/// label is a placeholder collapse to a single-level key with an empty
/// subfield.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnKey {
    /// First-level category name.
    pub category: String,
    /// Second-level subfield name; empty for singleton categories.
    pub subfield: String,
}

impl ColumnKey {
    /// Creates a key with a category and subfield.
    #[must_use]
    pub fn new(category: impl Into<String>, subfield: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subfield: subfield.into(),
        }
    }

    /// Creates a singleton key with an empty subfield.
    #[must_use]
    pub fn singleton(category: impl Into<String>) -> Self {
        Self::new(category, "")
    }
}

impl std::fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.subfield.is_empty() {
            write!(f, "{}", self.category)
        } else {
            write!(f, "{}/{}", self.category, self.subfield)
        }
    }
}

/// One (currency pair, tenor) observation.
#[derive(Debug, Clone)]
pub struct VolRow {
    pair: CurrencyPair,
    tenor: Tenor,
    vol: [f64; 5],
    shift_4w: [f64; 5],
    vol_pctl: [f64; 5],
    carry: [f64; 6],
}

impl VolRow {
    /// Returns the currency pair this row belongs to.
    #[must_use]
    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }

    /// Returns the tenor bucket of this row.
    #[must_use]
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// Implied volatility at a delta point.
    #[must_use]
    pub fn vol(&self, point: DeltaPoint) -> f64 {
        self.vol[point.index()]
    }

    /// Four-week volatility change at a delta point.
    #[must_use]
    pub fn shift_4w(&self, point: DeltaPoint) -> f64 {
        self.shift_4w[point.index()]
    }

    /// All-time volatility percentile rank (0-100) at a delta point.
    #[must_use]
    pub fn vol_pctl(&self, point: DeltaPoint) -> f64 {
        self.vol_pctl[point.index()]
    }

    /// A carry metric value.
    #[must_use]
    pub fn carry(&self, metric: CarryMetric) -> f64 {
        self.carry[metric.index()]
    }
}

/// The loaded volatility dataset.
///
/// Rows keep file order; each (pair, tenor) combination appears at most
/// once.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<VolRow>,
    pairs: Vec<CurrencyPair>,
    index: HashMap<CurrencyPair, Vec<usize>>,
}

impl Dataset {
    /// Loads a dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`VolGridError::DataLoad`] when the file does not match the
    /// expected two-level column structure or contains non-numeric cells.
    pub fn from_path(path: impl AsRef<Path>) -> VolGridResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            VolGridError::data_load(format!("cannot open {}: {e}", path.display()))
        })?;
        let dataset = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            rows = dataset.len(),
            pairs = dataset.pairs.len(),
            "loaded volatility dataset"
        );
        Ok(dataset)
    }

    /// Loads a dataset from any reader producing CSV bytes.
    ///
    /// # Errors
    ///
    /// See [`Dataset::from_path`].
    pub fn from_reader(reader: impl Read) -> VolGridResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();
        let level0 = next_record(&mut records, "category header row")?;
        let level1 = next_record(&mut records, "subfield header row")?;
        let columns = normalize_headers(&level0, &level1);
        let layout = Layout::locate(&columns)?;

        let mut rows: Vec<VolRow> = Vec::new();
        let mut pairs: Vec<CurrencyPair> = Vec::new();
        let mut index: HashMap<CurrencyPair, Vec<usize>> = HashMap::new();

        for (line, record) in records.enumerate() {
            let record =
                record.map_err(|e| VolGridError::data_load(format!("bad record: {e}")))?;
            let row = layout.parse_row(&record, line, &index)?;

            let slot = index.entry(row.pair.clone()).or_insert_with(|| {
                pairs.push(row.pair.clone());
                Vec::new()
            });
            slot.push(rows.len());
            rows.push(row);
        }

        Ok(Self { rows, pairs, index })
    }

    /// Returns all distinct currency pairs in first-seen order.
    #[must_use]
    pub fn pairs(&self) -> &[CurrencyPair] {
        &self.pairs
    }

    /// Returns true if the pair exists in the dataset.
    #[must_use]
    pub fn contains(&self, pair: &CurrencyPair) -> bool {
        self.index.contains_key(pair)
    }

    /// Returns the rows for a pair in file (tenor) order.
    #[must_use]
    pub fn rows_for(&self, pair: &CurrencyPair) -> Vec<&VolRow> {
        self.index
            .get(pair)
            .map(|ids| ids.iter().map(|&i| &self.rows[i]).collect())
            .unwrap_or_default()
    }

    /// Returns the row for a (pair, tenor) combination, if present.
    #[must_use]
    pub fn row(&self, pair: &CurrencyPair, tenor: Tenor) -> Option<&VolRow> {
        self.index
            .get(pair)?
            .iter()
            .map(|&i| &self.rows[i])
            .find(|row| row.tenor == tenor)
    }

    /// Returns the total number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn next_record(
    records: &mut csv::StringRecordsIter<'_, impl Read>,
    what: &str,
) -> VolGridResult<csv::StringRecord> {
    match records.next() {
        Some(Ok(record)) => Ok(record),
        Some(Err(e)) => Err(VolGridError::data_load(format!("bad {what}: {e}"))),
        None => Err(VolGridError::data_load(format!("missing {what}"))),
    }
}

/// Collapses the two header rows into canonical column keys.
///
/// Blank first-level cells forward-fill from the left (spanned categories);
/// blank or `Unnamed: ...` second-level cells collapse to the empty
/// subfield.
fn normalize_headers(level0: &csv::StringRecord, level1: &csv::StringRecord) -> Vec<ColumnKey> {
    let mut keys = Vec::with_capacity(level0.len());
    let mut category = String::new();
    for (i, raw) in level0.iter().enumerate() {
        let cell = raw.trim();
        if !cell.is_empty() {
            category = cell.to_string();
        }
        let subfield = level1
            .get(i)
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.starts_with("Unnamed"))
            .unwrap_or("");
        keys.push(ColumnKey::new(category.clone(), subfield));
    }
    keys
}

/// Resolved column positions for every field the dataset needs.
struct Layout {
    ccy: usize,
    vol: [usize; 5],
    shift: [usize; 5],
    pctl: [usize; 5],
    carry: [usize; 6],
}

impl Layout {
    fn locate(columns: &[ColumnKey]) -> VolGridResult<Self> {
        let position = |key: &ColumnKey| -> VolGridResult<usize> {
            columns
                .iter()
                .position(|c| c == key)
                .ok_or_else(|| VolGridError::data_load(format!("missing column: {key}")))
        };

        let mut vol = [0usize; 5];
        let mut shift = [0usize; 5];
        let mut pctl = [0usize; 5];
        for (i, point) in DeltaPoint::ALL.iter().enumerate() {
            vol[i] = position(&ColumnKey::new(CAT_VOL, point.column_key()))?;
            shift[i] = position(&ColumnKey::new(CAT_SHIFT, point.column_key()))?;
            pctl[i] = position(&ColumnKey::new(CAT_PCTL, point.column_key()))?;
        }
        let mut carry = [0usize; 6];
        for (i, metric) in CarryMetric::ALL.iter().enumerate() {
            carry[i] = position(&ColumnKey::new(CAT_CARRY, metric.label()))?;
        }

        Ok(Self {
            ccy: position(&ColumnKey::singleton(CAT_CCY))?,
            vol,
            shift,
            pctl,
            carry,
        })
    }

    fn parse_row(
        &self,
        record: &csv::StringRecord,
        line: usize,
        index: &HashMap<CurrencyPair, Vec<usize>>,
    ) -> VolGridResult<VolRow> {
        let field = |i: usize| -> VolGridResult<&str> {
            record.get(i).ok_or_else(|| {
                VolGridError::data_load(format!("data row {line} is missing column {i}"))
            })
        };
        let number = |i: usize| -> VolGridResult<f64> {
            let raw = field(i)?;
            raw.trim().parse::<f64>().map_err(|_| {
                VolGridError::data_load(format!("non-numeric cell {raw:?} in data row {line}"))
            })
        };

        let pair = CurrencyPair::parse(field(self.ccy)?)?;
        let seen = index.get(&pair).map_or(0, Vec::len);
        let tenor = *Tenor::ALL.get(seen).ok_or_else(|| {
            VolGridError::data_load(format!("more than {} rows for pair {pair}", Tenor::ALL.len()))
        })?;

        let mut vol = [0.0; 5];
        let mut shift_4w = [0.0; 5];
        let mut vol_pctl = [0.0; 5];
        for i in 0..5 {
            vol[i] = number(self.vol[i])?;
            shift_4w[i] = number(self.shift[i])?;
            vol_pctl[i] = number(self.pctl[i])?;
        }
        let mut carry = [0.0; 6];
        for i in 0..6 {
            carry[i] = number(self.carry[i])?;
        }

        Ok(VolRow {
            pair,
            tenor,
            vol,
            shift_4w,
            vol_pctl,
            carry,
        })
    }
}
