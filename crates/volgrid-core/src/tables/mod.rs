//! Logical tables and declarative formatting intent.
//!
//! A [`LogicalTable`] is the unit handed to the renderer: a numeric matrix
//! with labels, a caption, numeric precision, and a list of
//! [`FormatRule`]s describing conditional styling (color scales, diverging
//! bars). The rules are pure data; how they become pixels is the
//! renderer's concern.

mod builder;
mod style;

pub use builder::{TableBuilder, VolTriplet};
pub use style::{BarStyle, ColorMap, ColorScale, GridStyle, Rgba};

use crate::error::{VolGridError, VolGridResult};

/// The rows a formatting rule applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleScope {
    /// Every cell in the table.
    All,
    /// A single row.
    Row(usize),
    /// An inclusive row span.
    RowSpan {
        /// First row of the span.
        from: usize,
        /// Last row of the span (inclusive).
        to: usize,
    },
}

impl RuleScope {
    /// Returns true if the scope covers the given row.
    #[must_use]
    pub fn contains(&self, row: usize) -> bool {
        match self {
            RuleScope::All => true,
            RuleScope::Row(r) => *r == row,
            RuleScope::RowSpan { from, to } => (*from..=*to).contains(&row),
        }
    }
}

/// Conditional cell styling.
#[derive(Debug, Clone)]
pub enum CellStyle {
    /// Background color from a diverging color scale.
    Scale(ColorScale),
    /// In-cell diverging bar from an alignment point.
    Bar(BarStyle),
}

/// A scoped formatting rule.
#[derive(Debug, Clone)]
pub struct FormatRule {
    /// Which rows the rule covers.
    pub scope: RuleScope,
    /// The styling to apply.
    pub style: CellStyle,
}

/// A numeric table with labels, caption, and formatting intent.
///
/// Built once by the [`TableBuilder`], consumed once by a renderer; never
/// persisted.
#[derive(Debug, Clone)]
pub struct LogicalTable {
    caption: String,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    cells: Vec<Vec<f64>>,
    precision: usize,
    rules: Vec<FormatRule>,
}

impl LogicalTable {
    /// Creates a table, validating that the cell matrix matches the
    /// labels.
    ///
    /// # Errors
    ///
    /// Returns [`VolGridError::Render`] when the matrix is ragged or its
    /// shape disagrees with the label counts.
    pub fn new(
        caption: impl Into<String>,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        cells: Vec<Vec<f64>>,
    ) -> VolGridResult<Self> {
        if cells.len() != row_labels.len() {
            return Err(VolGridError::render(format!(
                "table has {} rows but {} row labels",
                cells.len(),
                row_labels.len()
            )));
        }
        if let Some(bad) = cells.iter().find(|row| row.len() != col_labels.len()) {
            return Err(VolGridError::render(format!(
                "table row has {} cells but {} column labels",
                bad.len(),
                col_labels.len()
            )));
        }
        Ok(Self {
            caption: caption.into(),
            row_labels,
            col_labels,
            cells,
            precision: 2,
            rules: Vec::new(),
        })
    }

    /// Sets the numeric display precision.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Appends a formatting rule. Later rules win where scopes overlap.
    #[must_use]
    pub fn with_rule(mut self, scope: RuleScope, style: CellStyle) -> Self {
        self.rules.push(FormatRule { scope, style });
        self
    }

    /// Returns the table caption (the currency pair).
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Returns the row labels.
    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Returns the column labels.
    #[must_use]
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.col_labels.len()
    }

    /// Returns the value at (row, col).
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.cells[row][col]
    }

    /// Returns the numeric display precision.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Returns the formatting rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[FormatRule] {
        &self.rules
    }

    /// Formats the value at (row, col) at the table's precision.
    #[must_use]
    pub fn format_value(&self, row: usize, col: usize) -> String {
        format!("{:.*}", self.precision, self.cells[row][col])
    }

    /// Returns the effective rule for a row, if any covers it.
    #[must_use]
    pub fn rule_for_row(&self, row: usize) -> Option<&FormatRule> {
        self.rules.iter().rev().find(|rule| rule.scope.contains(row))
    }

    /// Returns the effective style for a row, if any rule covers it.
    #[must_use]
    pub fn style_for_row(&self, row: usize) -> Option<&CellStyle> {
        self.rule_for_row(row).map(|rule| &rule.style)
    }

    /// Returns every cell value covered by a scope, row-major. Bar extents
    /// normalize over this set.
    #[must_use]
    pub fn values_in_scope(&self, scope: &RuleScope) -> Vec<f64> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(row, _)| scope.contains(*row))
            .flat_map(|(_, cells)| cells.iter().copied())
            .collect()
    }
}
