//! Error types for the Volgrid library.
//!
//! This module defines the error taxonomy used throughout Volgrid,
//! providing structured error handling with context.

use thiserror::Error;

use crate::types::Tenor;

/// A specialized Result type for Volgrid operations.
pub type VolGridResult<T> = Result<T, VolGridError>;

/// The main error type for Volgrid operations.
#[derive(Error, Debug)]
pub enum VolGridError {
    /// The source data could not be parsed into the expected two-level
    /// column structure.
    #[error("Failed to load dataset: {reason}")]
    DataLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// No currency pairs were requested.
    #[error("No currency pairs were requested")]
    EmptyRequest,

    /// Every requested currency pair was unknown to the dataset.
    #[error("No valid currency pairs among: {}", requested.join(", "))]
    NoValidCurrencies {
        /// The rejected request tokens, normalized to uppercase.
        requested: Vec<String>,
    },

    /// A resolved currency pair yielded no rows in the dataset.
    #[error("No dataset rows for currency pair: {pair}")]
    EmptySlice {
        /// The affected pair.
        pair: String,
    },

    /// A resolved currency pair is missing a tenor row.
    #[error("Currency pair {pair} has no {tenor} row")]
    MissingTenor {
        /// The affected pair.
        pair: String,
        /// The tenor with no row.
        tenor: Tenor,
    },

    /// A table could not be rendered to an image.
    #[error("Render failed: {reason}")]
    Render {
        /// Description of the failure.
        reason: String,
    },

    /// Underlying I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VolGridError {
    /// Creates a data load error.
    #[must_use]
    pub fn data_load(reason: impl Into<String>) -> Self {
        Self::DataLoad {
            reason: reason.into(),
        }
    }

    /// Creates an empty slice error.
    #[must_use]
    pub fn empty_slice(pair: impl Into<String>) -> Self {
        Self::EmptySlice { pair: pair.into() }
    }

    /// Creates a missing tenor error.
    #[must_use]
    pub fn missing_tenor(pair: impl Into<String>, tenor: Tenor) -> Self {
        Self::MissingTenor {
            pair: pair.into(),
            tenor,
        }
    }

    /// Creates a render error.
    #[must_use]
    pub fn render(reason: impl Into<String>) -> Self {
        Self::Render {
            reason: reason.into(),
        }
    }

    /// Returns true if the error leaves no usable work (fatal in batch
    /// context).
    #[must_use]
    pub fn is_fatal_request(&self) -> bool {
        matches!(
            self,
            VolGridError::EmptyRequest | VolGridError::NoValidCurrencies { .. }
        )
    }
}
