//! The cleaned census table.

use crate::error::{ReportError, Result};
use polars::prelude::*;

/// An immutable, fully populated census table.
///
/// Every row has a value in every column, and the numeric columns are
/// `Float64`. Only [`crate::cleaner::DataCleaner`] constructs one.
#[derive(Debug, Clone)]
pub struct CensusTable {
    df: DataFrame,
}

impl CensusTable {
    pub(crate) fn new(df: DataFrame) -> Self {
        Self { df }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Borrow the underlying frame.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// A categorical column by name.
    pub fn str_column(&self, name: &str) -> Result<&StringChunked> {
        let column = self
            .df
            .column(name)
            .map_err(|_| ReportError::ColumnNotFound(name.to_string()))?;
        Ok(column.as_materialized_series().str()?)
    }

    /// A coerced numeric column by name.
    pub fn numeric_column(&self, name: &str) -> Result<&Float64Chunked> {
        let column = self
            .df
            .column(name)
            .map_err(|_| ReportError::ColumnNotFound(name.to_string()))?;
        Ok(column.as_materialized_series().f64()?)
    }
}
