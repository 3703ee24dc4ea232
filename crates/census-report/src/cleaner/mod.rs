//! Data cleaning for loaded census tables.
//!
//! This module provides:
//! - Numeric coercion of `age` and `hours-per-week`
//! - Removal of every row that is missing a value in any column

mod converters;

use crate::error::{ReportError, Result};
use crate::schema::NUMERIC_COLUMNS;
use crate::table::CensusTable;
use crate::types::CleaningSummary;
use converters::{complete_rows_mask, string_to_numeric};
use polars::prelude::*;
use tracing::{debug, info, warn};

/// Data cleaner turning a raw string table into a [`CensusTable`].
pub struct DataCleaner;

impl DataCleaner {
    /// Coerce the numeric columns and drop incomplete rows.
    ///
    /// A value that fails numeric coercion becomes missing, which removes
    /// its whole row.
    pub fn clean(df: DataFrame) -> Result<(CensusTable, CleaningSummary)> {
        let mut df = df;
        let rows_loaded = df.height();
        let mut unparseable_numeric = 0;

        info!("Cleaning {} loaded rows...", rows_loaded);

        for name in NUMERIC_COLUMNS {
            let series = df
                .column(name)
                .map_err(|_| ReportError::ColumnNotFound(name.to_string()))?
                .as_materialized_series()
                .clone();

            let (numeric, failed) = string_to_numeric(&series)?;
            if failed > 0 {
                debug!("Column '{}': {} values failed numeric coercion", name, failed);
            }
            unparseable_numeric += failed;
            df.replace(name, numeric)?;
        }

        let mask = complete_rows_mask(&df);
        let df = df.filter(&mask)?;

        let summary = CleaningSummary {
            rows_loaded,
            rows_retained: df.height(),
            rows_dropped: rows_loaded - df.height(),
            unparseable_numeric,
        };

        if summary.rows_dropped > 0 {
            warn!(
                "Dropped {} incomplete rows ({:.1}%)",
                summary.rows_dropped,
                summary.rows_dropped_percentage()
            );
        } else {
            debug!("No incomplete rows found");
        }

        Ok((CensusTable::new(df), summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::CensusLoader;
    use crate::schema::{AGE, HOURS_PER_WEEK};

    const COMPLETE: &str = "39, State-gov, 77516, Bachelors, 13, Never-married, Adm-clerical, Not-in-family, White, Male, 2174, 0, 40, United-States, <=50K";
    const BAD_AGE: &str = "unknown, Private, 215646, HS-grad, 9, Divorced, Handlers-cleaners, Not-in-family, White, Male, 0, 0, 40, United-States, <=50K";
    const MISSING_WORKCLASS: &str = "53, , 234721, 11th, 7, Married-civ-spouse, Handlers-cleaners, Husband, Black, Male, 0, 0, 40, United-States, <=50K";

    fn clean(text: &str) -> (CensusTable, CleaningSummary) {
        let df = CensusLoader::default().load_reader(text.as_bytes()).unwrap();
        DataCleaner::clean(df).unwrap()
    }

    #[test]
    fn test_numeric_columns_are_coerced() {
        let (table, summary) = clean(COMPLETE);
        assert_eq!(summary.rows_retained, 1);
        assert_eq!(table.numeric_column(AGE).unwrap().get(0), Some(39.0));
        assert_eq!(table.numeric_column(HOURS_PER_WEEK).unwrap().get(0), Some(40.0));
    }

    #[test]
    fn test_unparseable_numeric_drops_row() {
        let (table, summary) = clean(&format!("{COMPLETE}\n{BAD_AGE}"));
        assert_eq!(table.height(), 1);
        assert_eq!(summary.rows_loaded, 2);
        assert_eq!(summary.rows_dropped, 1);
        assert_eq!(summary.unparseable_numeric, 1);
    }

    #[test]
    fn test_missing_categorical_drops_row() {
        let (table, summary) = clean(&format!("{MISSING_WORKCLASS}\n{COMPLETE}"));
        assert_eq!(table.height(), 1);
        assert_eq!(summary.rows_dropped, 1);
        assert_eq!(summary.unparseable_numeric, 0);
    }

    #[test]
    fn test_all_rows_dropped() {
        let (table, summary) = clean(&format!("{BAD_AGE}\n{MISSING_WORKCLASS}"));
        assert!(table.is_empty());
        assert_eq!(
            summary,
            CleaningSummary {
                rows_loaded: 2,
                rows_retained: 0,
                rows_dropped: 2,
                unparseable_numeric: 1,
            }
        );
        assert_eq!(summary.rows_dropped_percentage(), 100.0);
    }
}
