//! Reading the headerless census source into a polars table.
//!
//! Every field is trimmed and kept as a string; missing markers become
//! nulls. Numeric coercion happens later in [`crate::cleaner`].

use crate::error::DataLoadError;
use crate::schema::{CENSUS_COLUMNS, FIELD_COUNT};
use crate::utils::is_missing_marker;
use polars::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Loader for fixed-schema census files.
#[derive(Debug, Clone, Copy)]
pub struct CensusLoader {
    delimiter: u8,
}

impl Default for CensusLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CensusLoader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Load a census file from disk.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<DataFrame, DataLoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataLoadError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        self.load_reader(file)
    }

    /// Load census records from any reader.
    ///
    /// All rows must carry exactly [`FIELD_COUNT`] fields; the first row that
    /// does not aborts the load.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<DataFrame, DataLoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); FIELD_COUNT];
        let mut record = csv::StringRecord::new();

        while rdr.read_record(&mut record)? {
            if record.len() != FIELD_COUNT {
                return Err(DataLoadError::FieldCount {
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    expected: FIELD_COUNT,
                    found: record.len(),
                });
            }

            for (values, field) in columns.iter_mut().zip(record.iter()) {
                if is_missing_marker(field) {
                    values.push(None);
                } else {
                    values.push(Some(field.to_string()));
                }
            }
        }

        let rows = columns[0].len();
        if rows == 0 {
            return Err(DataLoadError::EmptySource);
        }
        debug!("Parsed {} records", rows);

        let frame_columns: Vec<Column> = CENSUS_COLUMNS
            .iter()
            .zip(columns)
            .map(|(name, values)| Series::new((*name).into(), values).into())
            .collect();

        Ok(DataFrame::new(frame_columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AGE, NATIVE_COUNTRY, OCCUPATION, SALARY};

    const ROW: &str = "39, State-gov, 77516, Bachelors, 13, Never-married, Adm-clerical, Not-in-family, White, Male, 2174, 0, 40, United-States, <=50K";

    fn load(text: &str) -> Result<DataFrame, DataLoadError> {
        CensusLoader::default().load_reader(text.as_bytes())
    }

    #[test]
    fn test_load_assigns_schema_names() {
        let df = load(ROW).unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), FIELD_COUNT);

        let names: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, CENSUS_COLUMNS.to_vec());
    }

    #[test]
    fn test_load_trims_fields() {
        let df = load(ROW).unwrap();
        let country = df.column(NATIVE_COUNTRY).unwrap().str().unwrap();
        assert_eq!(country.get(0), Some("United-States"));
        let age = df.column(AGE).unwrap().str().unwrap();
        assert_eq!(age.get(0), Some("39"));
    }

    #[test]
    fn test_missing_markers_become_null() {
        let text = "39, State-gov, 77516, Bachelors, 13, Never-married, , Not-in-family, White, Male, 2174, 0, 40, United-States, NA";
        let df = load(text).unwrap();
        assert_eq!(df.column(OCCUPATION).unwrap().null_count(), 1);
        assert_eq!(df.column(SALARY).unwrap().null_count(), 1);
    }

    #[test]
    fn test_question_mark_is_a_value() {
        let text = "39, ?, 77516, Bachelors, 13, Never-married, ?, Not-in-family, White, Male, 2174, 0, 40, ?, <=50K";
        let df = load(text).unwrap();
        assert_eq!(df.column(OCCUPATION).unwrap().null_count(), 0);
    }

    #[test]
    fn test_short_row_is_rejected() {
        let short = "50, Self-emp-not-inc, 83311, Bachelors, 13, Married-civ-spouse, Exec-managerial, Husband, White, Male, 0, 0, 13, United-States";
        let text = format!("{ROW}\n{short}\n{ROW}\n");

        match load(&text) {
            Err(DataLoadError::FieldCount {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 15);
                assert_eq!(found, 14);
            }
            other => panic!("Expected FieldCount error, got {:?}", other),
        }
    }

    #[test]
    fn test_long_row_is_rejected() {
        let text = format!("{ROW}, extra");
        assert!(matches!(
            load(&text),
            Err(DataLoadError::FieldCount { found: 16, .. })
        ));
    }

    #[test]
    fn test_empty_source() {
        assert!(matches!(load(""), Err(DataLoadError::EmptySource)));
    }

    #[test]
    fn test_missing_file() {
        let result = CensusLoader::default().load_path("definitely/not/here.csv");
        assert!(matches!(result, Err(DataLoadError::NotFound(_))));
    }

    #[test]
    fn test_custom_delimiter() {
        let text = ROW.replace(", ", ";");
        let df = CensusLoader::new(b';').load_reader(text.as_bytes()).unwrap();
        assert_eq!(df.height(), 1);
        let salary = df.column(SALARY).unwrap().str().unwrap();
        assert_eq!(salary.get(0), Some("<=50K"));
    }
}
