//! Type conversion functions for data cleaning.

use crate::utils::parse_numeric;
use crate::error::Result;
use polars::prelude::*;

/// Convert a string series to `Float64`, turning unparseable values into nulls.
///
/// Returns the converted series and the number of present values that
/// failed to parse.
pub(crate) fn string_to_numeric(series: &Series) -> Result<(Series, usize)> {
    let str_series = series.str()?;
    let mut failed = 0;

    let values: Vec<Option<f64>> = str_series
        .into_iter()
        .map(|opt_val| {
            opt_val.and_then(|val| {
                let parsed = parse_numeric(val);
                if parsed.is_none() {
                    failed += 1;
                }
                parsed
            })
        })
        .collect();

    Ok((Series::new(series.name().clone(), values), failed))
}

/// Mask of rows that have a value in every column.
pub(crate) fn complete_rows_mask(df: &DataFrame) -> BooleanChunked {
    let mut keep = vec![true; df.height()];

    for col in df.get_columns() {
        let nulls = col.as_materialized_series().is_null();
        for (flag, is_null) in keep.iter_mut().zip(nulls.into_iter()) {
            if is_null.unwrap_or(false) {
                *flag = false;
            }
        }
    }

    BooleanChunked::from_slice("complete".into(), &keep)
}
