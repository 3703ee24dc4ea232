//! The ten census statistics.
//!
//! Each statistic is computed independently over a cleaned [`CensusTable`].
//! Statistics that are undefined for an empty subset come back as `None`.

use crate::error::Result;
use crate::reporting::Report;
use crate::schema::{
    AGE, BACHELORS, EDUCATION, HOURS_PER_WEEK, INDIA, MALE, NATIVE_COUNTRY, OCCUPATION, RACE,
    RICH_SALARY, SALARY, SEX, is_higher_education,
};
use crate::table::CensusTable;
use crate::types::CategoryCount;
use crate::utils::{mode, percentage, round_half_even, safe_ratio, value_counts};
use polars::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// The country with the highest share of rich rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryShare {
    pub country: String,
    /// Rounded to one decimal.
    pub percentage: f64,
}

/// Computes the statistics of a census report.
pub struct CensusStatistics;

impl CensusStatistics {
    /// Compute every statistic and assemble the report.
    pub fn compute(table: &CensusTable) -> Result<Report> {
        debug!("Computing statistics over {} rows", table.height());

        let (higher_education_rich, lower_education_rich) = Self::education_rich(table)?;
        let min_work_hours = Self::min_work_hours(table)?;
        let country = Self::highest_earning_country(table)?;

        Ok(Report {
            race_count: Self::race_count(table)?,
            average_age_men: Self::average_age_men(table)?,
            percentage_bachelors: Self::percentage_bachelors(table)?,
            higher_education_rich,
            lower_education_rich,
            min_work_hours,
            rich_percentage: Self::rich_percentage(table, min_work_hours)?,
            highest_earning_country: country.as_ref().map(|c| c.country.clone()),
            highest_earning_country_percentage: country.map(|c| c.percentage),
            top_in_occupation: Self::top_in_occupation(table)?,
        })
    }

    /// Rows per race, most frequent first.
    pub fn race_count(table: &CensusTable) -> Result<Vec<CategoryCount>> {
        let race = table.str_column(RACE)?;
        Ok(value_counts(race.into_iter().flatten()))
    }

    /// Mean age of male rows, rounded to one decimal.
    pub fn average_age_men(table: &CensusTable) -> Result<Option<f64>> {
        let males = table.str_column(SEX)?.equal(MALE);
        let ages = table.numeric_column(AGE)?.filter(&males)?;
        Ok(ages.mean().map(|mean| round_half_even(mean, 1)))
    }

    /// Share of rows with a Bachelors degree.
    pub fn percentage_bachelors(table: &CensusTable) -> Result<Option<f64>> {
        let bachelors = table.str_column(EDUCATION)?.equal(BACHELORS);
        Ok(percentage(count_true(&bachelors), table.height()))
    }

    /// Share of rich rows with and without higher education, in that order.
    pub fn education_rich(table: &CensusTable) -> Result<(Option<f64>, Option<f64>)> {
        let higher: BooleanChunked = table
            .str_column(EDUCATION)?
            .into_iter()
            .map(|education| education.map(is_higher_education))
            .collect();
        let lower = !&higher;
        let rich = rich_mask(table)?;

        let higher_rich = percentage(count_true(&(&higher & &rich)), count_true(&higher));
        let lower_rich = percentage(count_true(&(&lower & &rich)), count_true(&lower));

        Ok((higher_rich, lower_rich))
    }

    /// Fewest weekly hours worked, truncated to an integer.
    pub fn min_work_hours(table: &CensusTable) -> Result<Option<i64>> {
        let hours = table.numeric_column(HOURS_PER_WEEK)?;
        Ok(hours.min().map(|min| min.trunc() as i64))
    }

    /// Share of rich rows among those working exactly `min_work_hours`.
    pub fn rich_percentage(table: &CensusTable, min_work_hours: Option<i64>) -> Result<Option<f64>> {
        let Some(min_work_hours) = min_work_hours else {
            return Ok(None);
        };

        let min_workers = table
            .numeric_column(HOURS_PER_WEEK)?
            .equal(min_work_hours as f64);
        let rich = rich_mask(table)?;

        Ok(percentage(
            count_true(&(&min_workers & &rich)),
            count_true(&min_workers),
        ))
    }

    /// Country with the highest share of rich rows.
    ///
    /// Countries without rich rows have a share of zero. Equal shares resolve
    /// to the lexicographically smallest country.
    pub fn highest_earning_country(table: &CensusTable) -> Result<Option<CountryShare>> {
        let countries = table.str_column(NATIVE_COUNTRY)?;
        let rich = rich_mask(table)?;

        // country -> (rich rows, total rows)
        let mut tallies: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for (country, is_rich) in countries.into_iter().zip(rich.into_iter()) {
            let Some(country) = country else { continue };
            let tally = tallies.entry(country).or_insert((0, 0));
            if is_rich.unwrap_or(false) {
                tally.0 += 1;
            }
            tally.1 += 1;
        }

        let mut best: Option<(&str, f64)> = None;
        for (country, ratio) in tallies
            .iter()
            .filter_map(|(country, (rich, total))| safe_ratio(*rich, *total).map(|r| (*country, r)))
        {
            if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
                best = Some((country, ratio));
            }
        }

        Ok(best.map(|(country, ratio)| CountryShare {
            country: country.to_string(),
            percentage: round_half_even(ratio * 100.0, 1),
        }))
    }

    /// Most common occupation of rich rows from India.
    pub fn top_in_occupation(table: &CensusTable) -> Result<Option<String>> {
        let india = table.str_column(NATIVE_COUNTRY)?.equal(INDIA);
        let rich = rich_mask(table)?;
        let occupations = table.str_column(OCCUPATION)?.filter(&(&india & &rich))?;
        Ok(mode(occupations.into_iter().flatten()))
    }
}

fn rich_mask(table: &CensusTable) -> Result<BooleanChunked> {
    Ok(table.str_column(SALARY)?.equal(RICH_SALARY))
}

fn count_true(mask: &BooleanChunked) -> usize {
    mask.into_iter().filter(|flag| *flag == Some(true)).count()
}
