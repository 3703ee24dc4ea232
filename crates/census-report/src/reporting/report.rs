//! The census report value and its console rendering.

use crate::types::CategoryCount;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// Console rendering of a statistic without a value.
pub const NO_VALUE: &str = "None";

/// The ten census statistics, in their fixed report order.
///
/// `None` marks a statistic that is undefined because its subset is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub race_count: Vec<CategoryCount>,
    pub average_age_men: Option<f64>,
    pub percentage_bachelors: Option<f64>,
    pub higher_education_rich: Option<f64>,
    pub lower_education_rich: Option<f64>,
    pub min_work_hours: Option<i64>,
    pub rich_percentage: Option<f64>,
    pub highest_earning_country: Option<String>,
    pub highest_earning_country_percentage: Option<f64>,
    #[serde(rename = "top_IN_occupation")]
    pub top_in_occupation: Option<String>,
}

impl Report {
    /// Statistic keys in report order.
    pub const STAT_NAMES: [&'static str; 10] = [
        "race_count",
        "average_age_men",
        "percentage_bachelors",
        "higher_education_rich",
        "lower_education_rich",
        "min_work_hours",
        "rich_percentage",
        "highest_earning_country",
        "highest_earning_country_percentage",
        "top_IN_occupation",
    ];

    /// The statistics as ordered `(key, value)` pairs.
    pub fn entries(&self) -> Vec<(&'static str, Value)> {
        let values = [
            json!(self.race_count),
            json!(self.average_age_men),
            json!(self.percentage_bachelors),
            json!(self.higher_education_rich),
            json!(self.lower_education_rich),
            json!(self.min_work_hours),
            json!(self.rich_percentage),
            json!(self.highest_earning_country),
            json!(self.highest_earning_country_percentage),
            json!(self.top_in_occupation),
        ];
        Self::STAT_NAMES.into_iter().zip(values).collect()
    }

    /// Total rows counted across races.
    pub fn total_rows(&self) -> usize {
        self.race_count.iter().map(|c| c.count).sum()
    }
}

fn decimal(value: Option<f64>) -> String {
    value.map_or_else(|| NO_VALUE.to_string(), |v| format!("{:.1}", v))
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| NO_VALUE.to_string(), |v| format!("{:.1}%", v))
}

fn text(value: &Option<impl fmt::Display>) -> String {
    value
        .as_ref()
        .map_or_else(|| NO_VALUE.to_string(), |v| v.to_string())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of each race:")?;
        for entry in &self.race_count {
            writeln!(f, "  {}: {}", entry.value, entry.count)?;
        }
        writeln!(f, "Average age of men: {}", decimal(self.average_age_men))?;
        writeln!(
            f,
            "Percentage with Bachelors degrees: {}",
            percent(self.percentage_bachelors)
        )?;
        writeln!(
            f,
            "Percentage with higher education that earn >50K: {}",
            percent(self.higher_education_rich)
        )?;
        writeln!(
            f,
            "Percentage without higher education that earn >50K: {}",
            percent(self.lower_education_rich)
        )?;
        match self.min_work_hours {
            Some(hours) => writeln!(f, "Min work time: {} hours/week", hours)?,
            None => writeln!(f, "Min work time: {}", NO_VALUE)?,
        }
        writeln!(
            f,
            "Percentage of rich among those who work fewest hours: {}",
            percent(self.rich_percentage)
        )?;
        writeln!(
            f,
            "Country with highest percentage of rich: {}",
            text(&self.highest_earning_country)
        )?;
        writeln!(
            f,
            "Highest percentage of rich people in country: {}",
            percent(self.highest_earning_country_percentage)
        )?;
        writeln!(
            f,
            "Top occupations in India: {}",
            text(&self.top_in_occupation)
        )
    }
}
