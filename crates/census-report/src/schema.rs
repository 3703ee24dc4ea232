//! The fixed census schema.
//!
//! Source files carry no header row, so column names are assigned by
//! position from [`CENSUS_COLUMNS`].

pub const AGE: &str = "age";
pub const WORKCLASS: &str = "workclass";
pub const FNLWGT: &str = "fnlwgt";
pub const EDUCATION: &str = "education";
pub const EDUCATION_NUM: &str = "education-num";
pub const MARITAL_STATUS: &str = "marital-status";
pub const OCCUPATION: &str = "occupation";
pub const RELATIONSHIP: &str = "relationship";
pub const RACE: &str = "race";
pub const SEX: &str = "sex";
pub const CAPITAL_GAIN: &str = "capital-gain";
pub const CAPITAL_LOSS: &str = "capital-loss";
pub const HOURS_PER_WEEK: &str = "hours-per-week";
pub const NATIVE_COUNTRY: &str = "native-country";
pub const SALARY: &str = "salary";

/// Number of fields every record must carry.
pub const FIELD_COUNT: usize = 15;

/// Column names in file order.
pub const CENSUS_COLUMNS: [&str; FIELD_COUNT] = [
    AGE,
    WORKCLASS,
    FNLWGT,
    EDUCATION,
    EDUCATION_NUM,
    MARITAL_STATUS,
    OCCUPATION,
    RELATIONSHIP,
    RACE,
    SEX,
    CAPITAL_GAIN,
    CAPITAL_LOSS,
    HOURS_PER_WEEK,
    NATIVE_COUNTRY,
    SALARY,
];

/// Columns coerced to numbers during cleaning. All others stay strings.
pub const NUMERIC_COLUMNS: [&str; 2] = [AGE, HOURS_PER_WEEK];

// =============================================================================
// Category literals
// =============================================================================

pub const MALE: &str = "Male";
pub const BACHELORS: &str = "Bachelors";
pub const RICH_SALARY: &str = ">50K";
pub const INDIA: &str = "India";

/// Education levels counted as "higher education".
pub const HIGHER_EDUCATION: [&str; 3] = ["Bachelors", "Masters", "Doctorate"];

/// Whether an education value belongs to the higher-education group.
#[inline]
pub fn is_higher_education(education: &str) -> bool {
    HIGHER_EDUCATION.contains(&education)
}
