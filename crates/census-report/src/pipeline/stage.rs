use serde::{Deserialize, Serialize};

/// Stages of a report run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStage {
    /// Reading the source into a table
    Loading,
    /// Coercing numerics and dropping incomplete rows
    Cleaning,
    /// Computing the statistics
    Computing,
    /// Writing report files
    Writing,
}

impl ReportStage {
    /// Returns a human-readable name for the stage.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Loading => "Loading Data",
            Self::Cleaning => "Cleaning Data",
            Self::Computing => "Computing Statistics",
            Self::Writing => "Writing Outputs",
        }
    }

    /// 1-based position of the stage.
    pub fn step(&self) -> usize {
        match self {
            Self::Loading => 1,
            Self::Cleaning => 2,
            Self::Computing => 3,
            Self::Writing => 4,
        }
    }

    pub const COUNT: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_serialization() {
        let json = serde_json::to_string(&ReportStage::Computing).unwrap();
        assert_eq!(json, "\"computing\"");
    }

    #[test]
    fn test_stage_steps() {
        assert_eq!(ReportStage::Loading.step(), 1);
        assert_eq!(ReportStage::Writing.step(), ReportStage::COUNT);
        assert_eq!(ReportStage::Cleaning.display_name(), "Cleaning Data");
    }
}
