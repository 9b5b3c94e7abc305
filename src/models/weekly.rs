use serde::{Deserialize, Serialize};

use super::metrics::MetricGroups;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRecord {
    pub week_start: String,
    pub week_end: String,
    #[serde(flatten)]
    pub metrics: MetricGroups,
    pub created_at: String,
    pub updated_at: String,
}

impl WeeklyRecord {
    /// All-zero record for a week that has never been saved.
    pub fn empty(
        week_start: impl Into<String>,
        week_end: impl Into<String>,
        now: impl Into<String>,
    ) -> Self {
        let now = now.into();
        Self {
            week_start: week_start.into(),
            week_end: week_end.into(),
            metrics: MetricGroups::default(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Payload submitted from the weekly entry form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRecordInput {
    pub week_start: String,
    #[serde(flatten)]
    pub metrics: MetricGroups,
}

/// Sum of several weeks, spanning the first `week_start` to the last `week_end`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodAggregate {
    pub period_start: String,
    pub period_end: String,
    pub week_count: usize,
    #[serde(flatten)]
    pub metrics: MetricGroups,
}
