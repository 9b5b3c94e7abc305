use serde::{Deserialize, Serialize};

use super::metrics::MetricGroup;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoteRecord {
    pub id: String,
    pub category: MetricGroup,
    pub field: String,
    pub week_start: String,
    pub week_end: String,
    pub text: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInsert {
    pub category: MetricGroup,
    pub field: String,
    pub week_start: String,
    pub text: String,
}
