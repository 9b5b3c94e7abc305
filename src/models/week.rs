use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format used for week keys (`YYYY-MM-DD` of the Monday).
pub const WEEK_KEY_FORMAT: &str = "%Y-%m-%d";

/// Monday-to-Friday business week.
///
/// `value` is the canonical week key and sorts chronologically as a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub value: String,
}

impl WeekRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Weekly,
    Monthly,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Weekly => "weekly",
            ViewMode::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ViewMode {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "weekly" => Ok(ViewMode::Weekly),
            "monthly" => Ok(ViewMode::Monthly),
            other => Err(format!("unsupported view mode: {other}")),
        }
    }
}
