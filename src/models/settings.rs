use serde::Serialize;

use super::week::ViewMode;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    /// Hide weeks after the current one when viewing the current month.
    pub include_current_only: bool,
    pub default_view: ViewMode,
    /// Load demonstration weeks into an empty store on startup.
    pub seed_sample_data: bool,
    pub updated_at: String,
}
