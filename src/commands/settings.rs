use serde::Deserialize;

use crate::models::settings::DashboardSettings;
use crate::services::settings_service::SettingsUpdateInput;

use super::{AppState, CommandError, CommandResult};

pub fn settings_get(state: &AppState) -> CommandResult<DashboardSettings> {
    state.settings().get().map_err(CommandError::from)
}

pub fn settings_update(
    state: &AppState,
    payload: SettingsUpdatePayload,
) -> CommandResult<DashboardSettings> {
    state
        .settings()
        .update(payload.into_input())
        .map_err(CommandError::from)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdatePayload {
    #[serde(default)]
    include_current_only: Option<bool>,
    #[serde(default)]
    default_view: Option<String>,
    #[serde(default)]
    seed_sample_data: Option<bool>,
}

impl SettingsUpdatePayload {
    fn into_input(self) -> SettingsUpdateInput {
        SettingsUpdateInput {
            include_current_only: self.include_current_only,
            default_view: self.default_view,
            seed_sample_data: self.seed_sample_data,
        }
    }
}
