use crate::models::dashboard::{DashboardOverview, DashboardQueryParams};
use crate::models::week::WeekRange;
use crate::services::week_utils::{current_week, format_week_label};

use super::{today, AppState, CommandError, CommandResult};

pub fn dashboard_overview_fetch(
    state: &AppState,
    params: Option<DashboardQueryParams>,
) -> CommandResult<DashboardOverview> {
    let payload = params.unwrap_or_default();
    state
        .dashboard()
        .overview(payload, today())
        .map_err(CommandError::from)
}

pub fn weeks_for_month_fetch(state: &AppState, month_offset: Option<i32>) -> CommandResult<Vec<WeekRange>> {
    state
        .dashboard()
        .weeks_for_month(today(), month_offset.unwrap_or(0))
        .map_err(CommandError::from)
}

pub fn current_week_fetch() -> CommandResult<WeekRange> {
    current_week(today()).map_err(CommandError::from)
}

pub fn week_label_format(week_start: String) -> CommandResult<String> {
    format_week_label(&week_start).map_err(CommandError::from)
}
