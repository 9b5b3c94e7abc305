use crate::models::weekly::{PeriodAggregate, WeeklyRecord, WeeklyRecordInput};

use super::{now, AppState, CommandError, CommandResult};

pub fn weekly_entry_get(state: &AppState, week_start: String) -> CommandResult<WeeklyRecord> {
    state
        .weekly()
        .load_for_entry(&week_start, now())
        .map_err(CommandError::from)
}

pub fn weekly_entry_save(state: &AppState, payload: WeeklyRecordInput) -> CommandResult<WeeklyRecord> {
    state
        .weekly()
        .save_week(payload, now())
        .map_err(CommandError::from)
}

pub fn weekly_monthly_aggregation(
    state: &AppState,
    year: i32,
    month: u32,
) -> CommandResult<Option<PeriodAggregate>> {
    state
        .weekly()
        .monthly_aggregation(year, month)
        .map_err(CommandError::from)
}

pub fn weekly_reset_sample_data(state: &AppState) -> CommandResult<Vec<WeeklyRecord>> {
    state
        .weekly()
        .reset_to_sample_data()
        .map_err(CommandError::from)
}
