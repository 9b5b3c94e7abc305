use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use serde_json::json;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::weekly::{PeriodAggregate, WeeklyRecord, WeeklyRecordInput};
use crate::services::aggregation::aggregate_period;
use crate::services::record_store::RecordStore;
use crate::services::sample_data::sample_weeks;
use crate::services::week_utils::{ensure_monday_key, parse_week_key, week_end_key};

/// Weekly entry form backend: load, save and month roll-ups.
pub struct WeeklyService {
    store: Arc<dyn RecordStore>,
}

impl WeeklyService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn list_all(&self) -> AppResult<Vec<WeeklyRecord>> {
        self.store.read_all()
    }

    pub fn find_week(&self, week_start: &str) -> AppResult<Option<WeeklyRecord>> {
        parse_week_key(week_start)?;
        self.store.read_one(week_start)
    }

    /// Stored record for the week, or an unsaved all-zero one.
    pub fn load_for_entry(&self, week_start: &str, now: DateTime<Utc>) -> AppResult<WeeklyRecord> {
        ensure_monday_key(week_start)?;
        match self.store.read_one(week_start)? {
            Some(record) => Ok(record),
            None => Ok(WeeklyRecord::empty(
                week_start,
                week_end_key(week_start)?,
                now.to_rfc3339(),
            )),
        }
    }

    pub fn save_week(&self, input: WeeklyRecordInput, now: DateTime<Utc>) -> AppResult<WeeklyRecord> {
        ensure_monday_key(&input.week_start)?;

        if let Some(field) = input.metrics.first_negative() {
            return Err(AppError::validation_with_details(
                "metric counts must not be negative",
                json!({"weekStart": input.week_start, "field": field}),
            ));
        }

        let stamp = now.to_rfc3339();
        let record = WeeklyRecord {
            week_end: week_end_key(&input.week_start)?,
            week_start: input.week_start,
            metrics: input.metrics,
            created_at: stamp.clone(),
            updated_at: stamp,
        };

        let saved = self.store.write_one(record)?;
        info!(
            target: "app::weekly",
            week_start = %saved.week_start,
            "weekly record saved"
        );
        Ok(saved)
    }

    /// Sums the weeks whose Monday falls inside the calendar month.
    ///
    /// A week starting in the previous month is not counted here even when it
    /// overlaps; the dashboard's monthly view uses overlap instead.
    pub fn monthly_aggregation(&self, year: i32, month: u32) -> AppResult<Option<PeriodAggregate>> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation_with_details(
                "month must be between 1 and 12",
                json!({"year": year, "month": month}),
            ));
        }

        let mut in_month = Vec::new();
        for record in self.store.read_all()? {
            let start = parse_week_key(&record.week_start)?;
            if start.year() == year && start.month() == month {
                in_month.push(record);
            }
        }

        debug!(target: "app::weekly", year, month, weeks = in_month.len(), "monthly aggregation");
        Ok(aggregate_period(&in_month))
    }

    /// Loads the sample weeks when the store is empty. Returns whether it did.
    pub fn ensure_seeded(&self) -> AppResult<bool> {
        if !self.store.read_all()?.is_empty() {
            return Ok(false);
        }
        let sample = sample_weeks();
        self.store.replace_all(&sample)?;
        info!(target: "app::weekly", weeks = sample.len(), "seeded sample weekly data");
        Ok(true)
    }

    pub fn reset_to_sample_data(&self) -> AppResult<Vec<WeeklyRecord>> {
        let sample = sample_weeks();
        self.store.replace_all(&sample)?;
        info!(target: "app::weekly", weeks = sample.len(), "weekly data reset to sample");
        Ok(sample)
    }
}
