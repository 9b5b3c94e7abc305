use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::AppResult;
use crate::models::dashboard::{CategoryTotals, DashboardOverview, DashboardQueryParams, KpiSummary};
use crate::models::metrics::MetricGroups;
use crate::models::week::{ViewMode, WeekRange};
use crate::services::aggregation::aggregate;
use crate::services::notes_service::NotesService;
use crate::services::record_store::RecordStore;
use crate::services::settings_service::SettingsService;
use crate::services::week_utils::{current_week, get_weeks_for_month, month_label, parse_week_key};

pub struct DashboardService {
    store: Arc<dyn RecordStore>,
    notes: Arc<NotesService>,
    settings: Arc<SettingsService>,
}

impl DashboardService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        notes: Arc<NotesService>,
        settings: Arc<SettingsService>,
    ) -> Self {
        Self {
            store,
            notes,
            settings,
        }
    }

    /// Weeks offered in the week selector for the given month.
    pub fn weeks_for_month(&self, today: NaiveDate, month_offset: i32) -> AppResult<Vec<WeekRange>> {
        let settings = self.settings.get()?;
        get_weeks_for_month(today, month_offset, settings.include_current_only)
    }

    pub fn overview(&self, params: DashboardQueryParams, today: NaiveDate) -> AppResult<DashboardOverview> {
        let settings = self.settings.get()?;
        let view_mode = params.view_mode.unwrap_or(settings.default_view);
        let weeks = get_weeks_for_month(today, params.month_offset, settings.include_current_only)?;

        let selected_week = match params.selected_week {
            Some(key) => {
                parse_week_key(&key)?;
                key
            }
            None => current_week(today)?.value,
        };

        let all_records = self.store.read_all()?;
        let month_keys: HashSet<&str> = weeks.iter().map(|week| week.value.as_str()).collect();

        let (display, records, notes) = match view_mode {
            ViewMode::Weekly => {
                let display = all_records
                    .iter()
                    .find(|record| record.week_start == selected_week)
                    .map(|record| record.metrics)
                    .unwrap_or_default();
                let notes = self.notes.notes_for_week(&selected_week)?;
                (display, all_records, notes)
            }
            ViewMode::Monthly => {
                let in_month: Vec<_> = all_records
                    .into_iter()
                    .filter(|record| month_keys.contains(record.week_start.as_str()))
                    .collect();
                let display: MetricGroups = aggregate(&in_month);
                (display, in_month, Vec::new())
            }
        };

        debug!(
            target: "app::dashboard",
            view = %view_mode,
            month_offset = params.month_offset,
            weeks = weeks.len(),
            records = records.len(),
            "dashboard overview computed"
        );

        Ok(DashboardOverview {
            month_label: month_label(today, params.month_offset)?,
            month_offset: params.month_offset,
            view_mode,
            selected_week,
            weeks,
            totals: CategoryTotals::from_metrics(&display),
            kpis: KpiSummary::from_metrics(&display),
            display,
            records,
            notes,
        })
    }
}
