use serde::{Deserialize, Serialize};

use super::metrics::MetricGroups;
use super::note::NoteRecord;
use super::week::{ViewMode, WeekRange};
use super::weekly::WeeklyRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQueryParams {
    #[serde(default)]
    pub month_offset: i32,
    /// Falls back to the stored default view when absent.
    #[serde(default)]
    pub view_mode: Option<ViewMode>,
    /// Week key; defaults to the current week.
    #[serde(default)]
    pub selected_week: Option<String>,
}

/// Badge totals shown on each category section.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    pub marketing: i64,
    pub client: i64,
    pub resource: i64,
    #[serde(rename = "mod")]
    pub mods: i64,
}

impl CategoryTotals {
    pub fn from_metrics(metrics: &MetricGroups) -> Self {
        Self {
            marketing: metrics
                .marketing
                .emails_sent
                .saturating_add(metrics.marketing.total_meeting_schedule),
            client: metrics
                .client
                .requirement_new
                .saturating_add(metrics.client.requirement_old)
                .saturating_add(metrics.client.submit_profiles),
            resource: metrics
                .resource
                .total_reachout
                .saturating_add(metrics.resource.register_on_live_d365),
            mods: metrics
                .mods
                .partner_registration
                .saturating_add(metrics.mods.client_registration),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub emails_sent: i64,
    pub meetings_scheduled: i64,
    pub profiles_submitted: i64,
    pub live_d365_registrations: i64,
}

impl KpiSummary {
    pub fn from_metrics(metrics: &MetricGroups) -> Self {
        Self {
            emails_sent: metrics.marketing.emails_sent,
            meetings_scheduled: metrics.marketing.total_meeting_schedule,
            profiles_submitted: metrics.client.submit_profiles,
            live_d365_registrations: metrics.resource.register_on_live_d365,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub month_label: String,
    pub month_offset: i32,
    pub view_mode: ViewMode,
    pub selected_week: String,
    pub weeks: Vec<WeekRange>,
    pub display: MetricGroups,
    pub totals: CategoryTotals,
    pub kpis: KpiSummary,
    pub records: Vec<WeeklyRecord>,
    pub notes: Vec<NoteRecord>,
}
