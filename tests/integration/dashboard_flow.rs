use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::{tempdir, TempDir};
use weekly_dashboard_lib::commands::AppState;
use weekly_dashboard_lib::db::DbPool;
use weekly_dashboard_lib::models::dashboard::{CategoryTotals, DashboardQueryParams, KpiSummary};
use weekly_dashboard_lib::models::metrics::MetricGroup;
use weekly_dashboard_lib::models::note::NoteInsert;
use weekly_dashboard_lib::models::week::ViewMode;
use weekly_dashboard_lib::models::weekly::WeeklyRecordInput;
use weekly_dashboard_lib::services::settings_service::SettingsUpdateInput;

fn setup_state() -> (TempDir, AppState) {
    let dir = tempdir().expect("temp dir");
    let pool = DbPool::new(dir.path().join("dashboard.sqlite")).expect("db pool");
    let state = AppState::new(pool).expect("app state");
    (dir, state)
}

fn mid_october() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 15).expect("valid date")
}

fn monthly(month_offset: i32) -> DashboardQueryParams {
    DashboardQueryParams {
        month_offset,
        view_mode: Some(ViewMode::Monthly),
        selected_week: None,
    }
}

#[test]
fn weekly_view_defaults_to_current_week() {
    let (_dir, state) = setup_state();

    let overview = state
        .dashboard()
        .overview(DashboardQueryParams::default(), mid_october())
        .expect("overview");

    assert_eq!(overview.view_mode, ViewMode::Weekly);
    assert_eq!(overview.month_label, "October 2025");
    assert_eq!(overview.selected_week, "2025-10-13");
    assert_eq!(overview.display.marketing.emails_sent, 52_000);
    assert_eq!(overview.records.len(), 9);

    assert_eq!(
        overview.totals,
        CategoryTotals {
            marketing: 52_003,
            client: 10,
            resource: 65,
            mods: 4,
        }
    );
    assert_eq!(
        overview.kpis,
        KpiSummary {
            emails_sent: 52_000,
            meetings_scheduled: 3,
            profiles_submitted: 5,
            live_d365_registrations: 50,
        }
    );
}

#[test]
fn weekly_view_of_unsaved_week_shows_zeros() {
    let (_dir, state) = setup_state();

    let overview = state
        .dashboard()
        .overview(
            DashboardQueryParams {
                selected_week: Some("2025-09-29".to_string()),
                ..Default::default()
            },
            mid_october(),
        )
        .expect("overview");

    assert!(overview.display.is_zero());
    assert_eq!(overview.totals, CategoryTotals::default());
}

#[test]
fn monthly_view_hides_future_weeks_in_current_month() {
    let (_dir, state) = setup_state();

    let overview = state
        .dashboard()
        .overview(monthly(0), mid_october())
        .expect("overview");

    let keys: Vec<&str> = overview.weeks.iter().map(|week| week.value.as_str()).collect();
    assert_eq!(keys, vec!["2025-09-29", "2025-10-06", "2025-10-13"]);
    assert_eq!(overview.display.marketing.emails_sent, 97_000);
    assert_eq!(overview.records.len(), 2);
    assert!(overview.notes.is_empty());
}

#[test]
fn monthly_view_without_filter_sums_every_week() {
    let (_dir, state) = setup_state();
    state
        .settings()
        .update(SettingsUpdateInput {
            include_current_only: Some(false),
            ..Default::default()
        })
        .expect("settings update");

    let overview = state
        .dashboard()
        .overview(monthly(0), mid_october())
        .expect("overview");

    assert_eq!(overview.weeks.len(), 5);
    assert_eq!(overview.display.marketing.emails_sent, 200_000);
    assert_eq!(overview.records.len(), 4);
}

#[test]
fn next_month_ignores_current_week_filter() {
    let (_dir, state) = setup_state();

    let overview = state
        .dashboard()
        .overview(monthly(1), mid_october())
        .expect("overview");

    assert_eq!(overview.month_label, "November 2025");
    assert_eq!(overview.weeks.len(), 4);
    assert_eq!(overview.weeks[0].value, "2025-11-03");
    assert_eq!(overview.display.marketing.emails_sent, 208_000);
}

#[test]
fn default_view_setting_drives_overview() {
    let (_dir, state) = setup_state();
    state
        .settings()
        .update(SettingsUpdateInput {
            default_view: Some("monthly".to_string()),
            ..Default::default()
        })
        .expect("settings update");

    let overview = state
        .dashboard()
        .overview(DashboardQueryParams::default(), mid_october())
        .expect("overview");

    assert_eq!(overview.view_mode, ViewMode::Monthly);
    assert_eq!(overview.display.marketing.emails_sent, 97_000);
}

#[test]
fn weekly_view_includes_notes_for_selected_week() {
    let (_dir, state) = setup_state();
    let now = Utc
        .with_ymd_and_hms(2025, 10, 15, 9, 30, 0)
        .single()
        .expect("timestamp");

    state
        .notes()
        .add_note(
            NoteInsert {
                category: MetricGroup::Marketing,
                field: "emailsSent".to_string(),
                week_start: "2025-10-13".to_string(),
                text: "Campaign paused on Thursday".to_string(),
            },
            now,
        )
        .expect("add note");
    state
        .notes()
        .add_note(
            NoteInsert {
                category: MetricGroup::Client,
                field: "submitProfiles".to_string(),
                week_start: "2025-10-06".to_string(),
                text: "Other week".to_string(),
            },
            now,
        )
        .expect("add note");

    let overview = state
        .dashboard()
        .overview(DashboardQueryParams::default(), mid_october())
        .expect("overview");

    assert_eq!(overview.notes.len(), 1);
    assert_eq!(overview.notes[0].text, "Campaign paused on Thursday");
    assert_eq!(overview.notes[0].week_end, "2025-10-17");
}

#[test]
fn week_selector_follows_settings() {
    let (_dir, state) = setup_state();

    let weeks = state
        .dashboard()
        .weeks_for_month(mid_october(), 0)
        .expect("weeks");
    assert_eq!(weeks.len(), 3);
    assert_eq!(weeks[2].label, "13 Oct – 17 Oct");

    let december = state
        .dashboard()
        .weeks_for_month(mid_october(), 2)
        .expect("weeks");
    let keys: Vec<&str> = december.iter().map(|week| week.value.as_str()).collect();
    assert_eq!(
        keys,
        vec!["2025-12-01", "2025-12-08", "2025-12-15", "2025-12-22", "2025-12-29"]
    );
}

#[test]
fn invalid_selected_week_is_rejected() {
    let (_dir, state) = setup_state();

    let result = state.dashboard().overview(
        DashboardQueryParams {
            selected_week: Some("2025-13-01".to_string()),
            ..Default::default()
        },
        mid_october(),
    );

    assert!(result.is_err());
}

#[test]
fn overview_serializes_with_camel_case_keys() {
    let (_dir, state) = setup_state();

    let overview = state
        .dashboard()
        .overview(DashboardQueryParams::default(), mid_october())
        .expect("overview");
    let json = serde_json::to_value(&overview).expect("serialize overview");

    assert_eq!(json["viewMode"], "weekly");
    assert_eq!(json["selectedWeek"], "2025-10-13");
    assert_eq!(json["display"]["marketing"]["emailsSent"], 52_000);
    assert_eq!(json["totals"]["mod"], 4);
    assert_eq!(json["weeks"][0]["value"], "2025-09-29");
}

#[test]
fn saved_extreme_counts_do_not_break_overview() {
    let (_dir, state) = setup_state();
    let now = Utc
        .with_ymd_and_hms(2025, 10, 15, 9, 30, 0)
        .single()
        .expect("timestamp");

    let mut input = WeeklyRecordInput {
        week_start: "2025-10-13".to_string(),
        ..Default::default()
    };
    input.metrics.marketing.emails_sent = i64::MAX;
    input.metrics.marketing.total_meeting_schedule = 1;
    state.weekly().save_week(input, now).expect("save accepted");

    let weekly = state
        .dashboard()
        .overview(DashboardQueryParams::default(), mid_october())
        .expect("weekly overview");
    assert_eq!(weekly.totals.marketing, i64::MAX);

    let month = state
        .dashboard()
        .overview(monthly(0), mid_october())
        .expect("monthly overview");
    assert_eq!(month.display.marketing.emails_sent, i64::MAX);
    assert_eq!(month.totals.marketing, i64::MAX);
}
