use tempfile::{tempdir, TempDir};
use weekly_dashboard_lib::commands::settings::{settings_get, settings_update, SettingsUpdatePayload};
use weekly_dashboard_lib::commands::weekly::{
    weekly_entry_get, weekly_entry_save, weekly_monthly_aggregation, weekly_reset_sample_data,
};
use weekly_dashboard_lib::commands::AppState;
use weekly_dashboard_lib::db::DbPool;
use weekly_dashboard_lib::models::weekly::WeeklyRecordInput;

fn setup_state() -> (TempDir, AppState) {
    let dir = tempdir().expect("temp dir");
    let pool = DbPool::new(dir.path().join("weekly.sqlite")).expect("db pool");
    let state = AppState::new(pool).expect("app state");
    (dir, state)
}

#[test]
fn new_database_is_seeded_with_sample_weeks() {
    let (_dir, state) = setup_state();

    let records = state.weekly().list_all().expect("list records");
    assert_eq!(records.len(), 9);
    assert_eq!(records[0].week_start, "2025-10-06");
    assert_eq!(records[8].week_start, "2025-12-01");
}

#[test]
fn seeding_respects_setting_on_reopen() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("reopen.sqlite");

    {
        let state = AppState::new(DbPool::new(&path).expect("db pool")).expect("app state");
        let payload: SettingsUpdatePayload =
            serde_json::from_str(r#"{"seedSampleData":false}"#).expect("payload");
        settings_update(&state, payload).expect("settings update");
        state
            .db()
            .with_connection(|conn| {
                conn.execute("DELETE FROM weekly_records", [])?;
                Ok(())
            })
            .expect("clear records");
    }

    let state = AppState::new(DbPool::new(&path).expect("db pool")).expect("app state");
    assert!(!settings_get(&state).expect("settings").seed_sample_data);
    assert!(state.weekly().list_all().expect("list records").is_empty());
}

#[test]
fn entry_for_unsaved_week_is_blank() {
    let (_dir, state) = setup_state();

    let record = weekly_entry_get(&state, "2026-01-05".to_string()).expect("entry");
    assert_eq!(record.week_end, "2026-01-09");
    assert!(record.metrics.is_zero());
    assert!(state
        .weekly()
        .find_week("2026-01-05")
        .expect("lookup")
        .is_none());
}

#[test]
fn save_then_get_returns_stored_values() {
    let (_dir, state) = setup_state();

    let payload: WeeklyRecordInput = serde_json::from_value(serde_json::json!({
        "weekStart": "2026-01-05",
        "marketing": {"emailsSent": 41000, "totalMeetingSchedule": 6},
        "client": {"submitProfiles": 4},
        "mod": {"partnerRegistration": 1}
    }))
    .expect("payload");

    let saved = weekly_entry_save(&state, payload).expect("save");
    assert_eq!(saved.week_end, "2026-01-09");
    assert_eq!(saved.metrics.marketing.emails_sent, 41_000);
    assert_eq!(saved.metrics.client.requirement_new, 0);

    let loaded = weekly_entry_get(&state, "2026-01-05".to_string()).expect("entry");
    assert_eq!(loaded, saved);
    assert_eq!(state.weekly().list_all().expect("list").len(), 10);
}

#[test]
fn resaving_a_week_replaces_metrics_and_keeps_created_at() {
    let (_dir, state) = setup_state();

    let original = weekly_entry_get(&state, "2025-10-06".to_string()).expect("entry");
    assert_eq!(original.created_at, "2025-10-10T10:00:00Z");

    let mut input = WeeklyRecordInput {
        week_start: "2025-10-06".to_string(),
        ..Default::default()
    };
    input.metrics.marketing.emails_sent = 1;

    let saved = weekly_entry_save(&state, input).expect("save");
    assert_eq!(saved.created_at, original.created_at);
    assert_ne!(saved.updated_at, original.updated_at);
    assert_eq!(saved.metrics.marketing.emails_sent, 1);
    assert_eq!(saved.metrics.marketing.positive_replies, 0);
}

#[test]
fn monthly_aggregation_command_sums_weeks_starting_in_month() {
    let (_dir, state) = setup_state();

    let november = weekly_monthly_aggregation(&state, 2025, 11)
        .expect("aggregation")
        .expect("november has data");
    assert_eq!(november.week_count, 4);
    assert_eq!(november.period_start, "2025-11-03");
    assert_eq!(november.period_end, "2025-11-28");
    assert_eq!(november.metrics.marketing.emails_sent, 208_000);

    let empty = weekly_monthly_aggregation(&state, 2024, 2).expect("aggregation");
    assert!(empty.is_none());
}

#[test]
fn reset_restores_sample_data() {
    let (_dir, state) = setup_state();

    let mut input = WeeklyRecordInput {
        week_start: "2026-02-02".to_string(),
        ..Default::default()
    };
    input.metrics.client.start_contract = 2;
    weekly_entry_save(&state, input).expect("save");
    assert_eq!(state.weekly().list_all().expect("list").len(), 10);

    let reset = weekly_reset_sample_data(&state).expect("reset");
    assert_eq!(reset.len(), 9);

    let stored = state.weekly().list_all().expect("list");
    assert_eq!(stored, reset);
}
