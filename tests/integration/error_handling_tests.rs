use tempfile::{tempdir, TempDir};
use weekly_dashboard_lib::commands::dashboard::{week_label_format, weeks_for_month_fetch};
use weekly_dashboard_lib::commands::notes::notes_add;
use weekly_dashboard_lib::commands::settings::{settings_update, SettingsUpdatePayload};
use weekly_dashboard_lib::commands::weekly::{
    weekly_entry_get, weekly_entry_save, weekly_monthly_aggregation,
};
use weekly_dashboard_lib::commands::{AppState, CommandError};
use weekly_dashboard_lib::db::DbPool;
use weekly_dashboard_lib::error::AppError;
use weekly_dashboard_lib::models::metrics::MetricGroup;
use weekly_dashboard_lib::models::note::NoteInsert;
use weekly_dashboard_lib::models::weekly::WeeklyRecordInput;

fn setup_state() -> (TempDir, AppState) {
    let dir = tempdir().expect("temp dir");
    let pool = DbPool::new(dir.path().join("errors.sqlite")).expect("db pool");
    let state = AppState::new(pool).expect("app state");
    (dir, state)
}

#[test]
fn malformed_week_keys_map_to_validation_errors() {
    let (_dir, state) = setup_state();

    for key in ["", "2025-10", "2025-1-6", "06/10/2025", "2025-02-30"] {
        let err = weekly_entry_get(&state, key.to_string()).expect_err("malformed key");
        assert_eq!(err.code, "VALIDATION_ERROR", "key {key:?}");

        let err = week_label_format(key.to_string()).expect_err("malformed key");
        assert_eq!(err.code, "VALIDATION_ERROR", "key {key:?}");
    }
}

#[test]
fn non_monday_entry_reports_expected_monday() {
    let (_dir, state) = setup_state();

    let err = weekly_entry_get(&state, "2025-10-08".to_string()).expect_err("wednesday key");
    assert_eq!(err.code, "VALIDATION_ERROR");
    let details = err.details.expect("details");
    assert_eq!(details["monday"], "2025-10-06");
}

#[test]
fn negative_counts_are_rejected_with_field_details() {
    let (_dir, state) = setup_state();

    let mut input = WeeklyRecordInput {
        week_start: "2025-10-13".to_string(),
        ..Default::default()
    };
    input.metrics.mods.client_registration = -1;

    let err = weekly_entry_save(&state, input).expect_err("negative count");
    assert_eq!(err.code, "VALIDATION_ERROR");
    assert_eq!(err.details.expect("details")["field"], "mod.clientRegistration");

    let stored = state
        .weekly()
        .find_week("2025-10-13")
        .expect("lookup")
        .expect("sample week");
    assert_eq!(stored.metrics.mods.client_registration, 1);
}

#[test]
fn invalid_month_and_view_are_rejected() {
    let (_dir, state) = setup_state();

    let err = weekly_monthly_aggregation(&state, 2025, 0).expect_err("month zero");
    assert_eq!(err.code, "VALIDATION_ERROR");

    let payload: SettingsUpdatePayload =
        serde_json::from_str(r#"{"defaultView":"yearly"}"#).expect("payload");
    let err = settings_update(&state, payload).expect_err("unknown view");
    assert_eq!(err.code, "VALIDATION_ERROR");
}

#[test]
fn extreme_month_offset_is_rejected() {
    let (_dir, state) = setup_state();

    let err = weeks_for_month_fetch(&state, Some(i32::MAX)).expect_err("offset overflow");
    assert_eq!(err.code, "VALIDATION_ERROR");
}

#[test]
fn blank_note_text_is_rejected() {
    let (_dir, state) = setup_state();

    let err = notes_add(
        &state,
        NoteInsert {
            category: MetricGroup::Resource,
            field: "totalReachout".to_string(),
            week_start: "2025-10-06".to_string(),
            text: "   ".to_string(),
        },
    )
    .expect_err("blank note");
    assert_eq!(err.code, "VALIDATION_ERROR");
}

#[test]
fn corrupt_metrics_json_surfaces_as_unknown() {
    let (_dir, state) = setup_state();
    state
        .db()
        .with_connection(|conn| {
            conn.execute(
                "UPDATE weekly_records SET metrics = 'not json' WHERE week_start = '2025-10-06'",
                [],
            )?;
            Ok(())
        })
        .expect("corrupt row");

    let app_err = state.weekly().list_all().expect_err("corrupt metrics");
    assert!(matches!(app_err, AppError::Serialization(_)));

    let err: CommandError = app_err.into();
    assert_eq!(err.code, "UNKNOWN");
}

#[test]
fn stored_metrics_tolerate_missing_and_unknown_fields() {
    let (_dir, state) = setup_state();
    state
        .db()
        .with_connection(|conn| {
            conn.execute(
                "INSERT INTO weekly_records (week_start, week_end, metrics, created_at, updated_at)
                 VALUES ('2026-03-02', '2026-03-06', ?1, '2026-03-06T10:00:00Z', '2026-03-06T10:00:00Z')",
                [r#"{"marketing":{"emailsSent":7,"legacyCounter":3},"archived":true}"#],
            )?;
            Ok(())
        })
        .expect("insert legacy row");

    let record = weekly_entry_get(&state, "2026-03-02".to_string()).expect("legacy row");
    assert_eq!(record.metrics.marketing.emails_sent, 7);
    assert_eq!(record.metrics.marketing.positive_replies, 0);
    assert_eq!(record.metrics.resource.total_reachout, 0);
}

#[test]
fn command_error_serializes_without_empty_details() {
    let err = CommandError::from(AppError::NotFound);
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json.get("details").is_none());

    let err = CommandError::from(AppError::conflict("week already exists"));
    assert_eq!(err.code, "CONFLICT");
}
