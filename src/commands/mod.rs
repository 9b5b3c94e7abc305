pub mod dashboard;
pub mod notes;
pub mod settings;
pub mod weekly;

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{error, warn};

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::services::dashboard_service::DashboardService;
use crate::services::notes_service::NotesService;
use crate::services::record_store::{RecordStore, SqliteRecordStore};
use crate::services::settings_service::SettingsService;
use crate::services::weekly_service::WeeklyService;

#[derive(Clone)]
pub struct AppState {
    db_pool: DbPool,
    weekly_service: Arc<WeeklyService>,
    notes_service: Arc<NotesService>,
    settings_service: Arc<SettingsService>,
    dashboard_service: Arc<DashboardService>,
}

impl AppState {
    pub fn new(db_pool: DbPool) -> AppResult<Self> {
        let store: Arc<dyn RecordStore> = Arc::new(SqliteRecordStore::new(db_pool.clone()));
        let settings_service = Arc::new(SettingsService::new(db_pool.clone()));
        let notes_service = Arc::new(NotesService::new(db_pool.clone()));
        let weekly_service = Arc::new(WeeklyService::new(Arc::clone(&store)));
        let dashboard_service = Arc::new(DashboardService::new(
            Arc::clone(&store),
            Arc::clone(&notes_service),
            Arc::clone(&settings_service),
        ));

        if settings_service.get()?.seed_sample_data {
            weekly_service.ensure_seeded()?;
        }

        Ok(Self {
            db_pool,
            weekly_service,
            notes_service,
            settings_service,
            dashboard_service,
        })
    }

    pub fn weekly(&self) -> Arc<WeeklyService> {
        Arc::clone(&self.weekly_service)
    }

    pub fn notes(&self) -> Arc<NotesService> {
        Arc::clone(&self.notes_service)
    }

    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings_service)
    }

    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard_service)
    }

    pub fn db(&self) -> DbPool {
        self.db_pool.clone()
    }
}

/// Local calendar date used as "today" by every command.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn now() -> DateTime<Utc> {
    Utc::now()
}

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl CommandError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<JsonValue>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Validation {
                message, details, ..
            } => CommandError::new("VALIDATION_ERROR", message, details),
            AppError::NotFound => {
                CommandError::new("NOT_FOUND", "requested record does not exist", None)
            }
            AppError::Conflict { message } => {
                warn!(target: "app::command", %message, "conflict in command");
                CommandError::new("CONFLICT", message, None)
            }
            AppError::Database { message } => {
                error!(target: "app::command", %message, "database error in command");
                CommandError::new("UNKNOWN", message, None)
            }
            AppError::Serialization(error) => {
                error!(target: "app::command", error = %error, "serialization error in command");
                CommandError::new("UNKNOWN", "failed to encode or decode stored data", None)
            }
            AppError::Io(error) => {
                error!(target: "app::command", error = %error, "io error in command");
                CommandError::new("UNKNOWN", "file system access failed", None)
            }
            AppError::Other(message) => {
                error!(target: "app::command", %message, "unexpected error in command");
                CommandError::new("UNKNOWN", message, None)
            }
        }
    }
}
