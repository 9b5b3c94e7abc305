use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use tracing::{info, warn};

use crate::db::repositories::settings_repository::SettingsRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::settings::DashboardSettings;
use crate::models::week::ViewMode;

const KEY_INCLUDE_CURRENT_ONLY: &str = "include_current_only";
const KEY_DEFAULT_VIEW: &str = "default_view";
const KEY_SEED_SAMPLE_DATA: &str = "seed_sample_data";

const DEFAULT_INCLUDE_CURRENT_ONLY: bool = true;
const DEFAULT_SEED_SAMPLE_DATA: bool = true;

#[derive(Debug, Default, Clone)]
pub struct SettingsUpdateInput {
    pub include_current_only: Option<bool>,
    pub default_view: Option<String>,
    pub seed_sample_data: Option<bool>,
}

pub struct SettingsService {
    db: DbPool,
    cache: RwLock<Option<DashboardSettings>>,
}

impl SettingsService {
    pub fn new(db: DbPool) -> Self {
        Self {
            db,
            cache: RwLock::new(None),
        }
    }

    pub fn get(&self) -> AppResult<DashboardSettings> {
        if let Ok(guard) = self.cache.read() {
            if let Some(settings) = guard.as_ref() {
                return Ok(settings.clone());
            }
        }

        let settings = self.load_settings_from_db()?;
        if let Ok(mut guard) = self.cache.write() {
            *guard = Some(settings.clone());
        }
        Ok(settings)
    }

    pub fn update(&self, input: SettingsUpdateInput) -> AppResult<DashboardSettings> {
        let mut current = self.get()?;
        let mut changes: Vec<(&str, String)> = Vec::new();

        if let Some(flag) = input.include_current_only {
            current.include_current_only = flag;
            changes.push((KEY_INCLUDE_CURRENT_ONLY, flag.to_string()));
        }

        if let Some(view) = input.default_view.as_ref() {
            let normalized = view.trim().to_lowercase();
            if normalized.is_empty() {
                return Err(AppError::validation("default view must not be empty"));
            }
            let mode = ViewMode::try_from(normalized.as_str())
                .map_err(|_| AppError::validation("default view must be weekly or monthly"))?;
            current.default_view = mode;
            changes.push((KEY_DEFAULT_VIEW, mode.as_str().to_string()));
        }

        if let Some(flag) = input.seed_sample_data {
            current.seed_sample_data = flag;
            changes.push((KEY_SEED_SAMPLE_DATA, flag.to_string()));
        }

        if changes.is_empty() {
            return Ok(current);
        }

        let stamp = Utc::now().to_rfc3339();
        self.db
            .with_transaction(|conn| SettingsRepository::upsert_many(conn, &changes, &stamp))?;
        current.updated_at = stamp;
        info!(target: "app::settings", changed = changes.len(), "dashboard settings updated");

        if let Ok(mut guard) = self.cache.write() {
            *guard = Some(current.clone());
        }

        Ok(current)
    }

    fn load_settings_from_db(&self) -> AppResult<DashboardSettings> {
        self.db.with_connection(|conn| {
            let values: HashMap<String, String> = SettingsRepository::list(conn)?
                .into_iter()
                .map(|row| (row.key, row.value))
                .collect();

            let include_current_only = parse_flag(
                values.get(KEY_INCLUDE_CURRENT_ONLY),
                KEY_INCLUDE_CURRENT_ONLY,
                DEFAULT_INCLUDE_CURRENT_ONLY,
            );
            let seed_sample_data = parse_flag(
                values.get(KEY_SEED_SAMPLE_DATA),
                KEY_SEED_SAMPLE_DATA,
                DEFAULT_SEED_SAMPLE_DATA,
            );
            let default_view = match values.get(KEY_DEFAULT_VIEW) {
                Some(raw) => ViewMode::try_from(raw.as_str()).unwrap_or_else(|err| {
                    warn!(target: "app::settings", error = %err, "ignoring stored default view");
                    ViewMode::default()
                }),
                None => ViewMode::default(),
            };

            let updated_at = SettingsRepository::last_updated(conn)?
                .unwrap_or_else(|| Utc::now().to_rfc3339());

            Ok(DashboardSettings {
                include_current_only,
                default_view,
                seed_sample_data,
                updated_at,
            })
        })
    }
}

fn parse_flag(raw: Option<&String>, key: &str, default: bool) -> bool {
    match raw.map(|value| value.trim()) {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        Some(other) => {
            warn!(target: "app::settings", key, value = other, "unrecognised flag value, using default");
            default
        }
        None => default,
    }
}
