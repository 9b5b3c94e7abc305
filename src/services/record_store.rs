use std::collections::BTreeMap;
use std::sync::RwLock;

use tracing::debug;

use crate::db::repositories::weekly_repository::WeeklyRecordRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::weekly::WeeklyRecord;

/// Storage port for weekly records, keyed by `week_start`.
///
/// `write_one` is an upsert: it replaces an existing week wholesale, keeps
/// that week's original `created_at`, and stores `updated_at` as given.
pub trait RecordStore: Send + Sync {
    /// All records in ascending week order.
    fn read_all(&self) -> AppResult<Vec<WeeklyRecord>>;

    fn read_one(&self, week_key: &str) -> AppResult<Option<WeeklyRecord>>;

    /// Returns the record as stored.
    fn write_one(&self, record: WeeklyRecord) -> AppResult<WeeklyRecord>;

    /// Drops every record and stores `records` instead.
    fn replace_all(&self, records: &[WeeklyRecord]) -> AppResult<()>;
}

/// SQLite-backed store used by the application.
#[derive(Clone)]
pub struct SqliteRecordStore {
    db: DbPool,
}

impl SqliteRecordStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

impl RecordStore for SqliteRecordStore {
    fn read_all(&self) -> AppResult<Vec<WeeklyRecord>> {
        self.db.with_connection(WeeklyRecordRepository::list_all)
    }

    fn read_one(&self, week_key: &str) -> AppResult<Option<WeeklyRecord>> {
        self.db
            .with_connection(|conn| WeeklyRecordRepository::find_by_week(conn, week_key))
    }

    fn write_one(&self, record: WeeklyRecord) -> AppResult<WeeklyRecord> {
        self.db.with_transaction(|conn| {
            WeeklyRecordRepository::upsert(conn, &record)?;
            WeeklyRecordRepository::find_by_week(conn, &record.week_start)?
                .ok_or_else(|| AppError::database("weekly record missing after upsert"))
        })
    }

    fn replace_all(&self, records: &[WeeklyRecord]) -> AppResult<()> {
        self.db.with_transaction(|conn| {
            let removed = WeeklyRecordRepository::delete_all(conn)?;
            for record in records {
                WeeklyRecordRepository::upsert(conn, record)?;
            }
            debug!(target: "app::store", removed, inserted = records.len(), "weekly records replaced");
            Ok(())
        })
    }
}

/// Volatile store for callers that do not want a database file.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<BTreeMap<String, WeeklyRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = WeeklyRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.week_start.clone(), record))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn read_all(&self) -> AppResult<Vec<WeeklyRecord>> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        Ok(guard.values().cloned().collect())
    }

    fn read_one(&self, week_key: &str) -> AppResult<Option<WeeklyRecord>> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        Ok(guard.get(week_key).cloned())
    }

    fn write_one(&self, mut record: WeeklyRecord) -> AppResult<WeeklyRecord> {
        let mut guard = self.records.write().map_err(|_| poisoned())?;
        if let Some(existing) = guard.get(&record.week_start) {
            record.created_at = existing.created_at.clone();
        }
        guard.insert(record.week_start.clone(), record.clone());
        Ok(record)
    }

    fn replace_all(&self, records: &[WeeklyRecord]) -> AppResult<()> {
        let mut guard = self.records.write().map_err(|_| poisoned())?;
        guard.clear();
        for record in records {
            guard.insert(record.week_start.clone(), record.clone());
        }
        Ok(())
    }
}

fn poisoned() -> AppError {
    AppError::other("record store lock poisoned")
}
