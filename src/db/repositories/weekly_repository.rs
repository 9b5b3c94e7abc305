use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::{AppError, AppResult};
use crate::models::metrics::MetricGroups;
use crate::models::weekly::WeeklyRecord;

#[derive(Debug, Clone)]
pub struct WeeklyRecordRow {
    pub week_start: String,
    pub week_end: String,
    pub metrics: String,
    pub created_at: String,
    pub updated_at: String,
}

impl WeeklyRecordRow {
    pub fn from_record(record: &WeeklyRecord) -> AppResult<Self> {
        Ok(Self {
            week_start: record.week_start.clone(),
            week_end: record.week_end.clone(),
            metrics: serde_json::to_string(&record.metrics)?,
            created_at: record.created_at.clone(),
            updated_at: record.updated_at.clone(),
        })
    }

    pub fn into_record(self) -> AppResult<WeeklyRecord> {
        let metrics: MetricGroups = serde_json::from_str(&self.metrics)?;
        Ok(WeeklyRecord {
            week_start: self.week_start,
            week_end: self.week_end,
            metrics,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl TryFrom<&Row<'_>> for WeeklyRecordRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            week_start: row.get("week_start")?,
            week_end: row.get("week_end")?,
            metrics: row.get("metrics")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

pub struct WeeklyRecordRepository;

impl WeeklyRecordRepository {
    pub fn list_all(conn: &Connection) -> AppResult<Vec<WeeklyRecord>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT week_start, week_end, metrics, created_at, updated_at
                FROM weekly_records
                ORDER BY week_start ASC
            "#,
        )?;

        let records = stmt
            .query_map([], |row| WeeklyRecordRow::try_from(row))?
            .map(|row| {
                row.map_err(AppError::from)
                    .and_then(|row| row.into_record())
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(records)
    }

    pub fn find_by_week(conn: &Connection, week_start: &str) -> AppResult<Option<WeeklyRecord>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT week_start, week_end, metrics, created_at, updated_at
                FROM weekly_records
                WHERE week_start = :week_start
            "#,
        )?;

        let row = stmt
            .query_row(named_params! {":week_start": week_start}, |row| {
                WeeklyRecordRow::try_from(row)
            })
            .optional()?;

        row.map(WeeklyRecordRow::into_record).transpose()
    }

    /// Inserts or fully replaces the week; `created_at` of an existing row is kept.
    pub fn upsert(conn: &Connection, record: &WeeklyRecord) -> AppResult<()> {
        let row = WeeklyRecordRow::from_record(record)?;

        conn.execute(
            r#"
                INSERT INTO weekly_records (
                    week_start,
                    week_end,
                    metrics,
                    created_at,
                    updated_at
                ) VALUES (
                    :week_start,
                    :week_end,
                    :metrics,
                    :created_at,
                    :updated_at
                )
                ON CONFLICT(week_start) DO UPDATE SET
                    week_end = excluded.week_end,
                    metrics = excluded.metrics,
                    updated_at = excluded.updated_at
            "#,
            named_params! {
                ":week_start": &row.week_start,
                ":week_end": &row.week_end,
                ":metrics": &row.metrics,
                ":created_at": &row.created_at,
                ":updated_at": &row.updated_at,
            },
        )?;

        Ok(())
    }

    pub fn delete_all(conn: &Connection) -> AppResult<usize> {
        let removed = conn.execute("DELETE FROM weekly_records", [])?;
        Ok(removed)
    }
}
