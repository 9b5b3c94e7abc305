use std::convert::TryFrom;

use rusqlite::{named_params, Connection, Row};

use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct SettingRow {
    pub key: String,
    pub value: String,
    pub updated_at: String,
}

impl TryFrom<&Row<'_>> for SettingRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            key: row.get("key")?,
            value: row.get("value")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

/// Key/value access to the `app_settings` table.
pub struct SettingsRepository;

impl SettingsRepository {
    pub fn list(conn: &Connection) -> AppResult<Vec<SettingRow>> {
        let mut stmt =
            conn.prepare("SELECT key, value, updated_at FROM app_settings ORDER BY key ASC")?;

        let rows = stmt
            .query_map([], |row| SettingRow::try_from(row))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Most recent `updated_at` across all settings.
    pub fn last_updated(conn: &Connection) -> AppResult<Option<String>> {
        let latest = conn.query_row("SELECT MAX(updated_at) FROM app_settings", [], |row| {
            row.get::<_, Option<String>>(0)
        })?;
        Ok(latest)
    }

    /// Writes every entry with the same RFC 3339 `updated_at` stamp.
    pub fn upsert_many(
        conn: &Connection,
        entries: &[(&str, String)],
        updated_at: &str,
    ) -> AppResult<()> {
        let mut stmt = conn.prepare(
            r#"
                INSERT INTO app_settings (key, value, updated_at)
                VALUES (:key, :value, :updated_at)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
            "#,
        )?;

        for (key, value) in entries {
            stmt.execute(named_params! {
                ":key": key,
                ":value": value,
                ":updated_at": updated_at,
            })?;
        }

        Ok(())
    }
}
