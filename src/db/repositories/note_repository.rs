use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::{AppError, AppResult};
use crate::models::metrics::MetricGroup;
use crate::models::note::NoteRecord;

#[derive(Debug, Clone)]
pub struct NoteRow {
    pub id: String,
    pub category: String,
    pub field: String,
    pub week_start: String,
    pub week_end: String,
    pub text: String,
    pub created_at: String,
}

impl NoteRow {
    pub fn into_record(self) -> AppResult<NoteRecord> {
        let category = MetricGroup::try_from(self.category.as_str()).map_err(AppError::validation)?;

        Ok(NoteRecord {
            id: self.id,
            category,
            field: self.field,
            week_start: self.week_start,
            week_end: self.week_end,
            text: self.text,
            created_at: self.created_at,
        })
    }
}

impl TryFrom<&Row<'_>> for NoteRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.get("id")?,
            category: row.get("category")?,
            field: row.get("field")?,
            week_start: row.get("week_start")?,
            week_end: row.get("week_end")?,
            text: row.get("text")?,
            created_at: row.get("created_at")?,
        })
    }
}

pub struct NoteRepository;

impl NoteRepository {
    pub fn insert(conn: &Connection, note: &NoteRecord) -> AppResult<()> {
        conn.execute(
            r#"
                INSERT INTO notes (
                    id,
                    category,
                    field,
                    week_start,
                    week_end,
                    text,
                    created_at
                ) VALUES (
                    :id,
                    :category,
                    :field,
                    :week_start,
                    :week_end,
                    :text,
                    :created_at
                )
            "#,
            named_params! {
                ":id": &note.id,
                ":category": note.category.as_str(),
                ":field": &note.field,
                ":week_start": &note.week_start,
                ":week_end": &note.week_end,
                ":text": &note.text,
                ":created_at": &note.created_at,
            },
        )?;

        Ok(())
    }

    pub fn list_for_week(conn: &Connection, week_start: &str) -> AppResult<Vec<NoteRecord>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT id, category, field, week_start, week_end, text, created_at
                FROM notes
                WHERE week_start = :week_start
                ORDER BY created_at ASC, rowid ASC
            "#,
        )?;

        let notes = stmt
            .query_map(named_params! {":week_start": week_start}, |row| {
                NoteRow::try_from(row)
            })?
            .map(|row| {
                row.map_err(AppError::from)
                    .and_then(|row| row.into_record())
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(notes)
    }

    /// Earliest note attached to one metric row of a week.
    pub fn find_for_field(
        conn: &Connection,
        week_start: &str,
        category: MetricGroup,
        field: &str,
    ) -> AppResult<Option<NoteRecord>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT id, category, field, week_start, week_end, text, created_at
                FROM notes
                WHERE week_start = :week_start AND category = :category AND field = :field
                ORDER BY created_at ASC, rowid ASC
                LIMIT 1
            "#,
        )?;

        let row = stmt
            .query_row(
                named_params! {
                    ":week_start": week_start,
                    ":category": category.as_str(),
                    ":field": field,
                },
                |row| NoteRow::try_from(row),
            )
            .optional()?;

        row.map(NoteRow::into_record).transpose()
    }
}
