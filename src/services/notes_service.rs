use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::db::repositories::note_repository::NoteRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::metrics::MetricGroup;
use crate::models::note::{NoteInsert, NoteRecord};
use crate::services::week_utils::{ensure_monday_key, week_end_key};

/// Free-text remarks attached to one metric row of a week.
pub struct NotesService {
    db: DbPool,
}

impl NotesService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub fn add_note(&self, insert: NoteInsert, now: DateTime<Utc>) -> AppResult<NoteRecord> {
        ensure_monday_key(&insert.week_start)?;
        let text = insert.text.trim();
        if text.is_empty() {
            return Err(AppError::validation("note text must not be empty"));
        }
        let field = insert.field.trim();
        if field.is_empty() {
            return Err(AppError::validation_with_details(
                "note must name the metric it belongs to",
                json!({"category": insert.category.as_str()}),
            ));
        }

        let note = NoteRecord {
            id: Uuid::new_v4().to_string(),
            category: insert.category,
            field: field.to_string(),
            week_end: week_end_key(&insert.week_start)?,
            week_start: insert.week_start.clone(),
            text: text.to_string(),
            created_at: now.to_rfc3339(),
        };

        self.db
            .with_connection(|conn| NoteRepository::insert(conn, &note))?;
        info!(
            target: "app::notes",
            id = %note.id,
            week_start = %note.week_start,
            category = %note.category,
            "note added"
        );
        Ok(note)
    }

    pub fn notes_for_week(&self, week_start: &str) -> AppResult<Vec<NoteRecord>> {
        self.db
            .with_connection(|conn| NoteRepository::list_for_week(conn, week_start))
    }

    pub fn note_for_field(
        &self,
        week_start: &str,
        category: MetricGroup,
        field: &str,
    ) -> AppResult<Option<String>> {
        let note = self.db.with_connection(|conn| {
            NoteRepository::find_for_field(conn, week_start, category, field)
        })?;
        Ok(note.map(|note| note.text))
    }
}
