use crate::models::metrics::MetricGroup;
use crate::models::note::{NoteInsert, NoteRecord};

use super::{now, AppState, CommandError, CommandResult};

pub fn notes_add(state: &AppState, payload: NoteInsert) -> CommandResult<NoteRecord> {
    state
        .notes()
        .add_note(payload, now())
        .map_err(CommandError::from)
}

pub fn notes_for_week(state: &AppState, week_start: String) -> CommandResult<Vec<NoteRecord>> {
    state
        .notes()
        .notes_for_week(&week_start)
        .map_err(CommandError::from)
}

pub fn notes_for_field(
    state: &AppState,
    week_start: String,
    category: MetricGroup,
    field: String,
) -> CommandResult<Option<String>> {
    state
        .notes()
        .note_for_field(&week_start, category, &field)
        .map_err(CommandError::from)
}
