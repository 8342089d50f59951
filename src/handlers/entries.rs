use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::filters;
use crate::handlers::notification::PanelError;
use crate::models::JournalEntry;
use crate::AppState;

pub const LOAD_ERROR: &str = "Error al cargar los asientos.";

#[derive(Template)]
#[template(path = "fragments/entry_list.html")]
pub struct EntryListTemplate {
    pub entries: Vec<JournalEntry>,
}

/// `GET /asientos`: the journal-entries panel body. New entries land in
/// this list without a re-fetch; the sale response prepends them.
pub async fn entries_fragment(State(state): State<AppState>) -> Response {
    match state.api.list_entries().await {
        Ok(entries) => {
            tracing::debug!(count = entries.len(), "Loaded journal entries");
            EntryListTemplate { entries }.into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to load journal entries");
            (err.status_code(), PanelError::new(LOAD_ERROR, &err)).into_response()
        }
    }
}
