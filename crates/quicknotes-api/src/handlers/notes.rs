//! Note CRUD handlers.
//!
//! Each handler validates its input at the extractor boundary, runs exactly
//! one repository call, and serializes the result. Update and delete answer
//! the same way whether or not a row matched.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use quicknotes_core::defaults::{LIST_SKIP, LIST_TAKE};
use quicknotes_core::{DeleteNoteResponse, ListNotesRequest, Note, NoteIn};

use crate::{ApiError, AppState};

/// Offset/limit query for listing notes.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListNotesQuery {
    /// Rows to skip.
    #[serde(default = "default_skip")]
    #[param(default = 0, minimum = 0)]
    pub skip: u32,
    /// Maximum rows to return.
    #[serde(default = "default_take")]
    #[param(default = 20, minimum = 0)]
    pub take: u32,
}

fn default_skip() -> u32 {
    LIST_SKIP
}

fn default_take() -> u32 {
    LIST_TAKE
}

impl From<ListNotesQuery> for ListNotesRequest {
    fn from(query: ListNotesQuery) -> Self {
        Self {
            skip: query.skip,
            take: query.take,
        }
    }
}

/// Create a note.
///
/// POST /notes/
#[utoipa::path(post, path = "/notes/", tag = "Notes",
    request_body = NoteIn,
    responses(
        (status = 200, description = "Created note with its assigned id", body = Note),
        (status = 422, description = "Body failed validation")))]
pub async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<NoteIn>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let Json(input) = body?;
    let note = state.notes.insert(&input).await?;
    Ok(Json(note))
}

/// List notes with offset/limit pagination.
///
/// GET /notes/?skip=0&take=20
#[utoipa::path(get, path = "/notes/", tag = "Notes",
    params(ListNotesQuery),
    responses(
        (status = 200, description = "Page of notes", body = [Note]),
        (status = 422, description = "skip or take is not a non-negative integer")))]
pub async fn list_notes(
    State(state): State<AppState>,
    query: Result<Query<ListNotesQuery>, QueryRejection>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let Query(query) = query?;
    let notes = state.notes.list(query.into()).await?;
    Ok(Json(notes))
}

/// Get a note by id. Answers `null` when no row matches.
///
/// GET /notes/{note_id}
#[utoipa::path(get, path = "/notes/{note_id}", tag = "Notes",
    params(("note_id" = i32, Path, description = "Note id")),
    responses(
        (status = 200, description = "The note, or null if it does not exist", body = Note),
        (status = 422, description = "note_id is not an integer")))]
pub async fn get_note(
    State(state): State<AppState>,
    note_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Option<Note>>, ApiError> {
    let Path(id) = note_id?;
    let note = state.notes.fetch(id).await?;
    Ok(Json(note))
}

/// Overwrite a note's text and completed flag.
///
/// PUT /notes/{note_id}
#[utoipa::path(put, path = "/notes/{note_id}", tag = "Notes",
    params(("note_id" = i32, Path, description = "Note id")),
    request_body = NoteIn,
    responses(
        (status = 200, description = "The submitted values under the given id", body = Note),
        (status = 422, description = "Path or body failed validation")))]
pub async fn update_note(
    State(state): State<AppState>,
    note_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<NoteIn>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(id) = note_id?;
    let Json(input) = body?;

    let rows = state.notes.update(id, &input).await?;
    if rows == 0 {
        // Known gap: the response does not reveal that nothing was updated.
        debug!(subsystem = "api", note_id = id, "Update matched no row");
    }

    Ok(Json(Note::from_input(id, input)))
}

/// Delete a note.
///
/// DELETE /notes/{note_id}
#[utoipa::path(delete, path = "/notes/{note_id}", tag = "Notes",
    params(("note_id" = i32, Path, description = "Note id")),
    responses(
        (status = 200, description = "Confirmation message", body = DeleteNoteResponse),
        (status = 422, description = "note_id is not an integer")))]
pub async fn delete_note(
    State(state): State<AppState>,
    note_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteNoteResponse>, ApiError> {
    let Path(id) = note_id?;

    let rows = state.notes.delete(id).await?;
    if rows == 0 {
        debug!(subsystem = "api", note_id = id, "Delete matched no row");
    }

    Ok(Json(DeleteNoteResponse::for_id(id)))
}
