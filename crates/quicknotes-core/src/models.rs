//! Note data model and the request/response shapes built on it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted note.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Note {
    pub id: i32,
    pub text: String,
    pub completed: bool,
}

impl Note {
    /// Attach an id to a note input.
    pub fn from_input(id: i32, input: NoteIn) -> Self {
        Self {
            id,
            text: input.text,
            completed: input.completed,
        }
    }
}

/// Body accepted by create and update.
///
/// `text` must be a JSON string. `completed` accepts any boolean-like value
/// understood by [`crate::coerce::FlexibleBool`]. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteIn {
    pub text: String,
    #[serde(deserialize_with = "crate::coerce::deserialize_bool")]
    pub completed: bool,
}

/// Confirmation returned by delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteNoteResponse {
    pub message: String,
}

impl DeleteNoteResponse {
    /// Build the confirmation for a note id. The message does not depend on
    /// whether a row was actually removed.
    pub fn for_id(id: i32) -> Self {
        Self {
            message: format!("Note with id: {} deleted successfully", id),
        }
    }
}
