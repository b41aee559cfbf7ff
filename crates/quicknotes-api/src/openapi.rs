//! OpenAPI document served at `/openapi.json` and rendered at `/docs`.

use utoipa::OpenApi;

use quicknotes_core::defaults::API_TITLE;
use quicknotes_core::{DeleteNoteResponse, Note, NoteIn};

use crate::handlers::{notes, system};

#[derive(OpenApi)]
#[openapi(
    paths(
        notes::create_note,
        notes::list_notes,
        notes::get_note,
        notes::update_note,
        notes::delete_note,
        system::health_check,
    ),
    components(schemas(Note, NoteIn, DeleteNoteResponse)),
    tags(
        (name = "Notes", description = "Note CRUD operations"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

/// The OpenAPI document with service title and crate version filled in.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = API_TITLE.to_string();
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc
}
