//! Note repository implementation.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::debug;

use quicknotes_core::{Error, ListNotesRequest, Note, NoteIn, NoteRepository, Result};

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, input: &NoteIn) -> Result<Note> {
        let start = Instant::now();
        let note: Note = sqlx::query_as(
            "INSERT INTO notes (text, completed) VALUES ($1, $2) RETURNING id, text, completed",
        )
        .bind(&input.text)
        .bind(input.completed)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "insert",
            note_id = note.id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Note inserted"
        );
        Ok(note)
    }

    async fn list(&self, req: ListNotesRequest) -> Result<Vec<Note>> {
        let start = Instant::now();
        let notes: Vec<Note> =
            sqlx::query_as("SELECT id, text, completed FROM notes OFFSET $1 LIMIT $2")
                .bind(i64::from(req.skip))
                .bind(i64::from(req.take))
                .fetch_all(&self.pool)
                .await
                .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "list",
            skip = req.skip,
            take = req.take,
            result_count = notes.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Notes listed"
        );
        Ok(notes)
    }

    async fn fetch(&self, id: i32) -> Result<Option<Note>> {
        let note: Option<Note> =
            sqlx::query_as("SELECT id, text, completed FROM notes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "fetch",
            note_id = id,
            found = note.is_some(),
            "Note fetched"
        );
        Ok(note)
    }

    async fn update(&self, id: i32, input: &NoteIn) -> Result<u64> {
        let result = sqlx::query("UPDATE notes SET text = $1, completed = $2 WHERE id = $3")
            .bind(&input.text)
            .bind(input.completed)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        let rows = result.rows_affected();
        debug!(
            subsystem = "database",
            component = "notes",
            op = "update",
            note_id = id,
            rows_affected = rows,
            "Note updated"
        );
        Ok(rows)
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        let rows = result.rows_affected();
        debug!(
            subsystem = "database",
            component = "notes",
            op = "delete",
            note_id = id,
            rows_affected = rows,
            "Note deleted"
        );
        Ok(rows)
    }
}
