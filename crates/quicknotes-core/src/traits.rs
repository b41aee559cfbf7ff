//! Repository trait for the notes table.
//!
//! The API crate only talks to storage through [`NoteRepository`], which lets
//! the router run against PostgreSQL in production and an in-memory store in
//! tests.

use async_trait::async_trait;

use crate::defaults::{LIST_SKIP, LIST_TAKE};
use crate::error::Result;
use crate::models::{Note, NoteIn};

/// Request for listing notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNotesRequest {
    /// Rows to skip before returning results.
    pub skip: u32,
    /// Maximum rows to return.
    pub take: u32,
}

impl Default for ListNotesRequest {
    fn default() -> Self {
        Self {
            skip: LIST_SKIP,
            take: LIST_TAKE,
        }
    }
}

/// Repository for note CRUD operations.
///
/// Each method issues exactly one statement. Update and delete report the
/// number of rows they touched; callers are free to ignore it.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note and return it with its store-assigned id.
    async fn insert(&self, input: &NoteIn) -> Result<Note>;

    /// List notes in the store's natural order with offset/limit.
    async fn list(&self, req: ListNotesRequest) -> Result<Vec<Note>>;

    /// Fetch a note by id, `None` if no row matches.
    async fn fetch(&self, id: i32) -> Result<Option<Note>>;

    /// Overwrite text and completed for a note. Returns rows affected.
    async fn update(&self, id: i32, input: &NoteIn) -> Result<u64>;

    /// Delete a note. Returns rows affected.
    async fn delete(&self, id: i32) -> Result<u64>;
}
