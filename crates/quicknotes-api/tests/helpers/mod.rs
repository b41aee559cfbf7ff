//! Shared helpers for router tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

use quicknotes_api::{router, AppState};
use quicknotes_core::{Error, ListNotesRequest, Note, NoteIn, NoteRepository, Result};

/// In-memory NoteRepository. Rows keep insertion order.
#[derive(Default)]
pub struct InMemoryNotes {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: Vec<Note>,
}

impl InMemoryNotes {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNotes {
    async fn insert(&self, input: &NoteIn) -> Result<Note> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let note = Note::from_input(inner.next_id, input.clone());
        inner.rows.push(note.clone());
        Ok(note)
    }

    async fn list(&self, req: ListNotesRequest) -> Result<Vec<Note>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .iter()
            .skip(req.skip as usize)
            .take(req.take as usize)
            .cloned()
            .collect())
    }

    async fn fetch(&self, id: i32) -> Result<Option<Note>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|n| n.id == id).cloned())
    }

    async fn update(&self, id: i32, input: &NoteIn) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.text = input.text.clone();
                note.completed = input.completed;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|n| n.id != id);
        Ok((before - inner.rows.len()) as u64)
    }
}

/// Repository whose every call fails as if the store were down.
pub struct UnreachableNotes;

#[async_trait]
impl NoteRepository for UnreachableNotes {
    async fn insert(&self, _input: &NoteIn) -> Result<Note> {
        Err(Error::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list(&self, _req: ListNotesRequest) -> Result<Vec<Note>> {
        Err(Error::Database(sqlx::Error::PoolTimedOut))
    }

    async fn fetch(&self, _id: i32) -> Result<Option<Note>> {
        Err(Error::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _id: i32, _input: &NoteIn) -> Result<u64> {
        Err(Error::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i32) -> Result<u64> {
        Err(Error::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Router over a fresh in-memory store, plus a handle to inspect it.
pub fn memory_app() -> (Router, Arc<InMemoryNotes>) {
    let store = Arc::new(InMemoryNotes::default());
    let app = router(AppState::new(store.clone()));
    (app, store)
}

/// Send one request and decode the JSON response body (Null when empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
