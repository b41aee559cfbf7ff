//! # quicknotes-db
//!
//! PostgreSQL database layer for quicknotes.
//!
//! This crate provides:
//! - Connection settings composed from the environment
//! - Connection pool management with a small fixed bound
//! - Bootstrap of the single `notes` table
//! - The PostgreSQL [`NoteRepository`] implementation
//!
//! ## Example
//!
//! ```rust,ignore
//! use quicknotes_db::{Database, DatabaseSettings, NoteIn, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect_with_settings(&DatabaseSettings::from_env()?).await?;
//!     db.ensure_schema().await?;
//!
//!     let note = db.notes.insert(&NoteIn {
//!         text: "Hello, world!".to_string(),
//!         completed: false,
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     db.close().await;
//!     Ok(())
//! }
//! ```
//!
//! Log events carry `subsystem = "database"` plus `component`, `op`, and
//! where relevant `note_id`, `rows_affected`, `result_count`, `duration_ms`.

pub mod config;
pub mod notes;
pub mod pool;
pub mod schema;

// Test fixtures for integration tests.
// Always compiled so tests in other crates can share the per-test schema setup.
pub mod test_fixtures;

// Re-export core types
pub use quicknotes_core::*;

pub use config::DatabaseSettings;
pub use notes::PgNoteRepository;
pub use pool::{create_pool_with_config, log_pool_metrics, PoolConfig};
pub use schema::ensure_schema;

/// Database handle: the pool plus the repositories built on it.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Note repository for CRUD operations.
    pub notes: PgNoteRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            pool,
        }
    }

    /// Connect using environment-derived settings.
    pub async fn connect_with_settings(settings: &DatabaseSettings) -> Result<Self> {
        let config = PoolConfig::default().max_connections(settings.max_connections);
        let pool = create_pool_with_config(&settings.connection_url(), config).await?;
        Ok(Self::new(pool))
    }

    /// Create the notes table if it is missing.
    pub async fn ensure_schema(&self) -> Result<()> {
        ensure_schema(&self.pool).await
    }

    /// Close every pooled connection. Waits for checked-out connections to be
    /// returned first.
    pub async fn close(&self) {
        log_pool_metrics(&self.pool);
        self.pool.close().await;
        tracing::info!(
            subsystem = "database",
            component = "pool",
            op = "close",
            "Database connection pool closed"
        );
    }
}
