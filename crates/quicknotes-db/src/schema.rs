//! Table bootstrap for the notes store.
//!
//! There are no migrations: the single table is created on startup if it is
//! missing and left alone otherwise.

use sqlx::PgPool;
use tracing::info;

use quicknotes_core::{Error, Result};

/// DDL for the notes table.
pub const CREATE_NOTES_TABLE: &str = "CREATE TABLE IF NOT EXISTS notes (
    id SERIAL PRIMARY KEY,
    text VARCHAR NOT NULL,
    completed BOOLEAN NOT NULL
)";

/// Create the notes table if it does not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_NOTES_TABLE)
        .execute(pool)
        .await
        .map_err(Error::Database)?;

    info!(
        subsystem = "database",
        component = "schema",
        op = "ensure",
        "Notes table ready"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddl_is_idempotent() {
        assert!(CREATE_NOTES_TABLE.starts_with("CREATE TABLE IF NOT EXISTS notes"));
    }

    #[test]
    fn test_ddl_columns() {
        assert!(CREATE_NOTES_TABLE.contains("id SERIAL PRIMARY KEY"));
        assert!(CREATE_NOTES_TABLE.contains("text VARCHAR"));
        assert!(CREATE_NOTES_TABLE.contains("completed BOOLEAN"));
    }
}
