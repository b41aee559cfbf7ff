//! Default values shared across crates.

/// Rows skipped by the list operation when `skip` is omitted.
pub const LIST_SKIP: u32 = 0;

/// Rows returned by the list operation when `take` is omitted.
pub const LIST_TAKE: u32 = 20;

/// Upper bound on pooled store connections. No overflow beyond this.
pub const POOL_MAX_CONNECTIONS: u32 = 3;

/// Title advertised in the OpenAPI document.
pub const API_TITLE: &str = "Rest API using FastAPI PostgreSQL Async Endpoints";
