//! # quicknotes-core
//!
//! Core types, traits, and abstractions for the quicknotes service.
//!
//! This crate provides the note data model, the request/response shapes, and
//! the repository trait that the database and API crates depend on.

pub mod coerce;
pub mod defaults;
pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use coerce::FlexibleBool;
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
