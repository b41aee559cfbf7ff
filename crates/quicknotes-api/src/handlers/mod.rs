//! HTTP handlers for quicknotes-api.

pub mod notes;
pub mod system;
