//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed student store using Diesel ORM.

pub mod database;
pub mod store;
