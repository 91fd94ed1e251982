//! Roster - a student record keeper backed by SQLite.
//!
//! Records carry an id, name, age and grade. The id is unique; every
//! create, update and delete checks it before touching the database.
//!
//! # Architecture
//!
//! - [`domain`] - `Student`, `StudentId` and roster errors
//! - [`port`] - `StudentStore` (persistence) and `Prompt` (operator input) traits
//! - [`application`] - `Roster`, the lookup-then-mutate service
//! - [`adapter`] - SQLite store via Diesel, and the clap/dialoguer CLI
//! - [`infrastructure`] - TOML configuration and tracing setup
//!
//! # Example
//!
//! ```no_run
//! use roster::adapter::outbound::sqlite::database::connection::{open, PoolSettings};
//! use roster::adapter::outbound::sqlite::store::SqliteStudentStore;
//! use roster::application::roster::Roster;
//! use roster::domain::{Student, StudentId};
//!
//! fn main() -> roster::error::Result<()> {
//!     let pool = open("students.db", &PoolSettings::default())?;
//!     let roster = Roster::new(SqliteStudentStore::new(pool));
//!     roster.add(Student::new(StudentId::new(1), "Ada", 12, "A"))?;
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
