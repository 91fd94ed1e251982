//! Port traits at the application boundary.
//!
//! - [`inbound`] - How the interactive front end reads operator input
//! - [`outbound`] - How the roster reaches its record store

pub mod inbound;
pub mod outbound;
