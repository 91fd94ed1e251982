//! Outbound ports.

pub mod store;
