//! Inbound ports.

pub mod prompt;
