//! Application services.

pub mod roster;
