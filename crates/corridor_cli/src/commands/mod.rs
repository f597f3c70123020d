//! CLI commands.

pub mod api;
pub mod nested;
pub mod now;
pub mod singleton;
