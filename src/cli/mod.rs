//! CLI commands
//!
//! Command implementations for the `tag-notes` binary.

mod notes;
mod style;

pub use notes::run_notes;
