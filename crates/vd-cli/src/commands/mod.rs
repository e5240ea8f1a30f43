//! Subcommand implementations.

pub mod catalog;
pub mod play;
