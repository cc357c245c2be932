//! CLI subcommand implementations.

pub mod lookup;
pub mod search;
