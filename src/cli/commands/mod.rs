//! Subcommands of the `pacai` binary

pub mod learn;
pub mod search;
