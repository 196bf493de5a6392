//! navgraph CLI library.
//!
//! Subcommand handlers and output formatting for the `navgraph-cli` binary.

pub mod commands;
pub mod output;
