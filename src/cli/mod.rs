//! Command line surface
//!
//! Argument parsing and the handlers behind each subcommand.

pub mod args;
pub mod commands;
