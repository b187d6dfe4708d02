//! Command-line interface
//!
//! Argument parsing and command handlers for the `stepcards` binary.

pub mod args;
pub mod commands;
