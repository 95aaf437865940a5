//! Command handlers, one module per subcommand.
//!
//! Each handler takes its parsed arguments plus whatever shared state it
//! needs (config, output) and returns a [`crate::error::CliResult`].

pub mod catalog;
pub mod config;
pub mod filters;
pub mod render;
pub mod validate;
