//! doclookup CLI - Command-line interface for the doclookup service.
//!
//! This crate provides the `doclookup` binary: it runs the lookup HTTP
//! server, performs one-shot lookups against MongoDB and prints the
//! resolved lookup settings.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
