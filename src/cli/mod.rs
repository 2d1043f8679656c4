//! Command-line interface.
//!
//! [`commands`] holds the clap definitions, [`handlers`] one function per
//! subcommand printing either colored text or JSON.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
