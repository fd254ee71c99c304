//! Boxing CLI library.
//!
//! This library provides the core functionality for the `boxing` command-line
//! interface: configuration, the session that owns the store and random
//! source, command execution, the REPL and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::Session;
