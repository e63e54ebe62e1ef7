//! Curriculum CLI library exports.
//!
//! This crate provides the `curriculum` binary for querying the topic
//! taxonomy.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (exists, path, distance, ...)
//! - `settings`: Layered configuration loading

pub mod cli;
pub mod commands;
pub mod settings;

pub use cli::{Candidate, Cli, Commands, OutputFormat};
pub use commands::{execute, init_logging, run};
pub use settings::Settings;
