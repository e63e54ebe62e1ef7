//! Curriculum topic tool
//!
//! Validates curriculum topic labels and measures topic proximity.
//!
//! # Usage
//!
//! ```bash
//! curriculum exists console_io
//! curriculum distance console_io math_operation
//! curriculum match console_io demo-1=file_io demo-2=recursion
//! curriculum tree --format json
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/curriculum/config.toml)
//! 3. Environment variables (CURRICULUM_*)
//! 4. CLI flags

use anyhow::Result;

use curriculum_cli::{run, Cli};

fn main() -> Result<()> {
    run(Cli::parse_args())
}
