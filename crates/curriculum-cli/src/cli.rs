//! CLI argument parsing for the curriculum tool.
//!
//! CLI flags override all other config sources.

use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use curriculum_topics::Tagged;

/// Curriculum topic tool
///
/// Validates curriculum topic labels and measures how close two topics are.
#[derive(Parser, Debug)]
#[command(name = "curriculum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/curriculum/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output rendering.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one value per line
    #[default]
    Text,
    /// JSON documents
    Json,
}

/// Topic commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check whether a topic label exists
    Exists {
        /// Topic label
        label: String,
    },

    /// Show the root path of a topic
    Path {
        /// Topic label
        label: String,
    },

    /// Distance between a selected topic and another (-1 if either is unknown)
    Distance {
        /// Selected topic
        selected: String,

        /// Topic to measure
        other: String,
    },

    /// Structural relation of another topic to a selected topic
    Relate {
        /// Selected topic
        selected: String,

        /// Topic to classify
        other: String,
    },

    /// Print the whole taxonomy as an indented tree
    Tree,

    /// List every topic label
    Labels,

    /// Validate topic labels, failing if any is unknown
    Validate {
        /// Labels to check
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Rank candidates by topic proximity to an anchor topic
    Match {
        /// Anchor topic
        anchor: String,

        /// Candidates as ID=TOPIC
        #[arg(required = true)]
        candidates: Vec<Candidate>,

        /// Override the maximum match distance
        #[arg(long)]
        max_distance: Option<u32>,

        /// Override the result limit (0 = unlimited)
        #[arg(long)]
        limit: Option<usize>,
    },
}

/// A topic-tagged candidate given on the command line as `ID=TOPIC`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Caller-chosen identifier (demo ID, slug, ...)
    pub id: String,
    /// Topic label
    pub topic: String,
}

impl FromStr for Candidate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((id, topic)) if !id.is_empty() && !topic.is_empty() => Ok(Candidate {
                id: id.to_string(),
                topic: topic.to_string(),
            }),
            _ => Err(format!("expected ID=TOPIC, got '{s}'")),
        }
    }
}

impl Tagged for Candidate {
    fn topic(&self) -> &str {
        &self.topic
    }
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
