//! Topic configuration.

use serde::{Deserialize, Serialize};

use crate::error::TopicsError;

/// Master configuration for topic functionality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicsConfig {
    /// Proximity matching settings
    #[serde(default)]
    pub matching: MatchingConfig,
}

impl TopicsConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), TopicsError> {
        self.matching.validate()
    }
}

/// Proximity matching configuration (module-to-demo suggestions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Largest topic distance still considered a match
    #[serde(default = "default_max_distance")]
    pub max_distance: u32,

    /// Maximum number of matches returned (0 = unlimited)
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_distance: default_max_distance(),
            limit: default_limit(),
        }
    }
}

impl MatchingConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), TopicsError> {
        if self.max_distance == 0 {
            return Err(TopicsError::InvalidConfig(
                "matching.max_distance must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_max_distance() -> u32 {
    4
}
fn default_limit() -> usize {
    10
}
