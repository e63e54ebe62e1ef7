//! Topic proximity matching.
//!
//! Ranks topic-tagged items (course modules, demos, exercises) by how close
//! their topic is to an anchor topic, e.g. to suggest demos for a module.
//!
//! # Example
//! ```
//! use curriculum_topics::{MatchingConfig, Tagged, TopicMatcher};
//!
//! struct Demo {
//!     title: &'static str,
//!     topic: &'static str,
//! }
//!
//! impl Tagged for Demo {
//!     fn topic(&self) -> &str {
//!         self.topic
//!     }
//! }
//!
//! let demos = [
//!     Demo { title: "Recursion basics", topic: "recursion" },
//!     Demo { title: "Reading files", topic: "file_io" },
//!     Demo { title: "Print and input", topic: "console_io" },
//! ];
//!
//! let matcher = TopicMatcher::new(MatchingConfig::default());
//! let matches = matcher.rank("console_io", &demos);
//! assert_eq!(matches[0].item.title, "Print and input");
//! assert_eq!(matches[1].item.title, "Reading files");
//! assert_eq!(matches.len(), 2);
//! ```

use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::MatchingConfig;
use crate::evaluator::TopicEvaluator;
use crate::taxonomy::Taxonomy;

/// Anything carrying a topic label.
pub trait Tagged {
    /// The item's topic label.
    fn topic(&self) -> &str;
}

impl Tagged for String {
    fn topic(&self) -> &str {
        self
    }
}

impl Tagged for &str {
    fn topic(&self) -> &str {
        self
    }
}

/// A ranked item and its distance from the anchor topic.
#[derive(Debug, Serialize)]
pub struct TopicMatch<'a, T> {
    /// The matched item
    pub item: &'a T,
    /// Topic distance from the anchor (0 = same topic)
    pub distance: u32,
}

// Only a reference is held, so copying never needs `T: Copy`
impl<T> Clone for TopicMatch<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TopicMatch<'_, T> {}

/// Ranks tagged items by topic distance.
#[derive(Debug, Clone)]
pub struct TopicMatcher<'t> {
    taxonomy: &'t Taxonomy,
    config: MatchingConfig,
}

impl TopicMatcher<'static> {
    /// Create a matcher over the standard taxonomy.
    pub fn new(config: MatchingConfig) -> Self {
        Self::with_taxonomy(Taxonomy::standard(), config)
    }
}

impl<'t> TopicMatcher<'t> {
    /// Create a matcher over `taxonomy`.
    pub fn with_taxonomy(taxonomy: &'t Taxonomy, config: MatchingConfig) -> Self {
        Self { taxonomy, config }
    }

    /// Get the largest distance still reported as a match.
    pub fn max_distance(&self) -> u32 {
        self.config.max_distance
    }

    /// Get the result limit (0 = unlimited).
    pub fn limit(&self) -> usize {
        self.config.limit
    }

    /// Rank `items` by distance from `anchor`, closest first.
    ///
    /// Items with unknown topics or beyond `max_distance` are dropped. Ties
    /// keep their input order. An unknown anchor matches nothing.
    #[instrument(skip(self, items), fields(candidates = items.len()))]
    pub fn rank<'a, T: Tagged>(&self, anchor: &str, items: &'a [T]) -> Vec<TopicMatch<'a, T>> {
        let mut evaluator = TopicEvaluator::with_taxonomy(self.taxonomy);
        evaluator.set_topic(anchor);
        if !evaluator.is_selected() {
            debug!("Unknown anchor topic, no matches");
            return Vec::new();
        }

        let mut matches: Vec<TopicMatch<'a, T>> = items
            .iter()
            .filter_map(|item| match evaluator.try_distance(item.topic()) {
                Some(distance) if distance <= self.config.max_distance => {
                    Some(TopicMatch { item, distance })
                }
                Some(distance) => {
                    debug!(topic = item.topic(), distance, "Candidate too distant");
                    None
                }
                None => {
                    debug!(topic = item.topic(), "Candidate has unknown topic");
                    None
                }
            })
            .collect();

        // Stable sort keeps input order among equal distances
        matches.sort_by_key(|m| m.distance);
        if self.config.limit > 0 {
            matches.truncate(self.config.limit);
        }

        debug!(matched = matches.len(), "Ranked candidates");
        matches
    }

    /// The closest item to `anchor`, if any qualifies.
    pub fn best_match<'a, T: Tagged>(
        &self,
        anchor: &str,
        items: &'a [T],
    ) -> Option<TopicMatch<'a, T>> {
        self.rank(anchor, items).into_iter().next()
    }
}
