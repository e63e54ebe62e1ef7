//! Stateful topic evaluator.
//!
//! A [`TopicEvaluator`] holds at most one selected topic and measures other
//! topics against it. Every operation is total: unknown labels clear the
//! selection or produce [`UNDEFINED_DISTANCE`], never an error.
//!
//! ## Usage
//!
//! ```rust
//! use curriculum_topics::TopicEvaluator;
//!
//! let mut evaluator = TopicEvaluator::new();
//! evaluator.set_topic("console_io");
//! assert_eq!(evaluator.topic(), Some("console_io"));
//! assert_eq!(evaluator.distance("file_io"), 1);
//! assert_eq!(evaluator.distance("math_operation"), 4);
//!
//! evaluator.set_topic("not a topic");
//! assert_eq!(evaluator.topic(), None);
//! assert_eq!(evaluator.distance("file_io"), -1);
//! ```
//!
//! Selection needs `&mut self`, so one evaluator should back one logical
//! operation (a request, a validation pass). The taxonomy itself is shared
//! read-only between any number of evaluators.

use tracing::{debug, instrument};

use crate::relationships::classify;
use crate::taxonomy::Taxonomy;
use crate::types::{TopicPath, TopicRelation, UNDEFINED_DISTANCE};

/// Selects a topic from a taxonomy and compares other topics with it.
#[derive(Debug, Clone, Copy)]
pub struct TopicEvaluator<'t> {
    taxonomy: &'t Taxonomy,
    chosen: Option<&'static str>,
}

impl TopicEvaluator<'static> {
    /// Create an unselected evaluator over the standard taxonomy.
    pub fn new() -> Self {
        Self::with_taxonomy(Taxonomy::standard())
    }
}

impl Default for TopicEvaluator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> TopicEvaluator<'t> {
    /// Create an unselected evaluator over `taxonomy`.
    pub fn with_taxonomy(taxonomy: &'t Taxonomy) -> Self {
        Self {
            taxonomy,
            chosen: None,
        }
    }

    /// The taxonomy this evaluator reads.
    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    /// Check whether `label` appears anywhere in the taxonomy.
    pub fn exists(&self, label: &str) -> bool {
        self.taxonomy.exists(label)
    }

    /// Select `label`, or clear the selection if it is not a known topic.
    pub fn set_topic(&mut self, label: &str) {
        self.chosen = self.taxonomy.resolve(label);
        if self.chosen.is_none() {
            debug!(label, "Unknown topic, selection cleared");
        }
    }

    /// The selected topic, if any.
    pub fn topic(&self) -> Option<&'static str> {
        self.chosen
    }

    /// Check if a topic is selected.
    pub fn is_selected(&self) -> bool {
        self.chosen.is_some()
    }

    /// Drop the current selection.
    pub fn clear(&mut self) {
        self.chosen = None;
    }

    /// Root path of the selected topic.
    pub fn path(&self) -> Option<TopicPath> {
        self.chosen.and_then(|label| self.taxonomy.find_path(label))
    }

    /// Distance from the selected topic to `other`.
    ///
    /// Returns [`UNDEFINED_DISTANCE`] (-1) when nothing is selected or
    /// `other` is unknown, 0 for the selected topic itself, 1 for topics
    /// adjacent to it, and otherwise the number of edges between the two
    /// through their lowest common ancestor.
    pub fn distance(&self, other: &str) -> i32 {
        self.try_distance(other)
            .map(|d| d as i32)
            .unwrap_or(UNDEFINED_DISTANCE)
    }

    /// [`distance`](Self::distance) with `None` in place of the sentinel.
    #[instrument(skip(self), fields(chosen = self.chosen))]
    pub fn try_distance(&self, other: &str) -> Option<u32> {
        let chosen = self.chosen?;
        if !self.taxonomy.exists(other) {
            return None;
        }
        if chosen == other {
            return Some(0);
        }

        let to_chosen = self.taxonomy.find_path(chosen)?;
        let to_other = self.taxonomy.find_path(other)?;
        let distance = path_distance(&to_chosen, &to_other);
        debug!(distance, "Measured topic distance");
        Some(distance)
    }

    /// Structural relation of `other` to the selected topic.
    ///
    /// `None` exactly when [`distance`](Self::distance) would return -1.
    pub fn relation(&self, other: &str) -> Option<TopicRelation> {
        let chosen = self.chosen?;
        if !self.taxonomy.exists(other) {
            return None;
        }
        if chosen == other {
            return Some(TopicRelation::Identical);
        }

        let to_chosen = self.taxonomy.find_path(chosen)?;
        let to_other = self.taxonomy.find_path(other)?;
        Some(classify(&to_chosen, &to_other))
    }
}

/// Edges from each path's end up to the divergence point, summed.
///
/// When both ends are within one edge of the divergence point (parent and
/// child, siblings, two roots) the distance is 1.
pub fn path_distance(a: &TopicPath, b: &TopicPath) -> u32 {
    let common = a.common_prefix_len(b);
    let up = (a.len() - common) as u32;
    let down = (b.len() - common) as u32;
    if up <= 1 && down <= 1 {
        1
    } else {
        up + down
    }
}
