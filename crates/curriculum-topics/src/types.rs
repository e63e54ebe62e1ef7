//! Topic data types.

use serde::{Deserialize, Serialize};

/// Distance returned when either side of a comparison is not a known topic.
pub const UNDEFINED_DISTANCE: i32 = -1;

/// Labels from a root topic down to (and including) a target topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopicPath {
    labels: Vec<&'static str>,
}

impl TopicPath {
    /// Create a path from root-first labels.
    pub fn new(labels: Vec<&'static str>) -> Self {
        Self { labels }
    }

    /// Root-first labels.
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// Number of labels on the path (depth of the target).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The top-level topic.
    pub fn root(&self) -> Option<&'static str> {
        self.labels.first().copied()
    }

    /// The target topic.
    pub fn leaf(&self) -> Option<&'static str> {
        self.labels.last().copied()
    }

    /// Number of leading labels shared with `other`.
    pub fn common_prefix_len(&self, other: &TopicPath) -> usize {
        self.labels
            .iter()
            .zip(other.labels.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }
}

impl std::fmt::Display for TopicPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.labels.join(" > "))
    }
}

/// Structural relation between a selected topic and another topic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TopicRelation {
    /// Same label
    Identical,
    /// Other is the direct parent of the selected topic
    Parent,
    /// Other is a direct child of the selected topic
    Child,
    /// Other is an ancestor two or more levels up
    Ancestor,
    /// Other is a descendant two or more levels down
    Descendant,
    /// Both share the same immediate parent
    Sibling,
    /// Same root, diverging above the immediate parent
    Cousin,
    /// Different roots
    Unrelated,
}

impl TopicRelation {
    /// Get all relations.
    pub fn all() -> &'static [TopicRelation] {
        &[
            TopicRelation::Identical,
            TopicRelation::Parent,
            TopicRelation::Child,
            TopicRelation::Ancestor,
            TopicRelation::Descendant,
            TopicRelation::Sibling,
            TopicRelation::Cousin,
            TopicRelation::Unrelated,
        ]
    }

    /// Relations the distance metric always collapses to 1.
    ///
    /// Two distinct roots also measure 1, but `Unrelated` covers deeper
    /// topics under different roots as well, so it is not listed here.
    pub fn is_adjacent(&self) -> bool {
        matches!(
            self,
            TopicRelation::Parent | TopicRelation::Child | TopicRelation::Sibling
        )
    }
}

impl std::fmt::Display for TopicRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopicRelation::Identical => write!(f, "identical"),
            TopicRelation::Parent => write!(f, "parent"),
            TopicRelation::Child => write!(f, "child"),
            TopicRelation::Ancestor => write!(f, "ancestor"),
            TopicRelation::Descendant => write!(f, "descendant"),
            TopicRelation::Sibling => write!(f, "sibling"),
            TopicRelation::Cousin => write!(f, "cousin"),
            TopicRelation::Unrelated => write!(f, "unrelated"),
        }
    }
}
