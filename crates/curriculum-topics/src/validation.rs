//! Topic label validation for request bodies.
//!
//! [`TopicLabel`] can only be built from a label that exists in the standard
//! taxonomy, so a request type holding one rejects unknown topics while it
//! is being deserialized:
//!
//! ```
//! use curriculum_topics::TopicLabel;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct NewDemo {
//!     title: String,
//!     topic: TopicLabel,
//! }
//!
//! let ok: NewDemo = serde_json::from_str(r#"{"title": "Loops", "topic": "for_loop"}"#).unwrap();
//! assert_eq!(ok.topic.as_str(), "for_loop");
//!
//! let bad = serde_json::from_str::<NewDemo>(r#"{"title": "Loops", "topic": "looping"}"#);
//! assert!(bad.is_err());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TopicsError;
use crate::evaluator::TopicEvaluator;

/// A topic label known to exist in the standard taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TopicLabel(&'static str);

impl TopicLabel {
    /// Validate `label` against the standard taxonomy.
    pub fn parse(label: &str) -> Result<Self, TopicsError> {
        let mut evaluator = TopicEvaluator::new();
        evaluator.set_topic(label);
        evaluator
            .topic()
            .map(TopicLabel)
            .ok_or_else(|| TopicsError::UnknownTopic(label.to_string()))
    }

    /// The label text.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl TryFrom<String> for TopicLabel {
    type Error = TopicsError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        TopicLabel::parse(&label)
    }
}

impl<'de> Deserialize<'de> for TopicLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        TopicLabel::parse(&label).map_err(serde::de::Error::custom)
    }
}

impl FromStr for TopicLabel {
    type Err = TopicsError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        TopicLabel::parse(label)
    }
}

impl From<TopicLabel> for &'static str {
    fn from(label: TopicLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for TopicLabel {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl std::fmt::Display for TopicLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Validate a batch of labels.
///
/// Fails with every unknown label listed, in input order, so a caller can
/// report all problems in one response.
pub fn validate_topics<I, S>(labels: I) -> Result<Vec<TopicLabel>, TopicsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut valid = Vec::new();
    let mut unknown = Vec::new();
    for label in labels {
        match TopicLabel::parse(label.as_ref()) {
            Ok(topic) => valid.push(topic),
            Err(_) => unknown.push(label.as_ref().to_string()),
        }
    }

    match unknown.len() {
        0 => Ok(valid),
        1 => Err(TopicsError::UnknownTopic(unknown.remove(0))),
        _ => Err(TopicsError::UnknownTopics(unknown)),
    }
}
