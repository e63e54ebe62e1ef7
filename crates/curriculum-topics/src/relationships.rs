//! Structural relationships between topics.
//!
//! The distance metric folds parent/child, sibling and root/root pairs
//! into a single value of 1. [`classify`] keeps those shapes apart for
//! callers that need to tell them apart (e.g. "prerequisite" vs "related"
//! suggestions).

use crate::types::{TopicPath, TopicRelation};

/// Classify how the topic at the end of `other` relates to the one at the
/// end of `selected`.
pub fn classify(selected: &TopicPath, other: &TopicPath) -> TopicRelation {
    if selected == other {
        return TopicRelation::Identical;
    }

    let common = selected.common_prefix_len(other);
    if common == 0 {
        return TopicRelation::Unrelated;
    }

    let up = selected.len() - common;
    let down = other.len() - common;
    match (up, down) {
        (0, 1) => TopicRelation::Child,
        (0, _) => TopicRelation::Descendant,
        (1, 0) => TopicRelation::Parent,
        (_, 0) => TopicRelation::Ancestor,
        (1, 1) => TopicRelation::Sibling,
        _ => TopicRelation::Cousin,
    }
}
