//! # curriculum-topics
//!
//! Curriculum topic taxonomy for course modules, demos and exercises.
//!
//! Topics form a fixed hierarchy (`operation > input_output > console_io`).
//! This crate validates labels against that hierarchy and measures how far
//! apart two topics are.
//!
//! ## Features
//! - Static, shared topic tree with path search
//! - Stateful evaluator with a sentinel-based (never failing) distance metric
//! - Structural relation classification (parent, sibling, cousin, ...)
//! - Proximity ranking of topic-tagged items
//! - Validating `TopicLabel` newtype for request bodies

pub mod config;
pub mod error;
pub mod evaluator;
pub mod matching;
pub mod relationships;
pub mod taxonomy;
pub mod types;
pub mod validation;

pub use config::{MatchingConfig, TopicsConfig};
pub use error::TopicsError;
pub use evaluator::{path_distance, TopicEvaluator};
pub use matching::{Tagged, TopicMatch, TopicMatcher};
pub use relationships::classify;
pub use taxonomy::{Labels, Taxonomy, TopicNode};
pub use types::{TopicPath, TopicRelation, UNDEFINED_DISTANCE};
pub use validation::{validate_topics, TopicLabel};
