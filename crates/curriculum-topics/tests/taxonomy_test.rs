//! Taxonomy behaviour tests over the full standard tree.
//!
//! Covers existence, selection fallback, the distance sentinels, the
//! adjacency collapse and additive distances, plus consistency between the
//! evaluator, relation classification and matching.

use pretty_assertions::assert_eq;

use curriculum_topics::{
    validate_topics, MatchingConfig, Taxonomy, TopicEvaluator, TopicMatcher, TopicRelation,
    TopicsError, UNDEFINED_DISTANCE,
};

fn evaluator_on(label: &str) -> TopicEvaluator<'static> {
    let mut evaluator = TopicEvaluator::new();
    evaluator.set_topic(label);
    evaluator
}

#[test]
fn test_every_label_exists_and_selects() {
    let taxonomy = Taxonomy::standard();
    for label in taxonomy.labels() {
        let mut evaluator = TopicEvaluator::new();
        assert!(evaluator.exists(label), "{label} should exist");
        evaluator.set_topic(label);
        assert_eq!(evaluator.topic(), Some(label));
        assert_eq!(evaluator.distance(label), 0, "self distance of {label}");
    }
}

#[test]
fn test_unknown_labels_do_not_exist() {
    let evaluator = TopicEvaluator::new();
    for label in ["this does not exist!", "", " console_io", "CONSOLE_IO", "io"] {
        assert!(!evaluator.exists(label), "{label:?} should not exist");
    }
}

#[test]
fn test_invalid_selection_after_valid_clears() {
    let mut evaluator = evaluator_on("console_io");
    assert_eq!(evaluator.topic(), Some("console_io"));

    evaluator.set_topic("this does not exist!");
    assert_eq!(evaluator.topic(), None);

    for label in Taxonomy::standard().labels() {
        assert_eq!(evaluator.distance(label), UNDEFINED_DISTANCE);
    }
}

#[test]
fn test_unknown_other_is_sentinel_for_every_selection() {
    for label in Taxonomy::standard().labels() {
        assert_eq!(evaluator_on(label).distance("unknown label"), -1);
    }
}

#[test]
fn test_adjacency_collapse() {
    let evaluator = evaluator_on("console_io");
    assert_eq!(evaluator.distance("input_output"), 1);
    assert_eq!(evaluator.distance("file_io"), 1);
}

#[test]
fn test_additive_distance_for_cousins() {
    let taxonomy = Taxonomy::standard();
    let to_console = taxonomy.find_path("console_io").unwrap();
    let to_math = taxonomy.find_path("math_operation").unwrap();
    assert_eq!(to_console.labels(), &["operation", "input_output", "console_io"]);
    assert_eq!(to_math.labels(), &["operation", "arithmetic", "math_operation"]);
    assert_eq!(to_console.common_prefix_len(&to_math), 1);

    assert_eq!(evaluator_on("console_io").distance("math_operation"), 4);
}

#[test]
fn test_distance_is_symmetric_over_whole_tree() {
    let labels: Vec<&str> = Taxonomy::standard().labels().collect();
    for a in &labels {
        let from_a = evaluator_on(a);
        for b in &labels {
            assert_eq!(
                from_a.distance(b),
                evaluator_on(b).distance(a),
                "distance({a}, {b})"
            );
        }
    }
}

#[test]
fn test_relation_agrees_with_distance() {
    let labels: Vec<&str> = Taxonomy::standard().labels().collect();
    for a in &labels {
        let evaluator = evaluator_on(a);
        for b in &labels {
            let relation = evaluator.relation(b).unwrap();
            let distance = evaluator.distance(b);
            match relation {
                TopicRelation::Identical => assert_eq!(distance, 0),
                r if r.is_adjacent() => assert_eq!(distance, 1, "{a} -> {b} ({r})"),
                TopicRelation::Ancestor | TopicRelation::Descendant | TopicRelation::Cousin => {
                    assert!(distance >= 2, "{a} -> {b} ({relation})")
                }
                _ => assert!(distance >= 1),
            }
        }
    }
}

#[test]
fn test_repeated_queries_are_deterministic() {
    let evaluator = evaluator_on("recursion");
    let first: Vec<i32> = Taxonomy::standard()
        .labels()
        .map(|l| evaluator.distance(l))
        .collect();
    let second: Vec<i32> = Taxonomy::standard()
        .labels()
        .map(|l| evaluator.distance(l))
        .collect();
    assert_eq!(first, second);
    assert_eq!(evaluator.topic(), Some("recursion"));
}

#[test]
fn test_evaluators_are_independent() {
    let mut a = TopicEvaluator::new();
    let mut b = TopicEvaluator::new();
    a.set_topic("for_loop");
    b.set_topic("bogus");
    assert_eq!(a.topic(), Some("for_loop"));
    assert_eq!(b.topic(), None);
}

#[test]
fn test_evaluators_across_threads() {
    let handles: Vec<_> = ["console_io", "recursion", "list", "assertion"]
        .into_iter()
        .map(|label| {
            std::thread::spawn(move || {
                let evaluator = evaluator_on(label);
                (label, evaluator.distance("operation"))
            })
        })
        .collect();

    for handle in handles {
        let (label, distance) = handle.join().unwrap();
        assert_eq!(distance, evaluator_on(label).distance("operation"));
    }
}

#[test]
fn test_matching_suggests_nearby_demos() {
    let demos = ["recursion", "file_io", "input_output", "assertion", "arithmetic"];
    let matcher = TopicMatcher::new(MatchingConfig::default());
    let suggested: Vec<(&str, u32)> = matcher
        .rank("console_io", &demos)
        .iter()
        .map(|m| (*m.item, m.distance))
        .collect();
    assert_eq!(
        suggested,
        vec![("file_io", 1), ("input_output", 1), ("arithmetic", 3)]
    );
}

#[test]
fn test_validation_uses_same_tree() {
    let all: Vec<&str> = Taxonomy::standard().labels().collect();
    assert_eq!(validate_topics(&all).unwrap().len(), all.len());

    let err = validate_topics(["loop", "loops"]).unwrap_err();
    assert!(matches!(err, TopicsError::UnknownTopic(ref l) if l == "loops"));
}
