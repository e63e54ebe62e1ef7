//! The curriculum topic taxonomy.
//!
//! A fixed forest of topic labels. Each [`TopicNode`] maps a label to its
//! children; labels are only unique among siblings. The standard tree is a
//! `static` literal shared by reference with every evaluator and never
//! mutated.
//!
//! The label strings are persisted by consumers (course modules, demos,
//! exercises) and validated at write time only, so they must stay stable
//! across releases. Add new labels, never rename existing ones.

use crate::types::TopicPath;

/// A node in the topic forest: a label and its (possibly empty) children.
#[derive(Debug, PartialEq, Eq)]
pub struct TopicNode {
    /// Topic label, unique among its siblings
    pub label: &'static str,
    /// Child topics, empty for leaves
    pub children: &'static [TopicNode],
}

/// Build a [`TopicNode`] literal: `topic!("leaf")` or
/// `topic!("branch" => [topic!("a"), topic!("b")])`.
#[macro_export]
macro_rules! topic {
    ($label:literal) => {
        $crate::TopicNode {
            label: $label,
            children: &[],
        }
    };
    ($label:literal => [$($child:expr),* $(,)?]) => {
        $crate::TopicNode {
            label: $label,
            children: &[$($child),*],
        }
    };
}

/// An immutable topic forest.
#[derive(Debug, PartialEq, Eq)]
pub struct Taxonomy {
    roots: &'static [TopicNode],
}

static STANDARD: Taxonomy = Taxonomy::new(STANDARD_ROOTS);

impl Taxonomy {
    /// Wrap a forest of root nodes.
    pub const fn new(roots: &'static [TopicNode]) -> Self {
        Self { roots }
    }

    /// The curriculum taxonomy used to validate persisted topic labels.
    pub fn standard() -> &'static Taxonomy {
        &STANDARD
    }

    /// Top-level topics, in declaration order.
    pub fn roots(&self) -> &'static [TopicNode] {
        self.roots
    }

    /// Check whether `label` appears anywhere in the tree.
    pub fn exists(&self, label: &str) -> bool {
        contains(self.roots, label)
    }

    /// Find the node for `label`.
    ///
    /// Depth-first pre-order; the first match wins when a label is repeated
    /// in different subtrees.
    pub fn find(&self, label: &str) -> Option<&'static TopicNode> {
        find_node(self.roots, label)
    }

    /// Find the root-to-node path for `label`, both ends inclusive.
    pub fn find_path(&self, label: &str) -> Option<TopicPath> {
        let mut labels = Vec::new();
        if walk_path(self.roots, label, &mut labels) {
            Some(TopicPath::new(labels))
        } else {
            None
        }
    }

    /// Canonical (tree-owned) copy of `label`, if it exists.
    pub fn resolve(&self, label: &str) -> Option<&'static str> {
        self.find(label).map(|node| node.label)
    }

    /// Direct children of `label`.
    pub fn children_of(&self, label: &str) -> Option<&'static [TopicNode]> {
        self.find(label).map(|node| node.children)
    }

    /// Immediate parent of `label`. `None` for roots and unknown labels.
    pub fn parent_of(&self, label: &str) -> Option<&'static str> {
        let path = self.find_path(label)?;
        let labels = path.labels();
        if labels.len() < 2 {
            return None;
        }
        labels.get(labels.len() - 2).copied()
    }

    /// Depth of `label`, where roots have depth 1.
    pub fn depth_of(&self, label: &str) -> Option<usize> {
        self.find_path(label).map(|path| path.len())
    }

    /// Every label in depth-first pre-order.
    pub fn labels(&self) -> Labels {
        Labels {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.labels().count()
    }

    /// Check if the forest has no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth of the deepest node (0 for an empty forest).
    pub fn max_depth(&self) -> usize {
        fn depth(nodes: &[TopicNode]) -> usize {
            nodes
                .iter()
                .map(|node| 1 + depth(node.children))
                .max()
                .unwrap_or(0)
        }
        depth(self.roots)
    }
}

/// Depth-first pre-order iterator over taxonomy labels.
#[derive(Debug)]
pub struct Labels {
    stack: Vec<&'static TopicNode>,
}

impl Iterator for Labels {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node.label)
    }
}

/// Sibling keys are checked before descending into any child.
fn contains(nodes: &[TopicNode], label: &str) -> bool {
    nodes.iter().any(|node| node.label == label)
        || nodes.iter().any(|node| contains(node.children, label))
}

fn find_node(nodes: &'static [TopicNode], label: &str) -> Option<&'static TopicNode> {
    for node in nodes {
        if node.label == label {
            return Some(node);
        }
        if let Some(found) = find_node(node.children, label) {
            return Some(found);
        }
    }
    None
}

/// Push labels onto `path` while descending; pops on dead ends.
fn walk_path(nodes: &'static [TopicNode], label: &str, path: &mut Vec<&'static str>) -> bool {
    for node in nodes {
        path.push(node.label);
        if node.label == label || walk_path(node.children, label, path) {
            return true;
        }
        path.pop();
    }
    false
}

const STANDARD_ROOTS: &[TopicNode] = &[
    topic!("operation" => [
        topic!("input_output" => [topic!("console_io"), topic!("file_io")]),
        topic!("arithmetic" => [
            topic!("math_operation"),
            topic!("integer_division"),
            topic!("modulo"),
        ]),
        topic!("boolean_logic" => [topic!("comparison"), topic!("logical_operator")]),
        topic!("string_operation" => [
            topic!("concatenation"),
            topic!("string_formatting"),
            topic!("slicing"),
        ]),
    ]),
    topic!("control_flow" => [
        topic!("conditional" => [topic!("if_else"), topic!("nested_conditional")]),
        topic!("loop" => [
            topic!("for_loop"),
            topic!("while_loop"),
            topic!("nested_loop"),
            topic!("loop_control"),
        ]),
        topic!("exception" => [topic!("try_except"), topic!("raise_exception")]),
    ]),
    topic!("modularity" => [
        topic!("function" => [
            topic!("parameter"),
            topic!("return_value"),
            topic!("default_argument"),
            topic!("recursion"),
        ]),
        topic!("module_import"),
        topic!("object_oriented" => [
            topic!("class"),
            topic!("method"),
            topic!("inheritance"),
        ]),
    ]),
    topic!("data_structure" => [
        topic!("sequence" => [
            topic!("list" => [
                topic!("list_indexing"),
                topic!("list_method"),
                topic!("list_comprehension"),
            ]),
            topic!("tuple"),
            topic!("range"),
        ]),
        topic!("mapping" => [
            topic!("dictionary" => [
                topic!("dictionary_iteration"),
                topic!("nested_dictionary"),
            ]),
        ]),
        topic!("set"),
    ]),
    topic!("variable" => [
        topic!("assignment"),
        topic!("scope" => [topic!("local_scope"), topic!("global_scope")]),
        topic!("data_type" => [
            topic!("integer"),
            topic!("floating_point"),
            topic!("boolean"),
            topic!("text"),
            topic!("type_conversion"),
        ]),
    ]),
    topic!("testing" => [
        topic!("unit_test" => [topic!("assertion"), topic!("test_case")]),
        topic!("debugging" => [topic!("print_debugging"), topic!("reading_traceback")]),
    ]),
];
