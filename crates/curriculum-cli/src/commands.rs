//! Command implementations for the curriculum tool.
//!
//! Each command renders its result to a `String`; `run` prints it. Queries
//! that only measure or classify (exists, distance, relate) succeed even for
//! unknown labels and report the sentinel; `path` and `validate` fail.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{debug, info};

use curriculum_topics::{
    validate_topics, MatchingConfig, Taxonomy, TopicEvaluator, TopicMatcher, TopicNode,
};

use crate::cli::{Candidate, Cli, Commands, OutputFormat};
use crate::settings::Settings;

/// Load settings, set up logging and execute the parsed command.
pub fn run(cli: Cli) -> Result<()> {
    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    settings.apply_cli(&cli);

    init_logging(&settings.log_level)?;
    debug!(?settings, "Loaded configuration");

    let output = execute(&cli.command, &settings)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over the configured level.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Dispatch a command and render its output.
pub fn execute(command: &Commands, settings: &Settings) -> Result<String> {
    let format = settings.output;
    match command {
        Commands::Exists { label } => Ok(exists(label, format)),
        Commands::Path { label } => path(label, format),
        Commands::Distance { selected, other } => Ok(distance(selected, other, format)),
        Commands::Relate { selected, other } => Ok(relate(selected, other, format)),
        Commands::Tree => Ok(tree(format)),
        Commands::Labels => Ok(labels(format)),
        Commands::Validate { labels } => validate(labels, format),
        Commands::Match {
            anchor,
            candidates,
            max_distance,
            limit,
        } => {
            let mut config = settings.topics.matching.clone();
            if let Some(max_distance) = max_distance {
                config.max_distance = *max_distance;
            }
            if let Some(limit) = limit {
                config.limit = *limit;
            }
            config.validate().context("Invalid matching options")?;
            Ok(rank(anchor, candidates, config, format))
        }
    }
}

/// Report whether `label` is a known topic.
pub fn exists(label: &str, format: OutputFormat) -> String {
    let exists = TopicEvaluator::new().exists(label);
    match format {
        OutputFormat::Text => exists.to_string(),
        OutputFormat::Json => json!({ "label": label, "exists": exists }).to_string(),
    }
}

/// Render the root path of `label`.
pub fn path(label: &str, format: OutputFormat) -> Result<String> {
    let path = Taxonomy::standard()
        .find_path(label)
        .with_context(|| format!("Unknown topic: {label}"))?;
    Ok(match format {
        OutputFormat::Text => path.to_string(),
        OutputFormat::Json => json!({ "label": label, "path": path }).to_string(),
    })
}

/// Distance from `selected` to `other`, -1 when either is unknown.
pub fn distance(selected: &str, other: &str, format: OutputFormat) -> String {
    let mut evaluator = TopicEvaluator::new();
    evaluator.set_topic(selected);
    let distance = evaluator.distance(other);
    info!(selected, other, distance, "Computed distance");
    match format {
        OutputFormat::Text => distance.to_string(),
        OutputFormat::Json => json!({
            "selected": selected,
            "other": other,
            "distance": distance,
        })
        .to_string(),
    }
}

/// Relation of `other` to `selected`, `unknown` when either is unknown.
pub fn relate(selected: &str, other: &str, format: OutputFormat) -> String {
    let mut evaluator = TopicEvaluator::new();
    evaluator.set_topic(selected);
    let relation = evaluator.relation(other);
    match format {
        OutputFormat::Text => relation
            .map(|r| r.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        OutputFormat::Json => json!({
            "selected": selected,
            "other": other,
            "relation": relation,
            "distance": evaluator.distance(other),
        })
        .to_string(),
    }
}

/// Render the whole taxonomy.
pub fn tree(format: OutputFormat) -> String {
    let roots = Taxonomy::standard().roots();
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            render_nodes(&mut out, roots, 0);
            out.trim_end().to_string()
        }
        OutputFormat::Json => json!(nodes_to_json(roots)).to_string(),
    }
}

fn render_nodes(out: &mut String, nodes: &[TopicNode], depth: usize) {
    for node in nodes {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}{}", "  ".repeat(depth), node.label);
        render_nodes(out, node.children, depth + 1);
    }
}

/// Nested `{label, children}` objects in declaration order.
fn nodes_to_json(nodes: &[TopicNode]) -> Vec<serde_json::Value> {
    nodes
        .iter()
        .map(|node| {
            json!({
                "label": node.label,
                "children": nodes_to_json(node.children),
            })
        })
        .collect()
}

/// List every label in tree order.
pub fn labels(format: OutputFormat) -> String {
    let labels: Vec<&str> = Taxonomy::standard().labels().collect();
    match format {
        OutputFormat::Text => labels.join("\n"),
        OutputFormat::Json => json!(labels).to_string(),
    }
}

/// Validate `labels`, failing with every unknown label.
pub fn validate(labels: &[String], format: OutputFormat) -> Result<String> {
    let valid = validate_topics(labels).context("Topic validation failed")?;
    Ok(match format {
        OutputFormat::Text => format!("{} topic(s) valid", valid.len()),
        OutputFormat::Json => json!({ "valid": valid }).to_string(),
    })
}

/// Rank `candidates` by proximity to `anchor`.
pub fn rank(
    anchor: &str,
    candidates: &[Candidate],
    config: MatchingConfig,
    format: OutputFormat,
) -> String {
    let matcher = TopicMatcher::new(config);
    let matches = matcher.rank(anchor, candidates);
    match format {
        OutputFormat::Text => matches
            .iter()
            .map(|m| format!("{}\t{}\t{}", m.distance, m.item.id, m.item.topic))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => json!({ "anchor": anchor, "matches": matches }).to_string(),
    }
}
