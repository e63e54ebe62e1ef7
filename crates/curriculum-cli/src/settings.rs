//! Configuration loading for the curriculum tool.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/curriculum/config.toml (or the
//! platform equivalent).

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use curriculum_topics::{TopicsConfig, TopicsError};

use crate::cli::{Cli, OutputFormat};

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format for command results
    #[serde(default)]
    pub output: OutputFormat,

    /// Topic library settings
    #[serde(default)]
    pub topics: TopicsConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::default(),
            topics: TopicsConfig::default(),
        }
    }
}

/// Default config file location, without extension.
pub fn default_config_path() -> PathBuf {
    ProjectDirs::from("", "", "curriculum")
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config")
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/curriculum/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (CURRICULUM_*, `__` between nested keys)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, TopicsError> {
        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())
            .map_err(|e| TopicsError::InvalidConfig(e.to_string()))?
            .set_default("output", "text")
            .map_err(|e| TopicsError::InvalidConfig(e.to_string()))?
            .add_source(
                File::with_name(&default_config_path().to_string_lossy()).required(false),
            );

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // e.g. CURRICULUM_LOG_LEVEL, CURRICULUM_TOPICS__MATCHING__LIMIT
        builder = builder.add_source(
            Environment::with_prefix("CURRICULUM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder
            .build()
            .map_err(|e| TopicsError::InvalidConfig(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TopicsError::InvalidConfig(e.to_string()))?;

        settings.topics.validate()?;
        Ok(settings)
    }

    /// Apply global CLI flags, which take precedence over every other source.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(log_level) = &cli.log_level {
            self.log_level = log_level.clone();
        }
        if let Some(format) = cli.format {
            self.output = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    use clap::Parser;

    // Tests that call Settings::load read the process environment
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.output, OutputFormat::Text);
        assert_eq!(settings.topics.matching.max_distance, 4);
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path();
        assert!(path.ends_with("config"));
    }

    #[test]
    fn test_load_from_file() {
        let _guard = TEST_LOCK.lock().unwrap();
        let file = write_config(
            r#"
log_level = "debug"
output = "json"

[topics.matching]
max_distance = 2
"#,
        );
        let settings = Settings::load(Some(&file.path().to_string_lossy())).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.output, OutputFormat::Json);
        assert_eq!(settings.topics.matching.max_distance, 2);
        assert_eq!(settings.topics.matching.limit, 10);
    }

    #[test]
    fn test_load_missing_cli_file_fails() {
        let _guard = TEST_LOCK.lock().unwrap();
        let result = Settings::load(Some("/definitely/not/here/curriculum.toml"));
        assert!(matches!(result, Err(TopicsError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_rejects_invalid_matching() {
        let _guard = TEST_LOCK.lock().unwrap();
        let file = write_config("[topics.matching]\nmax_distance = 0\n");
        let result = Settings::load(Some(&file.path().to_string_lossy()));
        assert!(matches!(result, Err(TopicsError::InvalidConfig(_))));
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = TEST_LOCK.lock().unwrap();
        let file = write_config(
            r#"
output = "text"

[topics.matching]
max_distance = 2
limit = 5
"#,
        );

        std::env::set_var("CURRICULUM_TOPICS__MATCHING__LIMIT", "3");
        std::env::set_var("CURRICULUM_OUTPUT", "json");
        let result = Settings::load(Some(&file.path().to_string_lossy()));
        std::env::remove_var("CURRICULUM_TOPICS__MATCHING__LIMIT");
        std::env::remove_var("CURRICULUM_OUTPUT");

        let settings = result.unwrap();
        assert_eq!(settings.output, OutputFormat::Json);
        assert_eq!(settings.topics.matching.limit, 3);
        assert_eq!(settings.topics.matching.max_distance, 2);
    }

    #[test]
    fn test_cli_flags_override_settings() {
        let mut settings = Settings {
            log_level: "info".to_string(),
            output: OutputFormat::Json,
            topics: TopicsConfig::default(),
        };
        let cli = Cli::parse_from([
            "curriculum",
            "--log-level",
            "debug",
            "--format",
            "text",
            "labels",
        ]);
        settings.apply_cli(&cli);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.output, OutputFormat::Text);
    }

    #[test]
    fn test_absent_cli_flags_keep_settings() {
        let mut settings = Settings {
            log_level: "error".to_string(),
            output: OutputFormat::Json,
            topics: TopicsConfig::default(),
        };
        settings.apply_cli(&Cli::parse_from(["curriculum", "labels"]));
        assert_eq!(settings.log_level, "error");
        assert_eq!(settings.output, OutputFormat::Json);
    }
}
