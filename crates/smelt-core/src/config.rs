//! Runtime settings.
//!
//! Settings come from three layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `SMELT_*` keys in an env file (`.env` unless told otherwise)
//! 3. `SMELT_*` variables in the process environment
//!
//! The env file is read with [`dotenv::from_path_iter`], so loading settings
//! never mutates the process environment. A missing env file is not an error.
//!
//! ```text
//! defaults ──▶ .env ──▶ process env ──▶ Settings
//! ```

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{Result, SmeltError},
    llm::http::DEFAULT_BASE_URL,
    plan_parser::DEFAULT_RETRIES,
};

/// Prefix shared by every recognised variable.
pub const ENV_PREFIX: &str = "SMELT_";

/// Env file consulted when none is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Resolved smelt settings, built once per process and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Model the coding agent runs with
    pub model: String,
    /// Model used to turn plan documents into steps
    pub loader_model: String,
    /// API key for the plan loader; the provider falls back to its own
    /// environment when absent
    pub loader_api_key: Option<String>,
    /// Chat-completions endpoint for the plan loader
    pub loader_base_url: String,
    /// Transient-failure retries for the plan loader
    pub loader_retries: u32,
    /// Project root the agent works in
    pub project: PathBuf,
    /// Directory holding the roadmap database and memory files
    pub memory: PathBuf,
    /// Memory files handed to the agent, relative to `memory`
    pub context_files: Vec<String>,
    /// Roadmap database file name, relative to `memory`
    pub roadmap_db: String,
    /// Coding agent executable
    pub agent_binary: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: "anthropic/claude-sonnet-4-6".to_string(),
            loader_model: "anthropic/claude-haiku-4-5-20251001".to_string(),
            loader_api_key: None,
            loader_base_url: DEFAULT_BASE_URL.to_string(),
            loader_retries: DEFAULT_RETRIES,
            project: PathBuf::from("."),
            memory: PathBuf::from("memory"),
            context_files: vec!["ARCHITECTURE.md".to_string(), "DECISIONS.md".to_string()],
            roadmap_db: "roadmap.db".to_string(),
            agent_binary: "aider".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from `env_file` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `SmeltError::Configuration` if the env file exists but cannot
    /// be parsed, or if a value is malformed.
    pub fn load(env_file: &Path) -> Result<Self> {
        let file_vars = read_env_file(env_file)?;
        Self::from_sources(file_vars, std::env::vars())
    }

    /// Builds settings from env-file pairs overlaid with environment pairs.
    pub fn from_sources<F, E>(file_vars: F, env_vars: E) -> Result<Self>
    where
        F: IntoIterator<Item = (String, String)>,
        E: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = file_vars
            .into_iter()
            .chain(env_vars)
            .filter_map(|(key, value)| {
                key.strip_prefix(ENV_PREFIX)
                    .map(|name| (name.to_ascii_lowercase(), value))
            })
            .collect();

        let mut settings = Self::default();

        if let Some(value) = vars.get("model") {
            settings.model = value.clone();
        }
        if let Some(value) = vars.get("loader_model") {
            settings.loader_model = value.clone();
        }
        if let Some(value) = vars.get("loader_api_key") {
            settings.loader_api_key = Some(value.clone()).filter(|key| !key.is_empty());
        }
        if let Some(value) = vars.get("loader_base_url") {
            settings.loader_base_url = value.clone();
        }
        if let Some(value) = vars.get("loader_retries") {
            settings.loader_retries = value.trim().parse().map_err(|_| SmeltError::Configuration {
                message: format!("SMELT_LOADER_RETRIES must be a non-negative integer, got {value:?}"),
            })?;
        }
        if let Some(value) = vars.get("project") {
            settings.project = PathBuf::from(value);
        }
        if let Some(value) = vars.get("memory") {
            settings.memory = PathBuf::from(value);
        }
        if let Some(value) = vars.get("context_files") {
            settings.context_files = parse_list(value)?;
        }
        if let Some(value) = vars.get("roadmap_db") {
            settings.roadmap_db = value.clone();
        }
        if let Some(value) = vars.get("agent_binary") {
            settings.agent_binary = value.clone();
        }

        Ok(settings)
    }

    /// Location of the roadmap database.
    pub fn db_path(&self) -> PathBuf {
        self.memory.join(&self.roadmap_db)
    }
}

fn read_env_file(path: &Path) -> Result<Vec<(String, String)>> {
    if !path.is_file() {
        debug!("No env file at {}, using environment only", path.display());
        return Ok(Vec::new());
    }

    let configuration_error = |e: dotenv::Error| SmeltError::Configuration {
        message: format!("Failed to read env file {}: {e}", path.display()),
    };

    debug!("Reading settings from {}", path.display());
    dotenv::from_path_iter(path)
        .map_err(configuration_error)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(configuration_error)
}

/// Accepts a JSON array of strings or a comma-separated list.
fn parse_list(value: &str) -> Result<Vec<String>> {
    let trimmed = value.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|e| SmeltError::Configuration {
            message: format!("SMELT_CONTEXT_FILES is not a JSON list of strings: {e}"),
        });
    }

    Ok(trimmed
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn from_env(pairs: &[(&str, &str)]) -> Settings {
        Settings::from_sources(Vec::new(), vars(pairs)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = from_env(&[]);

        assert_eq!(settings.model, "anthropic/claude-sonnet-4-6");
        assert_eq!(settings.loader_model, "anthropic/claude-haiku-4-5-20251001");
        assert_eq!(settings.loader_api_key, None);
        assert_eq!(settings.loader_retries, 3);
        assert_eq!(settings.project, PathBuf::from("."));
        assert_eq!(settings.memory, PathBuf::from("memory"));
        assert_eq!(settings.context_files, vec!["ARCHITECTURE.md", "DECISIONS.md"]);
        assert_eq!(settings.roadmap_db, "roadmap.db");
        assert_eq!(settings.agent_binary, "aider");
        assert_eq!(settings.db_path(), PathBuf::from("memory/roadmap.db"));
    }

    #[test]
    fn test_all_fields_from_env() {
        let settings = from_env(&[
            ("SMELT_MODEL", "openai/gpt-4o"),
            ("SMELT_LOADER_MODEL", "deepseek/deepseek-chat"),
            ("SMELT_LOADER_API_KEY", "sk-test-key"),
            ("SMELT_LOADER_RETRIES", "5"),
            ("SMELT_PROJECT", "relative/project"),
            ("SMELT_MEMORY", "relative/memory"),
            ("SMELT_ROADMAP_DB", "custom.db"),
            ("SMELT_AGENT_BINARY", "my-aider"),
        ]);

        assert_eq!(settings.model, "openai/gpt-4o");
        assert_eq!(settings.loader_model, "deepseek/deepseek-chat");
        assert_eq!(settings.loader_api_key.as_deref(), Some("sk-test-key"));
        assert_eq!(settings.loader_retries, 5);
        assert!(settings.project.is_relative());
        assert_eq!(settings.memory, PathBuf::from("relative/memory"));
        assert_eq!(settings.db_path(), PathBuf::from("relative/memory/custom.db"));
        assert_eq!(settings.agent_binary, "my-aider");
    }

    #[test]
    fn test_unprefixed_and_unknown_vars_are_ignored() {
        let settings = from_env(&[
            ("MODEL", "should-be-ignored"),
            ("PROJECT", "/should/be/ignored"),
            ("SMELT_UNKNOWN_FIELD", "some_value"),
        ]);

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_context_files_as_json_list() {
        let settings = from_env(&[("SMELT_CONTEXT_FILES", r#"["CUSTOM.md","NOTES.md"]"#)]);
        assert_eq!(settings.context_files, vec!["CUSTOM.md", "NOTES.md"]);
    }

    #[test]
    fn test_context_files_as_comma_list() {
        let settings = from_env(&[("SMELT_CONTEXT_FILES", "CUSTOM.md, NOTES.md")]);
        assert_eq!(settings.context_files, vec!["CUSTOM.md", "NOTES.md"]);
    }

    #[test]
    fn test_malformed_retries_is_configuration_error() {
        let err = Settings::from_sources(Vec::new(), vars(&[("SMELT_LOADER_RETRIES", "many")]))
            .unwrap_err();
        assert!(matches!(err, SmeltError::Configuration { .. }));
    }

    #[test]
    fn test_environment_overrides_file() {
        let settings = Settings::from_sources(
            vars(&[
                ("SMELT_MODEL", "anthropic/claude-opus-4-6"),
                ("SMELT_MEMORY", "test_memory"),
            ]),
            vars(&[("SMELT_MODEL", "openai/gpt-4o")]),
        )
        .unwrap();

        assert_eq!(settings.model, "openai/gpt-4o");
        assert_eq!(settings.memory, PathBuf::from("test_memory"));
    }

    #[test]
    fn test_read_env_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            "SMELT_MODEL=anthropic/claude-opus-4-6\nSMELT_PROJECT=/tmp/test_project\n",
        )
        .unwrap();

        let pairs = read_env_file(&path).unwrap();
        let settings = Settings::from_sources(pairs, Vec::new()).unwrap();

        assert_eq!(settings.model, "anthropic/claude-opus-4-6");
        assert_eq!(settings.project, PathBuf::from("/tmp/test_project"));
    }

    #[test]
    fn test_missing_env_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let pairs = read_env_file(&dir.path().join("nonexistent.env")).unwrap();
        assert!(pairs.is_empty());
    }
}
