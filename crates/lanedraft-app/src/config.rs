// Configuration loading and parsing (config/lanedraft.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use lanedraft_core::recommend::engine::DEFAULT_TOP_N;

/// Name of the single config file under `config/` (and `defaults/`).
pub const CONFIG_FILE: &str = "lanedraft.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to seed {path} from defaults: {source}")]
    SeedFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub facts: FactsConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
}

/// Where the fact sources live. Every listed source is required.
#[derive(Debug, Clone, Deserialize)]
pub struct FactsConfig {
    /// Directory holding the sources, relative to the base directory unless
    /// absolute.
    pub dir: String,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        RecommendConfig {
            top_n: DEFAULT_TOP_N,
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Config {
    /// Full paths of every fact source, resolved against `base_dir`.
    pub fn source_paths(&self, base_dir: &Path) -> Vec<PathBuf> {
        let dir = base_dir.join(&self.facts.dir);
        self.facts.sources.iter().map(|s| dir.join(s)).collect()
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/lanedraft.toml` relative to `base_dir`.
///
/// Does not copy defaults; `load_config()` handles that.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Seed `config/lanedraft.toml` from `defaults/lanedraft.toml` when the
/// config file is absent. Returns whether a copy was made; an existing config
/// is never touched.
pub fn seed_default_config(base_dir: &Path) -> Result<bool, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.is_file() {
        return Ok(false);
    }

    let default = base_dir.join("defaults").join(CONFIG_FILE);
    if !default.is_file() {
        return Err(ConfigError::FileNotFound { path: default });
    }

    let seed = |e| ConfigError::SeedFailed {
        path: target.clone(),
        source: e,
    };
    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(seed)?;
    }
    std::fs::copy(&default, &target).map_err(seed)?;
    info!("Created {} from defaults", target.display());
    Ok(true)
}

/// Load config relative to the current working directory, seeding it from
/// defaults on first run.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    seed_default_config(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.facts.dir.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "facts.dir".into(),
            message: "must not be empty".into(),
        });
    }

    if config.facts.sources.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "facts.sources".into(),
            message: "must list at least one fact source".into(),
        });
    }

    if let Some(blank) = config.facts.sources.iter().position(|s| s.trim().is_empty()) {
        return Err(ConfigError::ValidationError {
            field: format!("facts.sources[{blank}]"),
            message: "must not be empty".into(),
        });
    }

    if config.recommend.top_n == 0 {
        return Err(ConfigError::ValidationError {
            field: "recommend.top_n".into(),
            message: "must be greater than 0".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
