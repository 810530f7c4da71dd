//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::{Config, OutputFormat};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "recipebook.toml";

pub const ENV_SEED: &str = "RECIPEBOOK_SEED";
pub const ENV_FORMAT: &str = "RECIPEBOOK_FORMAT";
pub const ENV_LOG: &str = "RECIPEBOOK_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConfigResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let (Some(seed), Some(dir)) = (config.catalog.seed.as_mut(), path.parent()) {
        if seed.is_relative() {
            *seed = dir.join(&*seed);
        }
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration by precedence.
///
/// An explicit path must exist. Otherwise the project config, then the user
/// config, then built-in defaults. Environment overrides apply last.
pub fn load_layered(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> ConfigResult<(Config, Vec<ConfigWarning>)> {
    let candidates = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => {
            let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
            let user = user_config_path();
            project
                .into_iter()
                .chain(user)
                .filter(|path| path.exists())
                .collect()
        }
    };

    let (config, warnings) = match candidates.first() {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// `<config_dir>/recipebook/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recipebook").join("config.toml"))
}

/// Apply environment variable overrides (RECIPEBOOK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_overrides_from<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // RECIPEBOOK_SEED
    if let Some(seed) = var(ENV_SEED).filter(|s| !s.trim().is_empty()) {
        config.catalog.seed = Some(PathBuf::from(seed));
    }

    // RECIPEBOOK_FORMAT (unknown values keep the configured format)
    if let Some(format) = var(ENV_FORMAT) {
        match format.parse::<OutputFormat>() {
            Ok(format) => config.output.format = format,
            Err(message) => debug!(%message, "ignoring {ENV_FORMAT}"),
        }
    }

    // RECIPEBOOK_LOG
    if let Some(level) = var(ENV_LOG).filter(|s| !s.trim().is_empty()) {
        config.logging.level = level;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["catalog", "seed", "output", "format", "logging", "level"];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
