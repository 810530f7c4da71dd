//! Configuration module for recipebook
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RECIPEBOOK_*)
//! 3. Project config (./recipebook.toml) or an explicit `--config` file
//! 4. User config (<config_dir>/recipebook/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    user_config_path, ConfigError, ConfigResult, ConfigWarning, ENV_FORMAT, ENV_LOG, ENV_SEED,
    PROJECT_CONFIG_FILE,
};
pub use types::{CatalogConfig, Config, LoggingConfig, OutputConfig, OutputFormat};
