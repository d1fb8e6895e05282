use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the database file
pub const USER_DB_ENV: &str = "USER_DB";
/// Environment variable naming the newline-delimited names file
pub const NAMES_FILE_ENV: &str = "NAMES_FILE";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub names: NamesSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    /// Unset means the user is asked interactively
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamesSettings {
    /// Unset means the user is asked interactively
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with BABY_NAMES__)
    /// 4. USER_DB and NAMES_FILE
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BABY_NAMES__DATABASE__PATH -> database.path
            .add_source(
                Environment::with_prefix("BABY_NAMES")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        apply_path_overrides(settings, |key| std::env::var(key).ok())?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("BABY_NAMES")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Layer USER_DB and NAMES_FILE on top of the other sources
///
/// Empty values count as unset.
fn apply_path_overrides<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    for (env_key, config_key) in [(USER_DB_ENV, "database.path"), (NAMES_FILE_ENV, "names.path")] {
        if let Some(value) = lookup(env_key).filter(|v| !v.is_empty()) {
            builder = builder.set_override(config_key, value)?;
        }
    }

    builder.build()
}
