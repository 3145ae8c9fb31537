use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::a001_taxonomy::SessionSettings;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    /// Path to a JSON seed file; empty means the embedded demo seed
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Optional log file; empty means console only
    #[serde(default)]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

impl From<&SearchConfig> for SessionSettings {
    fn from(config: &SearchConfig) -> Self {
        SessionSettings {
            max_search_results: config.max_results,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_max_results() -> usize {
    50
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[seed]
path = ""

[logging]
filter = "info"
file = ""

[search]
max_results = 50
"#;

/// Откуда взята конфигурация
///
/// `load_config` runs before tracing is installed, so the caller reports the
/// source with [`ConfigSource::report`] once the subscriber is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given on the command line
    Explicit(PathBuf),
    /// config.toml next to the executable
    ExeDir(PathBuf),
    /// Embedded default; `missing` is the config.toml that was looked for
    Embedded { missing: Option<PathBuf> },
}

impl ConfigSource {
    pub fn report(&self) {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::ExeDir(path) => {
                tracing::info!("Loading config from: {}", path.display());
            }
            ConfigSource::Embedded { missing } => {
                if let Some(path) = missing {
                    tracing::warn!("config.toml not found at: {}", path.display());
                }
                tracing::info!("Using default embedded configuration");
            }
        }
    }
}

/// Load configuration
///
/// Search order:
/// 1. Explicit path (command line)
/// 2. config.toml next to the executable
/// 3. Embedded default config
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigSource)> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    load_config_from(explicit, exe_dir.as_deref())
}

fn load_config_from(
    explicit: Option<&Path>,
    exe_dir: Option<&Path>,
) -> anyhow::Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    let mut missing = None;
    if let Some(exe_dir) = exe_dir {
        let config_path = exe_dir.join("config.toml");
        if config_path.exists() {
            let config = read_config(&config_path)?;
            return Ok((config, ConfigSource::ExeDir(config_path)));
        }
        missing = Some(config_path);
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded { missing }))
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    use anyhow::Context;

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolve a configured path; empty means "not configured"
///
/// Relative paths are resolved against the executable directory.
pub fn resolve_path(configured: &str) -> Option<PathBuf> {
    let configured = configured.trim();
    if configured.is_empty() {
        return None;
    }

    let path = Path::new(configured);
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(path));
        }
    }

    Some(PathBuf::from(configured))
}
