use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::language::LanguageConfig;
use self::level::LevelConfig;

pub mod language;
pub mod level;

/// File looked up in the working directory by [`Config::load`]
pub const CONFIG_FILE: &str = "wordlists.json";

fn default_base_dir() -> PathBuf {
    PathBuf::from("data/word_lists")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the generated tree: `<base_dir>/<language>/<level>/`
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    #[serde(default = "level::default_levels")]
    pub levels: Vec<LevelConfig>,
    #[serde(default = "language::default_languages")]
    pub languages: Vec<LanguageConfig>,
    /// Language/level whose index is listed by the summary
    pub reference: ReferenceConfig,
    /// Filter directive handed to the tracing subscriber
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            levels: level::default_levels(),
            languages: language::default_languages(),
            reference: ReferenceConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load `wordlists.json` from the working directory, or the defaults if it is absent
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(config)
    }
}

fn default_reference_language() -> String {
    "spanish".to_string()
}

fn default_reference_level() -> String {
    "b1".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    #[serde(default = "default_reference_language")]
    pub language: String,
    #[serde(default = "default_reference_level")]
    pub level: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            language: default_reference_language(),
            level: default_reference_level(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}
