use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Proficiency level and the word list it is generated from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub name: String,
    pub source: PathBuf,
}

impl LevelConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            source: PathBuf::from(format!("data/word_lists/spanish_{name}_words.txt")),
        }
    }
}

pub fn default_levels() -> Vec<LevelConfig> {
    vec![LevelConfig::new("b1"), LevelConfig::new("b2")]
}
