use serde::{Deserialize, Serialize};

/// Output language: `code` names the directory, `tcode` selects the tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub code: String,
    pub tcode: String,
}

impl LanguageConfig {
    pub fn new(code: &str, tcode: &str) -> Self {
        Self {
            code: code.to_string(),
            tcode: tcode.to_string(),
        }
    }
}

pub fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig::new("spanish", "es"),
        LanguageConfig::new("english", "en"),
        LanguageConfig::new("russian", "ru"),
    ]
}
