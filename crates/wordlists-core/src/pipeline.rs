use std::fs;

use wordlists_config::Config;

use crate::error::Result;
use crate::language::LanguagePack;
use crate::parser::VocabularyParser;
use crate::translator::Translator;
use crate::writer::{LevelReport, WordListWriter};

/// Outcome of one generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub levels: Vec<LevelReport>,
    /// Levels whose source file was missing or unreadable
    pub skipped: Vec<String>,
}

impl GenerationReport {
    pub fn files(&self) -> usize {
        self.levels.iter().map(LevelReport::files).sum()
    }

    pub fn entries(&self) -> usize {
        self.levels.iter().map(LevelReport::entries).sum()
    }
}

/// Parse every configured level and write its tree for every configured language
pub fn generate(config: &Config, pack: &dyn LanguagePack) -> Result<GenerationReport> {
    let parser = VocabularyParser::new();
    let writer = WordListWriter::new(config.base_dir.clone(), Translator::new(pack));
    let mut report = GenerationReport::default();

    for level in &config.levels {
        if !level.source.exists() {
            tracing::warn!(
                "Source file {} not found, skipping {}",
                level.source.display(),
                level.name
            );
            report.skipped.push(level.name.clone());
            continue;
        }

        let text = match fs::read_to_string(&level.source) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    "Source file {} unreadable ({e}), skipping {}",
                    level.source.display(),
                    level.name
                );
                report.skipped.push(level.name.clone());
                continue;
            }
        };

        tracing::info!("Processing {} level vocabulary...", level.name.to_uppercase());
        let topics = parser.parse(&text).inspect_err(|e| {
            tracing::error!("Failed to parse {}: {e}", level.source.display());
        })?;
        tracing::info!("Found {} topics for {}", topics.len(), level.name);

        report
            .levels
            .push(writer.write_level(&level.name, &topics, &config.languages)?);
    }

    Ok(report)
}
