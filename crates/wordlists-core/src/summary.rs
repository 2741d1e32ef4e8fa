//! Read-only report over an already generated tree.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use serde::Deserialize;
use serde::de::IgnoredAny;
use wordlists_config::ReferenceConfig;
use wordlists_config::language::LanguageConfig;
use wordlists_config::level::LevelConfig;
use wordlists_types::TopicIndex;

use crate::topic::default_display_name;
use crate::writer::INDEX_FILE;

/// Only the part of a topic artifact the report needs
#[derive(Deserialize)]
struct WordCount {
    #[serde(default)]
    words: Vec<IgnoredAny>,
}

/// A topic artifact that could not be counted
#[derive(Debug, Clone)]
pub struct ArtifactError {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct LevelSummary {
    pub level: String,
    /// Readable topic artifacts, `index.json` excluded
    pub topics: usize,
    pub words: usize,
    pub errors: Vec<ArtifactError>,
}

#[derive(Debug, Clone, Default)]
pub struct LanguageSummary {
    pub language: String,
    /// Levels whose directory exists
    pub levels: Vec<LevelSummary>,
}

impl LanguageSummary {
    pub fn words(&self) -> usize {
        self.levels.iter().map(|l| l.words).sum()
    }

    pub fn files(&self) -> usize {
        self.levels.iter().map(|l| l.topics).sum()
    }
}

#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub languages: Vec<LanguageSummary>,
    pub level_count: usize,
    /// Topic keys of the reference index, or why it could not be read.
    /// `None` when the reference directory does not exist.
    pub reference_topics: Option<Result<TopicIndex, String>>,
}

impl SummaryReport {
    pub fn total_files(&self) -> usize {
        self.languages.iter().map(LanguageSummary::files).sum()
    }

    pub fn total_words(&self) -> usize {
        self.languages.iter().map(LanguageSummary::words).sum()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ArtifactError> {
        self.languages
            .iter()
            .flat_map(|l| l.levels.iter())
            .flat_map(|l| l.errors.iter())
    }
}

/// Walk `<base_dir>/<language>/<level>/` for every configured pair
pub fn summarize(
    base_dir: &Path,
    languages: &[LanguageConfig],
    levels: &[LevelConfig],
    reference: &ReferenceConfig,
) -> SummaryReport {
    let languages = languages
        .iter()
        .map(|language| {
            let lang_dir = base_dir.join(&language.code);
            LanguageSummary {
                language: language.code.clone(),
                levels: levels
                    .iter()
                    .filter_map(|level| {
                        let dir = lang_dir.join(&level.name);
                        dir.is_dir().then(|| summarize_level(&dir, &level.name))
                    })
                    .collect(),
            }
        })
        .collect();

    let reference_dir = base_dir.join(&reference.language).join(&reference.level);
    let reference_topics = reference_dir
        .is_dir()
        .then(|| read_index(&reference_dir.join(INDEX_FILE)));

    SummaryReport {
        languages,
        level_count: levels.len(),
        reference_topics,
    }
}

fn summarize_level(dir: &Path, level: &str) -> LevelSummary {
    let mut summary = LevelSummary {
        level: level.to_string(),
        ..Default::default()
    };

    let pattern = format!("{}/*.json", Pattern::escape(&dir.to_string_lossy()));
    let paths = match glob(&pattern) {
        Ok(paths) => paths,
        Err(e) => {
            summary.errors.push(ArtifactError {
                path: dir.to_path_buf(),
                message: e.to_string(),
            });
            return summary;
        }
    };

    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                summary.errors.push(ArtifactError {
                    path: e.path().to_path_buf(),
                    message: e.error().to_string(),
                });
                continue;
            }
        };

        if path.file_name().is_some_and(|name| name == INDEX_FILE) {
            continue;
        }

        match count_words(&path) {
            Ok(words) => {
                summary.topics += 1;
                summary.words += words;
            }
            Err(message) => {
                tracing::debug!("Skipping {}: {message}", path.display());
                summary.errors.push(ArtifactError { path, message });
            }
        }
    }

    summary
}

fn count_words(path: &Path) -> Result<usize, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let data: WordCount =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| e.to_string())?;
    Ok(data.words.len())
}

fn read_index(path: &Path) -> Result<TopicIndex, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| e.to_string())
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎯 Topical Vocabulary Generation Summary")?;
        writeln!(f, "{}", "=".repeat(50))?;

        for language in &self.languages {
            writeln!(f)?;
            writeln!(f, "📚 {} Language Files:", language.language.to_uppercase())?;
            for level in &language.levels {
                for error in &level.errors {
                    writeln!(f, "   Error reading {}: {}", error.path.display(), error.message)?;
                }
                writeln!(
                    f,
                    "   {}: {} topics, {} words",
                    level.level.to_uppercase(),
                    level.topics,
                    level.words
                )?;
            }
            writeln!(f, "   Total for {}: {} words", language.language, language.words())?;
        }

        writeln!(f)?;
        writeln!(f, "🎉 OVERALL SUMMARY:")?;
        writeln!(f, "   Total JSON files: {}", self.total_files())?;
        writeln!(f, "   Total vocabulary entries: {}", self.total_words())?;
        writeln!(f, "   Languages: {}", self.languages.len())?;
        writeln!(f, "   Levels: {}", self.level_count)?;

        match &self.reference_topics {
            Some(Ok(topics)) => {
                writeln!(f)?;
                writeln!(f, "📋 Available Topics ({}):", topics.len())?;
                for (i, topic) in topics.iter().enumerate() {
                    writeln!(f, "   {:2}. {}", i + 1, default_display_name(topic))?;
                }
            }
            Some(Err(message)) => writeln!(f, "Error reading topics: {message}")?,
            None => {}
        }

        Ok(())
    }
}
