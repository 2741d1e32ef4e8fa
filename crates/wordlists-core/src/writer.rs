use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use wordlists_config::language::LanguageConfig;
use wordlists_types::{TopicFile, TopicIndex};

use crate::error::{Error, Result};
use crate::parser::TopicMap;
use crate::translator::Translator;

pub const INDEX_FILE: &str = "index.json";

/// Counts for one language of one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageReport {
    pub language: String,
    pub topics: usize,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelReport {
    pub level: String,
    pub languages: Vec<LanguageReport>,
}

impl LevelReport {
    pub fn entries(&self) -> usize {
        self.languages.iter().map(|l| l.entries).sum()
    }

    pub fn files(&self) -> usize {
        self.languages.iter().map(|l| l.topics + 1).sum()
    }
}

/// Writes `<base_dir>/<language>/<level>/` trees
pub struct WordListWriter<'a> {
    base_dir: PathBuf,
    translator: Translator<'a>,
}

impl<'a> WordListWriter<'a> {
    pub fn new(base_dir: impl Into<PathBuf>, translator: Translator<'a>) -> Self {
        Self {
            base_dir: base_dir.into(),
            translator,
        }
    }

    pub fn level_dir(&self, language: &LanguageConfig, level: &str) -> PathBuf {
        self.base_dir.join(&language.code).join(level)
    }

    pub fn write_level(
        &self,
        level: &str,
        topics: &TopicMap,
        languages: &[LanguageConfig],
    ) -> Result<LevelReport> {
        let languages = languages
            .iter()
            .map(|language| self.write_language(level, topics, language))
            .collect::<Result<Vec<_>>>()?;

        Ok(LevelReport {
            level: level.to_string(),
            languages,
        })
    }

    fn write_language(
        &self,
        level: &str,
        topics: &TopicMap,
        language: &LanguageConfig,
    ) -> Result<LanguageReport> {
        let dir = self.level_dir(language, level);
        fs::create_dir_all(&dir).map_err(Error::io(&dir))?;

        let mut entries = 0;
        for (key, words) in topics {
            let topic = TopicFile {
                topic: self.translator.display_name(key),
                words: words
                    .iter()
                    .map(|word| self.translator.entry(word, &language.tcode, key))
                    .collect(),
            };

            write_json(&dir.join(format!("{key}.json")), &topic)?;
            tracing::info!(
                "Written {}/{}/{}.json ({} items)",
                language.code,
                level,
                key,
                topic.words.len()
            );
            entries += topic.words.len();
        }

        // Only once every topic file exists
        let index: TopicIndex = topics.keys().cloned().collect();
        write_json(&dir.join(INDEX_FILE), &index)?;

        Ok(LanguageReport {
            language: language.code.clone(),
            topics: topics.len(),
            entries,
        })
    }
}

/// Pretty-printed, non-ASCII kept verbatim, file replaced wholesale
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(Error::io(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(Error::json(path))?;
    writer.flush().map_err(Error::io(path))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use wordlists_config::language::default_languages;
    use wordlists_types::VocabularyEntry;

    use super::*;
    use crate::parser::VocabularyParser;
    use crate::translator::tests::TestPack;

    const SAMPLE: &str = "## 1. Alimentación\nmúsculo\nhueso\n## 2. Trabajo\ntrabajo\nxyzzy\n";

    fn read_topic(path: &Path) -> TopicFile {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn every_topic_is_written_for_every_language() {
        let dir = tempfile::tempdir().unwrap();
        let pack = TestPack::new();
        let writer = WordListWriter::new(dir.path(), Translator::new(&pack));
        let topics = VocabularyParser::new().parse(SAMPLE).unwrap();

        let report = writer.write_level("b1", &topics, &default_languages()).unwrap();
        assert_eq!(report.languages.len(), 3);
        assert_eq!(report.entries(), 3 * 4);
        assert_eq!(report.files(), 3 * 3);

        for language in default_languages() {
            let level_dir = writer.level_dir(&language, "b1");
            for (key, words) in &topics {
                let topic = read_topic(&level_dir.join(format!("{key}.json")));
                assert_eq!(topic.words.len(), words.len());
            }
        }
    }

    #[test]
    fn index_matches_topic_files() {
        let dir = tempfile::tempdir().unwrap();
        let pack = TestPack::new();
        let writer = WordListWriter::new(dir.path(), Translator::new(&pack));
        let topics = VocabularyParser::new().parse(SAMPLE).unwrap();
        writer.write_level("b2", &topics, &default_languages()).unwrap();

        let level_dir = dir.path().join("english").join("b2");
        let index: TopicIndex =
            serde_json::from_str(&fs::read_to_string(level_dir.join(INDEX_FILE)).unwrap()).unwrap();
        assert_eq!(index, vec!["alimentación", "trabajo"]);

        let written: BTreeSet<String> = fs::read_dir(&level_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name != INDEX_FILE)
            .map(|name| name.trim_end_matches(".json").to_string())
            .collect();
        assert_eq!(written, index.into_iter().collect::<BTreeSet<_>>());
    }

    #[test]
    fn topic_file_carries_translations_and_display_name() {
        let dir = tempfile::tempdir().unwrap();
        let pack = TestPack::new();
        let writer = WordListWriter::new(dir.path(), Translator::new(&pack));
        let topics = VocabularyParser::new().parse(SAMPLE).unwrap();
        writer.write_level("b1", &topics, &default_languages()).unwrap();

        let work = read_topic(&dir.path().join("english/b1/trabajo.json"));
        assert_eq!(work.topic, "Work");
        assert_eq!(
            work.words[0],
            VocabularyEntry {
                word: "trabajo".into(),
                translation: "work".into(),
                example: "I work in an office downtown.".into(),
            }
        );
        assert_eq!(work.words[1].translation, "xyzzy");
        assert!(work.words[1].example.contains("xyzzy"));

        let food = read_topic(&dir.path().join("spanish/b1/alimentación.json"));
        assert_eq!(food.topic, "Alimentación");
        assert!(food.words.iter().all(|e| e.word == e.translation));
    }

    #[test]
    fn output_is_pretty_and_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let pack = TestPack::new();
        let writer = WordListWriter::new(dir.path(), Translator::new(&pack));
        let topics = VocabularyParser::new().parse(SAMPLE).unwrap();
        writer.write_level("b1", &topics, &default_languages()).unwrap();

        let index = fs::read_to_string(dir.path().join("russian/b1/index.json")).unwrap();
        assert_eq!(index, "[\n  \"alimentación\",\n  \"trabajo\"\n]");
    }

    #[test]
    fn failed_topic_write_leaves_no_index() {
        let dir = tempfile::tempdir().unwrap();
        let pack = TestPack::new();
        let writer = WordListWriter::new(dir.path(), Translator::new(&pack));
        let topics = VocabularyParser::new().parse(SAMPLE).unwrap();
        let blocked = dir.path().join("spanish/b1/trabajo.json");
        fs::create_dir_all(&blocked).unwrap();

        let err = writer.write_level("b1", &topics, &default_languages()).unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if *path == blocked));
        assert!(!dir.path().join("spanish/b1").join(INDEX_FILE).exists());
    }

    #[test]
    fn rewriting_is_byte_identical_and_replaces_stale_content() {
        let dir = tempfile::tempdir().unwrap();
        let pack = TestPack::new();
        let writer = WordListWriter::new(dir.path(), Translator::new(&pack));
        let topics = VocabularyParser::new().parse(SAMPLE).unwrap();
        let path = dir.path().join("english/b1/trabajo.json");

        writer.write_level("b1", &topics, &default_languages()).unwrap();
        let first = fs::read(&path).unwrap();

        fs::write(&path, "stale content that is much longer than the real file ".repeat(20)).unwrap();
        writer.write_level("b1", &topics, &default_languages()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }
}
