use std::collections::HashMap;

use wordlists_core::dictionary::TranslationTable;
use wordlists_core::examples::{CuratedExamples, ExampleTemplate};
use wordlists_core::language::LanguagePack;

use crate::examples;
use crate::lexicon;
use crate::topics::TOPIC_NAMES;

/// Spanish word lists rendered into English and Russian
pub struct SpanishPack {
    translations: HashMap<&'static str, TranslationTable>,
    curated: HashMap<&'static str, CuratedExamples>,
    templates: HashMap<&'static str, ExampleTemplate>,
    topic_names: HashMap<&'static str, &'static str>,
}

impl SpanishPack {
    /// Build the embedded tables
    pub fn with_defaults() -> Self {
        let english_pairs: Vec<(&str, &str)> = lexicon::rows().map(|&(es, en, _)| (es, en)).collect();
        let russian_pairs: Vec<(&str, &str)> = lexicon::rows().map(|&(es, _, ru)| (es, ru)).collect();
        let english = TranslationTable::from_pairs("en", &english_pairs);
        let russian = TranslationTable::from_pairs("ru", &russian_pairs);

        let english_examples = examples::english();
        let russian_examples = examples::russian();
        tracing::info!(
            "Loaded {} English and {} Russian dictionary entries, {} + {} curated examples",
            english.len(),
            russian.len(),
            english_examples.len(),
            russian_examples.len()
        );

        Self {
            translations: HashMap::from([("en", english), ("ru", russian)]),
            curated: HashMap::from([("en", english_examples), ("ru", russian_examples)]),
            templates: examples::templates().into_iter().collect(),
            topic_names: TOPIC_NAMES.iter().copied().collect(),
        }
    }
}

impl Default for SpanishPack {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl LanguagePack for SpanishPack {
    fn source_language(&self) -> &str {
        "es"
    }

    fn translations(&self, target: &str) -> Option<&TranslationTable> {
        self.translations.get(target)
    }

    fn curated_examples(&self, target: &str) -> Option<&CuratedExamples> {
        self.curated.get(target)
    }

    fn example_template(&self, language: &str) -> Option<&ExampleTemplate> {
        self.templates.get(language)
    }

    fn topic_name(&self, key: &str) -> Option<&str> {
        self.topic_names.get(key).copied()
    }
}
