use wordlists_types::VocabularyEntry;

use crate::examples::ExampleTemplate;
use crate::language::LanguagePack;
use crate::topic::{default_display_name, humanize};

/// Dictionary lookup and example generation over a [`LanguagePack`]
#[derive(Clone, Copy)]
pub struct Translator<'a> {
    pack: &'a dyn LanguagePack,
}

impl<'a> Translator<'a> {
    pub fn new(pack: &'a dyn LanguagePack) -> Self {
        Self { pack }
    }

    pub fn is_source(&self, language: &str) -> bool {
        language == self.pack.source_language()
    }

    /// Best known translation, or `word` unchanged
    pub fn translate(&self, word: &str, target: &str) -> String {
        if self.is_source(target) {
            return word.to_string();
        }

        self.pack
            .translations(target)
            .and_then(|table| table.lookup(word))
            .map(str::to_string)
            .unwrap_or_else(|| word.to_string())
    }

    /// Curated sentence when one exists for this topic, else the language template
    pub fn example(&self, language: &str, word: &str, topic: &str) -> String {
        if !self.is_source(language) {
            if let Some(sentence) = self
                .pack
                .curated_examples(language)
                .and_then(|curated| curated.get(topic, word))
            {
                return sentence.to_string();
            }
        }

        match self.pack.example_template(language) {
            Some(template) => template.render(word, &humanize(topic)),
            None => ExampleTemplate::fallback().render(word, &humanize(topic)),
        }
    }

    pub fn entry(&self, word: &str, language: &str, topic: &str) -> VocabularyEntry {
        let translation = self.translate(word, language);
        let example = self.example(language, &translation, topic);
        VocabularyEntry {
            word: word.to_string(),
            translation,
            example,
        }
    }

    pub fn display_name(&self, key: &str) -> String {
        self.pack
            .topic_name(key)
            .map(str::to_string)
            .unwrap_or_else(|| default_display_name(key))
    }
}
