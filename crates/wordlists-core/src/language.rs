use crate::dictionary::TranslationTable;
use crate::examples::{CuratedExamples, ExampleTemplate};

/// Static data for one source language, built once and shared read-only
pub trait LanguagePack: Send + Sync {
    /// Translation code of the language the word lists are written in ("es")
    fn source_language(&self) -> &str;

    /// Word table for a target translation code
    fn translations(&self, target: &str) -> Option<&TranslationTable>;

    /// Hand-written sentences for a target translation code
    fn curated_examples(&self, target: &str) -> Option<&CuratedExamples>;

    /// Carrier sentence for any translation code, source included
    fn example_template(&self, language: &str) -> Option<&ExampleTemplate>;

    /// Explicit display name for a topic key
    fn topic_name(&self, key: &str) -> Option<&str>;
}
