use std::collections::HashMap;
use std::collections::hash_map::Entry;

use unicode_normalization::UnicodeNormalization;

/// Normalized dictionary key: trimmed, lowercased, NFC composed
pub fn lookup_key(word: &str) -> String {
    word.trim().nfc().collect::<String>().to_lowercase()
}

/// Closed-world word list for one target language
#[derive(Debug, Clone)]
pub struct TranslationTable {
    language: String,
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            entries: HashMap::new(),
        }
    }

    /// Build from hand-authored pairs. The first pair for a key wins.
    pub fn from_pairs(language: &str, pairs: &[(&str, &str)]) -> Self {
        let mut table = Self::new(language);
        for (source, target) in pairs {
            table.insert(source, target);
        }
        table
    }

    /// Returns false and keeps the existing entry when the key is taken
    pub fn insert(&mut self, source: &str, target: &str) -> bool {
        match self.entries.entry(lookup_key(source)) {
            Entry::Occupied(existing) => {
                tracing::warn!(
                    "Duplicate {} entry for {:?}: keeping {:?}, ignoring {:?}",
                    self.language,
                    existing.key(),
                    existing.get(),
                    target
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(target.to_string());
                true
            }
        }
    }

    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(&lookup_key(word)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_padding() {
        let table = TranslationTable::from_pairs("en", &[("comida de Navidad", "Christmas dinner")]);

        assert_eq!(table.lookup("  Comida de Navidad "), Some("Christmas dinner"));
        assert_eq!(table.lookup("comida de navidad"), Some("Christmas dinner"));
        assert_eq!(table.lookup("comida"), None);
    }

    #[test]
    fn decomposed_accents_match_composed_keys() {
        let table = TranslationTable::from_pairs("en", &[("corazón", "heart")]);
        assert_eq!(table.lookup("corazo\u{301}n"), Some("heart"));
    }

    #[test]
    fn first_pair_wins_on_duplicates() {
        let mut table = TranslationTable::new("ru");
        assert!(table.insert("empleo", "трудоустройство"));
        assert!(!table.insert("Empleo", "работа"));

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("empleo"), Some("трудоустройство"));
    }
}
