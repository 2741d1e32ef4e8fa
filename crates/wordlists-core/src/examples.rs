//! Example sentence data: curated sentences and carrier templates.

use std::collections::HashMap;

use crate::dictionary::lookup_key;

const WORD_SLOT: &str = "{word}";
const TOPIC_SLOT: &str = "{topic}";

/// Carrier sentence with `{word}` and `{topic}` slots
#[derive(Debug, Clone)]
pub struct ExampleTemplate {
    pattern: String,
}

impl ExampleTemplate {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
        }
    }

    /// Used for languages without a template of their own
    pub fn fallback() -> Self {
        Self::new("Example: {word}")
    }

    /// `topic` is expected in its human readable form
    pub fn render(&self, word: &str, topic: &str) -> String {
        let mut out = String::with_capacity(self.pattern.len() + word.len() + topic.len());
        let mut rest = self.pattern.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix(WORD_SLOT) {
                out.push_str(word);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(TOPIC_SLOT) {
                out.push_str(topic);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }

        out.push_str(rest);
        out
    }
}

/// Hand-written sentences, keyed by topic and then by translated word
#[derive(Debug, Clone, Default)]
pub struct CuratedExamples {
    by_topic: HashMap<String, HashMap<String, String>>,
}

impl CuratedExamples {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, topic: &str, word: &str, sentence: &str) {
        let sentences = self.by_topic.entry(topic.to_string()).or_default();
        if let Some(previous) = sentences.insert(lookup_key(word), sentence.to_string()) {
            tracing::warn!("Curated example for {topic}/{word} replaced: {previous:?}");
        }
    }

    pub fn with_topic(mut self, topic: &str, sentences: &[(&str, &str)]) -> Self {
        for (word, sentence) in sentences {
            self.insert(topic, word, sentence);
        }
        self
    }

    pub fn get(&self, topic: &str, word: &str) -> Option<&str> {
        self.by_topic
            .get(topic)
            .and_then(|sentences| sentences.get(&lookup_key(word)))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_topic.values().map(HashMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_fills_both_slots() {
        let template = ExampleTemplate::new(r#"The word "{word}" is useful in the context of {topic}."#);
        assert_eq!(
            template.render("xyzzy", "salud e higiene"),
            r#"The word "xyzzy" is useful in the context of salud e higiene."#
        );
    }

    #[test]
    fn word_containing_slot_text_is_not_expanded() {
        let template = ExampleTemplate::new("{word} / {topic}");
        assert_eq!(template.render("{topic}", "ocio"), "{topic} / ocio");
    }

    #[test]
    fn topic_containing_slot_text_is_not_expanded() {
        let template = ExampleTemplate::new("{word} / {topic}");
        assert_eq!(template.render("ocio", "{word}"), "ocio / {word}");
    }

    #[test]
    fn unknown_braces_are_kept() {
        let template = ExampleTemplate::new("{x} «{word}» {");
        assert_eq!(template.render("hueso", "cuerpo"), "{x} «hueso» {");
    }

    #[test]
    fn curated_lookup_is_per_topic_and_case_insensitive() {
        let curated = CuratedExamples::new()
            .with_topic("trabajo", &[("work", "I work in an office downtown.")]);

        assert_eq!(curated.get("trabajo", "Work"), Some("I work in an office downtown."));
        assert_eq!(curated.get("ocio", "work"), None);
        assert_eq!(curated.len(), 1);
    }
}
