use serde::{Deserialize, Serialize};

/// One word of a topic artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Source language surface form, as written in the word list
    pub word: String,
    /// Target language rendering, or `word` itself when unknown
    pub translation: String,
    pub example: String,
}

/// Contents of `<topic_key>.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFile {
    /// Human readable topic name
    pub topic: String,
    #[serde(default)]
    pub words: Vec<VocabularyEntry>,
}

/// Contents of `index.json`: topic keys in discovery order
pub type TopicIndex = Vec<String>;
