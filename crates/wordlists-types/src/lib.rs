pub mod types;

pub use types::{TopicFile, TopicIndex, VocabularyEntry};
