pub mod dictionary;
pub mod error;
pub mod examples;
pub mod language;
pub mod parser;
pub mod pipeline;
pub mod summary;
pub mod topic;
pub mod translator;
pub mod writer;

pub use error::{Error, Result};
pub use parser::{TopicMap, VocabularyParser};
pub use translator::Translator;
