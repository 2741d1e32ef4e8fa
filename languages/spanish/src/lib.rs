pub mod examples;
pub mod lexicon;
pub mod pack;
pub mod topics;

pub use pack::SpanishPack;
