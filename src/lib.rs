pub mod annotator;
pub mod error;
pub mod extractor;
pub mod trimmer;

// Re-export main types for convenient access
pub use annotator::{AnnotatedDoc, AnnotatedToken, Annotator, GermanAnnotator, PosTag, Sentence};
pub use error::VocabError;
pub use extractor::{AdjectiveOccurrence, Extraction, Extractor, NounOccurrence, VerbOccurrence};
pub use trimmer::{trim_sentence, DEFAULT_MAX_WORDS};
