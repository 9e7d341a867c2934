//! Error taxonomy for the extraction pipeline boundary.

use thiserror::Error;

/// Failures the binary distinguishes at its outer boundary.
///
/// Input errors produce a structured `{"error": …}` payload on stdout;
/// processing errors produce the same payload on stderr; configuration
/// errors abort at startup with a plain diagnostic before any input is
/// read. All of them exit non-zero.
#[derive(Debug, Error)]
pub enum VocabError {
    /// The input stream was empty.
    #[error("No input provided")]
    NoInput,

    /// The transcript resolved from the request was empty.
    #[error("Transcript is empty")]
    EmptyTranscript,

    /// The annotator could not be constructed. Startup-time, fatal.
    #[error("annotator unavailable: {0}")]
    Configuration(String),

    /// Any other unexpected failure during analysis.
    #[error(transparent)]
    Processing(#[from] anyhow::Error),
}

impl VocabError {
    /// Input errors are expected per-request conditions; their payload
    /// goes to stdout like a regular (if unhappy) response.
    pub fn is_input_error(&self) -> bool {
        matches!(self, VocabError::NoInput | VocabError::EmptyTranscript)
    }
}
