// WHY: narrow tokenize-and-tag seam so the extraction pipeline can be
// exercised with fabricated documents, decoupled from any concrete
// linguistic backend.

use anyhow::Result;
use std::ops::Range;

pub mod german;
pub mod lexicon;
pub mod segmenter;

pub use german::GermanAnnotator;

/// Coarse part-of-speech category of an annotated token.
///
/// Only the three extracted categories are distinguished; everything else
/// (determiners, pronouns, auxiliaries, …) collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Verb,
    Adj,
    Other,
}

/// One token as produced by an annotator. Immutable, scoped to one
/// analysis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
    /// Surface form as it appears in the text.
    pub text: String,
    /// Normalized base form.
    pub lemma: String,
    pub pos: PosTag,
    /// True for punctuation and whitespace tokens, which carry no vocabulary.
    pub is_punct_or_space: bool,
}

/// A sentence: its rendered text plus the half-open range of token indices
/// it covers in the owning [`AnnotatedDoc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub span: Range<usize>,
}

/// Full annotator output for one text: tokens in document order and the
/// sentences partitioning them.
///
/// Well-formed annotators produce non-overlapping spans covering every
/// token exactly once; consumers must tolerate violations rather than
/// panic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedDoc {
    pub tokens: Vec<AnnotatedToken>,
    pub sentences: Vec<Sentence>,
}

impl AnnotatedDoc {
    /// Linear membership lookup of the sentence containing token
    /// `token_index`. Document-sized inputs keep this cheap enough.
    pub fn sentence_containing(&self, token_index: usize) -> Option<&Sentence> {
        self.sentences.iter().find(|s| s.span.contains(&token_index))
    }
}

/// Tokenization, sentence segmentation, lemmatization and POS tagging,
/// behind one call.
///
/// Implementations are expected to be constructed once per process and
/// reused; construction is where expensive resources (lexicons, models)
/// load and where misconfiguration surfaces.
pub trait Annotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc>;
}
