//! Rule-based German annotator.
//!
//! Tokenizes, segments and tags German text without an external model: a
//! small embedded lexicon resolves closed-class words and frequent
//! irregular forms, and orthographic/suffix heuristics cover the open
//! vocabulary. German capitalizes nouns, which makes the heuristics far
//! more reliable than they would be for other languages. The results are
//! approximations, good enough for vocabulary extraction, not a general
//! tagger.

use anyhow::Result;
use tracing::{debug, info};

use super::lexicon::Lexicon;
use super::segmenter::SentenceSegmenter;
use super::{AnnotatedDoc, AnnotatedToken, Annotator, PosTag, Sentence};

/// Derivational suffixes that mark a word as a noun.
const NOUN_SUFFIXES: &[&str] = &[
    "ung", "heit", "keit", "schaft", "tät", "chen", "lein", "nis", "tum",
];

/// Derivational suffixes that mark a word stem as an adjective.
const ADJ_SUFFIXES: &[&str] = &[
    "ig", "lich", "isch", "bar", "sam", "haft", "los", "voll", "arm", "reich",
];

/// Adjective inflection endings, longest first so stripping is greedy.
const ADJ_INFLECTIONS: &[&str] = &["em", "en", "er", "es", "e"];

/// Verb conjugation endings, longest first.
const VERB_ENDINGS: &[&str] = &["test", "tet", "st", "te", "t", "e"];

pub struct GermanAnnotator {
    lexicon: Lexicon,
    segmenter: SentenceSegmenter,
}

impl GermanAnnotator {
    /// Load the embedded lexicon and build the segmenter. Failure here is
    /// a configuration problem and must abort before any input is read.
    pub fn new() -> Result<Self> {
        let lexicon = Lexicon::embedded()?;
        info!(entries = lexicon.len(), "loaded German lexicon");
        Ok(Self {
            lexicon,
            segmenter: SentenceSegmenter::with_default_rules(),
        })
    }

    /// Lemma and POS for one word token. `sentence_initial` weakens the
    /// capitalization cue, since every German sentence starts uppercase.
    fn tag(&self, surface: &str, sentence_initial: bool) -> (String, PosTag) {
        let lower = surface.to_lowercase();

        if let Some((lemma, pos)) = self.lexicon.lookup(&lower) {
            return (lemma.clone(), *pos);
        }

        let capitalized = surface
            .chars()
            .next()
            .map(char::is_uppercase)
            .unwrap_or(false);

        if capitalized && !sentence_initial {
            // Mid-sentence capitalization is the strongest noun signal
            // German orthography offers.
            return (surface.to_string(), PosTag::Noun);
        }

        if capitalized {
            if has_noun_suffix(&lower) {
                return (surface.to_string(), PosTag::Noun);
            }
            if let Some(lemma) = verb_lemma(&lower) {
                return (lemma, PosTag::Verb);
            }
            // Unknown capitalized sentence opener: noun is the least bad
            // guess (proper names, topicalized subjects).
            return (surface.to_string(), PosTag::Noun);
        }

        if let Some(lemma) = adjective_lemma(&lower) {
            return (lemma, PosTag::Adj);
        }
        if let Some(lemma) = verb_lemma(&lower) {
            return (lemma, PosTag::Verb);
        }
        (lower, PosTag::Other)
    }
}

impl Annotator for GermanAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc> {
        let mut doc = AnnotatedDoc::default();

        for sentence_text in self.segmenter.split_sentences(text) {
            let span_start = doc.tokens.len();
            let mut sentence_initial = true;

            for token in tokenize(&sentence_text) {
                if token.is_punct {
                    doc.tokens.push(AnnotatedToken {
                        lemma: token.text.clone(),
                        text: token.text,
                        pos: PosTag::Other,
                        is_punct_or_space: true,
                    });
                } else {
                    let (lemma, pos) = self.tag(&token.text, sentence_initial);
                    sentence_initial = false;
                    doc.tokens.push(AnnotatedToken {
                        text: token.text,
                        lemma,
                        pos,
                        is_punct_or_space: false,
                    });
                }
            }

            doc.sentences.push(Sentence {
                text: sentence_text,
                span: span_start..doc.tokens.len(),
            });
        }

        debug!(
            tokens = doc.tokens.len(),
            sentences = doc.sentences.len(),
            "annotated document"
        );
        Ok(doc)
    }
}

struct RawToken {
    text: String,
    is_punct: bool,
}

/// Split a sentence into word and punctuation tokens. Leading and trailing
/// punctuation of each whitespace chunk becomes separate tokens; interior
/// characters (hyphens, apostrophes) stay inside the word.
fn tokenize(sentence: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();

    for chunk in sentence.split_whitespace() {
        let chars: Vec<char> = chunk.chars().collect();
        let mut start = 0;
        let mut end = chars.len();

        while start < end && !chars[start].is_alphanumeric() {
            tokens.push(RawToken {
                text: chars[start].to_string(),
                is_punct: true,
            });
            start += 1;
        }

        let mut trailing = Vec::new();
        while end > start && !chars[end - 1].is_alphanumeric() {
            trailing.push(RawToken {
                text: chars[end - 1].to_string(),
                is_punct: true,
            });
            end -= 1;
        }

        if start < end {
            tokens.push(RawToken {
                text: chars[start..end].iter().collect(),
                is_punct: false,
            });
        }
        tokens.extend(trailing.into_iter().rev());
    }

    tokens
}

fn has_noun_suffix(lower: &str) -> bool {
    NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

/// Adjective lemma via derivational suffix, with inflection endings
/// stripped first when the bare form does not match.
fn adjective_lemma(lower: &str) -> Option<String> {
    if ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some(lower.to_string());
    }
    for ending in ADJ_INFLECTIONS {
        if let Some(stem) = lower.strip_suffix(ending) {
            if ADJ_SUFFIXES.iter().any(|s| stem.ends_with(s)) {
                return Some(stem.to_string());
            }
        }
    }
    None
}

/// Verb lemma heuristic: infinitive-shaped words are kept, conjugated
/// forms are re-stemmed to an `-en` infinitive. Approximate for strong
/// verbs with stem vowel changes.
fn verb_lemma(lower: &str) -> Option<String> {
    let len = lower.chars().count();
    if (lower.ends_with("en") && len > 3) || lower.ends_with("eln") || lower.ends_with("ern") {
        return Some(lower.to_string());
    }
    for ending in VERB_ENDINGS {
        if let Some(stem) = lower.strip_suffix(ending) {
            if stem.chars().count() >= 3 {
                return Some(format!("{stem}en"));
            }
        }
    }
    None
}
