//! Vocabulary extraction: buckets annotated tokens by POS category into
//! deduplicated lemma sets and per-lemma example phrases.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

use crate::annotator::{Annotator, PosTag};
use crate::trimmer::{trim_sentence, DEFAULT_MAX_WORDS};

/// One example phrase for a noun lemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounOccurrence {
    pub noun: String,
    pub phrase: String,
}

/// One example phrase for a verb lemma. The key is named `infinitive` for
/// output compatibility even though the value is simply the lemma, which
/// is not guaranteed to be an infinitive for separable or irregular verbs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbOccurrence {
    pub infinitive: String,
    pub phrase: String,
}

/// One example phrase for an adjective lemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveOccurrence {
    pub adjective: String,
    pub phrase: String,
}

/// Final extraction result. Lemma lists are lexicographically sorted and
/// distinct; occurrence lists are ordered by lemma ascending, then by
/// first-seen document order within a lemma.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
    pub adjectives: Vec<String>,
    pub verb_occurrences: Vec<VerbOccurrence>,
    pub noun_occurrences: Vec<NounOccurrence>,
    pub adjective_occurrences: Vec<AdjectiveOccurrence>,
}

/// Per-category accumulator: sorted lemma set, per-lemma phrases in
/// first-seen order, and the raw sentence texts already recorded per lemma
/// so one sentence contributes at most one phrase per lemma.
#[derive(Default)]
struct CategoryBucket {
    lemmas: BTreeSet<String>,
    phrases: BTreeMap<String, Vec<String>>,
    seen_sentences: HashSet<(String, String)>,
}

impl CategoryBucket {
    fn record(&mut self, lemma: &str, sentence_text: &str, token_text: &str, max_words: usize) {
        self.lemmas.insert(lemma.to_string());
        let key = (lemma.to_string(), sentence_text.to_string());
        if self.seen_sentences.insert(key) {
            self.phrases
                .entry(lemma.to_string())
                .or_default()
                .push(trim_sentence(sentence_text, token_text, max_words));
        }
    }

    fn into_parts(self) -> (Vec<String>, BTreeMap<String, Vec<String>>) {
        (self.lemmas.into_iter().collect(), self.phrases)
    }
}

/// Extracts POS-tagged vocabulary from text via a borrowed, long-lived
/// annotator handle.
pub struct Extractor<'a> {
    annotator: &'a dyn Annotator,
    max_words: usize,
}

impl<'a> Extractor<'a> {
    pub fn new(annotator: &'a dyn Annotator) -> Self {
        Self::with_max_words(annotator, DEFAULT_MAX_WORDS)
    }

    pub fn with_max_words(annotator: &'a dyn Annotator, max_words: usize) -> Self {
        Self {
            annotator,
            max_words: max_words.max(1),
        }
    }

    /// Analyze `text` and aggregate its vocabulary. Empty or whitespace-only
    /// text yields an empty result without invoking the annotator.
    pub fn extract(&self, text: &str) -> Result<Extraction> {
        if text.trim().is_empty() {
            return Ok(Extraction::default());
        }

        let doc = self.annotator.annotate(text)?;

        let mut nouns = CategoryBucket::default();
        let mut verbs = CategoryBucket::default();
        let mut adjectives = CategoryBucket::default();

        for (index, token) in doc.tokens.iter().enumerate() {
            if token.is_punct_or_space {
                continue;
            }

            let lemma = token.lemma.trim().to_lowercase();
            if lemma.is_empty() {
                continue;
            }

            // Defensive: a token outside every sentence span is skipped,
            // never a crash.
            let Some(sentence) = doc.sentence_containing(index) else {
                debug!(index, token = %token.text, "token has no containing sentence");
                continue;
            };

            let bucket = match token.pos {
                PosTag::Noun => &mut nouns,
                PosTag::Verb => &mut verbs,
                PosTag::Adj => &mut adjectives,
                PosTag::Other => continue,
            };
            bucket.record(&lemma, &sentence.text, &token.text, self.max_words);
        }

        let (noun_lemmas, noun_phrases) = nouns.into_parts();
        let (verb_lemmas, verb_phrases) = verbs.into_parts();
        let (adjective_lemmas, adjective_phrases) = adjectives.into_parts();

        Ok(Extraction {
            nouns: noun_lemmas,
            verbs: verb_lemmas,
            adjectives: adjective_lemmas,
            verb_occurrences: flatten(verb_phrases, |infinitive, phrase| VerbOccurrence {
                infinitive,
                phrase,
            }),
            noun_occurrences: flatten(noun_phrases, |noun, phrase| NounOccurrence {
                noun,
                phrase,
            }),
            adjective_occurrences: flatten(adjective_phrases, |adjective, phrase| {
                AdjectiveOccurrence { adjective, phrase }
            }),
        })
    }
}

/// Flatten a lemma-keyed phrase map into records, lemmas ascending (the
/// map is a BTreeMap) and phrases in insertion order within each lemma.
fn flatten<T>(phrases: BTreeMap<String, Vec<String>>, make: impl Fn(String, String) -> T) -> Vec<T> {
    phrases
        .into_iter()
        .flat_map(|(lemma, list)| {
            list.into_iter()
                .map(move |phrase| (lemma.clone(), phrase))
        })
        .map(|(lemma, phrase)| make(lemma, phrase))
        .collect()
}
