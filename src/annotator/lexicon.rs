//! Embedded German form lexicon.
//!
//! Maps lowercased surface forms to their lemma and coarse POS tag. The
//! lexicon covers closed-class words (articles, pronouns, prepositions,
//! auxiliaries) and frequent irregular open-class forms that the suffix
//! heuristics in [`super::german`] would get wrong. Everything else is
//! handled heuristically.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;

use super::PosTag;

/// Tab-separated `surface<TAB>lemma<TAB>POS` entries, one per line.
const LEXICON_DATA: &str = include_str!("../../data/de_lexicon.tsv");

#[derive(Debug)]
pub struct Lexicon {
    entries: HashMap<String, (String, PosTag)>,
}

impl Lexicon {
    /// Parse the embedded lexicon. A malformed line means the shipped data
    /// is broken, which is a startup-time configuration failure, not a
    /// per-request one.
    pub fn embedded() -> Result<Self> {
        Self::parse(LEXICON_DATA).context("embedded German lexicon is invalid")
    }

    fn parse(data: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        for (line_no, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let (surface, lemma, pos) = match (fields.next(), fields.next(), fields.next()) {
                (Some(s), Some(l), Some(p)) if !s.is_empty() && !l.is_empty() => (s, l, p),
                _ => bail!("malformed lexicon line {}: {line:?}", line_no + 1),
            };
            let pos = match pos {
                "NOUN" => PosTag::Noun,
                "VERB" => PosTag::Verb,
                "ADJ" => PosTag::Adj,
                "OTHER" => PosTag::Other,
                other => bail!("unknown POS tag {other:?} on lexicon line {}", line_no + 1),
            };
            entries.insert(surface.to_lowercase(), (lemma.to_string(), pos));
        }
        Ok(Self { entries })
    }

    /// Look up a lowercased surface form.
    pub fn lookup(&self, surface_lower: &str) -> Option<&(String, PosTag)> {
        self.entries.get(surface_lower)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_lexicon_parses() {
        let lexicon = Lexicon::embedded().unwrap();
        assert!(!lexicon.is_empty());
    }

    #[test]
    fn test_known_forms_resolve() {
        let lexicon = Lexicon::embedded().unwrap();
        assert_eq!(
            lexicon.lookup("läuft"),
            Some(&("laufen".to_string(), PosTag::Verb))
        );
        assert_eq!(
            lexicon.lookup("hund"),
            Some(&("Hund".to_string(), PosTag::Noun))
        );
        // Auxiliary forms stay out of the verb category.
        assert_eq!(
            lexicon.lookup("ist"),
            Some(&("sein".to_string(), PosTag::Other))
        );
    }

    #[test]
    fn test_malformed_line_is_rejected() {
        let err = Lexicon::parse("nur-ein-feld").unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_unknown_pos_is_rejected() {
        let err = Lexicon::parse("wort\twort\tADVERB").unwrap_err();
        assert!(err.to_string().contains("unknown POS"));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let lexicon = Lexicon::parse("# kommentar\n\nhund\tHund\tNOUN\n").unwrap();
        assert_eq!(lexicon.len(), 1);
    }
}
