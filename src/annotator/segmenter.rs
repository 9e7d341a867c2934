// WHY: rule-based segmentation keeps the annotator self-contained; the
// boundary scan works on Unicode scalar values, not bytes, because German
// text is full of multi-byte characters.

use std::collections::HashSet;
use tracing::debug;

/// German abbreviations whose trailing period must not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "Dr.", "Prof.", "Hr.", "Fr.", "Frl.", "Nr.", "Str.", "Abs.", "Art.",
    "Bd.", "Tel.", "ca.", "bzw.", "usw.", "usf.", "etc.", "vgl.", "z.B.",
    "u.a.", "d.h.", "u.U.", "o.Ä.", "evtl.", "ggf.", "inkl.", "zzgl.",
    "bspw.", "sog.", "max.", "min.",
];

/// Configuration for sentence boundary detection.
#[derive(Debug, Clone)]
pub struct BoundaryRules {
    /// End punctuation characters that can terminate a sentence.
    pub end_punctuation: Vec<char>,
    /// Closing quotes allowed between end punctuation and the boundary space.
    pub closing_quotes: Vec<char>,
    /// Characters that may open the following sentence.
    pub opening_quotes: Vec<char>,
    pub opening_parentheticals: Vec<char>,
}

impl Default for BoundaryRules {
    fn default() -> Self {
        Self {
            end_punctuation: vec!['.', '?', '!'],
            // German secondary quotes plus the ASCII/typographic pairs.
            closing_quotes: vec!['"', '\'', '\u{201C}', '\u{201D}', '\u{2019}', '\u{00AB}'],
            opening_quotes: vec!['"', '\'', '\u{201E}', '\u{201A}', '\u{00BB}'],
            opening_parentheticals: vec!['(', '[', '{'],
        }
    }
}

/// Splits raw text into normalized sentence strings.
pub struct SentenceSegmenter {
    rules: BoundaryRules,
    abbreviations: HashSet<&'static str>,
}

impl SentenceSegmenter {
    pub fn new(rules: BoundaryRules) -> Self {
        Self {
            rules,
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    pub fn with_default_rules() -> Self {
        Self::new(BoundaryRules::default())
    }

    /// Split `text` into sentences, each with interior line breaks collapsed
    /// to single spaces and edges trimmed. Empty chunks are dropped.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut buffer = String::new();
        let mut start = 0;

        for i in 0..chars.len() {
            if self.is_boundary(&chars, i) {
                let chunk: String = chars[start..=i].iter().collect();
                normalize_sentence_into(&chunk, &mut buffer);
                if !buffer.is_empty() {
                    sentences.push(buffer.clone());
                }
                start = i + 1;
            }
        }

        if start < chars.len() {
            let chunk: String = chars[start..].iter().collect();
            normalize_sentence_into(&chunk, &mut buffer);
            if !buffer.is_empty() {
                sentences.push(buffer.clone());
            }
        }

        debug!(count = sentences.len(), "segmented sentences");
        sentences
    }

    /// A boundary is end punctuation, optionally followed by closing quotes,
    /// then whitespace, then something that can start a sentence. A known
    /// abbreviation ending at `pos` suppresses the boundary.
    fn is_boundary(&self, chars: &[char], pos: usize) -> bool {
        if pos + 1 >= chars.len() {
            return false;
        }
        if !self.rules.end_punctuation.contains(&chars[pos]) {
            return false;
        }
        if chars[pos] == '.' && self.ends_with_abbreviation(chars, pos) {
            return false;
        }

        let mut next = pos + 1;
        while next < chars.len() && self.rules.closing_quotes.contains(&chars[next]) {
            next += 1;
        }
        if next >= chars.len() || !chars[next].is_whitespace() {
            return false;
        }
        while next < chars.len() && chars[next].is_whitespace() {
            next += 1;
        }
        if next >= chars.len() {
            return false;
        }

        let follower = chars[next];
        follower.is_uppercase()
            || follower.is_ascii_digit()
            || self.rules.opening_quotes.contains(&follower)
            || self.rules.opening_parentheticals.contains(&follower)
    }

    /// Check whether the whitespace-delimited word ending at `pos`
    /// (inclusive of its period) is a known abbreviation.
    fn ends_with_abbreviation(&self, chars: &[char], pos: usize) -> bool {
        let mut word_start = pos;
        while word_start > 0 && !chars[word_start - 1].is_whitespace() {
            word_start -= 1;
        }
        let word: String = chars[word_start..=pos].iter().collect();
        let clean = word.trim_matches(|c: char| {
            matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2018}' | '\u{2019}' | '(' | ')')
        });
        self.abbreviations.contains(clean)
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

/// Normalize a sentence chunk into `buffer`: collapse all whitespace runs
/// (including hard line breaks) to single spaces and trim the edges.
pub fn normalize_sentence_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut prev_was_space = true; // swallows leading whitespace
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                buffer.push(' ');
                prev_was_space = true;
            }
        } else {
            buffer.push(ch);
            prev_was_space = false;
        }
    }
    while buffer.ends_with(' ') {
        buffer.pop();
    }
}
