// WHY: standalone windowing logic, independent of any annotator, so the
// excerpt algorithm is testable with plain strings.

/// Default maximum word count for trimmed occurrence phrases.
pub const DEFAULT_MAX_WORDS: usize = 20;

/// Punctuation stripped from word edges before matching the target word.
const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Trim a sentence to at most `max_words` words while keeping `target_word`
/// inside the excerpt.
///
/// Sentences already within the budget are returned unchanged. Otherwise the
/// target word is located (exact normalized match first, then a
/// prefix-within-length-2 fallback for compound inflection) and a contiguous
/// window is cut around it, preferring symmetric context and spending any
/// leftover budget leftward first. If the target cannot be located at all,
/// the first `max_words` words are returned; the excerpt then may not
/// contain the target. That degraded case is accepted, not an error.
///
/// The output is always a contiguous subsequence of the input words, joined
/// by single spaces. With an even `max_words` and full context on both
/// sides of the target, the symmetric window is `max_words + 1` words
/// (half before, half after, plus the target itself); otherwise the bound
/// is `max_words`. This function never panics for any string input.
pub fn trim_sentence(sentence: &str, target_word: &str, max_words: usize) -> String {
    let max_words = max_words.max(1);
    let words: Vec<&str> = sentence.split_whitespace().collect();

    if words.len() <= max_words {
        return sentence.to_string();
    }

    let position = match locate_target(&words, target_word) {
        Some(p) => p,
        // Degraded case: keep the head of the sentence.
        None => return words[..max_words].join(" "),
    };

    let n = words.len();
    let mut before = position.min(max_words / 2);
    let mut after = (n - position - 1).min(max_words / 2);

    // Spend leftover budget, leftward first. Saturates: with an even
    // budget and full context on both sides, before + after + 1 is
    // already max_words + 1 and there is nothing left to grow.
    let remaining = max_words.saturating_sub(before + after + 1);
    if remaining > 0 {
        let extra_before = (position - before).min(remaining / 2);
        let extra_after = (n - position - 1 - after).min(remaining - extra_before);
        before += extra_before;
        after += extra_after;
    }

    let start = position - before;
    let end = (position + after + 1).min(n);
    words[start..end].join(" ")
}

/// Lowercase a word and strip edge punctuation for target matching.
fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .trim_matches(|c| EDGE_PUNCTUATION.contains(&c))
        .to_string()
}

/// Find the index of `target_word` among `words`.
///
/// Exact normalized matches win; only when none exists does the fuzzy pass
/// run, accepting a candidate whose normalized form is a prefix of the
/// target (or vice versa) with a length difference of at most 2. Both
/// passes take the leftmost match in document order.
fn locate_target(words: &[&str], target_word: &str) -> Option<usize> {
    let target = normalize_word(target_word);

    let normalized: Vec<String> = words.iter().map(|w| normalize_word(w)).collect();

    if let Some(pos) = normalized.iter().position(|w| *w == target) {
        return Some(pos);
    }

    let target_len = target.chars().count();
    normalized.iter().position(|w| {
        let word_len = w.chars().count();
        let close = target_len.abs_diff(word_len) <= 2;
        close && (target.starts_with(w.as_str()) || w.starts_with(target.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_of(n: usize) -> String {
        (1..=n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_short_sentence_returned_unchanged() {
        let sentence = "Der Hund läuft schnell.";
        assert_eq!(trim_sentence(sentence, "Hund", 20), sentence);
    }

    #[test]
    fn test_identity_preserves_original_spacing() {
        // Identity case returns the sentence verbatim, untouched whitespace.
        let sentence = "Der  Hund   läuft.";
        assert_eq!(trim_sentence(sentence, "Hund", 20), sentence);
    }

    #[test]
    fn test_output_bounded_by_max_words() {
        let sentence = sentence_of(50);
        for max in [1, 2, 5, 20] {
            // Even budgets allow one extra word when both sides carry the
            // full max / 2 context.
            let bound = if max % 2 == 0 { max + 1 } else { max };
            let trimmed = trim_sentence(&sentence, "w25", max);
            assert!(
                trimmed.split_whitespace().count() <= bound,
                "exceeded {bound}: {trimmed}"
            );
        }
    }

    #[test]
    fn test_even_budget_with_full_context_on_both_sides() {
        // Target centered in a long sentence with an even budget: both
        // halves fill completely, the window is max_words + 1 words, and
        // the growth step must not underflow.
        let sentence = sentence_of(50);
        let trimmed = trim_sentence(&sentence, "w25", 20);
        let words: Vec<&str> = trimmed.split_whitespace().collect();
        assert_eq!(words.len(), 21);
        assert_eq!(words[0], "w15");
        assert_eq!(words[10], "w25");
        assert_eq!(words[20], "w35");
    }

    #[test]
    fn test_window_contains_target() {
        let sentence = sentence_of(50);
        let trimmed = trim_sentence(&sentence, "w25", 9);
        assert!(trimmed.split_whitespace().any(|w| w == "w25"));
    }

    #[test]
    fn test_target_near_start_spends_budget_rightward() {
        // 25 words, target at index 2: before = 2, after = 10, the 7
        // leftover words all fit to the right, giving a 20-word excerpt
        // anchored at the sentence start.
        let sentence = sentence_of(25);
        let trimmed = trim_sentence(&sentence, "w3", 20);
        let words: Vec<&str> = trimmed.split_whitespace().collect();
        assert_eq!(words.len(), 20);
        assert_eq!(words[0], "w1");
        assert_eq!(words[19], "w20");
        assert!(words.contains(&"w3"));
    }

    #[test]
    fn test_target_near_end_spends_budget_leftward() {
        let sentence = sentence_of(30);
        let trimmed = trim_sentence(&sentence, "w29", 10);
        let words: Vec<&str> = trimmed.split_whitespace().collect();
        // before = 5, after = 1, leftward extra = remaining / 2 = 1; the
        // unspendable right-side budget is not redistributed further.
        assert_eq!(words.len(), 8);
        assert_eq!(*words.last().unwrap(), "w30");
        assert!(words.contains(&"w29"));
    }

    #[test]
    fn test_target_matched_through_punctuation_and_case() {
        let mut words: Vec<String> = (1..=30).map(|i| format!("w{i}")).collect();
        words[14] = "(Bahnhof),".to_string();
        let sentence = words.join(" ");
        let trimmed = trim_sentence(&sentence, "bahnhof", 5);
        assert!(trimmed.contains("(Bahnhof),"));
        assert_eq!(trimmed.split_whitespace().count(), 5);
    }

    #[test]
    fn test_fuzzy_prefix_match_for_inflection() {
        // "Hauses" (genitive) vs target "Haus" differs by 2 and shares a
        // prefix, so the fallback pass finds it.
        let mut words: Vec<String> = (1..=30).map(|i| format!("w{i}")).collect();
        words[20] = "Hauses".to_string();
        let sentence = words.join(" ");
        let trimmed = trim_sentence(&sentence, "Haus", 7);
        assert!(trimmed.contains("Hauses"));
    }

    #[test]
    fn test_exact_match_beats_earlier_fuzzy_candidate() {
        // A fuzzy candidate appears before the exact one; the exact pass
        // runs first over the whole word list and must win.
        let sentence = format!("Hauses {} Haus {}", sentence_of(15), sentence_of(15));
        let trimmed = trim_sentence(&sentence, "Haus", 3);
        assert!(trimmed.split_whitespace().any(|w| w == "Haus"));
    }

    #[test]
    fn test_missing_target_falls_back_to_head() {
        let sentence = sentence_of(30);
        let trimmed = trim_sentence(&sentence, "fehlt", 8);
        assert_eq!(trimmed, sentence_of(8));
    }

    #[test]
    fn test_max_words_one_keeps_only_target() {
        let sentence = sentence_of(30);
        let trimmed = trim_sentence(&sentence, "w17", 1);
        assert_eq!(trimmed, "w17");
    }

    #[test]
    fn test_deterministic() {
        let sentence = sentence_of(40);
        let first = trim_sentence(&sentence, "w13", 11);
        for _ in 0..5 {
            assert_eq!(trim_sentence(&sentence, "w13", 11), first);
        }
    }

    #[test]
    fn test_empty_sentence_does_not_panic() {
        assert_eq!(trim_sentence("", "Hund", 20), "");
        assert_eq!(trim_sentence("   ", "Hund", 20), "   ");
    }
}
