/*!
 * Grammar-mistake counting.
 *
 * Given a sentence the user wrote and the corrected version returned by the
 * grammar checker, estimate how many mistakes the user made as the word-level
 * edit distance between the two. Tokens are normalized (case, diacritics,
 * punctuation) before comparison so that a missing accent mark or a trailing
 * comma does not count as a mistake.
 *
 * The estimate is word-level, not character-level: when the corrector
 * reorders, merges, or splits words the count can be off by one or two.
 * That is a known and accepted limitation.
 */

use unicode_normalization::UnicodeNormalization;

/// Punctuation stripped from tokens before comparison. The hyphen is
/// deliberately absent: it is load-bearing in compounds and pronoun
/// contractions ("mi-a", "s-a") for the languages this app teaches.
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '~',
    '(', ')', '"', '\'',
];

/// Normalize a single token for comparison: lowercase, decompose (NFD) and
/// drop combining marks, then strip punctuation (keeping hyphens).
fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// Count the mistakes in `original` relative to `corrected` as the word-level
/// Levenshtein distance between the two sentences.
///
/// Unit cost per insertion and deletion; substitution costs 0 when the
/// normalized tokens match and 1 otherwise. Pure and deterministic; an empty
/// side yields the other side's word count.
pub fn count_mistakes(original: &str, corrected: &str) -> usize {
    let a: Vec<String> = original.split_whitespace().map(normalize_token).collect();
    let b: Vec<String> = corrected.split_whitespace().map(normalize_token).collect();

    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Use two-row optimization for space efficiency
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for i in 1..=a_len {
        curr_row[0] = i;

        for j in 1..=b_len {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

            curr_row[j] = (prev_row[j] + 1)                  // deletion
                .min(curr_row[j - 1] + 1)                    // insertion
                .min(prev_row[j - 1] + cost);                // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}
