/*!
 * Parser for the generator's labeled-field replies.
 *
 * The generator is prompted to answer in a line-based `Label: value`
 * format. Parsing is deliberately strict: a reply missing a required
 * label fails with [`ProviderError::ParseError`] naming the field, and
 * the message is surfaced to the user as-is. No retries happen here.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ProviderError;
use crate::providers::{Evaluation, GrammarCorrection, LyricTranslation, Verdict, WordTranslation};

static LABELED_LINE: Lazy<Regex> = Lazy::new(|| {
    // "Label: value" at the start of a line; label may contain spaces
    Regex::new(r"(?m)^\s*([A-Za-z][A-Za-z0-9 ]*?)\s*:\s*(.*)$").expect("Invalid labeled-line regex")
});

/// Extract the value of a labeled field from a reply, case-insensitively.
/// Returns the first match.
fn find_field(reply: &str, label: &str) -> Option<String> {
    for caps in LABELED_LINE.captures_iter(reply) {
        if caps[1].eq_ignore_ascii_case(label) {
            let value = caps[2].trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Extract a required field or fail naming it
fn require_field(reply: &str, label: &str) -> Result<String, ProviderError> {
    find_field(reply, label)
        .ok_or_else(|| ProviderError::ParseError(format!("missing field '{}'", label)))
}

/// Parse a word translation reply:
/// `Translation:`, `Example 1:`, `Example 1 translation:`,
/// `Example 2:`, `Example 2 translation:`
pub fn parse_word_translation(reply: &str) -> Result<WordTranslation, ProviderError> {
    Ok(WordTranslation {
        translation: require_field(reply, "Translation")?,
        example_sentence1: require_field(reply, "Example 1")?,
        example_sentence1_translation: require_field(reply, "Example 1 translation")?,
        example_sentence2: require_field(reply, "Example 2")?,
        example_sentence2_translation: require_field(reply, "Example 2 translation")?,
    })
}

/// Parse a lyric translation reply: `Translation:`, `Meaning:`
pub fn parse_lyric_translation(reply: &str) -> Result<LyricTranslation, ProviderError> {
    Ok(LyricTranslation {
        translation: require_field(reply, "Translation")?,
        meaning: require_field(reply, "Meaning")?,
    })
}

/// Parse a grammar correction reply: `Correction:`, `Info:`.
/// `Info` is optional; an absent or "none" value means nothing was wrong.
pub fn parse_grammar_correction(reply: &str) -> Result<GrammarCorrection, ProviderError> {
    let corrected = require_field(reply, "Correction")?;
    let info = find_field(reply, "Info")
        .filter(|v| !v.eq_ignore_ascii_case("none"))
        .unwrap_or_default();

    Ok(GrammarCorrection { corrected, info })
}

/// Parse a quiz grading reply: `Correctness:` (correct/partial/wrong),
/// `Info:` (optional explanation)
pub fn parse_evaluation(reply: &str) -> Result<Evaluation, ProviderError> {
    let correctness = require_field(reply, "Correctness")?;

    let verdict = match correctness.to_lowercase().as_str() {
        "correct" => Verdict::Correct,
        "partial" | "partially correct" | "almost" => Verdict::Partial,
        "wrong" | "incorrect" => Verdict::Wrong,
        other => {
            return Err(ProviderError::ParseError(format!(
                "unrecognized correctness value '{}'",
                other
            )))
        }
    };

    let explanation = find_field(reply, "Info").filter(|v| !v.eq_ignore_ascii_case("none"));

    Ok(Evaluation {
        verdict,
        explanation,
    })
}
