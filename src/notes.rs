use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::normalize::normalize_whitespace;

/// `[^identifier]` footnote reference.
static FOOTNOTE_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\^([^\]]+)\]").expect("footnote reference pattern"));

/// `[footnote:identifier]` inline footnote, case-insensitive marker word.
static INLINE_FOOTNOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[(footnote:[^\]]+)\]").expect("inline footnote pattern"));

/// Strip inline annotations from a sentence.
///
/// Returns the whitespace-normalized cleaned text and the annotation
/// payloads in encounter order: all `[^...]` references first, then all
/// `[footnote:...]` markers. The inline-footnote payload is the whole
/// bracket content, trimmed.
pub fn extract_notes(sentence: &str) -> (String, Vec<String>) {
    let mut notes = Vec::new();

    let cleaned = FOOTNOTE_REF.replace_all(sentence, |caps: &Captures| {
        notes.push(caps[1].trim().to_string());
        ""
    });
    let cleaned = INLINE_FOOTNOTE.replace_all(&cleaned, |caps: &Captures| {
        notes.push(caps[1].trim().to_string());
        ""
    });

    (normalize_whitespace(&cleaned), notes)
}
