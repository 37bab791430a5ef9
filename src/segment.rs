use crate::normalize::normalize_whitespace_into;

/// Characters that can terminate a sentence.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

fn is_terminator(ch: char) -> bool {
    SENTENCE_TERMINATORS.contains(&ch)
}

/// Split paragraph text into whitespace-normalized sentences.
///
/// Each sentence is a maximal run of non-terminator characters followed by
/// at most one terminator and any trailing whitespace. A terminator that
/// cannot start a run is skipped; a final fragment without a terminator is
/// still a sentence. Empty results are dropped.
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    let text = paragraph.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        if is_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        let start = chars[i].0;
        while i < chars.len() && !is_terminator(chars[i].1) {
            i += 1;
        }
        if i < chars.len() {
            // consume exactly one terminator
            i += 1;
        }
        while i < chars.len() && chars[i].1.is_whitespace() {
            i += 1;
        }

        let end = if i < chars.len() { chars[i].0 } else { text.len() };
        normalize_whitespace_into(&text[start..end], &mut buffer);
        if !buffer.is_empty() {
            sentences.push(buffer.clone());
        }
    }

    sentences
}
