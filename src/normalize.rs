/// Collapse whitespace runs (including line breaks) to single spaces and
/// trim leading/trailing whitespace.
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_whitespace_into(text, &mut result);
    result
}

/// Normalize into a supplied buffer, enabling reuse across a batch of
/// sentences. The buffer is cleared first.
pub fn normalize_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut chars = text.chars().peekable();
    let mut prev_was_space = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                // \r\n counts as a single break
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if !prev_was_space {
                    buffer.push(' ');
                    prev_was_space = true;
                }
            }
            _ if ch.is_whitespace() => {
                if !prev_was_space {
                    buffer.push(' ');
                    prev_was_space = true;
                }
            }
            _ => {
                buffer.push(ch);
                prev_was_space = false;
            }
        }
    }

    let trimmed = buffer.trim();
    if trimmed.len() != buffer.len() {
        let trimmed_content = trimmed.to_string();
        buffer.clear();
        buffer.push_str(&trimmed_content);
    }
}
