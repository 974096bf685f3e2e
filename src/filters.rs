//! Per-word filter primitives
//!
//! Pure, stateless building blocks for the word pipeline. Everything operates
//! on raw bytes: wordlist sources are frequently not valid UTF-8, and all
//! character classes here are ASCII-only.

/// Remove everything between `<` and the next `>`, inclusive.
///
/// `<` and `>` act as a plain toggle with no nesting awareness; an
/// unterminated `<` strips to the end of the input.
pub fn strip_html_tags(text: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(text.len());
    let mut in_tag = false;

    for &b in text {
        match b {
            b'<' => in_tag = true,
            b'>' => in_tag = false,
            _ if !in_tag => result.push(b),
            _ => {}
        }
    }

    result
}

/// Strip leading and trailing runs of ASCII digits.
pub fn trim_digits(text: &[u8]) -> Vec<u8> {
    trim_edges(text, |b| b.is_ascii_digit())
}

/// Strip leading and trailing runs of bytes that are not ASCII letters or digits.
pub fn trim_special(text: &[u8]) -> Vec<u8> {
    trim_edges(text, |b| !b.is_ascii_alphanumeric())
}

fn trim_edges(text: &[u8], strip: impl Fn(u8) -> bool) -> Vec<u8> {
    let start = text.iter().position(|&b| !strip(b));
    let end = text.iter().rposition(|&b| !strip(b));

    match (start, end) {
        (Some(s), Some(e)) => text[s..=e].to_vec(),
        _ => Vec::new(),
    }
}

/// Strip leading spaces and tabs.
pub fn strip_leading_whitespace(text: &[u8]) -> Vec<u8> {
    let start = text
        .iter()
        .position(|&b| b != b' ' && b != b'\t')
        .unwrap_or(text.len());
    text[start..].to_vec()
}

/// Keep the first byte of each run of identical adjacent bytes.
///
/// "aabbbc" becomes "abc". This is a per-run collapse, not a set dedup:
/// "abab" is unchanged.
pub fn collapse_runs(text: &[u8]) -> Vec<u8> {
    let mut result = text.to_vec();
    result.dedup();
    result
}

/// True if every byte is an ASCII digit. Vacuously true for empty input.
pub fn is_all_digits(text: &[u8]) -> bool {
    text.iter().all(|b| b.is_ascii_digit())
}

/// True if the input is structurally a hex digest: at least 32 bytes,
/// all ASCII hex digits. No cryptographic verification.
pub fn is_probable_hash(text: &[u8]) -> bool {
    text.len() >= 32 && text.iter().all(|b| b.is_ascii_hexdigit())
}

/// True if any single byte value occupies strictly more than
/// `threshold_percent`% of the input.
///
/// A threshold of 0 disables the check, as does empty input.
pub fn exceeds_char_dominance(text: &[u8], threshold_percent: u32) -> bool {
    if threshold_percent == 0 || text.is_empty() {
        return false;
    }

    let mut counts = [0usize; 256];
    for &b in text {
        counts[b as usize] += 1;
    }

    let threshold = threshold_percent as usize;
    counts
        .iter()
        .any(|&count| count * 100 > threshold * text.len())
}

/// Structural email check: exactly one `@`, neither first nor last byte,
/// and the first `.` after the `@` leaves at least one byte on each side.
pub fn is_valid_email(text: &[u8]) -> bool {
    let mut ats = text.iter().enumerate().filter(|(_, &b)| b == b'@');

    let at_pos = match ats.next() {
        Some((pos, _)) => pos,
        None => return false,
    };
    if ats.next().is_some() {
        return false;
    }
    if at_pos == 0 || at_pos == text.len() - 1 {
        return false;
    }

    match text[at_pos + 1..].iter().position(|&b| b == b'.') {
        Some(rel) => {
            let dot_pos = at_pos + 1 + rel;
            dot_pos > at_pos + 1 && dot_pos < text.len() - 1
        }
        None => false,
    }
}

/// Split at the first `@`. Caller is expected to have validated the input
/// with [`is_valid_email`].
pub fn split_email(text: &[u8]) -> (&[u8], &[u8]) {
    match text.iter().position(|&b| b == b'@') {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => (text, &[]),
    }
}
