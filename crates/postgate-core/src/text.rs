//! Text normalization utilities.
//!
//! Every detector works on the output of [`normalize`]: lower-cased, with
//! whitespace runs collapsed to a single space and the ends trimmed. The
//! caller keeps the original string for forwarding.

/// Lower-case `raw`, collapse whitespace runs to one space, trim the ends.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    for token in lower.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Length of the trimmed input in Unicode scalar values.
///
/// All channel thresholds are measured with this function.
pub fn trimmed_len(raw: &str) -> usize {
    raw.trim().chars().count()
}

/// Whitespace-delimited tokens of a normalized string.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// `normalized` with all whitespace removed.
pub fn compact(normalized: &str) -> String {
    normalized.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split text into words on whitespace, dropping empty pieces.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into paragraphs separated by blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                paragraphs.push(text[s..offset].trim());
            }
        } else if start.is_none() {
            start = Some(offset);
        }
        offset += line.len();
    }
    if let Some(s) = start {
        paragraphs.push(text[s..].trim());
    }

    paragraphs
}
