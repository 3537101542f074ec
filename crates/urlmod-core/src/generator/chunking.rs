//! Chunk arithmetic and wordlist consumption shared by `normal` and `ignore`.

use super::query::{DecomposedUrl, QueryMap};
use super::GenerateError;

/// Slots left for new names once the URL's own parameters are counted.
pub(crate) fn available_slots(url: &DecomposedUrl, chunk: usize) -> Result<usize, GenerateError> {
    let existing = url.existing().len();
    match chunk.checked_sub(existing) {
        Some(slots) if slots > 0 => Ok(slots),
        _ => Err(GenerateError::ChunkTooSmall {
            url: url.as_str().to_string(),
            chunk,
            existing,
        }),
    }
}

/// `ceil(wordlist_len / slots)`. `slots` must be non-zero.
pub fn iteration_count(wordlist_len: usize, slots: usize) -> usize {
    wordlist_len.div_ceil(slots)
}

/// Wordlist entries that are not already parameters of the URL, in wordlist order.
pub(crate) fn new_names(params: &[String], existing: &QueryMap) -> Vec<String> {
    params
        .iter()
        .filter(|name| !existing.contains_key(name))
        .cloned()
        .collect()
}

/// Pops up to `slots` names off the end of `stack` into `query`, each set to `value`.
pub(crate) fn fill_slots(query: &mut QueryMap, stack: &mut Vec<String>, slots: usize, value: &str) {
    for _ in 0..slots {
        let Some(name) = stack.pop() else { break };
        query.set(&name, value);
    }
}
