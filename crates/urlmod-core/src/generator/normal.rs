use super::chunking::{available_slots, fill_slots, iteration_count, new_names};
use super::query::{DecomposedUrl, QueryMap};
use super::GenerateError;

/// Overwrites every existing parameter with the value and fills the remaining slots
/// with wordlist names.
pub(crate) fn expand(
    url: &DecomposedUrl,
    params: &[String],
    values: &[String],
    chunk: usize,
    out: &mut Vec<String>,
) -> Result<(), GenerateError> {
    let slots = available_slots(url, chunk)?;
    let iterations = iteration_count(params.len(), slots);
    let fresh = new_names(params, url.existing());

    for value in values {
        let mut stack = fresh.clone();
        for _ in 0..iterations {
            let mut query = QueryMap::new();
            for key in url.existing().keys() {
                query.set(key, value);
            }
            fill_slots(&mut query, &mut stack, slots, value);
            out.push(url.with_query(&query));
        }
    }
    Ok(())
}
