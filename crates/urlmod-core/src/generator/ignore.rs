use super::chunking::{available_slots, fill_slots, iteration_count, new_names};
use super::query::DecomposedUrl;
use super::GenerateError;

/// Keeps the URL's own parameters verbatim and appends wordlist names in the free slots.
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
            let mut query = url.existing().clone();
            fill_slots(&mut query, &mut stack, slots, value);
            out.push(url.with_query(&query));
        }
    }
    Ok(())
}
