use super::query::DecomposedUrl;
use crate::settings::ValueStrategy;

/// One URL per existing parameter and value, with only that parameter modified.
/// A URL without parameters produces nothing.
pub(crate) fn expand(
    url: &DecomposedUrl,
    values: &[String],
    value_strategy: ValueStrategy,
    out: &mut Vec<String>,
) {
    let existing = url.existing();
    for value in values {
        for (key, original) in existing.iter() {
            let modified = match value_strategy {
                ValueStrategy::Replace => value.clone(),
                ValueStrategy::Suffix => format!("{original}{value}"),
            };
            let mut query = existing.clone();
            query.set(key, &modified);
            out.push(url.with_query(&query));
        }
    }
}
