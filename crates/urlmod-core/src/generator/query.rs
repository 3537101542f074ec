//! Query decomposition and serialization.

use url::form_urlencoded;
use url::Url;

use super::GenerateError;

/// Insertion-ordered query parameters with one value per key.
///
/// `set` on an existing key replaces its value in place; new keys are appended, so the
/// serialized order is existing keys first, then names in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    pairs: Vec<(String, String)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` serialization in insertion order.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}

/// A parsed input URL plus the parameters it already carries.
#[derive(Debug, Clone)]
pub struct DecomposedUrl {
    url: Url,
    existing: QueryMap,
}

impl DecomposedUrl {
    /// Parses `input`. Repeated keys keep their first value; key order is first appearance.
    pub fn parse(input: &str) -> Result<Self, GenerateError> {
        let url = Url::parse(input).map_err(|source| GenerateError::InvalidUrl {
            url: input.to_string(),
            source,
        })?;

        let mut existing = QueryMap::new();
        for (key, value) in url.query_pairs() {
            if !existing.contains_key(&key) {
                existing.set(&key, &value);
            }
        }

        Ok(Self { url, existing })
    }

    pub fn existing(&self) -> &QueryMap {
        &self.existing
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Serializes the URL with `query` in place of its original query string.
    /// Scheme, host, port, path and fragment are kept.
    pub fn with_query(&self, query: &QueryMap) -> String {
        let mut url = self.url.clone();
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&query.encode()));
        }
        url.into()
    }
}
