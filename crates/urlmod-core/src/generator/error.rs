//! Per-URL generation errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The input line is not an absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The URL already carries at least `chunk` parameters, leaving no slot for new names.
    #[error("URL {url} has {existing} parameters, chunk size {chunk} leaves no room for new ones")]
    ChunkTooSmall {
        url: String,
        chunk: usize,
        existing: usize,
    },
}
