//! Resolved run settings and their validation.
//!
//! The CLI merges flags with the config file into a [`GeneratorSettings`] and a
//! [`RunPaths`]; both are validated before any input is read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::output::OutputTarget;

/// URL generation strategy. Strategies always run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Overwrite every existing parameter and append wordlist names.
    Normal,
    /// Modify one existing parameter at a time (pitchfork over existing keys).
    Combine,
    /// Keep existing parameters verbatim and append wordlist names.
    Ignore,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Normal, Strategy::Combine, Strategy::Ignore];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Normal => "normal",
            Strategy::Combine => "combine",
            Strategy::Ignore => "ignore",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How `combine` places the substitution value into an existing parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueStrategy {
    Replace,
    #[default]
    Suffix,
}

/// What to do with a URL that cannot be expanded (unparseable, or more existing
/// parameters than the chunk allows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidUrlPolicy {
    /// Stop the whole run with the error.
    #[default]
    Abort,
    /// Log a warning and continue with the next URL.
    Skip,
}

/// Configuration errors, reported before any processing starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("no URLs were given (use --list or pipe them on stdin)")]
    NoUrls,
    #[error("URL list does not exist: {}", .0.display())]
    UrlListMissing(PathBuf),
    #[error("parameter wordlist file is not given")]
    NoWordlist,
    #[error("parameter wordlist file does not exist: {}", .0.display())]
    WordlistMissing(PathBuf),
    #[error("no values are given")]
    NoValues,
    #[error("no generation strategy is given")]
    NoStrategy,
    #[error("chunk size must be greater than zero")]
    ZeroChunk,
    #[error("output file already exists: {}", .0.display())]
    OutputExists(PathBuf),
}

/// Everything the generator needs, passed explicitly into each strategy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Maximum number of query parameters in a generated URL.
    pub chunk: usize,
    /// Substitution values, in the order given.
    pub values: Vec<String>,
    pub value_strategy: ValueStrategy,
    pub double_encode: bool,
    pub strategies: Vec<Strategy>,
    pub on_invalid_url: InvalidUrlPolicy,
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.strategies.is_empty() {
            return Err(SettingsError::NoStrategy);
        }
        if self.values.is_empty() {
            return Err(SettingsError::NoValues);
        }
        if self.chunk == 0 {
            return Err(SettingsError::ZeroChunk);
        }
        Ok(())
    }

    /// Whether `strategy` was selected (duplicates in `strategies` are irrelevant).
    pub fn runs(&self, strategy: Strategy) -> bool {
        self.strategies.contains(&strategy)
    }
}

/// Input and output locations as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct RunPaths {
    pub list: Option<PathBuf>,
    pub parameters: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Paths after validation: the wordlist is known to exist, the output does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// `None` means URLs come from stdin.
    pub list: Option<PathBuf>,
    pub parameters: PathBuf,
    pub output: OutputTarget,
}

impl RunPaths {
    /// Check the paths in the order a user would fix them. `stdin_piped` tells whether
    /// URLs can be read from stdin when no list file is given.
    pub fn validate(self, stdin_piped: bool) -> Result<ResolvedPaths, SettingsError> {
        if self.list.is_none() && !stdin_piped {
            return Err(SettingsError::NoUrls);
        }
        if let Some(output) = &self.output {
            if output.exists() {
                return Err(SettingsError::OutputExists(output.clone()));
            }
        }
        if let Some(list) = &self.list {
            if !list.is_file() {
                return Err(SettingsError::UrlListMissing(list.clone()));
            }
        }
        let parameters = self.parameters.ok_or(SettingsError::NoWordlist)?;
        if !parameters.is_file() {
            return Err(SettingsError::WordlistMissing(parameters));
        }

        Ok(ResolvedPaths {
            list: self.list,
            parameters,
            output: self
                .output
                .map(OutputTarget::File)
                .unwrap_or(OutputTarget::Stdout),
        })
    }
}
