//! Core engine for urlmod: builds query-parameter permutations of URLs for fuzzing.

pub mod config;
pub mod generator;
pub mod input;
pub mod logging;
pub mod output;
pub mod settings;
