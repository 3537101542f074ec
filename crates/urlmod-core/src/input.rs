//! Line-oriented input: URL lists and parameter wordlists.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads one entry per line, trimmed of surrounding whitespace. Blank lines are dropped.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

pub fn read_lines_from_path(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let lines = read_lines(BufReader::new(file))
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), entries = lines.len(), "read input file");
    Ok(lines)
}
