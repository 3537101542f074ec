//! Writing generated URLs to a file or stdout.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::settings::SettingsError;

/// Where generated URLs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// A new file; an existing file is never overwritten.
    File(PathBuf),
}

/// Writes each line followed by `\n`. An empty slice writes nothing.
pub fn write_lines<W: Write>(writer: W, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

pub fn write_output(target: &OutputTarget, lines: &[String]) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            write_lines(io::stdout().lock(), lines).context("failed to write to stdout")?
        }
        OutputTarget::File(path) => {
            let file = match OpenOptions::new().write(true).create_new(true).open(path) {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    return Err(SettingsError::OutputExists(path.clone()).into());
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("failed to create {}", path.display()))
                }
            };
            write_lines(file, lines)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), lines = lines.len(), "wrote output file");
        }
    }
    Ok(())
}
