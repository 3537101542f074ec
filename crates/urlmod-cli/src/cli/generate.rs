//! The generation run: validate, read inputs, expand, write.

use anyhow::{Context, Result};
use std::io::{self, BufRead, IsTerminal};
use urlmod_core::config;
use urlmod_core::generator::Generator;
use urlmod_core::input;
use urlmod_core::output;
use urlmod_core::settings::{GeneratorSettings, RunPaths};

use super::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);

    let stdin = io::stdin();
    let stdin_piped = !stdin.is_terminal();
    execute(
        cli.generator_settings(&cfg),
        cli.run_paths(),
        stdin_piped,
        stdin.lock(),
    )
}

/// Everything after config resolution. Nothing is written until every selected
/// strategy has finished.
pub(crate) fn execute<R: BufRead>(
    settings: GeneratorSettings,
    paths: RunPaths,
    stdin_piped: bool,
    stdin: R,
) -> Result<()> {
    let paths = paths.validate(stdin_piped)?;
    settings.validate()?;

    let urls = match &paths.list {
        Some(path) => input::read_lines_from_path(path)?,
        None => input::read_lines(stdin).context("failed to read URLs from stdin")?,
    };
    let params = input::read_lines_from_path(&paths.parameters)?;
    tracing::info!(
        urls = urls.len(),
        params = params.len(),
        strategies = ?settings.strategies,
        "starting generation"
    );

    let generated = Generator::new(settings).generate(&urls, &params)?;
    output::write_output(&paths.output, &generated)?;
    Ok(())
}
