//! CLI for urlmod.

mod generate;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use urlmod_core::config::UrlmodConfig;
use urlmod_core::settings::{
    GeneratorSettings, InvalidUrlPolicy, RunPaths, Strategy, ValueStrategy,
};

const STRATEGY_HELP: &str = "Generation strategies to run, comma-separated:
  normal:  overwrite existing parameters and add wordlist names
  combine: modify one existing parameter at a time
  ignore:  keep the URL as is and add wordlist names";

const VALUE_STRATEGY_HELP: &str = "How combine uses the values [default: suffix]:
  replace: replace the current parameter value
  suffix:  append to the current parameter value";

/// Top-level CLI for urlmod.
#[derive(Debug, Parser)]
#[command(name = "urlmod")]
#[command(
    about = "urlmod: generate URL permutations by injecting parameter names and values",
    long_about = None
)]
pub struct Cli {
    /// List of URLs to edit, one per line (stdin is used when omitted).
    #[arg(short = 'l', long, value_name = "PATH")]
    pub list: Option<PathBuf>,

    /// Parameter wordlist, one name per line.
    #[arg(short = 'p', long, value_name = "PATH")]
    pub parameters: Option<PathBuf>,

    /// Number of parameters in each URL [default: 15].
    #[arg(short = 'c', long, value_name = "N")]
    pub chunk: Option<usize>,

    /// Value for the parameters. Repeat for several values.
    #[arg(short = 'v', long = "value", value_name = "VALUE")]
    pub values: Vec<String>,

    #[arg(
        short = 's',
        long = "generate-strategy",
        visible_alias = "gs",
        value_name = "STRATEGY",
        value_delimiter = ',',
        help = "Generation strategies to run (comma-separated)",
        long_help = STRATEGY_HELP
    )]
    pub strategies: Vec<StrategyArg>,

    #[arg(
        long = "value-strategy",
        visible_alias = "vs",
        value_name = "MODE",
        help = "How combine uses the values [default: suffix]",
        long_help = VALUE_STRATEGY_HELP
    )]
    pub value_strategy: Option<ValueStrategyArg>,

    /// File to write output results to; it must not exist yet (stdout when omitted).
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Double encode the values.
    #[arg(long = "double-encode", visible_alias = "de")]
    pub double_encode: bool,

    /// Log and skip URLs that cannot be expanded instead of aborting the run.
    #[arg(long)]
    pub skip_invalid: bool,

    /// Read defaults from this file instead of ~/.config/urlmod/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Normal,
    Combine,
    Ignore,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Normal => Strategy::Normal,
            StrategyArg::Combine => Strategy::Combine,
            StrategyArg::Ignore => Strategy::Ignore,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueStrategyArg {
    Replace,
    Suffix,
}

impl From<ValueStrategyArg> for ValueStrategy {
    fn from(arg: ValueStrategyArg) -> Self {
        match arg {
            ValueStrategyArg::Replace => ValueStrategy::Replace,
            ValueStrategyArg::Suffix => ValueStrategy::Suffix,
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        generate::run(&cli)
    }

    /// Flags win over the config file.
    pub fn generator_settings(&self, cfg: &UrlmodConfig) -> GeneratorSettings {
        GeneratorSettings {
            chunk: self.chunk.unwrap_or(cfg.chunk),
            values: self.values.clone(),
            value_strategy: self
                .value_strategy
                .map(ValueStrategy::from)
                .unwrap_or(cfg.value_strategy),
            double_encode: self.double_encode || cfg.double_encode,
            strategies: self.strategies.iter().copied().map(Strategy::from).collect(),
            on_invalid_url: if self.skip_invalid {
                InvalidUrlPolicy::Skip
            } else {
                cfg.on_invalid_url
            },
        }
    }

    pub fn run_paths(&self) -> RunPaths {
        RunPaths {
            list: self.list.clone(),
            parameters: self.parameters.clone(),
            output: self.output.clone(),
        }
    }
}

#[cfg(test)]
mod tests;
