//! Permutation generator: expands each input URL into query-parameter variants.
//!
//! Output order is strategy (normal, combine, ignore), then input URL, then
//! substitution value, then iteration. Wordlist names are consumed from the end of a
//! fresh copy per URL and value, so within one pass no name repeats.

mod chunking;
mod combine;
mod encode;
mod error;
mod ignore;
mod normal;
mod query;

pub use chunking::iteration_count;
pub use encode::prepare_value;
pub use error::GenerateError;
pub use query::{DecomposedUrl, QueryMap};

use crate::settings::{GeneratorSettings, InvalidUrlPolicy, Strategy};

pub struct Generator {
    settings: GeneratorSettings,
    /// Substitution values after the optional first encoding pass.
    values: Vec<String>,
}

impl Generator {
    pub fn new(settings: GeneratorSettings) -> Self {
        let values = settings
            .values
            .iter()
            .map(|v| prepare_value(v, settings.double_encode))
            .collect();
        Self { settings, values }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Runs every selected strategy over `urls` and concatenates the results.
    ///
    /// Neither input is modified. With [`InvalidUrlPolicy::Abort`] the first URL that
    /// cannot be expanded ends the run; with `Skip` it is logged and left out.
    pub fn generate(&self, urls: &[String], params: &[String]) -> Result<Vec<String>, GenerateError> {
        let mut output = Vec::new();
        for strategy in Strategy::ALL {
            if !self.settings.runs(strategy) {
                continue;
            }
            let before = output.len();
            self.run_strategy(strategy, urls, params, &mut output)?;
            tracing::debug!(
                %strategy,
                urls = urls.len(),
                generated = output.len() - before,
                "strategy finished"
            );
        }
        tracing::info!(
            urls = urls.len(),
            params = params.len(),
            values = self.values.len(),
            generated = output.len(),
            "generation complete"
        );
        Ok(output)
    }

    /// Expands all URLs with a single strategy, appending to `out`.
    pub fn run_strategy(
        &self,
        strategy: Strategy,
        urls: &[String],
        params: &[String],
        out: &mut Vec<String>,
    ) -> Result<(), GenerateError> {
        for raw in urls {
            let result = match DecomposedUrl::parse(raw) {
                Ok(url) => self.expand(strategy, &url, params, out),
                Err(err) => Err(err),
            };

            if let Err(err) = result {
                match self.settings.on_invalid_url {
                    InvalidUrlPolicy::Abort => return Err(err),
                    InvalidUrlPolicy::Skip => {
                        tracing::warn!(%strategy, error = %err, "skipping url");
                    }
                }
            }
        }
        Ok(())
    }

    fn expand(
        &self,
        strategy: Strategy,
        url: &DecomposedUrl,
        params: &[String],
        out: &mut Vec<String>,
    ) -> Result<(), GenerateError> {
        let chunk = self.settings.chunk;
        match strategy {
            Strategy::Normal => normal::expand(url, params, &self.values, chunk, out),
            Strategy::Combine => {
                combine::expand(url, &self.values, self.settings.value_strategy, out);
                Ok(())
            }
            Strategy::Ignore => ignore::expand(url, params, &self.values, chunk, out),
        }
    }
}
