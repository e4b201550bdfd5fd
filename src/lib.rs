//! JSON academic records to CSV converter
//!
//! Reads a JSON array of student records, orders them by `rollNo`, flattens the
//! nested per-semester `SGPA` mapping into fixed `SGPA_sem1..SGPA_sem8` columns,
//! and writes the table as CSV.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod output;
pub mod parser;

use std::path::Path;

// Re-export commonly used types
pub use conversion::{ConversionConfig, ConversionEngine, ConversionReport, CsvDocument};
pub use error::{ConversionError, ConversionResult, ParseError};
pub use formatter::CsvFormatter;
pub use parser::{JsonSource, Record};

/// Convert the JSON file at `input` into a CSV file at `output` with default configuration
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> ConversionResult<ConversionReport> {
    convert_with_config(input, output, &ConversionConfig::default())
}

/// Convert the JSON file at `input` into a CSV file at `output` with custom configuration
pub fn convert_with_config(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ConversionConfig,
) -> ConversionResult<ConversionReport> {
    ConversionEngine::new(config.clone()).convert_file(input.as_ref(), output.as_ref())
}

/// Result of [`convert_and_log`]; failures are reported here, never raised.
#[derive(Debug)]
pub enum ConversionOutcome {
    Succeeded(ConversionReport),
    Failed(ConversionError),
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Succeeded(_))
    }
}

/// Run a conversion and log the result instead of returning an error.
///
/// Logs the output path at `info` on success and the error text at `error` on failure.
pub fn convert_and_log(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ConversionConfig,
) -> ConversionOutcome {
    let (input, output) = (input.as_ref(), output.as_ref());

    match convert_with_config(input, output, config) {
        Ok(report) => {
            tracing::info!("CSV file written to {}", output.display());
            ConversionOutcome::Succeeded(report)
        }
        Err(error) => {
            tracing::error!(input = %input.display(), "{}", error.user_message());
            ConversionOutcome::Failed(error)
        }
    }
}
