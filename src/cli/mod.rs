//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::conversion::config::{
    CellEncoding, ConversionConfig, DelimiterType, HeaderStrategy, LineEnding, SortOrder,
};
use crate::conversion::{ConversionEngine, ConversionReport, ConversionResult};
use crate::error::ConversionError;
use crate::parser::JsonSource;
use crate::ConversionOutcome;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "sgpaconv")]
#[command(about = "Convert a JSON array of academic records to CSV")]
#[command(version)]
pub struct Args {
    /// Input JSON file
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    pub input: Option<PathBuf>,

    /// Output CSV file (overwritten if it exists; its directory must exist)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// How the leading columns are chosen
    #[arg(long, value_enum, default_value_t = HeaderArg::FirstRecord)]
    pub header_strategy: HeaderArg,

    /// How each cell is written
    #[arg(long, value_enum, default_value_t = EncodingArg::Json)]
    pub encoding: EncodingArg,

    /// Field delimiter
    #[arg(long, value_enum, default_value_t = Delimiter::Comma)]
    pub delimiter: Delimiter,

    /// Row order by rollNo
    #[arg(long, value_enum, default_value_t = OrderArg::Descending)]
    pub order: OrderArg,

    /// Separate rows with CRLF instead of LF
    #[arg(long)]
    pub crlf: bool,

    /// Write the output directly instead of through a temporary file
    #[arg(long)]
    pub no_atomic: bool,

    /// Maximum input size (e.g., 100MB, default: 100MB)
    #[arg(long)]
    pub memory_limit: Option<String>,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Statistics format used with --stats
    #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
    pub stats_format: StatsFormat,

    /// Enable verbose logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Delimiter types for CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Delimiter {
    #[value(name = "comma", alias = ",")]
    Comma,
    #[value(name = "tab", alias = "\t")]
    Tab,
    #[value(name = "pipe", alias = "|")]
    Pipe,
}

impl From<Delimiter> for DelimiterType {
    fn from(delimiter: Delimiter) -> Self {
        match delimiter {
            Delimiter::Comma => DelimiterType::Comma,
            Delimiter::Tab => DelimiterType::Tab,
            Delimiter::Pipe => DelimiterType::Pipe,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum HeaderArg {
    FirstRecord,
    Union,
}

impl From<HeaderArg> for HeaderStrategy {
    fn from(arg: HeaderArg) -> Self {
        match arg {
            HeaderArg::FirstRecord => HeaderStrategy::FirstRecord,
            HeaderArg::Union => HeaderStrategy::Union,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum EncodingArg {
    Json,
    Rfc4180,
}

impl From<EncodingArg> for CellEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Json => CellEncoding::Json,
            EncodingArg::Rfc4180 => CellEncoding::Rfc4180,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OrderArg {
    Descending,
    Ascending,
    Preserve,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Descending => SortOrder::Descending,
            OrderArg::Ascending => SortOrder::Ascending,
            OrderArg::Preserve => SortOrder::Preserve,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsFormat {
    /// One summary line
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let config = ConversionConfig {
            header_strategy: args.header_strategy.into(),
            cell_encoding: args.encoding.into(),
            delimiter: args.delimiter.into(),
            sort_order: args.order.into(),
            line_ending: if args.crlf { LineEnding::CrLf } else { LineEnding::Lf },
            atomic_write: !args.no_atomic,
            memory_limit: parse_memory_limit(&args.memory_limit)?,
            ..Default::default()
        };

        // Validate configuration
        config.validate().map_err(ConversionError::configuration)?;

        Ok(config)
    }

    /// Where the JSON comes from
    pub fn source(&self) -> JsonSource {
        match &self.args.input {
            Some(path) if !self.args.stdin => JsonSource::File(path.clone()),
            _ => JsonSource::Stdin,
        }
    }

    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.args.verbose {
            "debug"
        } else if self.args.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Run the conversion, logging instead of propagating failures
    pub fn run(&self) -> ConversionOutcome {
        let engine = ConversionEngine::new(self.conversion_config.clone());
        let source = self.source();

        tracing::debug!(source = %source.description(), output = %self.args.output.display(), "starting conversion");

        match engine.convert_to_file(&source, &self.args.output) {
            Ok(report) => {
                tracing::info!("CSV file written to {}", report.output_path.display());
                if self.args.stats && !self.args.quiet {
                    print_statistics(&report, self.args.stats_format);
                }
                ConversionOutcome::Succeeded(report)
            }
            Err(error) => {
                handle_error(&error);
                ConversionOutcome::Failed(error)
            }
        }
    }
}

/// Install the global `tracing` subscriber; `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB")
fn parse_memory_limit(limit: &Option<String>) -> ConversionResult<u64> {
    let Some(limit_str) = limit else {
        return Ok(100 * 1024 * 1024); // 100MB default
    };

    let normalized = limit_str.trim().to_uppercase();
    let (number, multiplier) = if let Some(size) = normalized.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = normalized.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = normalized.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = normalized.strip_suffix('B') {
        (size, 1.0)
    } else {
        (normalized.as_str(), 1.0)
    };

    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
        .map(|n| (n * multiplier) as u64)
        .filter(|bytes| *bytes > 0)
        .ok_or_else(|| ConversionError::configuration(format!("Invalid memory limit: {}", limit_str)))
}

fn print_statistics(report: &ConversionReport, format: StatsFormat) {
    let stats = &report.statistics;
    match format {
        StatsFormat::Text => println!("{}", stats.summary()),
        StatsFormat::Json => match stats.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!("Could not serialize statistics: {}", e),
        },
    }
}

/// Log a conversion error with a hint where one helps
pub fn handle_error(error: &ConversionError) {
    tracing::error!("{}", error.user_message());

    match error {
        ConversionError::InputTooLarge { .. } => {
            tracing::info!("Use --memory-limit to raise the input size limit");
        }
        ConversionError::OutputWrite { .. } => {
            tracing::info!("The output directory must already exist and be writable");
        }
        _ => {}
    }
}
