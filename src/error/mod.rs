//! Error types and handling infrastructure for record-to-CSV conversion

use std::fmt;
use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Failed to read input {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Expected a JSON array of objects, found {found}")]
    NotRecordArray { found: String },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: u64, limit: u64 },

    #[error("Failed to write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Formatting(#[from] FormattingError),

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionError {
    pub fn input_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    pub fn not_record_array(found: impl Into<String>) -> Self {
        Self::NotRecordArray {
            found: found.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InputRead { path, source } => {
                format!("Cannot read input file '{}': {}", path.display(), source)
            }
            Self::Parse(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::NotRecordArray { found } => {
                format!("Input must be a JSON array of record objects (found {})", found)
            }
            Self::InputTooLarge { size, limit } => {
                format!(
                    "JSON file too large: {} bytes (limit: {} bytes)",
                    size, limit
                )
            }
            Self::OutputWrite { path, source } => {
                format!("Cannot write output file '{}': {}", path.display(), source)
            }
            Self::Formatting(err) => format!("CSV formatting error: {}", err),
            Self::Configuration { .. } => self.to_string(),
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// CSV formatting errors
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    #[error("CSV writer error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to flush CSV buffer: {message}")]
    Flush { message: String },
}

impl FormattingError {
    pub fn flush(message: String) -> Self {
        Self::Flush { message }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience result type for formatting operations
pub type FormattingResult<T> = Result<T, FormattingError>;
