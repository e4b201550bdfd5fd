//! Configuration options for record-to-CSV conversion

/// Field delimiter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterType {
    /// Comma delimiter (,)
    #[default]
    Comma,
    /// Tab delimiter (\\t)
    Tab,
    /// Pipe delimiter (|)
    Pipe,
}

impl DelimiterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DelimiterType::Comma => ",",
            DelimiterType::Tab => "\t",
            DelimiterType::Pipe => "|",
        }
    }

    pub fn as_byte(&self) -> u8 {
        self.as_str().as_bytes()[0]
    }
}

/// How the base (non-SGPA, non-institute) columns are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStrategy {
    /// Field names of the first record after sorting, in its key order
    #[default]
    FirstRecord,
    /// Union of field names across all records, in first-seen order
    Union,
}

/// How a single value becomes a CSV cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellEncoding {
    /// Every cell is the value's text written as a JSON string literal
    #[default]
    Json,
    /// Standard CSV quoting: quote only when needed, double interior quotes
    Rfc4180,
}

/// Row ordering by `rollNo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
    /// Keep the source order
    Preserve,
}

/// Line terminator between rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Base header derivation
    pub header_strategy: HeaderStrategy,
    /// Cell encoding
    pub cell_encoding: CellEncoding,
    /// Field delimiter
    pub delimiter: DelimiterType,
    /// Row ordering
    pub sort_order: SortOrder,
    /// Row separator
    pub line_ending: LineEnding,
    /// Write through a temp file and rename over the destination
    pub atomic_write: bool,
    /// Refuse inputs larger than this many bytes
    pub memory_limit: u64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            header_strategy: HeaderStrategy::FirstRecord,
            cell_encoding: CellEncoding::Json,
            delimiter: DelimiterType::Comma,
            sort_order: SortOrder::Descending,
            line_ending: LineEnding::Lf,
            atomic_write: true,
            memory_limit: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl ConversionConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.memory_limit == 0 {
            return Err("Memory limit must be greater than zero".to_string());
        }

        Ok(())
    }
}
