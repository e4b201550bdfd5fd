//! CSV formatting module

pub mod cells;
pub mod layout;

use crate::conversion::config::{CellEncoding, ConversionConfig, LineEnding};
use crate::error::{FormattingError, FormattingResult};
use crate::parser::Record;
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub use layout::ColumnLayout;

/// Renders an ordered record collection as CSV text
pub struct CsvFormatter {
    config: ConversionConfig,
}

impl CsvFormatter {
    /// Create a new formatter with configuration
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Format records (already in output order) with a layout derived from them.
    ///
    /// Returns the layout alongside the text so callers can report column counts.
    /// An empty collection produces an empty string with no header line.
    pub fn format(&self, records: &[Record]) -> FormattingResult<(ColumnLayout, String)> {
        let layout = ColumnLayout::derive(records, &self.config);
        if records.is_empty() {
            return Ok((layout, String::new()));
        }

        let output = match self.config.cell_encoding {
            CellEncoding::Json => self.format_json_cells(records, &layout),
            CellEncoding::Rfc4180 => self.format_rfc4180(records, &layout)?,
        };

        Ok((layout, output))
    }

    /// Header names joined verbatim, every data cell written as a JSON string literal
    fn format_json_cells(&self, records: &[Record], layout: &ColumnLayout) -> String {
        let delimiter = self.config.delimiter.as_str();

        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(layout.header().join(delimiter));

        for record in records {
            let row: Vec<String> = cells::row_texts(record, layout)
                .iter()
                .map(|text| cells::json_cell(text))
                .collect();
            lines.push(row.join(delimiter));
        }

        lines.join(self.config.line_ending.as_str())
    }

    fn format_rfc4180(&self, records: &[Record], layout: &ColumnLayout) -> FormattingResult<String> {
        let terminator = match self.config.line_ending {
            LineEnding::Lf => Terminator::Any(b'\n'),
            LineEnding::CrLf => Terminator::CRLF,
        };

        let mut writer = WriterBuilder::new()
            .delimiter(self.config.delimiter.as_byte())
            .quote_style(QuoteStyle::Necessary)
            .terminator(terminator)
            .from_writer(Vec::new());

        writer.write_record(layout.header())?;
        for record in records {
            writer.write_record(cells::row_texts(record, layout))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| FormattingError::flush(e.error().to_string()))?;
        let mut output = String::from_utf8(bytes)?;

        // Rows are separated, not terminated
        let trailing = self.config.line_ending.as_str();
        if output.ends_with(trailing) {
            output.truncate(output.len() - trailing.len());
        }

        Ok(output)
    }
}
