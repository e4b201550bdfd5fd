//! Core conversion engine for record-to-CSV transformation

use crate::conversion::collation::collate;
use crate::conversion::config::{ConversionConfig, SortOrder};
use crate::conversion::limits;
use crate::conversion::stats::{ConversionStatistics, PerformanceTracker};
use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use crate::formatter::{ColumnLayout, CsvFormatter};
use crate::output::write_output;
use crate::parser::records::roll_no;
use crate::parser::{extract_records, parse_from_string, JsonSource, Record};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// In-memory CSV result
#[derive(Debug, Clone)]
pub struct CsvDocument {
    pub content: String,
    pub layout: ColumnLayout,
    pub record_count: usize,
}

impl CsvDocument {
    /// Get the formatted CSV output
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Outcome of a completed file-to-file conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Human-readable description of where the input came from
    pub source: String,
    pub output_path: PathBuf,
    pub statistics: ConversionStatistics,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Put records into output order. The sort is stable: equal roll numbers keep input order.
    pub fn sort_records(&self, records: &mut [Record]) {
        match self.config.sort_order {
            SortOrder::Descending => {
                records.sort_by(|a, b| collate(&roll_no(b), &roll_no(a)));
            }
            SortOrder::Ascending => {
                records.sort_by(|a, b| collate(&roll_no(a), &roll_no(b)));
            }
            SortOrder::Preserve => {}
        }
    }

    /// Sort and render a record collection
    pub fn convert_records(&self, mut records: Vec<Record>) -> ConversionResult<CsvDocument> {
        self.sort_records(&mut records);

        let formatter = CsvFormatter::new(self.config.clone());
        let (layout, content) = formatter.format(&records)?;

        tracing::debug!(
            records = records.len(),
            columns = layout.column_count(),
            bytes = content.len(),
            "records formatted"
        );

        Ok(CsvDocument {
            content,
            layout,
            record_count: records.len(),
        })
    }

    /// Convert an already parsed JSON document
    pub fn convert(&self, json_data: &Value) -> ConversionResult<CsvDocument> {
        self.convert_records(extract_records(json_data.clone())?)
    }

    /// Convert JSON text
    pub fn convert_string(&self, json_str: &str) -> ConversionResult<CsvDocument> {
        let value = parse_from_string(json_str)?;
        self.convert_records(extract_records(value)?)
    }

    /// Convert JSON from a source, refusing sources over the configured size limit
    pub fn convert_from_source(&self, source: &JsonSource) -> ConversionResult<CsvDocument> {
        limits::check_source_size_before_read(source, &self.config)?;
        let content = source.read_content()?;
        limits::check_content_size(Some(content.len() as u64), &self.config)?;
        self.convert_string(&content)
    }

    /// Read a source, convert it, and write the CSV to `output_path` in one operation.
    pub fn convert_to_file(
        &self,
        source: &JsonSource,
        output_path: &Path,
    ) -> ConversionResult<ConversionReport> {
        let tracker = PerformanceTracker::start();

        limits::check_source_size_before_read(source, &self.config)?;
        let content = source.read_content()?;
        let input_size = content.len() as u64;
        limits::check_content_size(Some(input_size), &self.config)?;

        tracing::debug!(source = %source.description(), bytes = input_size, "input read");

        let document = self.convert_string(&content)?;
        let output_size = write_output(output_path, &document.content, self.config.atomic_write)?;

        Ok(ConversionReport {
            source: source.description(),
            output_path: output_path.to_path_buf(),
            statistics: tracker.finish(
                input_size,
                output_size,
                document.record_count,
                document.layout.column_count(),
            ),
        })
    }

    /// Convert the JSON file at `input_path` into a CSV file at `output_path`
    pub fn convert_file(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> ConversionResult<ConversionReport> {
        self.config
            .validate()
            .map_err(ConversionError::configuration)?;
        self.convert_to_file(&JsonSource::File(input_path.to_path_buf()), output_path)
    }
}
