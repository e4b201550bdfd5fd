//! Statistics for conversion operations

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Statistics for a single conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Input JSON size in bytes
    pub input_size_bytes: u64,
    /// Output CSV size in bytes
    pub output_size_bytes: u64,
    /// Number of records converted
    pub record_count: usize,
    /// Number of columns in the output
    pub column_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput (input bytes per second)
    pub throughput_bytes_per_sec: f32,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl ConversionStatistics {
    /// Create statistics for a single conversion
    pub fn for_conversion(
        input_size: u64,
        output_size: u64,
        record_count: usize,
        column_count: usize,
        processing_time: Duration,
    ) -> Self {
        let throughput_bytes_per_sec = if processing_time.as_secs_f64() > 0.0 {
            input_size as f64 / processing_time.as_secs_f64()
        } else {
            0.0
        } as f32;

        Self {
            input_size_bytes: input_size,
            output_size_bytes: output_size,
            record_count,
            column_count,
            processing_time_ms: processing_time.as_millis() as u64,
            throughput_bytes_per_sec,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        format!(
            "Converted {} records into {} columns in {}ms ({} -> {} bytes)",
            self.record_count,
            self.column_count,
            self.processing_time_ms,
            self.input_size_bytes,
            self.output_size_bytes
        )
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Wall-clock tracker for one conversion
pub struct PerformanceTracker {
    start_time: Instant,
}

impl PerformanceTracker {
    /// Start tracking a new conversion operation
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Complete tracking and return statistics
    pub fn finish(
        self,
        input_size: u64,
        output_size: u64,
        record_count: usize,
        column_count: usize,
    ) -> ConversionStatistics {
        ConversionStatistics::for_conversion(
            input_size,
            output_size,
            record_count,
            column_count,
            self.start_time.elapsed(),
        )
    }
}
