//! JSON records to CSV conversion module
//!
//! This module contains the core conversion logic, configuration, and statistics.

pub mod collation;
pub mod config;
pub mod engine;
pub mod limits;
pub mod stats;

pub use config::{CellEncoding, ConversionConfig, DelimiterType, HeaderStrategy, LineEnding, SortOrder};

pub use engine::{ConversionEngine, ConversionReport, CsvDocument};

pub use crate::error::ConversionResult;
