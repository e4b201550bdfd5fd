//! JSON input loading and record extraction

pub mod records;

use crate::error::{ConversionError, ConversionResult, ParseError, ParseResult};
use std::io::Read;
use std::path::PathBuf;

pub use records::{extract_records, Record};

/// Source for parsing operations
#[derive(Debug, Clone)]
pub enum JsonSource {
    String(String),
    File(PathBuf),
    Stdin,
}

impl JsonSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

    /// Get the size of the source in bytes, if it can be known without reading it
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            JsonSource::String(s) => Some(s.len() as u64),
            JsonSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            JsonSource::Stdin => None,
        }
    }

    /// Read the whole source into memory
    pub fn read_content(&self) -> ConversionResult<String> {
        match self {
            JsonSource::String(content) => Ok(content.clone()),
            JsonSource::File(path) => std::fs::read_to_string(path)
                .map_err(|e| ConversionError::input_read(path, e)),
            JsonSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| ConversionError::input_read("<stdin>", e))?;
                Ok(buffer)
            }
        }
    }
}

/// Parse JSON from a string
pub fn parse_from_string(content: &str) -> ParseResult<serde_json::Value> {
    if content.trim().is_empty() {
        return Err(ParseError::new("Empty JSON input".to_string(), None));
    }

    // Positions must refer to the document as the user sees it
    serde_json::from_str(content).map_err(|e| {
        let location = error_location(&e);
        ParseError::new(format!("Invalid JSON: {}", e), location)
            .with_preview(error_preview(content, location))
    })
}

/// Line and column reported by serde_json, when it has a position
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    match (error.line(), error.column()) {
        (0, _) => None,
        (line, col) => Some((line, col)),
    }
}

/// Show the offending line with a caret under the error column
fn error_preview(content: &str, location: Option<(usize, usize)>) -> String {
    let Some((line, col)) = location else {
        return "Context not available".to_string();
    };

    match content.lines().nth(line - 1) {
        Some(text) => {
            let caret = col.saturating_sub(1).min(text.chars().count());
            format!("{}\n{}^", text, " ".repeat(caret))
        }
        None => "Context not available".to_string(),
    }
}
