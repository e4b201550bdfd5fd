use crate::conversion::config::ConversionConfig;
use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use crate::parser::JsonSource;

/// Check the source size before attempting to read or parse the JSON.
/// This avoids loading very large files into memory if the user-configured
/// limit is smaller than the file.
pub fn check_source_size_before_read(
    source: &JsonSource,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    check_content_size(source.estimated_size(), config)
}

/// Check a size that is only known after reading (stdin).
pub fn check_content_size(size: Option<u64>, config: &ConversionConfig) -> ConversionResult<()> {
    match size {
        Some(size) if size > config.memory_limit => Err(ConversionError::InputTooLarge {
            size,
            limit: config.memory_limit,
        }),
        _ => Ok(()),
    }
}
