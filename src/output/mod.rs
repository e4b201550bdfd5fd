//! Whole-file output persistence
//!
//! The atomic path writes into a temporary file next to the destination and
//! renames it over the destination, so a failed write never leaves a
//! truncated CSV behind. The destination's parent directory must exist.
//! A replaced file keeps its permissions; a new one gets the same mode a
//! plain write would give it.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error::{ConversionError, ConversionResult};

/// Write `content` to `path`, replacing any existing file. Returns bytes written.
pub fn write_output(path: &Path, content: &str, atomic: bool) -> ConversionResult<u64> {
    if atomic {
        write_atomic(path, content)?;
    } else {
        fs::write(path, content).map_err(|e| ConversionError::output_write(path, e))?;
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), atomic, "output written");
    Ok(content.len() as u64)
}

fn write_atomic(path: &Path, content: &str) -> ConversionResult<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file =
        create_temp_file(parent_dir, path).map_err(|e| ConversionError::output_write(path, e))?;

    temp_file
        .write_all(content.as_bytes())
        .and_then(|_| temp_file.flush())
        .map_err(|e| ConversionError::output_write(path, e))?;

    temp_file
        .persist(path)
        .map_err(|e| ConversionError::output_write(path, e.error))?;

    Ok(())
}

fn create_temp_file(parent_dir: &Path, path: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Same request as `fs::write`; the process umask still applies
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let temp_file = builder.tempfile_in(parent_dir)?;

    if let Ok(existing) = fs::metadata(path) {
        temp_file.as_file().set_permissions(existing.permissions())?;
    }

    Ok(temp_file)
}
