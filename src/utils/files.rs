//! File helpers for reading holiday data and writing calendar output
//!
//! Output is written atomically: the document goes to a temporary file in the
//! target directory first and is then renamed over the destination, so a
//! failed run never leaves a truncated `.tex` file behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use super::error::{CalendarError, CalendarResult};

/// Read a holiday data file, reporting failures as holiday source errors
pub fn read_holiday_file(path: impl AsRef<Path>) -> CalendarResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| {
        CalendarError::holiday_source(format!("cannot read {}: {}", path.display(), err))
    })
}

/// Write `contents` to `path` atomically
pub fn write_atomic(path: impl AsRef<Path>, contents: &str) -> CalendarResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    if let Some(permissions) = output_permissions(path) {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| CalendarError::from(err.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote calendar output");
    Ok(())
}

/// Permissions the output should end up with: those of the file being
/// replaced, otherwise `rw-r--r--`. Temporaries start out owner-only.
fn output_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
