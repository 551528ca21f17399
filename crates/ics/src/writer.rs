//! Output path validation and calendar file writing.

use std::path::Path;

use tracing::info;

use crate::calendar::SunsetCalendar;
use crate::error::IcsError;

/// Checks that `path` can receive the calendar file.
///
/// Run before any sun times are computed so a bad destination fails fast.
///
/// # Errors
///
/// Returns [`IcsError::InvalidOutputPath`] if `path` is a directory or its
/// parent directory does not exist.
pub fn validate_output_path(path: &Path) -> Result<(), IcsError> {
    let invalid = |reason: &str| IcsError::InvalidOutputPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };
    if path.as_os_str().is_empty() {
        return Err(invalid("path is empty"));
    }
    if path.is_dir() {
        return Err(invalid("path is a directory"));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(invalid("parent directory does not exist"))
        }
        _ => Ok(()),
    }
}

/// Writes `calendar` to `path` as a UTF-8 iCalendar document.
///
/// The whole document is rendered in memory first and written in one call,
/// replacing any existing file.
///
/// # Errors
///
/// Returns [`IcsError::InvalidOutputPath`] if the path fails
/// [`validate_output_path`], or [`IcsError::Write`] if the write fails.
pub fn write_calendar(path: &Path, calendar: &SunsetCalendar) -> Result<(), IcsError> {
    validate_output_path(path)?;
    let text = calendar.to_ics_string();
    std::fs::write(path, &text).map_err(|source| IcsError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        n_events = calendar.len(),
        n_bytes = text.len(),
        "calendar written"
    );
    Ok(())
}
