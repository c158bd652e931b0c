//! Output path defaulting and resolution.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

use crate::error::TightyTileError;

/// Stem prefix of generated output names.
pub const DEFAULT_OUTPUT_PREFIX: &str = "TightyTile_";

/// Extension of generated output names; WebP is written losslessly.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "webp";

/// `strftime` layout of the timestamp in generated names (`YYYYMMDDTHHMMSS`).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// File name for an output created at `when`, e.g.
/// `TightyTile_20240131T235959.webp`.
pub fn default_output_name<Tz: TimeZone>(when: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}{}.{}",
        DEFAULT_OUTPUT_PREFIX,
        when.format(TIMESTAMP_FORMAT),
        DEFAULT_OUTPUT_EXTENSION
    )
}

/// Resolve where the composed image should be written.
///
/// With no explicit `output`, a timestamped name in `cwd` is generated from
/// the local clock. Relative paths are joined onto `cwd`. A path naming an
/// existing directory is a usage error.
pub fn resolve_output(output: Option<&Path>, cwd: &Path) -> Result<PathBuf, TightyTileError> {
    let path = match output {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.join(default_output_name(&Local::now())),
    };

    if path.is_dir() {
        return Err(TightyTileError::Usage(format!(
            "Output path \"{}\" is a directory.",
            path.display()
        )));
    }
    Ok(path)
}
