//! Writer for per-game `.ini` files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitterError};
use crate::types::OutputRecord;

/// Create the output directory and any missing parents.
pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|source| SplitterError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })
}

/// Replace `path` with `contents`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// An interrupted run never leaves a half-written `.ini` behind.
fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    let result = write_then_rename(&temp_file, path, contents);
    if result.is_err() {
        // Best effort; the original error is what gets reported.
        let _ = fs::remove_file(&temp_file);
    }
    result
}

fn write_then_rename(temp_file: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    {
        let mut file = File::create(temp_file)?;
        file.write_all(contents)?;
        file.sync_all()?; // Ensure data is flushed to disk
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(temp_file, path)
}

/// Write every record into `output_dir`, overwriting existing files.
///
/// Stops at the first failure. Files written before it are kept and the
/// error reports how many there were.
///
/// # Returns
/// Paths of the written files, in record order
pub fn write_records(records: &[OutputRecord], output_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_output_dir(output_dir)?;

    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let path = output_dir.join(&record.file_name);
        write_atomic(&path, record.contents.as_bytes()).map_err(|source| {
            SplitterError::WriteFile {
                path: path.clone(),
                written: written.len(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), bytes = record.contents.len(), "Wrote file");
        written.push(path);
    }

    Ok(written)
}
