//! Reading the cheat database.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, SplitterError};

/// Decoded contents of the cheat database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    /// Full text of the file.
    pub text: String,

    /// Whether invalid UTF-8 sequences were replaced with U+FFFD.
    pub lossy: bool,
}

/// Decode raw bytes as UTF-8, replacing invalid sequences.
///
/// # Arguments
/// * `bytes` - Raw file contents
/// * `context` - Description used in the warning when bytes are replaced
pub fn decode_bytes(bytes: Vec<u8>, context: &str) -> InputText {
    match String::from_utf8(bytes) {
        Ok(text) => InputText { text, lossy: false },
        Err(e) => {
            let valid_up_to = e.utf8_error().valid_up_to();
            let bytes = e.into_bytes();
            tracing::warn!(
                context = %context,
                first_invalid_byte = valid_up_to,
                "Input is not valid UTF-8, replacing invalid sequences"
            );
            InputText {
                text: String::from_utf8_lossy(&bytes).into_owned(),
                lossy: true,
            }
        }
    }
}

/// Read the whole cheat database into memory.
///
/// # Returns
/// * `Err(SplitterError::InputNotFound)` if the file does not exist
/// * `Err(SplitterError::ReadInput)` for any other IO failure
pub fn read_input(path: &Path) -> Result<InputText> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            SplitterError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SplitterError::ReadInput {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read cheat database");
    Ok(decode_bytes(bytes, &path.display().to_string()))
}
