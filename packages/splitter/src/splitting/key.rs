//! Key derivation and filename sanitization.

use crate::types::Block;

/// Extract the raw game code from a block header payload.
///
/// The payload is everything after the `_S` marker. It has to start with
/// whitespace; the code is the first word that follows.
fn raw_code(payload: &str) -> Option<&str> {
    if !payload.starts_with(char::is_whitespace) {
        return None;
    }
    payload.split_whitespace().next()
}

/// Reduce a raw game code to the characters allowed in a key.
///
/// Hyphens are removed and anything that is not an ASCII letter or digit is
/// dropped.
///
/// # Examples
/// ```
/// use cheatdb_splitter::splitting::normalize_code;
///
/// assert_eq!(normalize_code("ULUS-10080"), "ULUS10080");
/// assert_eq!(normalize_code("NPJ@H-00001!"), "NPJH00001");
/// ```
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| *c != '-')
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Derive the group key of a block from its `_S` header line.
///
/// Returns `None` when the header carries no code or the code has no
/// letters or digits left after normalization.
#[must_use]
pub fn derive_key(block: &Block<'_>) -> Option<String> {
    let code = raw_code(block.header_payload()?)?;
    let key = normalize_code(code);
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Strip a key down to characters that are safe in a file name.
///
/// Keeps ASCII letters, digits, `_`, `.` and `-`. An empty result means the
/// key cannot be used as a file name.
///
/// # Examples
/// ```
/// use cheatdb_splitter::splitting::sanitize_filename;
///
/// assert_eq!(sanitize_filename("UNKNOWN_0001"), "UNKNOWN_0001");
/// assert_eq!(sanitize_filename("../etc/passwd"), "..etcpasswd");
/// ```
#[must_use]
pub fn sanitize_filename(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect()
}

/// Whether a sanitized name can be used as a file inside the output directory.
///
/// Names made only of dots would resolve to the directory itself or its parent.
#[must_use]
pub fn is_usable_filename(name: &str) -> bool {
    !name.is_empty() && !name.chars().all(|c| c == '.')
}
