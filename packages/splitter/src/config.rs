//! Configuration constants for the splitter.

use std::path::PathBuf;

/// Cheat database read by the binary, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "cheat.db";

/// Directory receiving the per-game files, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Token that opens a new game block once leading whitespace is stripped.
pub const START_MARKER: &str = "_S";

/// Extension of every generated file (without the dot).
pub const OUTPUT_EXTENSION: &str = "ini";

/// Prefix of keys generated for blocks without a usable game code.
pub const PLACEHOLDER_PREFIX: &str = "UNKNOWN_";

/// Minimum number of digits in a placeholder counter.
pub const PLACEHOLDER_WIDTH: usize = 4;

/// Paths used by a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Cheat database to split.
    pub input: PathBuf,

    /// Directory that receives one `.ini` file per game.
    pub output_dir: PathBuf,
}

impl SplitConfig {
    /// Create a configuration for explicit paths.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
        }
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR)
    }
}

/// Format the placeholder key for counter value `n`.
///
/// # Examples
/// ```
/// use cheatdb_splitter::config::placeholder_key;
///
/// assert_eq!(placeholder_key(1), "UNKNOWN_0001");
/// assert_eq!(placeholder_key(12345), "UNKNOWN_12345");
/// ```
#[must_use]
pub fn placeholder_key(n: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{n:0width$}", width = PLACEHOLDER_WIDTH)
}

/// Build the output file name for an already sanitized key.
#[must_use]
pub fn output_file_name(key: &str) -> String {
    format!("{key}.{OUTPUT_EXTENSION}")
}
