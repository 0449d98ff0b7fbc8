//! Core data types for the splitter.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::START_MARKER;
use crate::splitting::split_first_line;

/// A run of lines from the cheat database that starts at a `_S` line.
///
/// The text borrows from the decoded input and keeps every line ending
/// exactly as it appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Byte offset of the block in the decoded input.
    pub offset: usize,

    /// Verbatim block text, header line included.
    pub text: &'a str,
}

impl<'a> Block<'a> {
    /// Create a block from its offset and text.
    #[must_use]
    pub fn new(offset: usize, text: &'a str) -> Self {
        Self { offset, text }
    }

    /// The header line without its line terminator.
    #[must_use]
    pub fn header(&self) -> &'a str {
        split_first_line(self.text).0
    }

    /// Text after the marker on the header line, or `None` when the header
    /// does not start with the marker.
    #[must_use]
    pub fn header_payload(&self) -> Option<&'a str> {
        self.header().trim_start().strip_prefix(START_MARKER)
    }
}

/// All unique block texts that share one key, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    key: String,
    texts: Vec<&'a str>,
    seen: HashSet<&'a str>,
}

impl<'a> Group<'a> {
    /// Create an empty group.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            texts: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Group key (game code or placeholder).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Surviving block texts in order of first appearance.
    #[must_use]
    pub fn texts(&self) -> &[&'a str] {
        &self.texts
    }

    /// Append `text` unless an identical text is already present.
    ///
    /// Returns `true` when the text was appended.
    pub fn insert(&mut self, text: &'a str) -> bool {
        if !self.seen.insert(text) {
            return false;
        }
        self.texts.push(text);
        true
    }

    /// Number of surviving texts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether the group holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Surviving texts joined without separators.
    #[must_use]
    pub fn contents(&self) -> String {
        self.texts.concat()
    }
}

/// A file to be written: name inside the output directory plus contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub file_name: String,
    pub contents: String,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Directory the files were written to.
    pub output_dir: PathBuf,

    /// Number of `.ini` files written or overwritten.
    pub files_written: usize,

    /// Blocks found in the input.
    pub blocks: usize,

    /// Blocks dropped because an identical block was already in their group.
    pub duplicates: usize,

    /// Blocks that had no usable game code.
    pub placeholders: usize,

    /// Whether invalid UTF-8 in the input had to be replaced.
    pub lossy_input: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_header_strips_line_ending() {
        let block = Block::new(0, "_S ULUS-10080\r\n_G Game\r\n");
        assert_eq!(block.header(), "_S ULUS-10080");
        assert_eq!(block.header_payload(), Some(" ULUS-10080"));
    }

    #[test]
    fn test_block_header_ends_at_bare_carriage_return() {
        let block = Block::new(0, "_S ULUS-10080\r_G Game\r");
        assert_eq!(block.header(), "_S ULUS-10080");
    }

    #[test]
    fn test_block_header_payload_with_indent() {
        let block = Block::new(0, "   _S NPJH-00001\n");
        assert_eq!(block.header_payload(), Some(" NPJH-00001"));
    }

    #[test]
    fn test_group_rejects_exact_duplicates() {
        let mut group = Group::new("ULUS10080");
        assert!(group.insert("_S ULUS-10080\n_C0 A\n"));
        assert!(!group.insert("_S ULUS-10080\n_C0 A\n"));
        assert!(group.insert("_S ULUS-10080\n_C0 B\n"));
        assert_eq!(group.len(), 2);
        assert_eq!(
            group.contents(),
            "_S ULUS-10080\n_C0 A\n_S ULUS-10080\n_C0 B\n"
        );
    }

    #[test]
    fn test_group_dedup_is_exact() {
        let mut group = Group::new("X");
        assert!(group.insert("_S X\n"));
        assert!(group.insert("_S X\r\n"));
        assert!(group.insert("_S X"));
        assert_eq!(group.len(), 3);
    }
}
